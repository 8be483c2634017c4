//! Image sources and descriptors for the logo and brand sections
//!
//! A section with nothing to draw is the explicit [`ImageSlot::Absent`]
//! variant; present sections carry a fully resolved [`ImageDescriptor`].

use serde::{Deserialize, Serialize};

use crate::style::{ImageStyle, Position};

/// Where an image comes from
///
/// The host bridge hands either a packager asset URI or a numeric platform
/// resource handle; both serialize as the bare value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageSource {
    /// Packager or bundle asset URI
    Asset(String),
    /// Numeric platform resource handle
    Resource(i64),
}

impl From<&str> for ImageSource {
    fn from(uri: &str) -> Self {
        ImageSource::Asset(uri.to_string())
    }
}

impl From<String> for ImageSource {
    fn from(uri: String) -> Self {
        ImageSource::Asset(uri)
    }
}

impl From<i64> for ImageSource {
    fn from(handle: i64) -> Self {
        ImageSource::Resource(handle)
    }
}

/// How an image scales inside its declared bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// Scale to fill, cropping overflow
    Cover,
    /// Scale to fit entirely within bounds
    #[default]
    Contain,
    /// Distort to exactly fill bounds
    Stretch,
    /// Center without scaling
    Center,
}

/// A resolved splash image ready for the host to mount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDescriptor {
    /// Fade-in duration in milliseconds (always 0; the splash image must
    /// appear instantly under the native splash it replaces)
    pub fade_duration: u32,
    /// Scaling behavior
    pub resize_mode: ResizeMode,
    /// Resolved image source
    pub source: ImageSource,
    /// Layout for this image
    pub style: ImageStyle,
}

/// An image section of the hide animation
///
/// `Absent` means the section has nothing to draw - the configuration
/// declared no source for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ImageSlot {
    /// Nothing to draw for this section
    Absent,
    /// A resolved image descriptor
    Image(ImageDescriptor),
}

impl ImageSlot {
    /// Build the logo section descriptor
    ///
    /// Returns [`ImageSlot::Absent`] when no source is given; otherwise a
    /// contain-fit, zero-fade image with the declared geometry.
    pub fn logo(source: Option<ImageSource>, width: f32, height: f32) -> Self {
        match source {
            None => ImageSlot::Absent,
            Some(source) => ImageSlot::Image(ImageDescriptor {
                fade_duration: 0,
                resize_mode: ResizeMode::Contain,
                source,
                style: ImageStyle {
                    width: Some(width),
                    height: Some(height),
                    ..ImageStyle::default()
                },
            }),
        }
    }

    /// Build the brand section descriptor
    ///
    /// Same absence rule as [`ImageSlot::logo`]; when present the image is
    /// positioned absolutely and anchored by the optional bottom offset.
    /// Absent geometry values are omitted, not defaulted.
    pub fn brand(
        source: Option<ImageSource>,
        bottom: Option<f32>,
        width: Option<f32>,
        height: Option<f32>,
    ) -> Self {
        match source {
            None => ImageSlot::Absent,
            Some(source) => ImageSlot::Image(ImageDescriptor {
                fade_duration: 0,
                resize_mode: ResizeMode::Contain,
                source,
                style: ImageStyle {
                    position: Some(Position::Absolute),
                    bottom,
                    width,
                    height,
                },
            }),
        }
    }

    /// Whether this section has nothing to draw
    pub fn is_absent(&self) -> bool {
        matches!(self, ImageSlot::Absent)
    }

    /// The resolved descriptor, if the section is present
    pub fn descriptor(&self) -> Option<&ImageDescriptor> {
        match self {
            ImageSlot::Absent => None,
            ImageSlot::Image(descriptor) => Some(descriptor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_without_source_is_absent() {
        let slot = ImageSlot::logo(None, 100.0, 40.0);
        assert!(slot.is_absent());
        assert!(slot.descriptor().is_none());
    }

    #[test]
    fn test_logo_with_source() {
        let slot = ImageSlot::logo(Some("asset://logo.png".into()), 100.0, 40.0);

        let descriptor = slot.descriptor().unwrap();
        assert_eq!(descriptor.fade_duration, 0);
        assert_eq!(descriptor.resize_mode, ResizeMode::Contain);
        assert_eq!(descriptor.source, ImageSource::Asset("asset://logo.png".to_string()));
        assert_eq!(descriptor.style.width, Some(100.0));
        assert_eq!(descriptor.style.height, Some(40.0));
        assert!(descriptor.style.position.is_none());
        assert!(descriptor.style.bottom.is_none());
    }

    #[test]
    fn test_brand_is_bottom_anchored() {
        let slot = ImageSlot::brand(
            Some(ImageSource::Resource(42)),
            Some(60.0),
            Some(80.0),
            Some(20.0),
        );

        let descriptor = slot.descriptor().unwrap();
        assert_eq!(descriptor.style.position, Some(Position::Absolute));
        assert_eq!(descriptor.style.bottom, Some(60.0));
        assert_eq!(descriptor.style.width, Some(80.0));
        assert_eq!(descriptor.style.height, Some(20.0));
    }

    #[test]
    fn test_brand_omits_undeclared_geometry() {
        let slot = ImageSlot::brand(Some("asset://brand.png".into()), None, None, None);

        let json = serde_json::to_value(&slot).unwrap();
        assert_eq!(json["kind"], "image");
        assert_eq!(json["style"]["position"], "absolute");
        assert!(json["style"].get("bottom").is_none());
        assert!(json["style"].get("width").is_none());
        assert!(json["style"].get("height").is_none());
    }

    #[test]
    fn test_absent_slot_wire_form() {
        let json = serde_json::to_value(ImageSlot::Absent).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "absent" }));
    }

    #[test]
    fn test_image_source_serializes_bare() {
        let asset = serde_json::to_value(ImageSource::Asset("logo.png".to_string())).unwrap();
        assert_eq!(asset, serde_json::json!("logo.png"));

        let resource = serde_json::to_value(ImageSource::Resource(7)).unwrap();
        assert_eq!(resource, serde_json::json!(7));
    }
}
