//! Splash manifest and hide-animation configuration schema
//!
//! The manifest is generated by the asset pipeline and shipped with the
//! application; the hide-animation configuration pairs it with the image
//! sources the host resolved at startup (plus optional dark-mode overrides).

use serde::{Deserialize, Serialize};

use crate::image::ImageSource;
use crate::style::Color;

/// Declared logo geometry from the generated splash manifest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoGeometry {
    /// Logo width in density-independent pixels
    pub width: f32,
    /// Logo height in density-independent pixels
    pub height: f32,
}

/// Declared brand geometry from the generated splash manifest
///
/// Every field is optional; an undeclared value is omitted from the
/// resulting descriptor rather than defaulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandGeometry {
    /// Offset from the bottom edge of the overlay
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
    /// Brand image width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Brand image height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

/// Generated splash manifest: colors and geometry shared by every platform
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplashManifest {
    /// Background color for the light theme
    pub background: Color,
    /// Background color override when dark mode is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_background: Option<Color>,
    /// Logo geometry
    pub logo: LogoGeometry,
    /// Brand geometry, if the application declares a brand section
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandGeometry>,
}

impl SplashManifest {
    /// Create a manifest with the given background and logo geometry
    pub fn new(background: impl Into<Color>, logo: LogoGeometry) -> Self {
        Self {
            background: background.into(),
            dark_background: None,
            logo,
            brand: None,
        }
    }

    /// Set the dark-mode background color
    pub fn with_dark_background(mut self, color: impl Into<Color>) -> Self {
        self.dark_background = Some(color.into());
        self
    }

    /// Declare a brand section with the given geometry
    pub fn with_brand(mut self, brand: BrandGeometry) -> Self {
        self.brand = Some(brand);
        self
    }
}

/// Full configuration for one hide animation
///
/// Image sources are optional: a section without a source is skipped
/// entirely. Dark variants are used only when the platform reports dark
/// mode enabled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HideAnimationConfig {
    /// The generated splash manifest
    pub manifest: SplashManifest,
    /// Logo image source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageSource>,
    /// Logo override for dark mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_logo: Option<ImageSource>,
    /// Brand image source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<ImageSource>,
    /// Brand override for dark mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_brand: Option<ImageSource>,
}

impl HideAnimationConfig {
    /// Create a configuration with no image sources
    pub fn new(manifest: SplashManifest) -> Self {
        Self {
            manifest,
            logo: None,
            dark_logo: None,
            brand: None,
            dark_brand: None,
        }
    }

    /// Set the logo source
    pub fn with_logo(mut self, source: impl Into<ImageSource>) -> Self {
        self.logo = Some(source.into());
        self
    }

    /// Set the dark-mode logo override
    pub fn with_dark_logo(mut self, source: impl Into<ImageSource>) -> Self {
        self.dark_logo = Some(source.into());
        self
    }

    /// Set the brand source
    pub fn with_brand(mut self, source: impl Into<ImageSource>) -> Self {
        self.brand = Some(source.into());
        self
    }

    /// Set the dark-mode brand override
    pub fn with_dark_brand(mut self, source: impl Into<ImageSource>) -> Self {
        self.dark_brand = Some(source.into());
        self
    }
}
