//! Style primitives for the splash overlay
//!
//! The container style is the one non-trivial layout in this system: an
//! absolutely positioned full-bleed overlay that centers its content. Image
//! styles are sparse by design - only the fields a section actually declares
//! are serialized, so the host never sees a zeroed-out placeholder value.

use serde::{Deserialize, Serialize};

/// A color represented as a hex string (e.g., "#FFFFFF")
pub type Color = String;

/// Positioning scheme understood by the host view layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Positioned in normal document flow
    #[default]
    Relative,
    /// Positioned against the nearest positioned ancestor
    Absolute,
}

/// Cross-axis alignment of container children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Stretch to fill
    #[default]
    Stretch,
    /// Align to start
    Start,
    /// Align to center
    Center,
    /// Align to end
    End,
}

/// Main-axis distribution of container children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JustifyContent {
    /// Start (default)
    #[default]
    Start,
    /// Center
    Center,
    /// End
    End,
    /// Space between
    SpaceBetween,
    /// Space around
    SpaceAround,
}

/// Full-bleed overlay style for the splash container
///
/// Every edge is pinned to 0 so the overlay covers the window regardless of
/// its size, and content is centered on both axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerStyle {
    /// Positioning scheme (always absolute for the overlay)
    pub position: Position,
    /// Left edge offset
    pub left: f32,
    /// Right edge offset
    pub right: f32,
    /// Top edge offset
    pub top: f32,
    /// Bottom edge offset
    pub bottom: f32,
    /// Overlay background color
    pub background_color: Color,
    /// Cross-axis alignment of the logo/brand images
    pub align_items: Alignment,
    /// Main-axis distribution of the logo/brand images
    pub justify_content: JustifyContent,
}

impl ContainerStyle {
    /// Create the full-bleed splash overlay with the given background
    pub fn overlay(background_color: impl Into<Color>) -> Self {
        Self {
            position: Position::Absolute,
            left: 0.0,
            right: 0.0,
            top: 0.0,
            bottom: 0.0,
            background_color: background_color.into(),
            align_items: Alignment::Center,
            justify_content: JustifyContent::Center,
        }
    }
}

/// Container section of a hide animation
///
/// Wraps the overlay style in the shape the host's view layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerDescriptor {
    /// The overlay style to mount behind the splash images
    pub style: ContainerStyle,
}

/// Layout applied to a splash image
///
/// All fields are optional - a field the manifest does not declare is
/// omitted from the serialized descriptor, never defaulted to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageStyle {
    /// Positioning scheme (set for the bottom-anchored brand image)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Bottom edge offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f32>,
    /// Declared width
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    /// Declared height
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}
