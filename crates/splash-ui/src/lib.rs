//! Descriptor and configuration types for the boot splash bridge
//!
//! This crate defines the plain values exchanged with the host UI framework:
//! the full-bleed container style mounted behind the splash images, the
//! image descriptors for the logo and brand sections, and the generated
//! splash manifest the application ships.
//!
//! Descriptors are stateless outputs. They carry no identity and are
//! recomputed on every invocation; serialization follows the host bridge's
//! camelCase wire form, with absent optional fields omitted entirely.
//!
//! # Modules
//!
//! - [`style`] - Container overlay style and image layout primitives
//! - [`image`] - Image sources, descriptors, and the absent-image variant
//! - [`config`] - Splash manifest and hide-animation configuration schema

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod image;
pub mod style;

// Re-export commonly used types
pub use config::{BrandGeometry, HideAnimationConfig, LogoGeometry, SplashManifest};
pub use image::{ImageDescriptor, ImageSlot, ImageSource, ResizeMode};
pub use style::{
    Alignment, Color, ContainerDescriptor, ContainerStyle, ImageStyle, JustifyContent, Position,
};
