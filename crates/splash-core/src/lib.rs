//! Boot splash controller
//!
//! This crate owns the bridge's behavior: it resolves effective colors and
//! image sources against the current theme, computes the descriptors the
//! host mounts during the hide animation, and sequences the one-shot
//! "run the animation once every section is ready" callback around the
//! detached platform hide action.
//!
//! # Modules
//!
//! - [`controller`] - The [`SplashController`] orchestration surface
//! - [`gate`] - One-shot readiness gate over the layout/logo/brand sections

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controller;
pub mod gate;

// Re-export commonly used types
pub use controller::{HideAnimation, Result, SplashController, SplashError};
pub use gate::{ReadinessGate, Section};
