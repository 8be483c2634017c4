//! Platform seams for the boot splash bridge
//!
//! The bridge needs two things from the platform: a snapshot of the current
//! theme and system chrome metrics, and an action that actually removes the
//! splash view from the host window. Both are expressed as traits so real
//! hosts can wire their platform APIs in, while the trivial in-process
//! implementations here keep the bridge usable (and testable) without one.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hide;
pub mod theme;

// Re-export commonly used types
pub use hide::{HideError, HideExecutor, NoopHide};
pub use theme::{FixedTheme, ThemeConstants, ThemeSource};
