//! The platform action that removes the splash view
//!
//! This is the only fallible operation in the system. The bridge catches
//! and logs the failure; nothing propagates to the caller that armed the
//! animation.

use async_trait::async_trait;
use thiserror::Error;

/// Errors surfaced by the platform hide action
#[derive(Debug, Error)]
pub enum HideError {
    /// The platform view layer rejected the removal
    #[error("platform hide action failed: {0}")]
    Platform(String),
}

/// Result type for hide operations
pub type Result<T> = std::result::Result<T, HideError>;

/// Removes the splash view from the host window
///
/// Real hosts detach the splash from their view tree here; completion means
/// the view is gone and the application UI underneath is exposed.
#[async_trait]
pub trait HideExecutor: Send + Sync {
    /// Remove the splash view, optionally fading it out
    async fn hide(&self, fade: bool) -> Result<()>;
}

/// Executor that performs no platform action and resolves immediately
///
/// Stands in on hosts where the view removal happens elsewhere and the
/// bridge only needs the completion signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHide;

#[async_trait]
impl HideExecutor for NoopHide {
    async fn hide(&self, _fade: bool) -> Result<()> {
        Ok(())
    }
}
