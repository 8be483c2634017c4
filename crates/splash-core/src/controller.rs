//! Splash controller orchestration
//!
//! [`SplashController`] resolves the effective background and image sources
//! against the current theme snapshot, computes the descriptors the host
//! mounts, and arms the one-shot hide sequence. The hide sequence itself is
//! a detached task: `prepare_hide_animation` returns its descriptors in the
//! same synchronous turn, and the sequence's completion is observable only
//! through the visibility cell, the log, and the optional join handle.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use splash_platform::{HideError, HideExecutor, ThemeConstants, ThemeSource};
use splash_ui::{
    Color, ContainerDescriptor, ContainerStyle, HideAnimationConfig, ImageSlot, ImageSource,
};
use tokio::task::JoinHandle;

use crate::gate::{ReadinessGate, Section};

/// Splash bridge errors
#[derive(Debug, thiserror::Error)]
pub enum SplashError {
    /// The platform hide action failed
    #[error("hide failed: {0}")]
    Hide(#[from] HideError),
}

/// Result type for splash operations
pub type Result<T> = std::result::Result<T, SplashError>;

/// Descriptors for one hide animation, plus the detached hide sequence
#[derive(Debug)]
pub struct HideAnimation {
    /// The full-bleed overlay the host mounts behind the images
    pub container: ContainerDescriptor,
    /// The logo section
    pub logo: ImageSlot,
    /// The brand section
    pub brand: ImageSlot,
    /// Join handle of the detached hide sequence
    ///
    /// Awaiting it is optional; the sequence runs to completion either way.
    /// It is armed on every call in the current synchronous flow, and stays
    /// `None` only if some future readiness scheme leaves a section
    /// unreported.
    pub completion: Option<JoinHandle<()>>,
}

struct ControllerInner {
    theme: Arc<dyn ThemeSource>,
    executor: Arc<dyn HideExecutor>,
    // Set once by the hide-sequence continuation; the host polls it to know
    // the splash handoff happened.
    visible: AtomicBool,
}

/// Owns splash visibility state and computes hide-animation descriptors
///
/// Each controller carries its own visibility cell, so independent
/// instances (one per test, one per window) never observe each other.
/// Cloning shares the cell.
#[derive(Clone)]
pub struct SplashController {
    inner: Arc<ControllerInner>,
}

impl SplashController {
    /// Create a controller over the given platform seams
    ///
    /// Visibility starts `false`: the splash is assumed not yet hidden.
    pub fn new(theme: Arc<dyn ThemeSource>, executor: Arc<dyn HideExecutor>) -> Self {
        Self {
            inner: Arc::new(ControllerInner {
                theme,
                executor,
                visible: AtomicBool::new(false),
            }),
        }
    }

    /// Compute the full-bleed container overlay style
    pub fn container_style(&self, background_color: impl Into<Color>) -> ContainerStyle {
        ContainerStyle::overlay(background_color)
    }

    /// Compute the logo section descriptor
    pub fn logo_descriptor(
        &self,
        source: Option<ImageSource>,
        width: f32,
        height: f32,
    ) -> ImageSlot {
        ImageSlot::logo(source, width, height)
    }

    /// Compute the brand section descriptor
    pub fn brand_descriptor(
        &self,
        source: Option<ImageSource>,
        bottom: Option<f32>,
        width: Option<f32>,
        height: Option<f32>,
    ) -> ImageSlot {
        ImageSlot::brand(source, bottom, width, height)
    }

    /// Current theme/metrics snapshot from the injected source
    pub fn constants(&self) -> ThemeConstants {
        self.inner.theme.constants()
    }

    /// Compute the hide-animation descriptors and arm the one-shot hide
    /// sequence
    ///
    /// Returns within the same synchronous turn; the hide sequence runs as
    /// a detached task. `animate` is invoked at most once, only after the
    /// platform hide action succeeds. On failure the error is logged and
    /// neither the callback nor the visibility cell is touched.
    ///
    /// Must be called within a tokio runtime context.
    pub fn prepare_hide_animation<F>(&self, config: &HideAnimationConfig, animate: F) -> HideAnimation
    where
        F: FnOnce() + Send + 'static,
    {
        tracing::debug!(?config, "preparing hide animation");

        let manifest = &config.manifest;
        let skip_logo = config.logo.is_none();
        let skip_brand = manifest.brand.is_none() || config.brand.is_none();

        let dark = self.inner.theme.constants().dark_mode_enabled;

        let background = if dark {
            manifest
                .dark_background
                .clone()
                .unwrap_or_else(|| manifest.background.clone())
        } else {
            manifest.background.clone()
        };

        let logo_source = if skip_logo {
            None
        } else if dark && config.dark_logo.is_some() {
            config.dark_logo.clone()
        } else {
            config.logo.clone()
        };

        let brand_source = if skip_brand {
            None
        } else if dark && config.dark_brand.is_some() {
            config.dark_brand.clone()
        } else {
            config.brand.clone()
        };

        let gate = ReadinessGate::new(skip_logo, skip_brand);

        let container = ContainerDescriptor {
            style: ContainerStyle::overlay(background),
        };
        let mut fire = gate.report(Section::Layout);

        let logo = ImageSlot::logo(logo_source, manifest.logo.width, manifest.logo.height);
        fire |= gate.report(Section::Logo);

        let brand_geometry = manifest.brand.unwrap_or_default();
        let brand = ImageSlot::brand(
            brand_source,
            brand_geometry.bottom,
            brand_geometry.width,
            brand_geometry.height,
        );
        fire |= gate.report(Section::Brand);

        let completion = fire.then(|| self.spawn_hide_sequence(animate));

        tracing::trace!(?container, ?logo, ?brand, "hide animation descriptors ready");

        HideAnimation {
            container,
            logo,
            brand,
            completion,
        }
    }

    /// Remove the splash view
    ///
    /// Delegates to the platform executor. Does not touch the visibility
    /// cell; only the armed hide sequence does that.
    pub async fn hide(&self, fade: bool) -> Result<()> {
        self.inner.executor.hide(fade).await?;
        Ok(())
    }

    /// Whether the hide sequence has completed
    pub async fn is_visible(&self) -> bool {
        self.inner.visible.load(Ordering::Acquire)
    }

    fn spawn_hide_sequence<F>(&self, animate: F) -> JoinHandle<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            match inner.executor.hide(false).await {
                Ok(()) => {
                    inner.visible.store(true, Ordering::Release);
                    tracing::info!("splash hide sequence finished");
                    animate();
                }
                Err(error) => {
                    tracing::error!(%error, "splash hide sequence failed");
                }
            }
        })
    }
}
