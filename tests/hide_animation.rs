//! End-to-end hide animation tests
//!
//! Drives the full bridge surface the way a host would: build a config from
//! a generated manifest, prepare the hide animation, and observe the
//! descriptors, the callback, and the visibility query.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use splash_core::SplashController;
use splash_platform::{FixedTheme, HideError, HideExecutor, NoopHide};
use splash_ui::{HideAnimationConfig, ImageSource, LogoGeometry, SplashManifest};

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// Executor whose platform action always fails
struct FailingHide;

#[async_trait]
impl HideExecutor for FailingHide {
    async fn hide(&self, _fade: bool) -> Result<(), HideError> {
        Err(HideError::Platform("window handle lost".to_string()))
    }
}

/// Scenario: logo-only config in light mode
///
/// container.backgroundColor = "#fff", logo geometry from the manifest,
/// brand absent, callback invoked exactly once.
#[tokio::test]
async fn test_light_mode_logo_only_end_to_end() {
    init_tracing();

    let manifest = SplashManifest::new("#fff", LogoGeometry { width: 100.0, height: 40.0 });
    let config = HideAnimationConfig::new(manifest).with_logo("asset://logo.png");

    let controller = SplashController::new(Arc::new(FixedTheme::light()), Arc::new(NoopHide));

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let animation = controller.prepare_hide_animation(&config, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(animation.container.style.background_color, "#fff");

    let logo = animation.logo.descriptor().expect("logo present");
    assert_eq!(logo.style.width, Some(100.0));
    assert_eq!(logo.style.height, Some(40.0));

    assert!(animation.brand.is_absent());

    animation.completion.expect("sequence armed").await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(controller.is_visible().await);
}

/// Scenario: the hide sequence fails
///
/// The error is logged and suppressed; the visibility query keeps
/// answering false and the callback never runs.
#[tokio::test]
async fn test_failed_hide_sequence_end_to_end() {
    init_tracing();

    let manifest = SplashManifest::new("#fff", LogoGeometry { width: 100.0, height: 40.0 });
    let config = HideAnimationConfig::new(manifest).with_logo("asset://logo.png");

    let controller = SplashController::new(Arc::new(FixedTheme::light()), Arc::new(FailingHide));

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let animation = controller.prepare_hide_animation(&config, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    // The caller still receives its descriptors
    assert!(!animation.logo.is_absent());

    animation.completion.expect("sequence armed").await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!controller.is_visible().await);
}

/// The orchestration call returns its descriptors in the same synchronous
/// turn; the visibility flip is observable only after the detached
/// sequence completes.
#[tokio::test]
async fn test_descriptors_are_never_pending() {
    let manifest = SplashManifest::new("#fff", LogoGeometry { width: 48.0, height: 48.0 });
    let config = HideAnimationConfig::new(manifest).with_logo(ImageSource::Resource(1));

    let controller = SplashController::new(Arc::new(FixedTheme::light()), Arc::new(NoopHide));

    assert!(!controller.is_visible().await);

    let animation = controller.prepare_hide_animation(&config, || {});

    // Descriptors are plain values, available before the sequence runs
    assert_eq!(animation.container.style.background_color, "#fff");
    assert_eq!(
        animation.logo.descriptor().unwrap().source,
        ImageSource::Resource(1)
    );

    animation.completion.expect("sequence armed").await.unwrap();
    assert!(controller.is_visible().await);
}

/// Repeated orchestration calls each arm their own one-shot sequence
#[tokio::test]
async fn test_each_call_arms_its_own_sequence() {
    let manifest = SplashManifest::new("#fff", LogoGeometry { width: 100.0, height: 40.0 });
    let config = HideAnimationConfig::new(manifest).with_logo("asset://logo.png");

    let controller = SplashController::new(Arc::new(FixedTheme::light()), Arc::new(NoopHide));

    let calls = Arc::new(AtomicUsize::new(0));

    for _ in 0..3 {
        let counter = Arc::clone(&calls);
        let animation = controller.prepare_hide_animation(&config, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        animation.completion.expect("sequence armed").await.unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert!(controller.is_visible().await);
}

/// The public hide operation resolves without touching visibility
#[tokio::test]
async fn test_public_hide_resolves_without_side_effects() {
    let controller = SplashController::new(Arc::new(FixedTheme::light()), Arc::new(NoopHide));

    controller.hide(false).await.unwrap();
    controller.hide(true).await.unwrap();
    assert!(!controller.is_visible().await);
}
