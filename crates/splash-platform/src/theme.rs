//! Theme and system chrome metrics
//!
//! Only the dark-mode flag influences the bridge's own logic; the size
//! ratio and bar heights are passed through to the host untouched so it can
//! lay out the splash around system chrome.

use serde::{Deserialize, Serialize};

/// Snapshot of the platform theme and chrome metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConstants {
    /// Whether the platform currently reports a dark color scheme
    pub dark_mode_enabled: bool,
    /// Scale factor applied to the declared logo size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_size_ratio: Option<f32>,
    /// Height of the system navigation bar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation_bar_height: Option<f32>,
    /// Height of the system status bar
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_bar_height: Option<f32>,
}

impl ThemeConstants {
    /// Create a snapshot with only the dark-mode flag set
    pub fn new(dark_mode_enabled: bool) -> Self {
        Self {
            dark_mode_enabled,
            logo_size_ratio: None,
            navigation_bar_height: None,
            status_bar_height: None,
        }
    }

    /// Set the logo size ratio
    pub fn with_logo_size_ratio(mut self, ratio: f32) -> Self {
        self.logo_size_ratio = Some(ratio);
        self
    }

    /// Set the system bar heights
    pub fn with_bar_heights(mut self, navigation: f32, status: f32) -> Self {
        self.navigation_bar_height = Some(navigation);
        self.status_bar_height = Some(status);
        self
    }
}

/// Source of truth for theme and chrome metrics
///
/// Real hosts implement this over their platform theme and safe-area APIs.
/// The snapshot must be cheap: it is taken on every layout computation.
pub trait ThemeSource: Send + Sync {
    /// Current theme/metrics snapshot
    fn constants(&self) -> ThemeConstants;
}

/// Fixed, in-process theme source
///
/// Stands in for a real platform probe on hosts that have not wired one,
/// and gives tests deterministic constants.
#[derive(Debug, Clone)]
pub struct FixedTheme {
    constants: ThemeConstants,
}

impl FixedTheme {
    /// Create a source reporting the given constants
    pub fn new(constants: ThemeConstants) -> Self {
        Self { constants }
    }

    /// Light mode, no chrome metrics
    pub fn light() -> Self {
        Self::new(ThemeConstants::new(false))
    }

    /// Dark mode with placeholder metrics (ratio 1, zero bar heights)
    ///
    /// Hosts without a real probe get a usable dark splash out of these;
    /// the metrics are placeholders, not measurements.
    pub fn dark() -> Self {
        Self::new(
            ThemeConstants::new(true)
                .with_logo_size_ratio(1.0)
                .with_bar_heights(0.0, 0.0),
        )
    }
}

impl ThemeSource for FixedTheme {
    fn constants(&self) -> ThemeConstants {
        self.constants
    }
}
