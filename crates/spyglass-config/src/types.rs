use serde::{Deserialize, Serialize};
use spyglass_driver::Platform;

/// Top-level configuration for a verification session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpyglassConfig {
    /// Mobile platform under test. Defaults to Android.
    pub platform: Option<Platform>,

    #[serde(default)]
    pub app: AppConfig,

    #[serde(default)]
    pub wait: WaitConfig,

    #[serde(default)]
    pub diff: DiffConfig,
}

impl SpyglassConfig {
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or(Platform::Android)
    }
}

/// Identity of the application under test.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Bundle id / package name of the hybrid application.
    pub bundle_id: Option<String>,

    /// Substring that identifies a webview context id among the
    /// driver's enumerated contexts.
    pub webview_marker: Option<String>,
}

impl AppConfig {
    pub const DEFAULT_WEBVIEW_MARKER: &'static str = "WEBVIEW";

    pub fn bundle_id(&self) -> &str {
        self.bundle_id.as_deref().unwrap_or("io.app.oversea")
    }

    pub fn webview_marker(&self) -> &str {
        self.webview_marker
            .as_deref()
            .unwrap_or(Self::DEFAULT_WEBVIEW_MARKER)
    }
}

/// Process-wide wait defaults, consumed by every polling invocation
/// unless overridden per call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaitConfig {
    /// Budget for an ordinary presence/absence wait, in milliseconds.
    pub condition_timeout_ms: Option<u64>,

    /// Pause between polls, in milliseconds.
    pub poll_interval_ms: Option<u64>,

    /// Budget for an identity probe, in milliseconds. Probes only test
    /// which screen is open, so they stay far below the ordinary wait.
    pub probe_timeout_ms: Option<u64>,

    /// Settle pause before restoring the web context after dismissing
    /// a native screen on iOS, in milliseconds.
    pub web_settle_ms: Option<u64>,
}

impl WaitConfig {
    pub const FALLBACK_CONDITION_TIMEOUT_MS: u64 = 5_000;
    pub const FALLBACK_POLL_INTERVAL_MS: u64 = 500;
    pub const FALLBACK_PROBE_TIMEOUT_MS: u64 = 1_000;
    pub const FALLBACK_WEB_SETTLE_MS: u64 = 2_000;

    pub fn condition_timeout_ms(&self) -> u64 {
        self.condition_timeout_ms
            .unwrap_or(Self::FALLBACK_CONDITION_TIMEOUT_MS)
    }

    pub fn poll_interval_ms(&self) -> u64 {
        self.poll_interval_ms
            .unwrap_or(Self::FALLBACK_POLL_INTERVAL_MS)
    }

    pub fn probe_timeout_ms(&self) -> u64 {
        self.probe_timeout_ms
            .unwrap_or(Self::FALLBACK_PROBE_TIMEOUT_MS)
    }

    pub fn web_settle_ms(&self) -> u64 {
        self.web_settle_ms.unwrap_or(Self::FALLBACK_WEB_SETTLE_MS)
    }
}

/// Defaults for perceptual image comparison.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Side length of the hash grid; the hash carries `grid_size²`
    /// bits.
    pub grid_size: Option<u32>,

    /// Default tolerance for similarity verdicts, 0.0 - 1.0. Lower is
    /// more sensitive to changes.
    pub tolerance: Option<f64>,
}

impl DiffConfig {
    pub const FALLBACK_GRID_SIZE: u32 = 16;
    pub const FALLBACK_TOLERANCE: f64 = 0.1;

    pub fn grid_size(&self) -> u32 {
        self.grid_size.unwrap_or(Self::FALLBACK_GRID_SIZE)
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance.unwrap_or(Self::FALLBACK_TOLERANCE)
    }
}
