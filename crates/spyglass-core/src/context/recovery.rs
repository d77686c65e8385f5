use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use spyglass_driver::{Platform, UiDriver};

use super::errors::ContextError;

/// Escape hatch invoked when first-pass webview discovery fails.
///
/// Some platforms (notably iOS) stop enumerating webview contexts
/// after the app has been backgrounded; the only known remedy is a
/// full app relaunch. The switching algorithm itself stays
/// platform-neutral and calls whichever strategy the session was
/// built with.
#[async_trait]
pub trait ContextRecovery: Send + Sync {
    fn name(&self) -> &'static str;

    /// Attempt to bring the driver back into a state where webview
    /// contexts enumerate. Returns `false` when this strategy has
    /// nothing to do, in which case discovery is not retried.
    async fn recover(&self, driver: &dyn UiDriver) -> Result<bool, ContextError>;
}

/// Relaunch the application: terminate, pause for process teardown,
/// activate again.
pub struct RelaunchRecovery {
    bundle_id: String,
    teardown_pause: Duration,
}

impl RelaunchRecovery {
    pub const DEFAULT_TEARDOWN_PAUSE: Duration = Duration::from_secs(2);

    pub fn new(bundle_id: impl Into<String>) -> Self {
        Self {
            bundle_id: bundle_id.into(),
            teardown_pause: Self::DEFAULT_TEARDOWN_PAUSE,
        }
    }

    pub fn with_teardown_pause(mut self, pause: Duration) -> Self {
        self.teardown_pause = pause;
        self
    }
}

#[async_trait]
impl ContextRecovery for RelaunchRecovery {
    fn name(&self) -> &'static str {
        "relaunch"
    }

    async fn recover(&self, driver: &dyn UiDriver) -> Result<bool, ContextError> {
        warn!(
            event = "core.context.relaunch_started",
            bundle_id = %self.bundle_id,
            "Webview discovery failed; relaunching the application"
        );

        driver.terminate_app(&self.bundle_id).await?;
        tokio::time::sleep(self.teardown_pause).await;
        driver.activate_app(&self.bundle_id).await?;

        info!(
            event = "core.context.relaunch_completed",
            bundle_id = %self.bundle_id
        );
        Ok(true)
    }
}

/// No-op strategy for platforms whose context enumeration is reliable.
pub struct NoRecovery;

#[async_trait]
impl ContextRecovery for NoRecovery {
    fn name(&self) -> &'static str {
        "none"
    }

    async fn recover(&self, _driver: &dyn UiDriver) -> Result<bool, ContextError> {
        Ok(false)
    }
}

/// Select the recovery strategy for a platform.
pub fn recovery_for(platform: Platform, bundle_id: &str) -> Box<dyn ContextRecovery> {
    match platform {
        Platform::Ios => Box::new(RelaunchRecovery::new(bundle_id)),
        Platform::Android => Box::new(NoRecovery),
    }
}
