use std::sync::Arc;

use tracing::{debug, info, warn};

use spyglass_driver::UiDriver;

use super::errors::ContextError;
use super::recovery::ContextRecovery;
use super::types::{DriverContext, NATIVE_CONTEXT};
use crate::wait::{PollSpec, wait_for};

/// The native/web state machine.
///
/// Owns the session's context transitions; no other component issues
/// context commands against the driver. The switcher itself caches
/// nothing: the current state and the webview id are read live from
/// the driver on every call.
pub struct ContextSwitcher {
    driver: Arc<dyn UiDriver>,
    recovery: Box<dyn ContextRecovery>,
    webview_marker: String,
    discovery: PollSpec,
}

impl ContextSwitcher {
    pub fn new(
        driver: Arc<dyn UiDriver>,
        recovery: Box<dyn ContextRecovery>,
        webview_marker: impl Into<String>,
        discovery: PollSpec,
    ) -> Self {
        Self {
            driver,
            recovery,
            webview_marker: webview_marker.into(),
            discovery,
        }
    }

    /// Current logical state, read live from the driver.
    pub async fn current(&self) -> Result<DriverContext, ContextError> {
        let raw = self.driver.current_context().await?;
        Ok(DriverContext::classify(&raw, &self.webview_marker))
    }

    /// Activate the native context.
    ///
    /// Unconditional and idempotent; the native context always exists.
    pub async fn to_native(&self) -> Result<(), ContextError> {
        self.driver.switch_context(NATIVE_CONTEXT).await?;
        debug!(event = "core.context.native_activated");
        Ok(())
    }

    /// Activate a webview context.
    ///
    /// A no-op when the session is already in one (checked first, to
    /// avoid a redundant, disruptive switch). Otherwise polls until
    /// the driver enumerates a second context; if discovery times out,
    /// runs the platform recovery strategy and retries discovery once.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::WebviewUnavailable`] when no webview
    /// context can be found even after recovery. Downstream steps
    /// cannot proceed without a web context, so this is an error, not
    /// a `false`.
    pub async fn to_web(&self) -> Result<(), ContextError> {
        let current = self.driver.current_context().await?;
        if current.contains(&self.webview_marker) {
            debug!(event = "core.context.already_web", context = %current);
            return Ok(());
        }

        if let Some(id) = self.discover_webview().await? {
            return self.activate_web(&id).await;
        }

        warn!(
            event = "core.context.discovery_failed",
            strategy = self.recovery.name(),
            timeout_ms = self.discovery.timeout_ms()
        );

        if self.recovery.recover(self.driver.as_ref()).await?
            && let Some(id) = self.discover_webview().await?
        {
            return self.activate_web(&id).await;
        }

        let contexts = self.driver.contexts().await.unwrap_or_default();
        Err(ContextError::WebviewUnavailable {
            timeout_ms: self.discovery.timeout_ms(),
            contexts,
        })
    }

    /// Poll until more than one context enumerates, then pick the one
    /// matching the webview marker. `None` means discovery timed out
    /// or nothing matched.
    async fn discover_webview(&self) -> Result<Option<String>, ContextError> {
        let driver = self.driver.as_ref();

        let appeared = wait_for(&self.discovery, move || async move {
            driver.contexts().await.map(|contexts| contexts.len() > 1)
        })
        .await?;

        if !appeared {
            return Ok(None);
        }

        let contexts = self.driver.contexts().await?;
        Ok(contexts
            .into_iter()
            .find(|id| id.contains(&self.webview_marker)))
    }

    async fn activate_web(&self, id: &str) -> Result<(), ContextError> {
        self.driver.switch_context(id).await?;
        info!(event = "core.context.web_activated", context = %id);
        Ok(())
    }
}
