use async_trait::async_trait;
use serde_json::Value;

use super::errors::DriverError;
use super::types::{ElementId, Rect, Selector};

/// The capability set the verification core requires from an
/// automation driver.
///
/// Implementations wrap a concrete automation session (an Appium
/// client, a devtools bridge, a test double). All methods operate on
/// whatever UI context the session currently has active; context
/// selection itself goes through [`contexts`](UiDriver::contexts) /
/// [`current_context`](UiDriver::current_context) /
/// [`switch_context`](UiDriver::switch_context).
///
/// The driver is NOT safe for concurrent use from multiple logical
/// actors; callers guarantee single-task access.
#[async_trait]
pub trait UiDriver: Send + Sync {
    /// Instantaneous presence check for `selector` in the active
    /// context.
    ///
    /// With `suppress_errors` set, a lookup miss is reported as
    /// `Ok(false)` instead of [`DriverError::NoSuchElement`]. Transport
    /// failures are errors either way.
    async fn is_present(
        &self,
        selector: &Selector,
        suppress_errors: bool,
    ) -> Result<bool, DriverError>;

    /// Click the first element matching `selector`.
    async fn click(&self, selector: &Selector) -> Result<(), DriverError>;

    /// On-screen bounding box of the first element matching `selector`.
    async fn element_rect(&self, selector: &Selector) -> Result<Rect, DriverError>;

    /// All elements matching `selector`, as opaque handles in document
    /// order.
    async fn find_elements(&self, selector: &Selector) -> Result<Vec<ElementId>, DriverError>;

    /// Click a previously looked-up element by handle.
    async fn click_element(&self, element: &ElementId) -> Result<(), DriverError>;

    /// Execute a script in the active context and return its result.
    async fn execute_script(&self, script: &str, args: &[Value]) -> Result<Value, DriverError>;

    /// Press the platform back control (Android hardware back).
    async fn back(&self) -> Result<(), DriverError>;

    /// Enumerate the context ids currently reported by the session.
    ///
    /// The native context is always present; webview contexts appear
    /// asynchronously once a web renderer is attached.
    async fn contexts(&self) -> Result<Vec<String>, DriverError>;

    /// Id of the currently active context.
    async fn current_context(&self) -> Result<String, DriverError>;

    /// Activate the context with the given id.
    async fn switch_context(&self, id: &str) -> Result<(), DriverError>;

    /// Kill the application process.
    async fn terminate_app(&self, bundle_id: &str) -> Result<(), DriverError>;

    /// Launch or foreground the application.
    async fn activate_app(&self, bundle_id: &str) -> Result<(), DriverError>;
}
