use std::future::Future;

use tokio::time::{Instant, sleep};
use tracing::debug;

use spyglass_driver::{DriverError, Selector, UiDriver};

use super::types::PollSpec;

/// Wait until `probe` reports `true`.
///
/// The probe is evaluated immediately; if it already holds, this
/// returns `Ok(true)` without sleeping. Otherwise the loop sleeps one
/// poll interval, re-evaluates, and gives up with `Ok(false)` once the
/// elapsed time strictly exceeds the budget. A probe satisfied exactly
/// at the boundary still counts as success on its poll tick.
///
/// Timeout is a value, never an error. A probe error propagates
/// immediately.
pub async fn wait_for<F, Fut, E>(spec: &PollSpec, probe: F) -> Result<bool, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    wait_until(spec, true, probe).await
}

/// Dual of [`wait_for`]: wait until `probe` reports `false`.
pub async fn wait_for_absence<F, Fut, E>(spec: &PollSpec, probe: F) -> Result<bool, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    wait_until(spec, false, probe).await
}

async fn wait_until<F, Fut, E>(spec: &PollSpec, target: bool, mut probe: F) -> Result<bool, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool, E>>,
{
    let start = Instant::now();

    if probe().await? == target {
        debug!(
            event = "core.wait.satisfied",
            target,
            elapsed_ms = 0u64
        );
        return Ok(true);
    }

    loop {
        sleep(spec.interval()).await;

        if probe().await? == target {
            debug!(
                event = "core.wait.satisfied",
                target,
                elapsed_ms = start.elapsed().as_millis() as u64
            );
            return Ok(true);
        }

        let elapsed = start.elapsed();
        if elapsed > spec.timeout() {
            debug!(
                event = "core.wait.timed_out",
                target,
                elapsed_ms = elapsed.as_millis() as u64,
                timeout_ms = spec.timeout_ms()
            );
            return Ok(false);
        }
    }
}

/// Wait until an element matching `selector` is present in the active
/// context.
pub async fn until_present(
    driver: &dyn UiDriver,
    selector: &Selector,
    spec: &PollSpec,
) -> Result<bool, DriverError> {
    wait_for(spec, move || async move {
        driver.is_present(selector, true).await
    })
    .await
}

/// Wait until no element matching `selector` remains in the active
/// context.
pub async fn until_gone(
    driver: &dyn UiDriver,
    selector: &Selector,
    spec: &PollSpec,
) -> Result<bool, DriverError> {
    wait_for_absence(spec, move || async move {
        driver.is_present(selector, true).await
    })
    .await
}

/// Wait until an element matching `selector` is present and occupies
/// on-screen area, i.e. can receive a tap.
pub async fn until_clickable(
    driver: &dyn UiDriver,
    selector: &Selector,
    spec: &PollSpec,
) -> Result<bool, DriverError> {
    wait_for(spec, move || async move {
        if !driver.is_present(selector, true).await? {
            return Ok(false);
        }
        match driver.element_rect(selector).await {
            Ok(rect) => Ok(rect.has_area()),
            // The element can vanish between the presence check and the
            // rect query; that is "not clickable yet", not a failure.
            Err(DriverError::NoSuchElement { .. }) | Err(DriverError::StaleElement { .. }) => {
                Ok(false)
            }
            Err(e) => Err(e),
        }
    })
    .await
}
