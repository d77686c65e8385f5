use tracing::{debug, info, warn};

use super::errors::DetectError;
use crate::screen::{CameraScreen, GalleryScreen, NativeScreen, ScreenFamily, camera, gallery};
use crate::session::Session;
use crate::wait;

/// Determine which of the candidate screens is actually open.
///
/// Switches to the native context once, amortized over the whole probe
/// sequence, then probes each candidate's root locator with the short
/// probe timeout, strictly in list order. The first positive probe
/// wins. Probes never run concurrently: concurrent probes could race
/// the context switch, and when two screens are transiently present
/// during a transition they would make "first" nondeterministic.
///
/// The session is left in the native context on success; the caller
/// is about to drive the resolved screen anyway, and its action flows
/// restore the web context when they finish.
///
/// # Errors
///
/// Returns [`DetectError::NoKnownScreen`] naming the family when every
/// probe comes back negative.
pub async fn resolve<S>(
    session: &Session,
    family: ScreenFamily,
    candidates: Vec<Box<S>>,
) -> Result<Box<S>, DetectError>
where
    S: NativeScreen + ?Sized,
{
    info!(
        event = "core.detect.resolution_started",
        family = family.as_str(),
        candidates = candidates.len()
    );

    session.context().to_native().await?;

    for candidate in candidates {
        let open =
            wait::until_present(session.driver(), candidate.root(), session.probe_spec()).await?;
        if open {
            info!(
                event = "core.detect.screen_identified",
                family = family.as_str(),
                screen = candidate.name()
            );
            return Ok(candidate);
        }
        debug!(
            event = "core.detect.probe_negative",
            family = family.as_str(),
            screen = candidate.name()
        );
    }

    warn!(
        event = "core.detect.resolution_failed",
        family = family.as_str()
    );
    Err(DetectError::NoKnownScreen { family })
}

/// Identify the open camera vendor screen.
pub async fn detect_camera(session: &Session) -> Result<Box<dyn CameraScreen>, DetectError> {
    resolve(session, ScreenFamily::Camera, camera::candidates()).await
}

/// Identify the open gallery vendor screen.
pub async fn detect_gallery(session: &Session) -> Result<Box<dyn GalleryScreen>, DetectError> {
    resolve(session, ScreenFamily::Gallery, gallery::candidates()).await
}
