use std::fmt;

use async_trait::async_trait;

use spyglass_driver::Selector;

use super::errors::ScreenError;
use crate::session::Session;
use crate::wait;

/// The two families of vendor-specific native screens the app hands
/// off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenFamily {
    Camera,
    Gallery,
}

impl ScreenFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScreenFamily::Camera => "camera",
            ScreenFamily::Gallery => "gallery",
        }
    }
}

impl fmt::Display for ScreenFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vendor-specific native screen the automation can land on.
///
/// Implementations are value objects: constructed fresh per resolution
/// attempt, stateless beyond their immutable locators, discarded after
/// use.
pub trait NativeScreen: Send + Sync {
    /// Canonical name of this screen (e.g. "android_camera2").
    fn name(&self) -> &'static str;

    fn family(&self) -> ScreenFamily;

    /// Locator identifying this screen's root. A bounded presence
    /// check on it is what identifies the screen at runtime.
    fn root(&self) -> &Selector;
}

/// Actions common to every camera vendor.
#[async_trait]
pub trait CameraScreen: NativeScreen {
    /// Take a picture and confirm it. The camera screen must already
    /// be open.
    async fn take_picture(&self, session: &Session) -> Result<(), ScreenError>;

    /// Leave the camera without taking a picture.
    async fn dismiss(&self, session: &Session) -> Result<(), ScreenError>;

    /// Whether a back/cancel control is available on this screen.
    /// Android vendors rely on the hardware back button, which always
    /// exists.
    async fn has_back_control(&self, session: &Session) -> Result<bool, ScreenError>;
}

/// Actions common to every gallery vendor.
#[async_trait]
pub trait GalleryScreen: NativeScreen {
    /// Pick the photo at `index` (0-based, document order of the
    /// thumbnail locator).
    async fn choose_photo(&self, session: &Session, index: usize) -> Result<(), ScreenError>;

    /// Leave the gallery without picking anything.
    async fn dismiss(&self, session: &Session) -> Result<(), ScreenError>;
}

/// Instant-read check whether `screen` is currently open.
///
/// Brackets the probe between a native switch and a web restore; the
/// web context is restored even when the probe fails, so the session
/// is never left stranded in the native context.
pub async fn is_open(screen: &dyn NativeScreen, session: &Session) -> Result<bool, ScreenError> {
    session.context().to_native().await?;
    let probed = wait::until_present(session.driver(), screen.root(), session.probe_spec()).await;
    let restored = session.context().to_web().await;
    let present = probed?;
    restored?;
    Ok(present)
}
