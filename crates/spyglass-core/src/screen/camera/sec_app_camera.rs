use async_trait::async_trait;

use spyglass_driver::Selector;

use crate::screen::errors::ScreenError;
use crate::screen::flows;
use crate::screen::traits::{CameraScreen, NativeScreen, ScreenFamily};
use crate::session::Session;

/// The Samsung camera, `com.sec.android.app.camera`.
pub struct SecAppCamera {
    root: Selector,
    shutter: Selector,
    confirm: Selector,
}

impl SecAppCamera {
    pub const PACKAGE: &'static str = "com.sec.android.app.camera";

    pub fn new() -> Self {
        Self {
            root: Selector::new(format!("//*[@package='{}']", Self::PACKAGE)),
            shutter: Selector::from(
                "//android.widget.ImageView[contains(@resource-id, 'center_button')]",
            ),
            confirm: Selector::from("//android.widget.Button[@content-desc='OK']"),
        }
    }
}

impl Default for SecAppCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeScreen for SecAppCamera {
    fn name(&self) -> &'static str {
        "sec_app_camera"
    }

    fn family(&self) -> ScreenFamily {
        ScreenFamily::Camera
    }

    fn root(&self) -> &Selector {
        &self.root
    }
}

#[async_trait]
impl CameraScreen for SecAppCamera {
    async fn take_picture(&self, session: &Session) -> Result<(), ScreenError> {
        flows::take_picture_flow(session, self, &self.shutter, &self.confirm).await
    }

    async fn dismiss(&self, session: &Session) -> Result<(), ScreenError> {
        flows::dismiss_with_back(session, self).await
    }

    async fn has_back_control(&self, _session: &Session) -> Result<bool, ScreenError> {
        Ok(true)
    }
}
