use async_trait::async_trait;

use spyglass_driver::Selector;

use crate::screen::errors::ScreenError;
use crate::screen::flows;
use crate::screen::traits::{CameraScreen, NativeScreen, ScreenFamily};
use crate::session::Session;

/// The AOSP camera, `com.android.camera2`.
pub struct AndroidCamera2 {
    root: Selector,
    shutter: Selector,
    confirm: Selector,
}

impl AndroidCamera2 {
    pub const PACKAGE: &'static str = "com.android.camera2";

    pub fn new() -> Self {
        Self {
            root: Selector::new(format!("//*[@package='{}']", Self::PACKAGE)),
            shutter: Selector::from("//android.widget.ImageView[@content-desc=\"Shutter\"]"),
            confirm: Selector::from("//android.widget.ImageButton[@content-desc=\"Done\"]"),
        }
    }
}

impl Default for AndroidCamera2 {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeScreen for AndroidCamera2 {
    fn name(&self) -> &'static str {
        "android_camera2"
    }

    fn family(&self) -> ScreenFamily {
        ScreenFamily::Camera
    }

    fn root(&self) -> &Selector {
        &self.root
    }
}

#[async_trait]
impl CameraScreen for AndroidCamera2 {
    async fn take_picture(&self, session: &Session) -> Result<(), ScreenError> {
        flows::take_picture_flow(session, self, &self.shutter, &self.confirm).await
    }

    async fn dismiss(&self, session: &Session) -> Result<(), ScreenError> {
        flows::dismiss_with_back(session, self).await
    }

    async fn has_back_control(&self, _session: &Session) -> Result<bool, ScreenError> {
        // The hardware back button is always available on Android
        Ok(true)
    }
}
