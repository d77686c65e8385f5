use async_trait::async_trait;

use spyglass_driver::Selector;

use crate::screen::errors::ScreenError;
use crate::screen::flows;
use crate::screen::traits::{CameraScreen, NativeScreen, ScreenFamily};
use crate::session::Session;

/// The stock iOS camera sheet.
///
/// iOS has no hardware back button; leaving the camera goes through
/// its on-screen Cancel control, and the embedded renderer needs a
/// settle pause after the sheet tears down.
pub struct IosCamera {
    root: Selector,
    shutter: Selector,
    confirm: Selector,
    back: Selector,
}

impl IosCamera {
    pub fn new() -> Self {
        Self {
            root: Selector::from("//XCUIElementTypeOther[@name=\"CameraMode\"]"),
            shutter: Selector::from("//XCUIElementTypeButton[@name='PhotoCapture']"),
            confirm: Selector::from("//XCUIElementTypeButton[@name='Done']"),
            back: Selector::from("//XCUIElementTypeButton[@name='Cancel']"),
        }
    }
}

impl Default for IosCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeScreen for IosCamera {
    fn name(&self) -> &'static str {
        "ios_camera"
    }

    fn family(&self) -> ScreenFamily {
        ScreenFamily::Camera
    }

    fn root(&self) -> &Selector {
        &self.root
    }
}

#[async_trait]
impl CameraScreen for IosCamera {
    async fn take_picture(&self, session: &Session) -> Result<(), ScreenError> {
        flows::take_picture_flow(session, self, &self.shutter, &self.confirm).await
    }

    async fn dismiss(&self, session: &Session) -> Result<(), ScreenError> {
        flows::dismiss_with_button(session, self, &self.back).await
    }

    async fn has_back_control(&self, session: &Session) -> Result<bool, ScreenError> {
        flows::probe_control(session, &self.back).await
    }
}
