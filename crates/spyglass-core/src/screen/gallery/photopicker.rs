use async_trait::async_trait;

use spyglass_driver::Selector;

use crate::screen::errors::ScreenError;
use crate::screen::flows;
use crate::screen::traits::{GalleryScreen, NativeScreen, ScreenFamily};
use crate::session::Session;

/// The standalone Android photo picker, `com.google.android.photopicker`.
pub struct Photopicker {
    root: Selector,
    photo: Selector,
}

impl Photopicker {
    pub const PACKAGE: &'static str = "com.google.android.photopicker";

    pub fn new() -> Self {
        Self {
            root: Selector::new(format!("//*[@package='{}']", Self::PACKAGE)),
            photo: Selector::from(
                "//android.view.View[contains(@content-desc, 'Photo')]/../android.view.View/android.view.View",
            ),
        }
    }
}

impl Default for Photopicker {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeScreen for Photopicker {
    fn name(&self) -> &'static str {
        "photopicker"
    }

    fn family(&self) -> ScreenFamily {
        ScreenFamily::Gallery
    }

    fn root(&self) -> &Selector {
        &self.root
    }
}

#[async_trait]
impl GalleryScreen for Photopicker {
    async fn choose_photo(&self, session: &Session, index: usize) -> Result<(), ScreenError> {
        flows::choose_photo_flow(session, self, &self.photo, index).await
    }

    async fn dismiss(&self, session: &Session) -> Result<(), ScreenError> {
        flows::dismiss_with_back(session, self).await
    }
}
