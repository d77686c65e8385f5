use async_trait::async_trait;

use spyglass_driver::Selector;

use crate::screen::errors::ScreenError;
use crate::screen::flows;
use crate::screen::traits::{GalleryScreen, NativeScreen, ScreenFamily};
use crate::session::Session;

/// The stock iOS Photos picker sheet.
pub struct IosGallery {
    root: Selector,
    photo: Selector,
    exit: Selector,
}

impl IosGallery {
    pub fn new() -> Self {
        Self {
            root: Selector::from("//XCUIElementTypeNavigationBar[@name=\"Photos\"]"),
            photo: Selector::from("//XCUIElementTypeImage[@name='PXGGridLayout-Info']"),
            exit: Selector::from("//XCUIElementTypeButton[@name='Cancel']"),
        }
    }
}

impl Default for IosGallery {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeScreen for IosGallery {
    fn name(&self) -> &'static str {
        "ios_gallery"
    }

    fn family(&self) -> ScreenFamily {
        ScreenFamily::Gallery
    }

    fn root(&self) -> &Selector {
        &self.root
    }
}

#[async_trait]
impl GalleryScreen for IosGallery {
    async fn choose_photo(&self, session: &Session, index: usize) -> Result<(), ScreenError> {
        flows::choose_photo_flow(session, self, &self.photo, index).await
    }

    async fn dismiss(&self, session: &Session) -> Result<(), ScreenError> {
        flows::dismiss_with_button(session, self, &self.exit).await
    }
}
