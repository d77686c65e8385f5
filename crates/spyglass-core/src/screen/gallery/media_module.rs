use async_trait::async_trait;

use spyglass_driver::Selector;

use crate::screen::errors::ScreenError;
use crate::screen::flows;
use crate::screen::traits::{GalleryScreen, NativeScreen, ScreenFamily};
use crate::session::Session;

/// The Android media provider picker,
/// `com.google.android.providers.media.module`.
pub struct MediaModule {
    root: Selector,
    photo: Selector,
}

impl MediaModule {
    pub const PACKAGE: &'static str = "com.google.android.providers.media.module";

    pub fn new() -> Self {
        Self {
            root: Selector::new(format!("//*[@package='{}']", Self::PACKAGE)),
            photo: Selector::from(
                "//android.widget.ImageView[contains(@resource-id, 'icon_thumbnail')]",
            ),
        }
    }
}

impl Default for MediaModule {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeScreen for MediaModule {
    fn name(&self) -> &'static str {
        "media_module"
    }

    fn family(&self) -> ScreenFamily {
        ScreenFamily::Gallery
    }

    fn root(&self) -> &Selector {
        &self.root
    }
}

#[async_trait]
impl GalleryScreen for MediaModule {
    async fn choose_photo(&self, session: &Session, index: usize) -> Result<(), ScreenError> {
        flows::choose_photo_flow(session, self, &self.photo, index).await
    }

    async fn dismiss(&self, session: &Session) -> Result<(), ScreenError> {
        flows::dismiss_with_back(session, self).await
    }
}
