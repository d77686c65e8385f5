//! Gallery vendor catalog.

mod ios_gallery;
mod media_module;
mod photopicker;

pub use ios_gallery::IosGallery;
pub use media_module::MediaModule;
pub use photopicker::Photopicker;

use super::traits::GalleryScreen;

/// All known gallery screens, in probe priority order.
pub fn candidates() -> Vec<Box<dyn GalleryScreen>> {
    vec![
        Box::new(MediaModule::new()),
        Box::new(Photopicker::new()),
        Box::new(IosGallery::new()),
    ]
}
