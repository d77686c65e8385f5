pub mod camera;
pub mod gallery;

mod errors;
mod flows;
mod traits;

pub use errors::ScreenError;
pub use traits::{CameraScreen, GalleryScreen, NativeScreen, ScreenFamily, is_open};
