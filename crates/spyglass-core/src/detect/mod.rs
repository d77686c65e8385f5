mod errors;
mod handler;

pub use errors::DetectError;
pub use handler::{detect_camera, detect_gallery, resolve};

// The family tag lives with the screen traits; re-exported here because
// resolution errors carry it.
pub use crate::screen::ScreenFamily;
