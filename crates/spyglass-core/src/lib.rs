//! spyglass-core: primitives for hybrid mobile UI verification
//!
//! This library provides the four primitives that make automation
//! reliable against a flaky, asynchronous, dual-context mobile runtime:
//! - Condition polling: bounded-time waits over instantaneous checks
//! - Context switching: the native/web state machine, with platform
//!   recovery for drivers that stop enumerating webviews
//! - Screen identity resolution: ordered probing of vendor-specific
//!   native screens (cameras, galleries)
//! - Perceptual image comparison: difference hashing + Hamming distance
//!
//! Concrete automation drivers implement the narrow
//! [`spyglass_driver::UiDriver`] trait; everything here is
//! driver-agnostic.

pub mod context;
pub mod detect;
pub mod diff;
pub mod errors;
pub mod logging;
pub mod screen;
pub mod session;
pub mod wait;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types at the crate root
pub use errors::SpyglassError;
pub use logging::init_logging;
pub use session::Session;

// Re-export wait types
pub use wait::{PollSpec, wait_for, wait_for_absence};

// Re-export context types
pub use context::{ContextError, ContextSwitcher, DriverContext};

// Re-export detect types
pub use detect::{DetectError, ScreenFamily, detect_camera, detect_gallery, resolve};

// Re-export screen types
pub use screen::{CameraScreen, GalleryScreen, NativeScreen, ScreenError};

// Re-export diff types
pub use diff::{
    DiffError, ImageHash, SimilarityReport, SimilarityRequest, are_similar, compare, hash_image,
};
