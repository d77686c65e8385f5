use crate::context::ContextError;
use crate::errors::SpyglassError;
use crate::screen::ScreenFamily;
use spyglass_driver::DriverError;

#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("No known {family} screen is open")]
    NoKnownScreen { family: ScreenFamily },

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Driver(#[from] DriverError),
}

impl SpyglassError for DetectError {
    fn error_code(&self) -> &'static str {
        match self {
            DetectError::NoKnownScreen { .. } => "DETECT_NO_KNOWN_SCREEN",
            DetectError::Context(e) => e.error_code(),
            DetectError::Driver(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, DetectError::NoKnownScreen { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_known_screen_names_family() {
        let camera = DetectError::NoKnownScreen {
            family: ScreenFamily::Camera,
        };
        assert_eq!(camera.to_string(), "No known camera screen is open");
        assert_eq!(camera.error_code(), "DETECT_NO_KNOWN_SCREEN");
        assert!(camera.is_user_error());

        let gallery = DetectError::NoKnownScreen {
            family: ScreenFamily::Gallery,
        };
        assert_eq!(gallery.to_string(), "No known gallery screen is open");
    }

    #[test]
    fn test_nested_driver_error_code() {
        let error: DetectError = DriverError::SessionLost {
            message: "gone".to_string(),
        }
        .into();
        assert_eq!(error.error_code(), "DRIVER_SESSION_LOST");
        assert!(!error.is_user_error());
    }
}
