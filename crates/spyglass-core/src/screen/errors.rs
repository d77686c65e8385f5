use crate::context::ContextError;
use crate::errors::SpyglassError;
use spyglass_driver::DriverError;

#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    #[error("Control '{control}' on screen '{screen}' was not interactable after {timeout_ms}ms")]
    ControlUnavailable {
        screen: &'static str,
        control: &'static str,
        timeout_ms: u64,
    },

    #[error("Screen '{screen}' was still open after {timeout_ms}ms")]
    StillOpen {
        screen: &'static str,
        timeout_ms: u64,
    },

    #[error("Photo index {index} out of range: gallery shows {count} photos")]
    PhotoIndexOutOfRange { index: usize, count: usize },

    #[error(transparent)]
    Context(#[from] ContextError),

    #[error(transparent)]
    Driver(#[from] DriverError),
}

impl SpyglassError for ScreenError {
    fn error_code(&self) -> &'static str {
        match self {
            ScreenError::ControlUnavailable { .. } => "SCREEN_CONTROL_UNAVAILABLE",
            ScreenError::StillOpen { .. } => "SCREEN_STILL_OPEN",
            ScreenError::PhotoIndexOutOfRange { .. } => "SCREEN_PHOTO_INDEX_OUT_OF_RANGE",
            ScreenError::Context(e) => e.error_code(),
            ScreenError::Driver(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ScreenError::ControlUnavailable { .. }
                | ScreenError::StillOpen { .. }
                | ScreenError::PhotoIndexOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_unavailable_display() {
        let error = ScreenError::ControlUnavailable {
            screen: "android_camera2",
            control: "shutter",
            timeout_ms: 5_000,
        };
        assert_eq!(
            error.to_string(),
            "Control 'shutter' on screen 'android_camera2' was not interactable after 5000ms"
        );
        assert_eq!(error.error_code(), "SCREEN_CONTROL_UNAVAILABLE");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_photo_index_display() {
        let error = ScreenError::PhotoIndexOutOfRange { index: 9, count: 3 };
        assert_eq!(
            error.to_string(),
            "Photo index 9 out of range: gallery shows 3 photos"
        );
        assert!(error.is_user_error());
    }

    #[test]
    fn test_nested_context_error_code_passes_through() {
        let error: ScreenError = ContextError::WebviewUnavailable {
            timeout_ms: 5_000,
            contexts: vec![],
        }
        .into();
        assert_eq!(error.error_code(), "CONTEXT_WEBVIEW_UNAVAILABLE");
        assert!(!error.is_user_error());
    }
}
