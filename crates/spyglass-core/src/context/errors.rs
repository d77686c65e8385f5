use crate::errors::SpyglassError;
use spyglass_driver::DriverError;

#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    #[error(
        "No webview context found after {timeout_ms}ms (contexts seen: {contexts:?})"
    )]
    WebviewUnavailable {
        timeout_ms: u64,
        contexts: Vec<String>,
    },

    #[error("Context recovery '{strategy}' failed: {message}")]
    RecoveryFailed {
        strategy: &'static str,
        message: String,
    },

    #[error(transparent)]
    Driver(#[from] DriverError),
}

impl SpyglassError for ContextError {
    fn error_code(&self) -> &'static str {
        match self {
            ContextError::WebviewUnavailable { .. } => "CONTEXT_WEBVIEW_UNAVAILABLE",
            ContextError::RecoveryFailed { .. } => "CONTEXT_RECOVERY_FAILED",
            ContextError::Driver(e) => e.error_code(),
        }
    }
}
