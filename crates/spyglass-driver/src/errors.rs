#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("Driver command '{command}' failed: {message}")]
    CommandFailed {
        command: &'static str,
        message: String,
    },

    #[error("No element matched selector: {selector}")]
    NoSuchElement { selector: String },

    #[error("Stale element handle: {element}")]
    StaleElement { element: String },

    #[error("Driver session lost: {message}")]
    SessionLost { message: String },

    #[error("Script execution failed: {message}")]
    ScriptFailed { message: String },
}

impl DriverError {
    /// Stable machine-readable code for programmatic handling.
    pub fn error_code(&self) -> &'static str {
        match self {
            DriverError::CommandFailed { .. } => "DRIVER_COMMAND_FAILED",
            DriverError::NoSuchElement { .. } => "DRIVER_NO_SUCH_ELEMENT",
            DriverError::StaleElement { .. } => "DRIVER_STALE_ELEMENT",
            DriverError::SessionLost { .. } => "DRIVER_SESSION_LOST",
            DriverError::ScriptFailed { .. } => "DRIVER_SCRIPT_FAILED",
        }
    }
}
