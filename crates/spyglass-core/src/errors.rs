use std::error::Error;

/// Base trait for all spyglass errors
pub trait SpyglassError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for fallible spyglass operations
pub type SpyglassResult<T> = Result<T, Box<dyn SpyglassError>>;

impl SpyglassError for spyglass_driver::DriverError {
    fn error_code(&self) -> &'static str {
        self.error_code()
    }
}

impl SpyglassError for spyglass_config::ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            spyglass_config::ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            spyglass_config::ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            spyglass_config::ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            spyglass_config::ConfigError::ConfigParseError { .. }
                | spyglass_config::ConfigError::InvalidConfiguration { .. }
        )
    }
}
