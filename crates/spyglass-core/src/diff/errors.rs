use crate::errors::SpyglassError;

#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    #[error("Failed to load image '{path}': {message}")]
    ImageLoadFailed { path: String, message: String },

    #[error("Hash length mismatch: {len_a} vs {len_b} bits")]
    HashLengthMismatch { len_a: usize, len_b: usize },
}

impl SpyglassError for DiffError {
    fn error_code(&self) -> &'static str {
        match self {
            DiffError::ImageLoadFailed { .. } => "DIFF_IMAGE_LOAD_FAILED",
            DiffError::HashLengthMismatch { .. } => "DIFF_HASH_LENGTH_MISMATCH",
        }
    }

    fn is_user_error(&self) -> bool {
        // A length mismatch is a programming error (mixed hash
        // parameters), not a runtime condition
        matches!(self, DiffError::ImageLoadFailed { .. })
    }
}
