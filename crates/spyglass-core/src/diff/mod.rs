mod errors;
mod handler;
mod types;

pub use errors::DiffError;
pub use handler::{are_similar, compare, hash_image};
pub use types::{ImageHash, SimilarityReport, SimilarityRequest};
