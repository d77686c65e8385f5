use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use spyglass_config::DiffConfig;

use super::errors::DiffError;

/// Perceptual hash of one image: a fixed-length bit string derived
/// from luminance gradients between horizontally adjacent pixels.
///
/// Pure value; equality is bitwise. Two hashes are only comparable
/// when they were built with the same grid size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHash {
    bits: Vec<bool>,
}

impl ImageHash {
    pub(crate) fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of differing bit positions between two equal-length
    /// hashes.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::HashLengthMismatch`] when the hashes have
    /// different lengths; comparing them bitwise would be meaningless.
    pub fn hamming_distance(&self, other: &ImageHash) -> Result<usize, DiffError> {
        if self.len() != other.len() {
            return Err(DiffError::HashLengthMismatch {
                len_a: self.len(),
                len_b: other.len(),
            });
        }

        Ok(self
            .bits
            .iter()
            .zip(other.bits.iter())
            .filter(|(a, b)| a != b)
            .count())
    }

    /// The hash as a '0'/'1' string, row-major.
    pub fn to_bit_string(&self) -> String {
        self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }
}

impl fmt::Display for ImageHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bit_string())
    }
}

/// Request to compare two screenshots perceptually.
#[derive(Debug, Clone)]
pub struct SimilarityRequest {
    /// Path to the first image
    pub image1_path: PathBuf,
    /// Path to the second image
    pub image2_path: PathBuf,
    /// Tolerance (0.0 - 1.0); lower is more sensitive to changes
    pub tolerance: f64,
    /// Side length of the hash grid; the hash carries grid_size² bits
    pub grid_size: u32,
}

impl SimilarityRequest {
    /// Create a new request with the default tolerance and grid size.
    pub fn new(image1: impl Into<PathBuf>, image2: impl Into<PathBuf>) -> Self {
        Self {
            image1_path: image1.into(),
            image2_path: image2.into(),
            tolerance: DiffConfig::FALLBACK_TOLERANCE,
            grid_size: DiffConfig::FALLBACK_GRID_SIZE,
        }
    }

    /// Set the tolerance, clamped into 0.0 - 1.0.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance.clamp(0.0, 1.0);
        self
    }

    /// Set the hash grid size.
    pub fn with_grid_size(mut self, grid_size: u32) -> Self {
        self.grid_size = grid_size;
        self
    }
}

/// Result of a perceptual comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityReport {
    distance: usize,
    hash_len: usize,
    tolerance: f64,
    is_similar: bool,
}

impl SimilarityReport {
    /// The is_similar verdict is computed as
    /// `distance <= tolerance * hash_len`.
    pub(crate) fn new(distance: usize, hash_len: usize, tolerance: f64) -> Self {
        Self {
            distance,
            hash_len,
            tolerance,
            is_similar: distance as f64 <= tolerance * hash_len as f64,
        }
    }

    /// Hamming distance between the two hashes.
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Length of the compared hashes, in bits.
    pub fn hash_len(&self) -> usize {
        self.hash_len
    }

    /// Tolerance the verdict was computed with.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Whether the images count as the same screen.
    pub fn is_similar(&self) -> bool {
        self.is_similar
    }
}
