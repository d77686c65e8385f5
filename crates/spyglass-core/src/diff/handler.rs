use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use tracing::{debug, info};

use super::errors::DiffError;
use super::types::{ImageHash, SimilarityReport, SimilarityRequest};

/// Build the difference hash of one image file.
///
/// The image is converted to grayscale and resized to
/// `(grid_size + 1) × grid_size` with a fill resize: the aspect ratio
/// is intentionally not preserved, because the hash captures relative
/// luminance gradients, not shape. Each bit compares a pixel to its
/// right neighbor (`1` when the left is darker), concatenated
/// row-major into a `grid_size²`-bit hash.
///
/// dHash is deliberate here over pHash/wHash: it stays sensitive to
/// the small rendering differences a visual regression introduces,
/// and it does NOT treat cropped, watermarked or recompressed
/// variants as the same screen. Identical input bytes always produce
/// bit-identical hashes; the resize filter is fixed and never
/// randomized.
///
/// # Errors
///
/// Returns [`DiffError::ImageLoadFailed`] if the file cannot be read
/// or decoded.
pub fn hash_image(path: &Path, grid_size: u32) -> Result<ImageHash, DiffError> {
    let img = image::open(path).map_err(|e| DiffError::ImageLoadFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let gray = img.to_luma8();
    let resized = imageops::resize(&gray, grid_size + 1, grid_size, FilterType::Triangle);

    let mut bits = Vec::with_capacity((grid_size * grid_size) as usize);
    for row in 0..grid_size {
        for col in 0..grid_size {
            let left = resized.get_pixel(col, row)[0];
            let right = resized.get_pixel(col + 1, row)[0];
            bits.push(left < right);
        }
    }

    debug!(
        event = "core.diff.image_hashed",
        path = %path.display(),
        bits = bits.len()
    );
    Ok(ImageHash::from_bits(bits))
}

/// Compare two screenshots perceptually.
///
/// # Errors
///
/// Returns [`DiffError::ImageLoadFailed`] if either image cannot be
/// loaded, or [`DiffError::HashLengthMismatch`] if the hashes end up
/// with different lengths (only possible through mismatched grid
/// parameters).
pub fn compare(request: &SimilarityRequest) -> Result<SimilarityReport, DiffError> {
    info!(
        event = "core.diff.compare_started",
        image1 = %request.image1_path.display(),
        image2 = %request.image2_path.display(),
        tolerance = request.tolerance
    );

    let hash1 = hash_image(&request.image1_path, request.grid_size)?;
    let hash2 = hash_image(&request.image2_path, request.grid_size)?;

    let distance = hash1.hamming_distance(&hash2)?;
    let report = SimilarityReport::new(distance, hash1.len(), request.tolerance);

    info!(
        event = "core.diff.compare_completed",
        distance,
        is_similar = report.is_similar()
    );
    Ok(report)
}

/// Whether two screenshots show the same screen, within `tolerance`.
///
/// `tolerance` ranges over 0.0 - 1.0; the verdict is
/// `hamming_distance <= tolerance * hash_length`.
pub fn are_similar(
    image1: impl Into<PathBuf>,
    image2: impl Into<PathBuf>,
    tolerance: f64,
) -> Result<bool, DiffError> {
    let request = SimilarityRequest::new(image1, image2).with_tolerance(tolerance);
    compare(&request).map(|report| report.is_similar())
}
