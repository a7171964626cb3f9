//! Grayscale decoding of the source image and 8-bit encoding of tiles

use crate::io::configuration::MAX_INTENSITY_LEVEL;
use crate::io::error::{Result, TilingError, WithPath, computation_error};
use crate::spatial::tiles::Tile;
use image::GrayImage;
use ndarray::Array2;
use std::path::Path;

/// Decode an image file into a row-major array of intensities in [0, 1]
///
/// Colour images are reduced to luma and any alpha channel is dropped.
/// High dynamic range inputs are clamped into the unit interval.
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a decodable image format
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<Array2<f32>> {
    let path = path.as_ref();
    let img = image::open(path).with_path(path)?;
    let luma = img.to_luma32f();
    let (width, height) = (luma.width() as usize, luma.height() as usize);

    let mut intensities = Array2::from_shape_vec((height, width), luma.into_raw())
        .map_err(|e| computation_error("decode", &e))?;
    intensities.mapv_inplace(|value| value.clamp(0.0, 1.0));
    Ok(intensities)
}

/// Quantize an intensity in [0, 1] to an 8-bit gray level
pub fn intensity_to_level(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * MAX_INTENSITY_LEVEL).round() as u8
}

/// Convert a tile into an 8-bit single-channel image
///
/// # Errors
///
/// Returns a `Computation` error if the tile dimensions do not fit an image
pub fn tile_to_image(tile: &Tile) -> Result<GrayImage> {
    let (rows, cols) = tile.dim();
    let width = u32::try_from(cols).map_err(|e| computation_error("encode", &e))?;
    let height = u32::try_from(rows).map_err(|e| computation_error("encode", &e))?;

    let pixels: Vec<u8> = tile.iter().map(|&value| intensity_to_level(value)).collect();
    GrayImage::from_raw(width, height, pixels)
        .ok_or_else(|| computation_error("encode", &format!("{rows}x{cols} tile buffer")))
}

/// Encode a tile and write it to `path`, the extension selecting the format
///
/// # Errors
///
/// Returns an error if the tile cannot be encoded or the file cannot be written
pub fn save_tile(tile: &Tile, path: &Path) -> Result<()> {
    tile_to_image(tile)?
        .save(path)
        .map_err(|source| TilingError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}
