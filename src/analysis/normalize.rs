//! Min/max rescaling of tile intensities

use crate::analysis::statistics::intensity_range;
use crate::io::error::{Result, computation_error};
use crate::spatial::tiles::Tile;

/// Rescale a tile so its minimum maps to 0 and its maximum to 1
///
/// # Errors
///
/// Returns a `Computation` error if the tile is empty or its intensity range is
/// not a positive finite number. Tiles that passed the contrast filter always
/// have a positive range.
pub fn normalize_tile(tile: Tile) -> Result<Tile> {
    let (lo, hi) =
        intensity_range(&tile).ok_or_else(|| computation_error("normalize", &"tile is empty"))?;

    let range = hi - lo;
    if !range.is_finite() || range <= 0.0 {
        return Err(computation_error(
            "normalize",
            &format!("intensity range {range} is not positive"),
        ));
    }

    let mut normalized = tile;
    normalized.mapv_inplace(|value| ((value - lo) / range).clamp(0.0, 1.0));
    Ok(normalized)
}

/// Normalize every tile, preserving order
///
/// # Errors
///
/// Returns the first error produced by [`normalize_tile`]
pub fn normalize_tiles(tiles: Vec<Tile>) -> Result<Vec<Tile>> {
    tiles.into_iter().map(normalize_tile).collect()
}
