//! Windowed tile extraction
//!
//! Slides a square window over the source array with a fixed stride and copies
//! every fully contained window out as an owned tile. Overlapping windows share
//! source pixels only during extraction; each tile is independent afterwards.

use crate::io::error::{Result, invalid_parameter};
use ndarray::{Array2, s};

/// A square array of intensities in [0, 1]
pub type Tile = Array2<f32>;

/// Window geometry used to cut the source into tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionParams {
    /// Side length of each square tile
    pub tile_size: usize,
    /// Offset between consecutive tile origins along each axis
    pub stride: usize,
}

impl ExtractionParams {
    /// Create extraction parameters, rejecting zero sizes
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `tile_size` or `stride` is zero
    pub fn new(tile_size: usize, stride: usize) -> Result<Self> {
        let params = Self { tile_size, stride };
        params.validate()?;
        Ok(params)
    }

    /// Check that both tile size and stride are positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first zero field
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &"tile size must be positive",
            ));
        }
        if self.stride == 0 {
            return Err(invalid_parameter(
                "stride",
                &self.stride,
                &"stride must be positive",
            ));
        }
        Ok(())
    }

    /// Number of tile origins that fit along an axis of the given length
    pub const fn positions_along(&self, length: usize) -> usize {
        if self.stride == 0 || self.tile_size > length {
            0
        } else {
            (length - self.tile_size) / self.stride + 1
        }
    }

    /// Number of tiles extracted from a source of shape `(rows, cols)`
    pub const fn expected_tile_count(&self, rows: usize, cols: usize) -> usize {
        self.positions_along(rows) * self.positions_along(cols)
    }
}

/// Cut the source into tiles in row-major order of their origins
///
/// Origins are placed at `(r * stride, c * stride)` for every position where the
/// whole tile fits. Partial tiles at the borders are dropped, so a tile larger
/// than either source dimension yields an empty collection. The source is
/// consumed and released once the tiles are copied out.
pub fn extract_tiles(source: Array2<f32>, params: ExtractionParams) -> Vec<Tile> {
    let (rows, cols) = source.dim();
    let row_positions = params.positions_along(rows);
    let col_positions = params.positions_along(cols);
    let size = params.tile_size;

    let mut tiles = Vec::with_capacity(row_positions * col_positions);
    for r in 0..row_positions {
        let top = r * params.stride;
        for c in 0..col_positions {
            let left = c * params.stride;
            tiles.push(
                source
                    .slice(s![top..top + size, left..left + size])
                    .to_owned(),
            );
        }
    }

    tiles
}
