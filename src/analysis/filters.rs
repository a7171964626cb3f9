//! Quality filters applied before and after normalization
//!
//! The contrast filter drops raw tiles that are nearly flat, which would
//! otherwise be stretched into noise. The spread filter drops normalized tiles
//! that are mostly flat with a few outliers. Both preserve the order of the
//! tiles they keep.

use crate::analysis::statistics::{contrast, population_std};
use crate::spatial::tiles::Tile;

/// Whether the raw intensity range is strictly greater than `threshold`
pub fn passes_contrast(tile: &Tile, threshold: f32) -> bool {
    contrast(tile) > threshold
}

/// Whether the population standard deviation is at least `threshold`
///
/// The comparison happens at the threshold's own precision, so a decimal
/// threshold such as `0.1` is not raised by widening it to `f64`.
pub fn passes_spread(tile: &Tile, threshold: f32) -> bool {
    population_std(tile) as f32 >= threshold
}

/// Keep tiles whose (max - min) exceeds `threshold`
pub fn filter_by_contrast(tiles: Vec<Tile>, threshold: f32) -> Vec<Tile> {
    tiles
        .into_iter()
        .filter(|tile| passes_contrast(tile, threshold))
        .collect()
}

/// Keep normalized tiles whose standard deviation reaches `threshold`
pub fn filter_by_spread(tiles: Vec<Tile>, threshold: f32) -> Vec<Tile> {
    tiles
        .into_iter()
        .filter(|tile| passes_spread(tile, threshold))
        .collect()
}
