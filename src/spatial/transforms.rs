//! Flip and rotation transforms of a square tile
//!
//! The eight transforms form the symmetry group of the square. Augmented output
//! is grouped by transform: every original first, then every vertical flip, and
//! so on in [`Transform::ALL`] order. Symmetric tiles yield duplicate variants,
//! which are kept.

use crate::spatial::tiles::Tile;
use ndarray::{ArrayView2, Axis};

/// One element of the symmetry group of the square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Unchanged tile
    Identity,
    /// Rows reversed (upside down)
    FlipVertical,
    /// Columns reversed (mirror)
    FlipHorizontal,
    /// Rows and columns reversed, equal to a 180° rotation
    FlipBoth,
    /// Quarter turn counterclockwise
    Rotate90Ccw,
    /// Quarter turn counterclockwise followed by a horizontal flip
    Rotate90CcwFlipHorizontal,
    /// Quarter turn clockwise
    Rotate90Cw,
    /// Quarter turn clockwise followed by a horizontal flip
    Rotate90CwFlipHorizontal,
}

impl Transform {
    /// All transforms in output group order
    pub const ALL: [Self; 8] = [
        Self::Identity,
        Self::FlipVertical,
        Self::FlipHorizontal,
        Self::FlipBoth,
        Self::Rotate90Ccw,
        Self::Rotate90CcwFlipHorizontal,
        Self::Rotate90Cw,
        Self::Rotate90CwFlipHorizontal,
    ];

    /// Apply the transform, returning a new standard-layout tile
    pub fn apply(self, tile: &Tile) -> Tile {
        let mut view = tile.view();
        match self {
            Self::Identity => {}
            Self::FlipVertical => view.invert_axis(Axis(0)),
            Self::FlipHorizontal => view.invert_axis(Axis(1)),
            Self::FlipBoth => {
                view.invert_axis(Axis(0));
                view.invert_axis(Axis(1));
            }
            Self::Rotate90Ccw => {
                view = view.reversed_axes();
                view.invert_axis(Axis(0));
            }
            Self::Rotate90CcwFlipHorizontal => {
                view = view.reversed_axes();
                view.invert_axis(Axis(0));
                view.invert_axis(Axis(1));
            }
            Self::Rotate90Cw => {
                view = view.reversed_axes();
                view.invert_axis(Axis(1));
            }
            // Clockwise turn then mirror is a plain transpose
            Self::Rotate90CwFlipHorizontal => view = view.reversed_axes(),
        }
        to_standard(view)
    }
}

fn to_standard(view: ArrayView2<'_, f32>) -> Tile {
    view.as_standard_layout().into_owned()
}

/// Reverse the row order of a tile
pub fn flip_vertical(tile: &Tile) -> Tile {
    Transform::FlipVertical.apply(tile)
}

/// Reverse the column order of a tile
pub fn flip_horizontal(tile: &Tile) -> Tile {
    Transform::FlipHorizontal.apply(tile)
}

/// Reverse both rows and columns of a tile
pub fn flip_both(tile: &Tile) -> Tile {
    Transform::FlipBoth.apply(tile)
}

/// Rotate a tile a quarter turn counterclockwise
pub fn rotate_90_ccw(tile: &Tile) -> Tile {
    Transform::Rotate90Ccw.apply(tile)
}

/// Rotate a tile a quarter turn clockwise
pub fn rotate_90_cw(tile: &Tile) -> Tile {
    Transform::Rotate90Cw.apply(tile)
}

/// Lazily yields the augmented collection in transform-major order
///
/// Only one transformed tile exists at a time, which lets the emitter stream
/// output without holding eight copies of every survivor.
#[derive(Debug, Clone)]
pub struct AugmentedTiles<'a> {
    tiles: &'a [Tile],
    position: usize,
}

impl<'a> AugmentedTiles<'a> {
    /// Start iterating over the augmentations of `tiles`
    pub const fn new(tiles: &'a [Tile]) -> Self {
        Self { tiles, position: 0 }
    }

    const fn total(&self) -> usize {
        self.tiles.len() * Transform::ALL.len()
    }
}

impl Iterator for AugmentedTiles<'_> {
    type Item = Tile;

    fn next(&mut self) -> Option<Self::Item> {
        let count = self.tiles.len();
        if count == 0 || self.position >= self.total() {
            return None;
        }

        let transform = Transform::ALL.get(self.position / count).copied()?;
        let tile = self.tiles.get(self.position % count)?;
        self.position += 1;
        Some(transform.apply(tile))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total().saturating_sub(self.position);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AugmentedTiles<'_> {}

/// Materialise the full augmented collection
///
/// Equivalent to collecting [`AugmentedTiles`]; the result holds eight tiles per
/// input tile.
pub fn augment(tiles: &[Tile]) -> Vec<Tile> {
    AugmentedTiles::new(tiles).collect()
}
