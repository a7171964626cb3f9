//! Spatial data structures and tile manipulation
//!
//! This module contains spatial-related functionality including:
//! - Windowed tile extraction from the source array
//! - The eight flips and rotations of a square tile

/// Tile extraction from the source array
pub mod tiles;
/// Flip and rotation transforms used for augmentation
pub mod transforms;

pub use tiles::{ExtractionParams, Tile};
pub use transforms::Transform;
