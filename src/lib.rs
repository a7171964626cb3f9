//! Training-set preparation from a single grayscale source image
//!
//! The source is cut into overlapping square tiles, low-information tiles are
//! discarded, survivors are normalized to the full intensity range and then
//! multiplied eightfold by the flips and quarter rotations of the square.
//! Every resulting tile is written out as its own grayscale image.

#![deny(unsafe_code)]

/// Pipeline orchestration from source array to augmented tile stream
pub mod algorithm;
/// Per-tile statistics, filtering and normalization
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Tile extraction and geometric transforms
pub mod spatial;

pub use algorithm::executor::{PipelineConfig, PipelineOutput, PipelineReport, TilePipeline};
pub use io::error::{Result, TilingError};
