//! Analysis modules for tile statistics and quality control

/// Contrast and spread filters applied around normalization
pub mod filters;
/// Min/max rescaling of tile intensities
pub mod normalize;
/// Intensity statistics over a single tile
pub mod statistics;
