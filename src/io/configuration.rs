//! Pipeline constants and runtime configuration defaults

/// Side length of extracted square tiles
pub const DEFAULT_TILE_SIZE: usize = 64;

/// Offset between consecutive tile origins along each axis
pub const DEFAULT_STRIDE: usize = 32;

// 16 brightness steps out of 256
/// Minimum raw (max - min) intensity range for a tile to be kept
pub const DEFAULT_CONTRAST_THRESHOLD: f32 = 16.0 / 256.0;

/// Minimum population standard deviation of a normalized tile
pub const DEFAULT_SPREAD_THRESHOLD: f32 = 0.1;

/// Number of tiles produced per surviving tile (identity plus seven transforms)
pub const AUGMENTATION_FACTOR: usize = 8;

// Output settings
/// Extension of emitted tile files, which also selects the encoder
pub const OUTPUT_EXTENSION: &str = "png";
/// Largest value of an 8-bit grayscale channel
pub const MAX_INTENSITY_LEVEL: f32 = 255.0;

// Progress bar display settings
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
