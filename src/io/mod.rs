//! Input/output operations and error handling

/// Command-line interface and run orchestration
pub mod cli;
/// Pipeline constants and runtime configuration defaults
pub mod configuration;
/// Writes the augmented tile stream to numbered image files
pub mod emitter;
/// Error types and context management
pub mod error;
/// Grayscale image decoding and tile encoding
pub mod image;
/// Progress display for tile emission
pub mod progress;
