//! Pipeline implementation tying extraction, filtering and augmentation together

/// Stage-by-stage pipeline execution and run reporting
pub mod executor;
