//! Stage-by-stage execution of the tiling pipeline
//!
//! extract → contrast filter → normalize → spread filter → augment
//!
//! Augmentation is left lazy: [`PipelineOutput::augmented`] yields the final
//! collection one tile at a time so callers can stream it to disk.

use crate::analysis::filters::{filter_by_contrast, filter_by_spread};
use crate::analysis::normalize::normalize_tiles;
use crate::io::configuration::{
    AUGMENTATION_FACTOR, DEFAULT_CONTRAST_THRESHOLD, DEFAULT_SPREAD_THRESHOLD, DEFAULT_STRIDE,
    DEFAULT_TILE_SIZE,
};
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::tiles::{ExtractionParams, Tile, extract_tiles};
use crate::spatial::transforms::{AugmentedTiles, augment};
use ndarray::Array2;

/// Parameters controlling every pipeline stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineConfig {
    /// Window geometry for extraction
    pub extraction: ExtractionParams,
    /// Raw (max - min) range a tile must exceed to be kept
    pub contrast_threshold: f32,
    /// Standard deviation a normalized tile must reach to be kept
    pub spread_threshold: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionParams {
                tile_size: DEFAULT_TILE_SIZE,
                stride: DEFAULT_STRIDE,
            },
            contrast_threshold: DEFAULT_CONTRAST_THRESHOLD,
            spread_threshold: DEFAULT_SPREAD_THRESHOLD,
        }
    }
}

impl PipelineConfig {
    /// Check extraction geometry and filter thresholds
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the tile size or stride is zero, or if a
    /// threshold is negative or not finite
    pub fn validate(&self) -> Result<()> {
        self.extraction.validate()?;
        for (name, value) in [
            ("contrast_threshold", self.contrast_threshold),
            ("spread_threshold", self.spread_threshold),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid_parameter(
                    name,
                    &value,
                    &"threshold must be a finite non-negative number",
                ));
            }
        }
        Ok(())
    }
}

/// Tile counts after each stage of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineReport {
    /// Tiles cut from the source
    pub extracted: usize,
    /// Tiles left after the contrast filter
    pub after_contrast: usize,
    /// Tiles left after the spread filter
    pub after_spread: usize,
    /// Size of the augmented collection
    pub augmented: usize,
}

impl PipelineReport {
    /// Fraction of extracted tiles that survived both filters
    pub fn kept_ratio(&self) -> f64 {
        if self.extracted == 0 {
            0.0
        } else {
            self.after_spread as f64 / self.extracted as f64
        }
    }
}

/// Surviving normalized tiles and the counts that led to them
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    survivors: Vec<Tile>,
    report: PipelineReport,
}

impl PipelineOutput {
    /// Normalized tiles that passed both filters, in extraction order
    pub fn survivors(&self) -> &[Tile] {
        &self.survivors
    }

    /// Per-stage tile counts
    pub const fn report(&self) -> &PipelineReport {
        &self.report
    }

    /// Lazily yield the augmented collection in output order
    pub fn augmented(&self) -> AugmentedTiles<'_> {
        AugmentedTiles::new(&self.survivors)
    }

    /// Materialise the augmented collection in output order
    pub fn into_augmented(self) -> Vec<Tile> {
        augment(&self.survivors)
    }
}

/// Runs the fixed tiling pipeline with a validated configuration
#[derive(Debug, Clone)]
pub struct TilePipeline {
    config: PipelineConfig,
}

impl TilePipeline {
    /// Create a pipeline after validating `config`
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when [`PipelineConfig::validate`] fails
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every stage up to augmentation on `source`
    ///
    /// The source array is consumed and released right after extraction. A tile
    /// larger than the source is not an error; it yields an empty output.
    ///
    /// # Errors
    ///
    /// Returns a `Computation` error if normalization meets a degenerate tile,
    /// which the contrast filter rules out for non-negative thresholds
    pub fn run(&self, source: Array2<f32>) -> Result<PipelineOutput> {
        let (rows, cols) = source.dim();
        let tiles = extract_tiles(source, self.config.extraction);
        let extracted = tiles.len();
        tracing::debug!(
            rows,
            cols,
            tile_size = self.config.extraction.tile_size,
            stride = self.config.extraction.stride,
            extracted,
            "extracted tiles"
        );

        let tiles = filter_by_contrast(tiles, self.config.contrast_threshold);
        let after_contrast = tiles.len();
        tracing::debug!(
            after_contrast,
            threshold = self.config.contrast_threshold,
            "contrast filter"
        );

        let tiles = normalize_tiles(tiles)?;
        let survivors = filter_by_spread(tiles, self.config.spread_threshold);
        let after_spread = survivors.len();
        tracing::debug!(
            after_spread,
            threshold = self.config.spread_threshold,
            "spread filter"
        );

        let report = PipelineReport {
            extracted,
            after_contrast,
            after_spread,
            augmented: after_spread * AUGMENTATION_FACTOR,
        };
        Ok(PipelineOutput { survivors, report })
    }
}
