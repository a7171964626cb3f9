//! Command-line interface for turning one source image into a tile dataset

use crate::algorithm::executor::{PipelineConfig, PipelineReport, TilePipeline};
use crate::io::configuration::{
    DEFAULT_CONTRAST_THRESHOLD, DEFAULT_SPREAD_THRESHOLD, DEFAULT_STRIDE, DEFAULT_TILE_SIZE,
};
use crate::io::emitter::TileEmitter;
use crate::io::error::Result;
use crate::io::image::load_grayscale;
use crate::io::progress::ProgressManager;
use crate::spatial::tiles::ExtractionParams;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "tileprep")]
#[command(
    author,
    version,
    about = "Cut a grayscale image into filtered, normalized and augmented training tiles"
)]
/// Command-line arguments for the tile dataset generator
pub struct Cli {
    /// Source image to tile
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Directory receiving the numbered tile images (created if missing)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Side length of each square tile in pixels
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: usize,

    /// Offset between consecutive tile origins in pixels
    #[arg(short, long, default_value_t = DEFAULT_STRIDE)]
    pub stride: usize,

    /// Raw intensity range a tile must exceed, as a fraction of full scale
    #[arg(short, long, default_value_t = DEFAULT_CONTRAST_THRESHOLD)]
    pub contrast_threshold: f32,

    /// Standard deviation a normalized tile must reach
    #[arg(short = 'd', long, default_value_t = DEFAULT_SPREAD_THRESHOLD)]
    pub spread_threshold: f32,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Log per-stage details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Pipeline configuration described by the arguments
    pub const fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            extraction: ExtractionParams {
                tile_size: self.tile_size,
                stride: self.stride,
            },
            contrast_threshold: self.contrast_threshold,
            spread_threshold: self.spread_threshold,
        }
    }
}

/// Orchestrates one run: load, process, report and write
pub struct DatasetProcessor {
    cli: Cli,
}

impl DatasetProcessor {
    /// Create a processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the full pipeline and write the augmented tiles
    ///
    /// Parameters are validated before the input is read. An empty result is a
    /// successful run that writes no files.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the input cannot be
    /// decoded, or any tile cannot be written
    pub fn process(&self) -> Result<PipelineReport> {
        let start_time = Instant::now();
        let pipeline = TilePipeline::new(self.cli.pipeline_config())?;

        let source = load_grayscale(&self.cli.input)?;
        let output = pipeline.run(source)?;
        let report = *output.report();

        tracing::info!(
            "Kept {} out of {} tiles ({:.2}%).",
            report.after_spread,
            report.extracted,
            report.kept_ratio() * 100.0
        );
        tracing::info!("Total tiles: {}.", report.augmented);

        let progress = (self.cli.should_show_progress() && report.augmented > 0)
            .then(|| ProgressManager::new(report.augmented));

        let mut emitter = TileEmitter::new(&self.cli.output_dir);
        let written = emitter.emit(output.augmented(), progress.as_ref());

        match written {
            Ok(count) => {
                if let Some(ref pm) = progress {
                    pm.finish();
                }
                tracing::info!(
                    "Wrote {count} tiles to '{}' in {:.2?}.",
                    emitter.output_dir().display(),
                    start_time.elapsed()
                );
                Ok(report)
            }
            Err(error) => {
                if let Some(ref pm) = progress {
                    pm.abandon();
                }
                Err(error)
            }
        }
    }
}
