//! Writes the augmented tile stream to numbered image files
//!
//! Files are named by their zero-based position in the stream. Numbered tiles
//! left over from an earlier run are removed before writing, so the directory
//! holds exactly `0..N-1` afterwards. A failed write aborts the run and removes
//! the files already written by it, so a directory never holds a silently
//! truncated dataset.

use crate::io::configuration::OUTPUT_EXTENSION;
use crate::io::error::{Result, WithPath};
use crate::io::image::save_tile;
use crate::io::progress::ProgressManager;
use crate::spatial::tiles::Tile;
use std::path::{Path, PathBuf};

/// Streams tiles into `<output_dir>/<index>.<extension>`
pub struct TileEmitter {
    output_dir: PathBuf,
    extension: &'static str,
    written: Vec<PathBuf>,
}

impl TileEmitter {
    /// Create an emitter writing PNG files into `output_dir`
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self::with_extension(output_dir, OUTPUT_EXTENSION)
    }

    /// Create an emitter with a custom file extension
    ///
    /// The extension selects the encoder, so it must name a format the
    /// `image` crate can write.
    pub fn with_extension<P: AsRef<Path>>(output_dir: P, extension: &'static str) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            extension,
            written: Vec::new(),
        }
    }

    /// Directory receiving the tiles
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the tile at `index` in the stream
    pub fn tile_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(format!("{index}.{}", self.extension))
    }

    /// Create the output directory and clear numbered tiles from earlier runs
    ///
    /// Only regular files named `<digits>.<extension>` are removed; anything
    /// else in the directory is left alone.
    ///
    /// # Errors
    ///
    /// Returns a `FileSystem` error if the directory cannot be created or
    /// listed, or a stale tile cannot be removed
    pub fn prepare(&self) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)
            .with_operation(&self.output_dir, "create directory")?;

        let mut removed = 0_usize;
        let entries = std::fs::read_dir(&self.output_dir)
            .with_operation(&self.output_dir, "read directory")?;
        for entry in entries {
            let path = entry
                .with_operation(&self.output_dir, "read directory")?
                .path();
            if path.is_file() && self.is_tile_file(&path) {
                std::fs::remove_file(&path).with_operation(&path, "remove stale tile")?;
                removed += 1;
            }
        }

        if removed > 0 {
            tracing::debug!(removed, dir = %self.output_dir.display(), "stale tiles removed");
        }
        Ok(())
    }

    /// Whether `path` is named like a tile this emitter writes
    pub fn is_tile_file(&self, path: &Path) -> bool {
        let numbered = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .is_some_and(|stem| !stem.is_empty() && stem.bytes().all(|b| b.is_ascii_digit()));
        numbered && path.extension().and_then(|ext| ext.to_str()) == Some(self.extension)
    }

    /// Write every tile of the stream, returning the number written
    ///
    /// # Errors
    ///
    /// Returns the first encoding or I/O error. Files written earlier in the
    /// same call are removed before the error is returned.
    pub fn emit<I>(&mut self, tiles: I, progress: Option<&ProgressManager>) -> Result<usize>
    where
        I: IntoIterator<Item = Tile>,
    {
        self.prepare()?;
        self.written.clear();

        for (index, tile) in tiles.into_iter().enumerate() {
            let path = self.tile_path(index);
            if let Err(error) = save_tile(&tile, &path) {
                self.discard_written();
                return Err(error);
            }
            self.written.push(path);

            if let Some(pm) = progress {
                pm.advance();
            }
        }

        let count = self.written.len();
        tracing::debug!(count, dir = %self.output_dir.display(), "tiles written");
        self.written.clear();
        Ok(count)
    }

    // Best effort: the run has already failed, so removal errors are only logged
    fn discard_written(&mut self) {
        for path in self.written.drain(..) {
            if let Err(error) = std::fs::remove_file(&path) {
                tracing::warn!(path = %path.display(), %error, "could not remove partial output");
            }
        }
    }
}
