//! Mosaic constants and runtime configuration defaults

use crate::io::error::{Result, invalid_parameter};
use image::ImageFormat;
use crate::io::tiles::DecodePolicy;
use crate::spatial::blocks::SplitStrategy;
use std::path::PathBuf;

/// Default side length of a source block, in pixels
pub const DEFAULT_BLOCK_SIZE: usize = 20;

/// Default number of nearest tiles drawn from for each block
pub const DEFAULT_CHOICES: usize = 3;

/// Minimum channel count a color needs to take part in distance ranking
pub const COLOR_CHANNELS: usize = 3;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// Everything a single mosaic run needs
#[derive(Debug, Clone)]
pub struct MosaicConfig {
    /// Image to reproduce
    pub source: PathBuf,
    /// Directory holding the tile images
    pub tiles_dir: PathBuf,
    /// Where the finished mosaic is written
    pub target: PathBuf,
    /// Side length of a source block, in pixels
    pub block_size: usize,
    /// Number of nearest tiles to choose from per block
    pub choices: usize,
    /// Run seed; `None` draws a fresh one
    pub seed: Option<u64>,
    /// How image axes are cut into blocks
    pub split: SplitStrategy,
    /// What to do with tiles that fail to decode
    pub decode_policy: DecodePolicy,
    /// Select tiles for blocks on the rayon pool
    pub parallel: bool,
}

impl MosaicConfig {
    /// Configuration with default block size, choices and policies
    pub fn new(
        source: impl Into<PathBuf>,
        tiles_dir: impl Into<PathBuf>,
        target: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source: source.into(),
            tiles_dir: tiles_dir.into(),
            target: target.into(),
            block_size: DEFAULT_BLOCK_SIZE,
            choices: DEFAULT_CHOICES,
            seed: None,
            split: SplitStrategy::default(),
            decode_policy: DecodePolicy::default(),
            parallel: false,
        }
    }

    /// Check numeric parameters and input paths
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `block_size` or `choices` is zero
    /// - `source` is not an existing file
    /// - `tiles_dir` is not an existing directory
    /// - `target` is an existing directory or has no known image extension
    pub fn validate(&self) -> Result<()> {
        if self.block_size == 0 {
            return Err(invalid_parameter(
                "block_size",
                &self.block_size,
                &"must be a positive number of pixels",
            ));
        }
        if self.choices == 0 {
            return Err(invalid_parameter(
                "choices",
                &self.choices,
                &"must consider at least one tile",
            ));
        }
        if !self.source.is_file() {
            return Err(invalid_parameter(
                "source",
                &self.source.display(),
                &"must be an existing image file",
            ));
        }
        if !self.tiles_dir.is_dir() {
            return Err(invalid_parameter(
                "tiles",
                &self.tiles_dir.display(),
                &"must be an existing directory",
            ));
        }
        if self.target.is_dir() {
            return Err(invalid_parameter(
                "target",
                &self.target.display(),
                &"must be a file path, not a directory",
            ));
        }
        if let Err(e) = ImageFormat::from_path(&self.target) {
            return Err(invalid_parameter("target", &self.target.display(), &e));
        }
        Ok(())
    }
}
