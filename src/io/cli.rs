//! Command-line interface for building a mosaic from a source image and a tile directory

use crate::algorithm::executor::{AssemblyConfig, Mosaic, MosaicAssembler};
use crate::analysis::usage::TileUsage;
use crate::io::configuration::{DEFAULT_BLOCK_SIZE, DEFAULT_CHOICES, MosaicConfig};
use crate::io::error::Result;
use crate::io::image::{load_source, save_pixels};
use crate::io::progress::ProgressManager;
use crate::io::tiles::{DecodePolicy, load_catalog};
use crate::spatial::blocks::{BlockGrid, SplitStrategy};
use crate::spatial::TileCatalog;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilemosaic")]
#[command(
    author,
    version,
    about = "Rebuild an image out of color-matched tile images"
)]
/// Command-line arguments for the mosaic tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Image to reproduce
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Directory of tile images
    #[arg(value_name = "TILES")]
    pub tiles: PathBuf,

    /// Output image path; the format follows the extension
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Size of source blocks, in pixels
    #[arg(short, long, visible_alias = "blocksize", default_value_t = DEFAULT_BLOCK_SIZE)]
    pub block_size: usize,

    /// Number of similarly-colored tiles to choose from
    #[arg(short, long, default_value_t = DEFAULT_CHOICES)]
    pub choices: usize,

    /// Seed for reproducible output (random when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Split image axes into equally sized blocks instead of fixed-size blocks
    #[arg(short, long)]
    pub even_split: bool,

    /// Skip tiles that fail to decode instead of aborting
    #[arg(long)]
    pub skip_invalid: bool,

    /// Select tiles for blocks in parallel
    #[arg(short = 'j', long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Run configuration described by these arguments
    pub fn to_config(&self) -> MosaicConfig {
        MosaicConfig {
            block_size: self.block_size,
            choices: self.choices,
            seed: self.seed,
            split: if self.even_split {
                SplitStrategy::Even
            } else {
                SplitStrategy::Fixed
            },
            decode_policy: if self.skip_invalid {
                DecodePolicy::Skip
            } else {
                DecodePolicy::Strict
            },
            parallel: self.parallel,
            ..MosaicConfig::new(&self.source, &self.tiles, &self.target)
        }
    }
}

/// Orchestrates one mosaic run: load, average, select, stitch, save
pub struct MosaicProcessor {
    config: MosaicConfig,
    quiet: bool,
    progress_manager: ProgressManager,
}

impl MosaicProcessor {
    /// Create a processor from CLI arguments
    pub fn new(cli: &Cli) -> Self {
        Self::from_config(cli.to_config(), !cli.should_show_progress())
    }

    /// Create a processor from an explicit configuration
    pub fn from_config(config: MosaicConfig, quiet: bool) -> Self {
        let progress_manager = if quiet {
            ProgressManager::hidden()
        } else {
            ProgressManager::visible()
        };

        Self {
            config,
            quiet,
            progress_manager,
        }
    }

    /// Build the mosaic and write it to the target path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - Tiles or the source image cannot be loaded
    /// - Tiles differ in size
    /// - The mosaic cannot be written
    pub fn process(&self) -> Result<Mosaic> {
        self.config.validate()?;

        let catalog = self.load_tiles()?;
        let source = load_source(&self.config.source)?;
        let grid = BlockGrid::from_pixels(source.view(), self.config.block_size, self.config.split)?;

        let seed = self.config.seed.unwrap_or_else(rand::random);
        self.report(&format!(
            "Creating {}-tile-by-{}-tile mosaic, selecting from {} tiles (seed {seed}).",
            grid.blocks_x(),
            grid.blocks_y(),
            catalog.len()
        ));

        let assembler = MosaicAssembler::new(
            &catalog,
            AssemblyConfig {
                choices: self.config.choices,
                seed,
                parallel: self.config.parallel,
            },
        )?;

        self.progress_manager.start(grid.len(), "Blocks");
        let mosaic = assembler.assemble_with_progress(&grid, &self.progress_manager)?;
        self.progress_manager.finish();

        self.report_usage(&mosaic, &catalog);

        save_pixels(&mosaic.pixels, &self.config.target)?;

        self.report(&format!(
            "{}x{} mosaic saved as {}.",
            mosaic.width(),
            mosaic.height(),
            self.config.target.display()
        ));

        Ok(mosaic)
    }

    fn load_tiles(&self) -> Result<TileCatalog> {
        let (catalog, skipped) = load_catalog(&self.config.tiles_dir, self.config.decode_policy)?;
        for tile in &skipped {
            self.report(&format!("Skipping {}: {}", tile.path.display(), tile.error));
        }
        Ok(catalog)
    }

    fn report_usage(&self, mosaic: &Mosaic, catalog: &TileCatalog) {
        let usage = TileUsage::from_selections(&mosaic.selections, catalog.len());
        let most_used = usage
            .most_used()
            .and_then(|(position, count)| catalog.tile(position).map(|tile| (tile.id(), count)));

        if let Some((id, count)) = most_used {
            self.report(&format!(
                "Used {} of {} tiles; most used: {id} ({count} blocks).",
                usage.distinct(),
                catalog.len()
            ));
        }
    }

    // Allow print for user feedback on run progress
    #[allow(clippy::print_stderr)]
    fn report(&self, message: &str) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }
}
