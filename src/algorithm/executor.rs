use ndarray::{Array2, Array3, s};
use rayon::prelude::*;

use crate::{
    algorithm::selection::{block_rng, choose_tile},
    io::configuration::COLOR_CHANNELS,
    io::error::{MosaicError, Result, invalid_input, invalid_parameter},
    io::progress::ProgressManager,
    spatial::{BlockGrid, TileCatalog},
};

/// Parameters controlling tile selection
#[derive(Clone, Copy, Debug)]
pub struct AssemblyConfig {
    /// Number of nearest tiles to choose from per block
    pub choices: usize,
    /// Run seed from which every block's random source is derived
    pub seed: u64,
    /// Select tiles for blocks on the rayon pool
    pub parallel: bool,
}

/// Finished mosaic image and the tile chosen for every block
#[derive(Debug, Clone)]
pub struct Mosaic {
    /// Stitched pixels as (height, width, channels)
    pub pixels: Array3<u8>,
    /// Catalog position of the tile used at each (row, column) block
    pub selections: Array2<usize>,
}

impl Mosaic {
    /// Output width in pixels
    pub fn width(&self) -> usize {
        self.pixels.dim().1
    }

    /// Output height in pixels
    pub fn height(&self) -> usize {
        self.pixels.dim().0
    }
}

/// Builds mosaics from a block grid and a read-only tile catalog
///
/// Every block is matched independently: its nearest tiles by perceptual
/// color distance form a candidate set, one of which is drawn at random.
/// Because each block owns a generator seeded from the run seed and its grid
/// index, the sequential and parallel paths produce identical mosaics.
pub struct MosaicAssembler<'a> {
    catalog: &'a TileCatalog,
    config: AssemblyConfig,
}

impl<'a> MosaicAssembler<'a> {
    /// Create an assembler over a catalog
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `config.choices` is zero
    /// - The catalog holds no tiles
    pub fn new(catalog: &'a TileCatalog, config: AssemblyConfig) -> Result<Self> {
        if config.choices == 0 {
            return Err(invalid_parameter(
                "choices",
                &config.choices,
                &"must consider at least one tile",
            ));
        }
        if catalog.is_empty() {
            return Err(MosaicError::NoTilesAvailable { directory: None });
        }
        Ok(Self { catalog, config })
    }

    /// Choose a tile for every block
    ///
    /// # Errors
    ///
    /// Returns an error if the grid colors have fewer than three channels
    pub fn select_tiles(&self, grid: &BlockGrid) -> Result<Array2<usize>> {
        self.select_tiles_with_progress(grid, &ProgressManager::hidden())
    }

    /// Choose a tile for every block, reporting each finished block
    ///
    /// # Errors
    ///
    /// Returns an error if the grid colors have fewer than three channels
    pub fn select_tiles_with_progress(
        &self,
        grid: &BlockGrid,
        progress: &ProgressManager,
    ) -> Result<Array2<usize>> {
        if grid.channels() < COLOR_CHANNELS {
            return Err(invalid_input(&format!(
                "block colors have {} channels, at least {COLOR_CHANNELS} are needed",
                grid.channels()
            )));
        }

        let (rows, cols) = (grid.blocks_y(), grid.blocks_x());
        let select_block = |index: usize| -> Result<usize> {
            let color = grid
                .color(index / cols, index % cols)
                .ok_or_else(|| invalid_input(&format!("block {index} is outside the grid")))?;
            let mut rng = block_rng(self.config.seed, index);
            let choice = choose_tile(&color, self.catalog, self.config.choices, &mut rng)?;
            progress.block_done();
            Ok(choice)
        };

        // Grid order is row-major in both paths
        let choices: Vec<usize> = if self.config.parallel {
            (0..rows * cols)
                .into_par_iter()
                .map(select_block)
                .collect::<Result<_>>()?
        } else {
            (0..rows * cols).map(select_block).collect::<Result<_>>()?
        };

        Array2::from_shape_vec((rows, cols), choices)
            .map_err(|e| invalid_input(&format!("selection grid: {e}")))
    }

    /// Stitch the selected tiles into one image
    ///
    /// Every tile has the catalog's shape, since [`TileCatalog::insert`]
    /// rejects tiles of any other size.
    ///
    /// # Errors
    ///
    /// Returns an error if a selection refers to a position outside the catalog
    pub fn stitch(&self, selections: &Array2<usize>) -> Result<Array3<u8>> {
        let (rows, cols) = selections.dim();
        let Some((tile_height, tile_width, channels)) = self.catalog.tile_shape() else {
            return Err(MosaicError::NoTilesAvailable { directory: None });
        };

        let mut pixels = Array3::zeros((rows * tile_height, cols * tile_width, channels));

        for ((row, col), &position) in selections.indexed_iter() {
            let tile = self.catalog.tile(position).ok_or_else(|| {
                invalid_input(&format!(
                    "selection {position} exceeds the {} catalog tiles",
                    self.catalog.len()
                ))
            })?;

            let top = row * tile_height;
            let left = col * tile_width;
            pixels
                .slice_mut(s![top..top + tile_height, left..left + tile_width, ..])
                .assign(tile.pixels());
        }

        Ok(pixels)
    }

    /// Select and stitch in one pass
    ///
    /// # Errors
    ///
    /// Returns an error if selection or stitching fails
    pub fn assemble(&self, grid: &BlockGrid) -> Result<Mosaic> {
        self.assemble_with_progress(grid, &ProgressManager::hidden())
    }

    /// Select and stitch, reporting each finished block
    ///
    /// # Errors
    ///
    /// Returns an error if selection or stitching fails
    pub fn assemble_with_progress(
        &self,
        grid: &BlockGrid,
        progress: &ProgressManager,
    ) -> Result<Mosaic> {
        let selections = self.select_tiles_with_progress(grid, progress)?;
        let pixels = self.stitch(&selections)?;
        Ok(Mosaic { pixels, selections })
    }
}
