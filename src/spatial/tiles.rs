//! Tile images and their average colors
//!
//! The catalog keeps tiles in insertion order so that ranking ties resolve
//! the same way on every run, and enforces one pixel shape for all tiles so
//! any selection can be stitched.

use ndarray::Array3;
use std::collections::HashMap;

use crate::io::configuration::COLOR_CHANNELS;
use crate::io::error::{MosaicError, Result, invalid_input};
use crate::math::color::{Color, mean_color};

/// A tile image paired with its average color
#[derive(Debug, Clone)]
pub struct Tile {
    id: String,
    pixels: Array3<u8>,
    color: Color,
}

impl Tile {
    /// Stable identifier (the source path for file tiles)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Pixel data as (height, width, channels)
    pub const fn pixels(&self) -> &Array3<u8> {
        &self.pixels
    }

    /// Mean color over every pixel of the tile
    pub const fn color(&self) -> &Color {
        &self.color
    }

    /// Pixel shape as (height, width, channels)
    pub fn shape(&self) -> (usize, usize, usize) {
        self.pixels.dim()
    }
}

/// Ordered collection of uniformly sized tiles
#[derive(Debug, Clone, Default)]
pub struct TileCatalog {
    tiles: Vec<Tile>,
    index: HashMap<String, usize>,
}

impl TileCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tile, computing its average color
    ///
    /// Returns the tile's position in the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The identifier is already present
    /// - The tile has no pixels or fewer than three channels
    /// - The tile's shape differs from the tiles already in the catalog
    pub fn insert(&mut self, id: impl Into<String>, pixels: Array3<u8>) -> Result<usize> {
        let id = id.into();
        if self.index.contains_key(&id) {
            return Err(invalid_input(&format!("duplicate tile identifier '{id}'")));
        }

        let found = pixels.dim();
        if found.2 < COLOR_CHANNELS {
            return Err(invalid_input(&format!(
                "tile '{id}' has {} channels, at least {COLOR_CHANNELS} are needed",
                found.2
            )));
        }
        if let Some(expected) = self.tile_shape()
            && expected != found
        {
            return Err(MosaicError::TileDimensionMismatch {
                tile: id,
                expected,
                found,
            });
        }

        let color = mean_color(pixels.view())
            .ok_or_else(|| invalid_input(&format!("tile '{id}' has no pixels")))?;

        let position = self.tiles.len();
        self.index.insert(id.clone(), position);
        self.tiles.push(Tile { id, pixels, color });
        Ok(position)
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the catalog holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in insertion order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at a catalog position
    pub fn tile(&self, position: usize) -> Option<&Tile> {
        self.tiles.get(position)
    }

    /// Tile by identifier
    pub fn get(&self, id: &str) -> Option<&Tile> {
        self.index.get(id).and_then(|&position| self.tiles.get(position))
    }

    /// Average color by identifier
    pub fn color(&self, id: &str) -> Option<&Color> {
        self.get(id).map(Tile::color)
    }

    /// Shape shared by every tile, `None` while the catalog is empty
    pub fn tile_shape(&self) -> Option<(usize, usize, usize)> {
        self.tiles.first().map(Tile::shape)
    }
}
