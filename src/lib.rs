//! Photo-mosaic construction with perceptual color matching
//!
//! A source image is cut into a grid of blocks and every block is replaced by
//! a tile image whose average color lies close to the block's own. Picking at
//! random among the nearest few tiles keeps flat regions from turning into
//! visibly repeating patterns.

#![deny(unsafe_code)]

/// Mosaic assembly including candidate ranking and randomized tile choice
pub mod algorithm;
/// Statistics over finished mosaics
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Color averaging and perceptual color distance
pub mod math;
/// Block grids and tile catalogs
pub mod spatial;

pub use io::error::{MosaicError, Result};
