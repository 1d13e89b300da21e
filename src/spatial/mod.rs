//! Spatial data structures for mosaic construction
//!
//! This module contains:
//! - Block partitioning of the source image and block average colors
//! - Tile images with their average colors

/// Block grid construction and axis partitioning
pub mod blocks;
/// Tile catalog and tile color summaries
pub mod tiles;

pub use blocks::BlockGrid;
pub use tiles::TileCatalog;
