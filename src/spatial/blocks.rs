//! Block partitioning of a source image into a grid of average colors
//!
//! Each image axis is cut into `ceil(length / block_size)` contiguous spans
//! that cover the whole axis without gaps or overlaps. Every grid cell holds
//! the per-channel mean over the pixels of its span pair, so blocks on the
//! trailing edge average only the pixels they actually contain.

use ndarray::{Array3, ArrayView3, s};
use num_traits::AsPrimitive;
use std::ops::Range;

use crate::io::error::{Result, invalid_input, invalid_parameter};
use crate::math::color::{Color, mean_color};

/// How an image axis is cut into block spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitStrategy {
    /// Spans of exactly `block_size` pixels; the last span takes the remainder
    #[default]
    Fixed,
    /// Spans as equal as possible; leading spans are one pixel wider when the
    /// axis does not divide evenly
    Even,
}

/// Number of blocks needed to cover `length` pixels
pub const fn block_count(length: usize, block_size: usize) -> usize {
    length.div_ceil(block_size)
}

/// Partition `0..length` into block spans
///
/// # Errors
///
/// Returns an error if `block_size` is zero
pub fn axis_spans(
    length: usize,
    block_size: usize,
    strategy: SplitStrategy,
) -> Result<Vec<Range<usize>>> {
    if block_size == 0 {
        return Err(invalid_parameter(
            "block_size",
            &block_size,
            &"must be a positive number of pixels",
        ));
    }

    let count = block_count(length, block_size);
    let spans = match strategy {
        SplitStrategy::Fixed => (0..count)
            .map(|i| i * block_size..((i + 1) * block_size).min(length))
            .collect(),
        SplitStrategy::Even => {
            let base = length / count.max(1);
            let wider = length % count.max(1);
            let mut start = 0;
            (0..count)
                .map(|i| {
                    let size = base + usize::from(i < wider);
                    let span = start..start + size;
                    start += size;
                    span
                })
                .collect()
        }
    };

    Ok(spans)
}

/// Grid of block average colors laid out as (rows, columns, channels)
#[derive(Debug, Clone, PartialEq)]
pub struct BlockGrid {
    colors: Array3<f64>,
}

impl BlockGrid {
    /// Average every block of a (height, width, channels) pixel array
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The image has zero width or height
    /// - The image has no channels
    /// - `block_size` is zero
    pub fn from_pixels<T>(
        pixels: ArrayView3<'_, T>,
        block_size: usize,
        strategy: SplitStrategy,
    ) -> Result<Self>
    where
        T: AsPrimitive<f64>,
    {
        let (height, width, channels) = pixels.dim();
        if height == 0 || width == 0 {
            return Err(invalid_input(&format!(
                "source image is empty ({width}x{height})"
            )));
        }
        if channels == 0 {
            return Err(invalid_input(&"source image has no color channels"));
        }

        let row_spans = axis_spans(height, block_size, strategy)?;
        let col_spans = axis_spans(width, block_size, strategy)?;
        let mut colors = Array3::zeros((row_spans.len(), col_spans.len(), channels));

        for (row, row_span) in row_spans.iter().enumerate() {
            for (col, col_span) in col_spans.iter().enumerate() {
                let block = pixels.slice(s![row_span.clone(), col_span.clone(), ..]);
                let Some(mean) = mean_color(block) else {
                    continue;
                };
                for (slot, value) in colors
                    .slice_mut(s![row, col, ..])
                    .iter_mut()
                    .zip(mean.channels())
                {
                    *slot = *value;
                }
            }
        }

        Ok(Self { colors })
    }

    /// Wrap precomputed block colors
    pub const fn from_colors(colors: Array3<f64>) -> Self {
        Self { colors }
    }

    /// Number of block columns
    pub fn blocks_x(&self) -> usize {
        self.colors.dim().1
    }

    /// Number of block rows
    pub fn blocks_y(&self) -> usize {
        self.colors.dim().0
    }

    /// Channels per block color
    pub fn channels(&self) -> usize {
        self.colors.dim().2
    }

    /// Total number of blocks
    pub fn len(&self) -> usize {
        self.blocks_x() * self.blocks_y()
    }

    /// Whether the grid has no blocks
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Average color of the block at (`row`, `col`)
    pub fn color(&self, row: usize, col: usize) -> Option<Color> {
        if row >= self.blocks_y() || col >= self.blocks_x() {
            return None;
        }
        Some(Color::new(self.colors.slice(s![row, col, ..]).to_vec()))
    }

    /// Raw color array
    pub const fn colors(&self) -> &Array3<f64> {
        &self.colors
    }
}
