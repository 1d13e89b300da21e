//! Average colors of pixel regions

use ndarray::{ArrayView3, Axis};
use num_traits::AsPrimitive;

/// Per-channel mean intensity of a pixel region
///
/// Channels keep the order of the pixel data they were averaged from
/// (red, green, blue, then alpha for decoded files).
#[derive(Debug, Clone, PartialEq)]
pub struct Color {
    channels: Vec<f64>,
}

impl Color {
    /// Build a color from raw channel values
    pub const fn new(channels: Vec<f64>) -> Self {
        Self { channels }
    }

    /// Build an opaque three-channel color
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::new(vec![red, green, blue])
    }

    /// All channel values
    pub fn channels(&self) -> &[f64] {
        &self.channels
    }

    /// Number of channels
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Whether the color has no channels at all
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Channel value, or 0.0 when the channel is absent
    pub fn channel(&self, index: usize) -> f64 {
        self.channels.get(index).copied().unwrap_or(0.0)
    }

    /// Red channel
    pub fn red(&self) -> f64 {
        self.channel(0)
    }

    /// Green channel
    pub fn green(&self) -> f64 {
        self.channel(1)
    }

    /// Blue channel
    pub fn blue(&self) -> f64 {
        self.channel(2)
    }
}

/// Arithmetic mean of every channel over all spatial positions
///
/// The view is laid out as (height, width, channels). Returns `None` when the
/// region has no pixels.
pub fn mean_color<T>(pixels: ArrayView3<'_, T>) -> Option<Color>
where
    T: AsPrimitive<f64>,
{
    let (height, width, _) = pixels.dim();
    if height == 0 || width == 0 {
        return None;
    }

    let values = pixels.mapv(|value| -> f64 { value.as_() });
    // Every row has the same width, so the mean of row means is the region mean
    values
        .mean_axis(Axis(0))
        .and_then(|rows| rows.mean_axis(Axis(0)))
        .map(|means| Color::new(means.to_vec()))
}
