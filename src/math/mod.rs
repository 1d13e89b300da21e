/// Average colors of pixel regions
pub mod color;
/// Perceptual distance between colors
pub mod distance;
