/// Mosaic assembly: per-block selection and stitching
pub mod executor;
/// Nearest-color candidate ranking and randomized choice
pub mod selection;
