/// Tile usage statistics
pub mod usage;
