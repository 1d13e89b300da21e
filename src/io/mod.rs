/// Command-line parsing and run orchestration
pub mod cli;
/// Constants and run configuration
pub mod configuration;
/// Error types
pub mod error;
/// Image decoding and encoding
pub mod image;
/// Progress display
pub mod progress;
/// Tile directory loading
pub mod tiles;
