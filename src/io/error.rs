//! Error types for mosaic construction and its file glue

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// Input data doesn't meet the requirements of an operation
    InvalidInput {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// No tile survived loading, or none was supplied
    NoTilesAvailable {
        /// Directory the tiles were read from, if any
        directory: Option<PathBuf>,
    },

    /// A tile image could not be read or decoded
    TileDecode {
        /// Path to the tile file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// A tile's pixel shape differs from the rest of the catalog
    TileDimensionMismatch {
        /// Identifier of the offending tile
        tile: String,
        /// Shape shared by the catalog (height, width, channels)
        expected: (usize, usize, usize),
        /// Shape of the offending tile (height, width, channels)
        found: (usize, usize, usize),
    },

    /// Failed to load the source image
    SourceLoad {
        /// Path to the source image
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to encode or write the finished mosaic
    OutputWrite {
        /// Path where the write was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { reason } => write!(f, "Invalid input: {reason}"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::NoTilesAvailable { directory } => match directory {
                Some(dir) => write!(f, "No usable tiles found in '{}'", dir.display()),
                None => write!(f, "No tiles available"),
            },
            Self::TileDecode { path, source } => {
                write!(f, "Failed to decode tile '{}': {source}", path.display())
            }
            Self::TileDimensionMismatch {
                tile,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Tile '{tile}' is {}x{}x{} but the catalog uses {}x{}x{}",
                    found.1, found.0, found.2, expected.1, expected.0, expected.2
                )
            }
            Self::SourceLoad { path, source } => {
                write!(
                    f,
                    "Failed to load source image '{}': {source}",
                    path.display()
                )
            }
            Self::OutputWrite { path, source } => {
                write!(
                    f,
                    "Failed to write mosaic to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TileDecode { source, .. }
            | Self::SourceLoad { source, .. }
            | Self::OutputWrite { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid input error
pub fn invalid_input(reason: &impl ToString) -> MosaicError {
    MosaicError::InvalidInput {
        reason: reason.to_string(),
    }
}
