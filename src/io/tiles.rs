//! Loading a tile catalog from a directory of images

use std::path::{Path, PathBuf};

use crate::io::error::{MosaicError, Result};
use crate::io::image::decode_rgba;
use crate::spatial::TileCatalog;

/// What happens when a tile file cannot be decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Abort loading on the first undecodable file
    #[default]
    Strict,
    /// Leave undecodable files out and report them
    Skip,
}

/// A tile file left out of the catalog under [`DecodePolicy::Skip`]
#[derive(Debug)]
pub struct SkippedTile {
    /// Path of the file
    pub path: PathBuf,
    /// Why it was rejected
    pub error: MosaicError,
}

/// List candidate tile files in a directory
///
/// Only regular, non-hidden files directly inside `dir` are returned, sorted
/// by path.
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn list_tile_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |e| MosaicError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read tile directory",
        source: e,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        let hidden = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with('.'));
        if path.is_file() && !hidden {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Decode every file in `paths` into a catalog keyed by path
///
/// # Errors
///
/// Returns an error if:
/// - A file fails to decode under [`DecodePolicy::Strict`]
/// - A tile's shape differs from the others
/// - No tile could be loaded
pub fn load_tiles(
    paths: &[PathBuf],
    policy: DecodePolicy,
) -> Result<(TileCatalog, Vec<SkippedTile>)> {
    let mut catalog = TileCatalog::new();
    let mut skipped = Vec::new();

    for path in paths {
        let error = match decode_rgba(path) {
            Ok(pixels) => match catalog.insert(path.display().to_string(), pixels) {
                Ok(_) => continue,
                Err(e) => e,
            },
            Err(e) => MosaicError::TileDecode {
                path: path.clone(),
                source: e,
            },
        };

        match (policy, &error) {
            (DecodePolicy::Skip, MosaicError::TileDecode { .. }) => skipped.push(SkippedTile {
                path: path.clone(),
                error,
            }),
            _ => return Err(error),
        }
    }

    if catalog.is_empty() {
        return Err(MosaicError::NoTilesAvailable { directory: None });
    }

    Ok((catalog, skipped))
}

/// Load all tiles found in a directory
///
/// # Errors
///
/// Returns an error if the directory cannot be read, a tile fails under the
/// given policy, or no tiles are found
pub fn load_catalog(dir: &Path, policy: DecodePolicy) -> Result<(TileCatalog, Vec<SkippedTile>)> {
    let paths = list_tile_paths(dir)?;
    load_tiles(&paths, policy).map_err(|e| match e {
        MosaicError::NoTilesAvailable { .. } => MosaicError::NoTilesAvailable {
            directory: Some(dir.to_path_buf()),
        },
        other => other,
    })
}
