use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::math::color::Color;
use crate::math::distance::color_distance;
use crate::spatial::TileCatalog;

// Odd 64-bit constant spreading neighbouring block indices across the seed space
const BLOCK_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Catalog positions of the `choices` tiles closest to `color`
///
/// Tiles are ranked by [`color_distance`] with a stable sort, so equally
/// distant tiles keep their catalog order. Fewer than `choices` positions are
/// returned when the catalog is smaller.
pub fn nearest_candidates(color: &Color, catalog: &TileCatalog, choices: usize) -> Vec<usize> {
    let mut ranked: Vec<(usize, f64)> = catalog
        .tiles()
        .iter()
        .enumerate()
        .map(|(position, tile)| (position, color_distance(color, tile.color())))
        .collect();

    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

    ranked
        .into_iter()
        .take(choices)
        .map(|(position, _)| position)
        .collect()
}

/// Pick one of the nearest candidates uniformly at random
///
/// # Errors
///
/// Returns an error if:
/// - `choices` is zero
/// - The catalog is empty
pub fn choose_tile<R>(
    color: &Color,
    catalog: &TileCatalog,
    choices: usize,
    rng: &mut R,
) -> Result<usize>
where
    R: Rng + ?Sized,
{
    if choices == 0 {
        return Err(invalid_parameter(
            "choices",
            &choices,
            &"must consider at least one tile",
        ));
    }

    let candidates = nearest_candidates(color, catalog, choices);
    if candidates.is_empty() {
        return Err(MosaicError::NoTilesAvailable { directory: None });
    }

    let pick = rng.random_range(0..candidates.len());
    candidates
        .get(pick)
        .copied()
        .ok_or(MosaicError::NoTilesAvailable { directory: None })
}

/// Random source for one block, derived from the run seed
///
/// Blocks draw from independent generators, so the chosen tiles do not
/// depend on the order in which blocks are processed.
pub fn block_rng(seed: u64, block_index: usize) -> StdRng {
    let offset = (block_index as u64).wrapping_add(1).wrapping_mul(BLOCK_SEED_STRIDE);
    StdRng::seed_from_u64(seed ^ offset)
}
