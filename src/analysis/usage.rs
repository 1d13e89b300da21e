//! Tile usage statistics for a finished mosaic

use ndarray::Array2;

/// How often each catalog tile was placed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileUsage {
    counts: Vec<usize>,
}

impl TileUsage {
    /// Count placements per catalog position
    ///
    /// Selections outside `0..tile_count` are ignored.
    pub fn from_selections(selections: &Array2<usize>, tile_count: usize) -> Self {
        let mut counts = vec![0; tile_count];
        for &position in selections {
            if let Some(count) = counts.get_mut(position) {
                *count += 1;
            }
        }
        Self { counts }
    }

    /// Placement count per catalog position
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of placements
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of tiles placed at least once
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&count| count > 0).count()
    }

    /// Most placed tile as (position, count); the earliest position wins ties
    pub fn most_used(&self) -> Option<(usize, usize)> {
        self.counts
            .iter()
            .copied()
            .enumerate()
            .filter(|&(_, count)| count > 0)
            .fold(None, |best, (position, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((position, count)),
            })
    }
}
