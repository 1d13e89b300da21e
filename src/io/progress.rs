//! Block progress reporting for mosaic assembly

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static BLOCK_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks how many blocks have received a tile
///
/// Safe to share across the rayon pool; increments from worker threads are
/// aggregated by the underlying bar.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::hidden()
    }
}

impl ProgressManager {
    /// A visible bar drawn on stderr
    pub fn visible() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(BLOCK_STYLE.clone());
        Self { bar }
    }

    /// A bar that counts but never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Reset the bar for a new run of `blocks` blocks
    pub fn start(&self, blocks: usize, label: &str) {
        self.bar.set_length(blocks as u64);
        self.bar.set_position(0);
        self.bar.set_message(label.to_string());
    }

    /// Record one finished block
    pub fn block_done(&self) {
        self.bar.inc(1);
    }

    /// Blocks finished so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
