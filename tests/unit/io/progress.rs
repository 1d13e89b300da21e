//! Tests for block progress tracking

#[cfg(test)]
mod tests {
    use tilemosaic::io::progress::ProgressManager;

    // Tests hidden bars still count finished blocks
    // Verified by skipping the increment when hidden
    #[test]
    fn test_hidden_progress_counts() {
        let progress = ProgressManager::hidden();
        progress.start(10, "Blocks");

        for _ in 0..7 {
            progress.block_done();
        }

        assert_eq!(progress.position(), 7);
        progress.finish();
    }

    // Tests starting a new run resets the count
    // Verified by keeping the previous position on start
    #[test]
    fn test_start_resets_position() {
        let progress = ProgressManager::default();
        progress.start(3, "First");
        progress.block_done();
        progress.block_done();

        progress.start(5, "Second");

        assert_eq!(progress.position(), 0);
    }

    // Tests visible bars accept the full lifecycle
    // Verified by panicking on an invalid template
    #[test]
    fn test_visible_progress_lifecycle() {
        let progress = ProgressManager::visible();
        progress.start(2, "Blocks");
        progress.block_done();
        progress.block_done();
        assert_eq!(progress.position(), 2);
        progress.finish();
    }
}
