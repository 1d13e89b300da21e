//! Tests for axis partitioning and block average colors

#[cfg(test)]
mod tests {
    use ndarray::Array3;
    use tilemosaic::MosaicError;
    use tilemosaic::math::color::Color;
    use tilemosaic::spatial::blocks::{BlockGrid, SplitStrategy, axis_spans, block_count};

    const QUADRANT_COLORS: [[u8; 3]; 4] = [[255, 0, 0], [0, 255, 0], [0, 0, 255], [90, 90, 90]];

    fn quadrant_image(size: usize) -> Array3<u8> {
        let half = size / 2;
        Array3::from_shape_fn((size, size, 3), |(y, x, c)| {
            let quadrant = usize::from(y >= half) * 2 + usize::from(x >= half);
            QUADRANT_COLORS
                .get(quadrant)
                .and_then(|color| color.get(c))
                .copied()
                .unwrap_or(0)
        })
    }

    // Tests a 40x40 image with block size 20 yields a 2x2 grid of quadrant means
    // Verified by swapping row and column spans
    #[test]
    fn test_exact_quadrants() {
        let image = quadrant_image(40);

        let grid = BlockGrid::from_pixels(image.view(), 20, SplitStrategy::Fixed)
            .expect("Grid should build");

        assert_eq!(grid.colors().dim(), (2, 2, 3));
        assert_eq!(grid.blocks_x(), 2);
        assert_eq!(grid.blocks_y(), 2);
        assert_eq!(grid.len(), 4);

        assert_eq!(grid.color(0, 0), Some(Color::rgb(255.0, 0.0, 0.0)));
        assert_eq!(grid.color(0, 1), Some(Color::rgb(0.0, 255.0, 0.0)));
        assert_eq!(grid.color(1, 0), Some(Color::rgb(0.0, 0.0, 255.0)));
        assert_eq!(grid.color(1, 1), Some(Color::rgb(90.0, 90.0, 90.0)));
        assert_eq!(grid.color(2, 0), None);
    }

    // Tests a 45-pixel axis keeps a narrow trailing block averaged over its own pixels
    // Verified by padding the trailing block to full size
    #[test]
    fn test_trailing_block_is_not_padded() {
        let image = Array3::from_shape_fn((20, 45, 3), |(_, x, _)| if x >= 40 { 200u8 } else { 0 });

        let grid = BlockGrid::from_pixels(image.view(), 20, SplitStrategy::Fixed)
            .expect("Grid should build");

        assert_eq!(grid.blocks_x(), 3);
        assert_eq!(grid.blocks_y(), 1);
        assert_eq!(grid.color(0, 0), Some(Color::rgb(0.0, 0.0, 0.0)));
        assert_eq!(grid.color(0, 1), Some(Color::rgb(0.0, 0.0, 0.0)));
        assert_eq!(grid.color(0, 2), Some(Color::rgb(200.0, 200.0, 200.0)));
    }

    // Tests fixed spans are block-sized with the remainder at the end
    // Verified by rounding the block count down
    #[test]
    fn test_fixed_spans() {
        let spans = axis_spans(45, 20, SplitStrategy::Fixed).expect("Valid block size");
        assert_eq!(spans, vec![0..20, 20..40, 40..45]);

        let spans = axis_spans(40, 20, SplitStrategy::Fixed).expect("Valid block size");
        assert_eq!(spans, vec![0..20, 20..40]);
    }

    // Tests even spans match equal splitting with wider leading spans
    // Verified by giving the extra pixels to trailing spans
    #[test]
    fn test_even_spans() {
        let spans = axis_spans(45, 20, SplitStrategy::Even).expect("Valid block size");
        assert_eq!(spans, vec![0..15, 15..30, 30..45]);

        let spans = axis_spans(41, 20, SplitStrategy::Even).expect("Valid block size");
        assert_eq!(spans, vec![0..14, 14..28, 28..41]);
    }

    // Tests both strategies partition every axis without gaps or overlaps
    // Verified by skipping the last pixel of each span
    #[test]
    fn test_spans_partition_axis() {
        for strategy in [SplitStrategy::Fixed, SplitStrategy::Even] {
            for length in 1..=90 {
                for block_size in 1..=25 {
                    let spans = axis_spans(length, block_size, strategy).expect("Valid block size");

                    assert_eq!(spans.len(), block_count(length, block_size));
                    assert_eq!(spans.first().map(|span| span.start), Some(0));
                    assert_eq!(spans.last().map(|span| span.end), Some(length));
                    for pair in spans.windows(2) {
                        if let [left, right] = pair {
                            assert_eq!(left.end, right.start);
                        }
                    }
                    assert!(spans.iter().all(|span| !span.is_empty()));
                    assert!(spans.iter().all(|span| span.len() <= block_size));
                }
            }
        }
    }

    // Tests the even strategy is used by the grid builder when requested
    // Verified by ignoring the strategy argument
    #[test]
    fn test_even_grid_uses_even_spans() {
        let image = Array3::from_shape_fn((10, 45, 3), |(_, x, _)| if x >= 40 { 150u8 } else { 0 });

        let grid = BlockGrid::from_pixels(image.view(), 20, SplitStrategy::Even)
            .expect("Grid should build");

        assert_eq!(grid.blocks_x(), 3);
        // Trailing span is 30..45, of which 5 of 15 columns are lit
        assert_eq!(grid.color(0, 2), Some(Color::rgb(50.0, 50.0, 50.0)));
    }

    // Tests extra channels are averaged and kept in the grid
    // Verified by truncating colors to three channels
    #[test]
    fn test_alpha_channel_is_averaged() {
        let image = Array3::from_shape_fn((4, 4, 4), |(y, _, c)| if c == 3 && y < 2 { 255u8 } else { 0 });

        let grid = BlockGrid::from_pixels(image.view(), 4, SplitStrategy::Fixed)
            .expect("Grid should build");

        assert_eq!(grid.channels(), 4);
        assert_eq!(grid.color(0, 0), Some(Color::new(vec![0.0, 0.0, 0.0, 127.5])));
    }

    // Tests empty images are rejected as invalid input
    // Verified by removing the empty dimension check
    #[test]
    fn test_empty_image_is_rejected() {
        let image = Array3::<u8>::zeros((0, 10, 3));
        let result = BlockGrid::from_pixels(image.view(), 5, SplitStrategy::Fixed);
        assert!(matches!(result, Err(MosaicError::InvalidInput { .. })));

        let image = Array3::<u8>::zeros((10, 0, 3));
        let result = BlockGrid::from_pixels(image.view(), 5, SplitStrategy::Fixed);
        assert!(matches!(result, Err(MosaicError::InvalidInput { .. })));
    }

    // Tests a zero block size is rejected
    // Verified by removing the block size check
    #[test]
    fn test_zero_block_size_is_rejected() {
        let image = Array3::<u8>::zeros((10, 10, 3));
        let result = BlockGrid::from_pixels(image.view(), 0, SplitStrategy::Fixed);
        assert!(matches!(
            result,
            Err(MosaicError::InvalidParameter {
                parameter: "block_size",
                ..
            })
        ));
    }

    // Tests a block size larger than the image yields a single block
    // Verified by rounding the block count down
    #[test]
    fn test_oversized_block() {
        let image = quadrant_image(10);

        let grid = BlockGrid::from_pixels(image.view(), 64, SplitStrategy::Fixed)
            .expect("Grid should build");

        assert_eq!((grid.blocks_y(), grid.blocks_x()), (1, 1));
        assert_eq!(
            grid.color(0, 0),
            Some(Color::rgb(86.25, 86.25, 86.25))
        );
    }
}
