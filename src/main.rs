//! CLI entry point for the photo-mosaic builder

use clap::Parser;
use tilemosaic::io::cli::{Cli, MosaicProcessor};

fn main() -> tilemosaic::Result<()> {
    let cli = Cli::parse();
    let processor = MosaicProcessor::new(&cli);
    processor.process().map(|_| ())
}
