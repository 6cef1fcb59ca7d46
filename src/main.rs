//! CLI entry point for the maze tile renderer

use clap::Parser;
use mazetile::io::cli::{Cli, TilesetProcessor};

fn main() -> mazetile::Result<()> {
    let cli = Cli::parse();
    let mut processor = TilesetProcessor::new(cli);
    processor.process()
}
