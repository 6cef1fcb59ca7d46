//! Command-line interface for rendering a maze through tile-strip files
//!
//! One maze is carved per invocation and rendered through every targeted
//! strip, so a directory of tilesets yields the same layout in each visual
//! style.

use crate::algorithm::carver::generate;
use crate::io::configuration::{DEFAULT_GRID_SIZE, DEFAULT_SEED, OUTPUT_SUFFIX};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{Tileset, render_maze_png};
use crate::io::progress::ProgressManager;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mazetile")]
#[command(
    author,
    version,
    about = "Generate a perfect maze rendered through tile strips"
)]
/// Command-line arguments for the maze rendering tool
pub struct Cli {
    /// Tile-strip PNG file or directory of tile strips
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Grid size in cells per side, border ring included
    #[arg(short = 'g', long, default_value_t = DEFAULT_GRID_SIZE)]
    pub size: usize,

    /// Random seed for reproducible carving
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Render files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates maze generation and batch rendering with progress tracking
pub struct TilesetProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl TilesetProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Carve the maze and render it through every targeted tile strip
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, grid construction, tile-strip
    /// loading, or output writing fails.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let grid = generate(self.cli.size, self.cli.seed)?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            if let Some(ref mut pm) = self.progress_manager {
                pm.start_file(file);
            }

            let tileset = Tileset::from_png_path(file)?;
            let output_path = Self::get_output_path(file);
            let output_str = output_path.to_str().ok_or_else(|| {
                invalid_parameter(
                    "target",
                    &output_path.display(),
                    &"output path is not valid UTF-8",
                )
            })?;
            render_maze_png(&grid, &tileset, output_str)?;

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_file();
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a PNG tile strip",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && !Self::is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a PNG tile strip or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Outputs from earlier runs are valid PNGs but not tile strips; feeding
    // them back in would abort the batch on strip validation.
    fn is_generated_output(path: &Path) -> bool {
        path.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
