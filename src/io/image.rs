//! Tile-strip loading and maze image composition
//!
//! A tile strip is a single-row image holding one square tile per wall
//! configuration. The strip height sets the tile size; the tile for
//! encoding `index` sits at horizontal offset `index × tile_size`. The
//! composed maze places each cell's tile at pixel
//! `(column × tile_size, row × tile_size)`.

use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

use crate::algorithm::encoding::walls_to_index;
use crate::io::configuration::TILE_COUNT;
use crate::io::error::{MazeError, Result, invalid_tileset};
use crate::spatial::Grid;

/// A validated 16-tile horizontal strip
#[derive(Debug, Clone)]
pub struct Tileset {
    strip: RgbaImage,
    tile_size: u32,
}

impl Tileset {
    /// Validate an in-memory strip image
    ///
    /// # Errors
    ///
    /// Returns an error if the strip has zero height or its width is not
    /// exactly [`TILE_COUNT`] times its height.
    pub fn from_strip(strip: RgbaImage) -> Result<Self> {
        let tile_size = strip.height();
        if tile_size == 0 {
            return Err(invalid_tileset("tile strip has zero height"));
        }

        let expected_width = TILE_COUNT as u32 * tile_size;
        if strip.width() != expected_width {
            return Err(invalid_tileset(format!(
                "tile strip must hold {TILE_COUNT} square tiles ({expected_width}x{tile_size} pixels), got {}x{}",
                strip.width(),
                strip.height()
            )));
        }

        Ok(Self { strip, tile_size })
    }

    /// Load and validate a strip from a PNG file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be decoded or fails strip
    /// validation.
    pub fn from_png_path(path: &Path) -> Result<Self> {
        let strip = image::open(path)
            .map_err(|e| MazeError::TilesetLoad {
                path: path.to_path_buf(),
                source: e,
            })?
            .to_rgba8();

        Self::from_strip(strip)
    }

    /// Side length of one square tile in pixels
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    fn tile_pixel(&self, index: u8, px: u32, py: u32) -> Rgba<u8> {
        self.strip
            .get_pixel_checked(u32::from(index) * self.tile_size + px, py)
            .copied()
            .unwrap_or(Rgba([0, 0, 0, 0]))
    }
}

/// Compose the maze image for a finished grid
///
/// The output is square with side `grid.size() × tile_size`. Each cell's
/// wall encoding selects its tile from the strip; border cells always
/// encode 0, so the first tile forms the outer ring.
pub fn compose_maze_image(grid: &Grid, tileset: &Tileset) -> RgbaImage {
    let tile_size = tileset.tile_size();
    let extent = grid.size() as u32 * tile_size;
    let mut img = ImageBuffer::new(extent, extent);

    for ([row, col], cell) in grid.iter() {
        let index = walls_to_index(cell.walls());
        for py in 0..tile_size {
            for px in 0..tile_size {
                img.put_pixel(
                    col as u32 * tile_size + px,
                    row as u32 * tile_size + py,
                    tileset.tile_pixel(index, px, py),
                );
            }
        }
    }

    img
}

/// Render the grid through a tile strip and save it as a PNG
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be saved to the specified path.
pub fn render_maze_png(grid: &Grid, tileset: &Tileset, output_path: &str) -> Result<()> {
    let img = compose_maze_image(grid, tileset);

    if let Some(parent) = Path::new(output_path).parent() {
        std::fs::create_dir_all(parent).map_err(|e| MazeError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| MazeError::ImageExport {
        path: output_path.into(),
        source: e,
    })?;

    Ok(())
}
