//! Constants and runtime configuration defaults

/// Number of tiles in a strip, one per wall configuration
pub const TILE_COUNT: usize = 16;

/// Smallest grid with a non-degenerate interior
pub const MIN_GRID_SIZE: usize = 3;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 4_096;

/// Interior coordinate where carving starts
pub const START_CELL: [usize; 2] = [1, 1];

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default grid size in cells per side
pub const DEFAULT_GRID_SIZE: usize = 10;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_maze";
