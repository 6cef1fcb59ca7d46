/// Command-line interface and batch rendering
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types for generation and rendering
pub mod error;
/// Tile-strip loading and maze image composition
pub mod image;
/// Batch progress display
pub mod progress;
