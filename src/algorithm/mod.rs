/// Randomized depth-first maze carving
pub mod carver;
/// Wall configuration to tile index mapping
pub mod encoding;
