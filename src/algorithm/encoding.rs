//! Wall configuration to tile index mapping

/// Fold a cell's wall array into a tile-strip index
///
/// Bit `i` of the result is set when the wall at index `i` (North, East,
/// South, West) has been removed, giving each of the 16 possible wall
/// configurations a distinct index in `0..16`. Renderers rely on this
/// bijection to locate a cell's tile at horizontal offset
/// `index × tile_size` in a strip image.
pub fn walls_to_index(walls: [bool; 4]) -> u8 {
    walls
        .iter()
        .enumerate()
        .fold(0, |index, (bit, &wall)| index | (u8::from(!wall) << bit))
}
