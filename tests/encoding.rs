//! Validates the bijection between wall configurations and tile indices

use mazetile::algorithm::encoding::walls_to_index;
use mazetile::spatial::cell::Direction;
use std::collections::HashSet;

// Reconstructs the wall array whose encoding should equal `bits`
fn walls_for_bits(bits: u8) -> [bool; 4] {
    [
        bits & 0b0001 == 0,
        bits & 0b0010 == 0,
        bits & 0b0100 == 0,
        bits & 0b1000 == 0,
    ]
}

#[test]
fn test_all_sixteen_configurations_map_uniquely() {
    let mut seen = HashSet::new();

    for bits in 0..16u8 {
        let index = walls_to_index(walls_for_bits(bits));
        assert_eq!(index, bits);
        assert!(seen.insert(index));
    }

    assert_eq!(seen.len(), 16);
}

#[test]
fn test_fully_walled_cell_encodes_zero() {
    assert_eq!(walls_to_index([true; 4]), 0);
}

#[test]
fn test_fully_open_cell_encodes_fifteen() {
    assert_eq!(walls_to_index([false; 4]), 15);
}

#[test]
fn test_wall_indices_match_encoding_bit_order() {
    for (expected, direction) in Direction::ALL.into_iter().enumerate() {
        assert_eq!(direction.index(), expected);

        let mut walls = [true; 4];
        if let Some(wall) = walls.get_mut(direction.index()) {
            *wall = false;
        }
        assert_eq!(walls_to_index(walls), 1 << expected);
    }
}

#[test]
fn test_each_open_wall_sets_its_own_bit() {
    // Index order North, East, South, West maps onto bits 0 through 3
    assert_eq!(walls_to_index([false, true, true, true]), 1);
    assert_eq!(walls_to_index([true, false, true, true]), 2);
    assert_eq!(walls_to_index([true, true, false, true]), 4);
    assert_eq!(walls_to_index([true, true, true, false]), 8);
}
