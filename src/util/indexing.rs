//! Mapping between pixel coordinates and linear buffer indices.
//! Buffers are row major, x varies fastest, matching `image` buffers.

use crate::util::*;

pub fn real_buffer_size(exclusive_bound: &Coord) -> usize {
    exclusive_bound.iter().map(|d| (*d).max(0) as usize).product()
}

pub fn coord_to_linear(coord: &Coord, exclusive_bounds: &Coord) -> usize {
    debug_assert!(coord[0] >= 0 && coord[1] >= 0);
    coord[1] as usize * exclusive_bounds[0] as usize + coord[0] as usize
}

pub fn linear_to_coord(linear_index: usize, exclusive_bounds: &Coord) -> Coord {
    let width = exclusive_bounds[0] as usize;
    Coord::new((linear_index % width) as i32, (linear_index / width) as i32)
}
