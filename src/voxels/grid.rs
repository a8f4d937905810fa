//! # Voxel Grid Module
//!
//! This module provides the `VoxelGrid` struct, a dense fixed-size 3D array of
//! block IDs with bounds-checked accessors. It is the single source of truth
//! for world contents; everything renderable is derived from it.
//!
//! ## Storage
//!
//! Cells live in one contiguous linear buffer indexed by
//! `x + size_x * (y + size_y * z)`, so iterating with `x` innermost walks the
//! buffer front to back. A bit vector mirrors the buffer with one solidity bit
//! per cell:
//! - `blocks`: one `BlockTypeSize` per cell, `AIR_BLOCK` for empty cells
//! - `solid_array`: 1 bit per cell, set exactly when the cell is not air
//!
//! The mesh rebuild and the raycaster only ever ask "is this cell solid?",
//! and the bit vector answers that from 1/8th of the memory traffic of the ID
//! buffer. `set` keeps the two in lockstep.
//!
//! ## Bounds
//!
//! Coordinates outside `0..size` on any axis are not an error condition:
//! `get` reports absence, `set` reports failure, and `is_solid` reports open
//! air, which is what makes faces on the grid boundary render.

use bitvec::prelude::BitVec;

use super::block::block_type::BlockType;
use super::block::{BlockTypeSize, AIR_BLOCK};

/// A dense, fixed-size 3D grid of block IDs.
///
/// Dimensions are fixed at construction; there is no resizing. Every in-bounds
/// coordinate triple holds exactly one block ID, with `AIR_BLOCK` meaning the
/// cell is empty.
pub struct VoxelGrid {
    /// The grid extent along X, in blocks.
    pub size_x: i32,

    /// The grid extent along Y, in blocks.
    pub size_y: i32,

    /// The grid extent along Z, in blocks.
    pub size_z: i32,

    /// One block ID per cell, in `x + size_x * (y + size_y * z)` order.
    blocks: Vec<BlockTypeSize>,

    /// A bit vector where each bit represents whether the corresponding cell
    /// is solid (1) or air (0), in the same order as `blocks`.
    solid_array: BitVec,
}

impl VoxelGrid {
    /// Creates a new grid with every cell empty.
    ///
    /// # Arguments
    /// * `size_x`, `size_y`, `size_z` - The grid dimensions in blocks
    ///
    /// # Returns
    /// A new `VoxelGrid` filled with air.
    ///
    /// # Panics
    /// Panics if any dimension is not positive.
    pub fn empty(size_x: i32, size_y: i32, size_z: i32) -> Self {
        assert!(
            size_x > 0 && size_y > 0 && size_z > 0,
            "grid dimensions must be positive, got {}x{}x{}",
            size_x,
            size_y,
            size_z
        );

        let cell_count = (size_x * size_y * size_z) as usize;
        VoxelGrid {
            size_x,
            size_y,
            size_z,
            blocks: vec![AIR_BLOCK; cell_count],
            solid_array: BitVec::repeat(false, cell_count),
        }
    }

    /// Creates a new grid with the initial terrain pattern.
    ///
    /// Layer `y = 0` is stone, layer `y = 1` is dirt, everything above is air.
    /// This is the pattern every fresh world starts from.
    ///
    /// # Arguments
    /// * `size_x`, `size_y`, `size_z` - The grid dimensions in blocks
    ///
    /// # Returns
    /// A new `VoxelGrid` with the two-layer ground in place.
    pub fn layered(size_x: i32, size_y: i32, size_z: i32) -> Self {
        let mut grid = Self::empty(size_x, size_y, size_z);

        for z in 0..size_z {
            for x in 0..size_x {
                grid.set(x, 0, z, BlockType::STONE as BlockTypeSize);
                if size_y > 1 {
                    grid.set(x, 1, z, BlockType::DIRT as BlockTypeSize);
                }
            }
        }

        grid
    }

    /// Creates a new grid completely filled with stone (for testing).
    ///
    /// # Arguments
    /// * `size_x`, `size_y`, `size_z` - The grid dimensions in blocks
    ///
    /// # Returns
    /// A new `VoxelGrid` with every cell solid.
    #[allow(dead_code)]
    pub fn solid(size_x: i32, size_y: i32, size_z: i32) -> Self {
        let mut grid = Self::empty(size_x, size_y, size_z);

        for z in 0..size_z {
            for y in 0..size_y {
                for x in 0..size_x {
                    grid.set(x, y, z, BlockType::STONE as BlockTypeSize);
                }
            }
        }

        grid
    }

    /// Creates a new grid with randomly scattered dirt blocks (for testing).
    ///
    /// # Arguments
    /// * `size_x`, `size_y`, `size_z` - The grid dimensions in blocks
    /// * `fill_probability` - Chance in `0.0..=1.0` that any given cell is
    ///   filled
    ///
    /// # Returns
    /// A new `VoxelGrid` with roughly `fill_probability` of its cells solid.
    #[allow(dead_code)]
    pub fn scattered(size_x: i32, size_y: i32, size_z: i32, fill_probability: f64) -> Self {
        let mut grid = Self::empty(size_x, size_y, size_z);

        for z in 0..size_z {
            for y in 0..size_y {
                for x in 0..size_x {
                    if fastrand::f64() < fill_probability {
                        grid.set(x, y, z, BlockType::DIRT as BlockTypeSize);
                    }
                }
            }
        }

        grid
    }

    /// Whether the coordinate triple lies inside the grid.
    pub fn in_bounds(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0 && x < self.size_x && y >= 0 && y < self.size_y && z >= 0 && z < self.size_z
    }

    /// Gets the block ID at the specified coordinates.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - The cell coordinates
    ///
    /// # Returns
    /// The stored ID if the coordinates are in bounds, `None` otherwise.
    /// Absence is a normal result, not an error.
    pub fn get(&self, x: i32, y: i32, z: i32) -> Option<BlockTypeSize> {
        if !self.in_bounds(x, y, z) {
            return None;
        }
        Some(self.blocks[self.cell_index(x, y, z)])
    }

    /// Sets the block ID at the specified coordinates.
    ///
    /// Writing a cell's current value back is a valid no-op and still reports
    /// success. The solidity bit is kept in lockstep with the ID buffer.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - The cell coordinates
    /// * `btype` - The block ID to store, `AIR_BLOCK` to clear the cell
    ///
    /// # Returns
    /// `true` if the write happened, `false` (and no mutation) if the
    /// coordinates are out of bounds.
    pub fn set(&mut self, x: i32, y: i32, z: i32, btype: BlockTypeSize) -> bool {
        if !self.in_bounds(x, y, z) {
            return false;
        }

        let index = self.cell_index(x, y, z);
        self.blocks[index] = btype;
        self.solid_array.set(index, btype != AIR_BLOCK);
        true
    }

    /// Checks if the cell at the specified coordinates is solid.
    ///
    /// Out-of-bounds cells count as NOT solid: the space beyond the grid is
    /// treated as open air, so faces on the grid boundary are exposed.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - The cell coordinates
    ///
    /// # Returns
    /// `true` if the cell holds a non-air block, `false` if it is air or out
    /// of bounds.
    pub fn is_solid(&self, x: i32, y: i32, z: i32) -> bool {
        if !self.in_bounds(x, y, z) {
            return false;
        }
        self.solid_array[self.cell_index(x, y, z)]
    }

    /// The total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.blocks.len()
    }

    /// Linear index of an in-bounds cell in the block buffer.
    fn cell_index(&self, x: i32, y: i32, z: i32) -> usize {
        (x + self.size_x * (y + self.size_y * z)) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_what_set_stored() {
        let mut grid = VoxelGrid::empty(4, 3, 4);

        for (x, y, z) in [(0, 0, 0), (3, 2, 3), (1, 2, 0)] {
            assert!(grid.set(x, y, z, BlockType::DIRT as BlockTypeSize));
            assert_eq!(grid.get(x, y, z), Some(BlockType::DIRT as BlockTypeSize));
        }
    }

    #[test]
    fn out_of_bounds_set_fails_and_mutates_nothing() {
        let mut grid = VoxelGrid::layered(4, 3, 4);
        let before: Vec<Option<BlockTypeSize>> = (0..4)
            .flat_map(|z| (0..3).flat_map(move |y| (0..4).map(move |x| (x, y, z))))
            .map(|(x, y, z)| grid.get(x, y, z))
            .collect();

        for (x, y, z) in [(-1, 0, 0), (4, 0, 0), (0, 3, 0), (0, 0, 4), (0, -1, 0)] {
            assert!(!grid.set(x, y, z, BlockType::STONE as BlockTypeSize));
        }

        let after: Vec<Option<BlockTypeSize>> = (0..4)
            .flat_map(|z| (0..3).flat_map(move |y| (0..4).map(move |x| (x, y, z))))
            .map(|(x, y, z)| grid.get(x, y, z))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn out_of_bounds_get_reports_absence() {
        let grid = VoxelGrid::layered(4, 3, 4);
        assert_eq!(grid.get(-1, 0, 0), None);
        assert_eq!(grid.get(0, 0, 4), None);
    }

    #[test]
    fn out_of_bounds_counts_as_open_air() {
        let grid = VoxelGrid::solid(2, 2, 2);
        assert!(grid.is_solid(0, 0, 0));
        assert!(!grid.is_solid(-1, 0, 0));
        assert!(!grid.is_solid(0, 2, 0));
        assert!(!grid.is_solid(0, 0, -1));
    }

    #[test]
    fn layered_grid_has_stone_floor_and_dirt_cover() {
        let grid = VoxelGrid::layered(4, 3, 4);

        for z in 0..4 {
            for x in 0..4 {
                assert_eq!(grid.get(x, 0, z), Some(BlockType::STONE as BlockTypeSize));
                assert_eq!(grid.get(x, 1, z), Some(BlockType::DIRT as BlockTypeSize));
                assert_eq!(grid.get(x, 2, z), Some(AIR_BLOCK));
            }
        }
    }

    #[test]
    fn solidity_bit_follows_the_stored_id() {
        let mut grid = VoxelGrid::empty(3, 3, 3);

        assert!(!grid.is_solid(1, 1, 1));
        grid.set(1, 1, 1, BlockType::STONE as BlockTypeSize);
        assert!(grid.is_solid(1, 1, 1));
        grid.set(1, 1, 1, AIR_BLOCK);
        assert!(!grid.is_solid(1, 1, 1));
    }

    #[test]
    fn rewriting_the_same_value_reports_success() {
        let mut grid = VoxelGrid::layered(4, 3, 4);
        assert!(grid.set(2, 0, 2, BlockType::STONE as BlockTypeSize));
        assert_eq!(grid.get(2, 0, 2), Some(BlockType::STONE as BlockTypeSize));
    }
}
