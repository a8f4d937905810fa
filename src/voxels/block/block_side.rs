//! # Block Side Module
//!
//! This module defines the six faces/sides of a voxel block and the neighbor
//! offsets used for face culling.

use cgmath::Vector3;

/// Represents the six possible faces of a voxel block.
///
/// Each variant corresponds to a specific face and is assigned a unique integer
/// value so it can index per-side tables such as the texture-index table.
///
/// The order is: [NORTH, SOUTH, BOTTOM, TOP, WEST, EAST]
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum BlockSide {
    /// The north face (facing negative Z)
    NORTH = 0,

    /// The south face (facing positive Z)
    SOUTH = 1,

    /// The bottom face (facing negative Y)
    BOTTOM = 2,

    /// The top face (facing positive Y)
    TOP = 3,

    /// The west face (facing negative X)
    WEST = 4,

    /// The east face (facing positive X)
    EAST = 5,
}

impl BlockSide {
    /// Returns an array containing all six block faces in a consistent order.
    ///
    /// This is useful for iterating over all possible faces of a block, as the
    /// mesh rebuild does for every solid cell.
    /// The order is: [NORTH, SOUTH, BOTTOM, TOP, WEST, EAST]
    pub fn all() -> [BlockSide; 6] {
        [
            BlockSide::NORTH,
            BlockSide::SOUTH,
            BlockSide::BOTTOM,
            BlockSide::TOP,
            BlockSide::WEST,
            BlockSide::EAST,
        ]
    }

    /// Unit offset from a cell to the neighbor this face looks at.
    ///
    /// A face is only visible when the neighbor cell in this direction is not
    /// solid, so culling tests the cell at `position + neighbor_offset()`.
    pub fn neighbor_offset(self) -> Vector3<i32> {
        match self {
            BlockSide::NORTH => Vector3::new(0, 0, -1),
            BlockSide::SOUTH => Vector3::new(0, 0, 1),
            BlockSide::BOTTOM => Vector3::new(0, -1, 0),
            BlockSide::TOP => Vector3::new(0, 1, 0),
            BlockSide::WEST => Vector3::new(-1, 0, 0),
            BlockSide::EAST => Vector3::new(1, 0, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_each_side_once_in_discriminant_order() {
        let sides = BlockSide::all();
        for (index, side) in sides.iter().enumerate() {
            assert_eq!(*side as usize, index);
        }
    }

    #[test]
    fn neighbor_offsets_are_unit_axis_steps() {
        for side in BlockSide::all() {
            let offset = side.neighbor_offset();
            let length = offset.x.abs() + offset.y.abs() + offset.z.abs();
            assert_eq!(length, 1);
        }
    }

    #[test]
    fn opposite_sides_have_opposite_offsets() {
        let pairs = [
            (BlockSide::NORTH, BlockSide::SOUTH),
            (BlockSide::BOTTOM, BlockSide::TOP),
            (BlockSide::WEST, BlockSide::EAST),
        ];
        for (a, b) in pairs {
            assert_eq!(a.neighbor_offset(), -b.neighbor_offset());
        }
    }
}
