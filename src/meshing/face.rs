use cgmath::Point3;

use crate::voxels::block::block_side::BlockSide;
use crate::voxels::block::{get_texture_indices_from_int, BlockTypeSize};

use super::vertex::Vertex;

/// A single visible quad face of a solid voxel.
///
/// A face exists only for a solid cell whose neighbor in the face's direction
/// is empty or outside the grid. Faces carry no identity across cache
/// rebuilds; the whole set is recomputed wholesale when the grid changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face {
    /// Cell coordinates of the voxel this face belongs to
    pub position: Point3<i32>,
    /// Which side of the voxel this face covers
    pub block_side: BlockSide,
    /// The block type as stored in the grid, used for texture mapping
    pub block_type_int: BlockTypeSize,
}

impl Face {
    /// Creates a face for the voxel at the given cell coordinates.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - The cell coordinates of the voxel
    /// * `block_type_int` - The type of the block, used for texture mapping
    /// * `block_side` - Which side of the block this face represents
    pub fn new(x: i32, y: i32, z: i32, block_type_int: BlockTypeSize, block_side: BlockSide) -> Self {
        Face {
            position: Point3::new(x, y, z),
            block_side,
            block_type_int,
        }
    }

    /// The four corner points of the quad in lower-left, lower-right,
    /// upper-right, upper-left order, wound counter-clockwise as seen from
    /// outside the block.
    pub fn corners(&self) -> [Point3<i32>; 4] {
        let Point3 { x, y, z } = self.position;

        match self.block_side {
            BlockSide::NORTH => [
                Point3::new(x + 1, y, z),
                Point3::new(x, y, z),
                Point3::new(x, y + 1, z),
                Point3::new(x + 1, y + 1, z),
            ],

            BlockSide::SOUTH => [
                Point3::new(x, y, z + 1),
                Point3::new(x + 1, y, z + 1),
                Point3::new(x + 1, y + 1, z + 1),
                Point3::new(x, y + 1, z + 1),
            ],

            BlockSide::BOTTOM => [
                Point3::new(x, y, z),
                Point3::new(x + 1, y, z),
                Point3::new(x + 1, y, z + 1),
                Point3::new(x, y, z + 1),
            ],

            BlockSide::TOP => [
                Point3::new(x, y + 1, z + 1),
                Point3::new(x + 1, y + 1, z + 1),
                Point3::new(x + 1, y + 1, z),
                Point3::new(x, y + 1, z),
            ],

            BlockSide::WEST => [
                Point3::new(x, y, z),
                Point3::new(x, y, z + 1),
                Point3::new(x, y + 1, z + 1),
                Point3::new(x, y + 1, z),
            ],

            BlockSide::EAST => [
                Point3::new(x + 1, y, z + 1),
                Point3::new(x + 1, y, z),
                Point3::new(x + 1, y + 1, z),
                Point3::new(x + 1, y + 1, z + 1),
            ],
        }
    }

    /// Expands the face to four renderer-ready vertices.
    ///
    /// The texture index is looked up from the block palette for this face's
    /// side, and UVs cover the full texture across the quad.
    pub fn vertices(&self) -> [Vertex; 4] {
        let texture_index =
            get_texture_indices_from_int(self.block_type_int)[self.block_side as usize];
        let [ll, lr, ur, ul] = self.corners();

        [
            Vertex::new(ll, texture_index, 0, 0),
            Vertex::new(lr, texture_index, 1, 0),
            Vertex::new(ur, texture_index, 1, 1),
            Vertex::new(ul, texture_index, 0, 1),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxels::block::block_type::BlockType;

    #[test]
    fn top_face_corners_lie_on_the_upper_plane() {
        let face = Face::new(2, 1, 3, BlockType::DIRT as BlockTypeSize, BlockSide::TOP);
        for corner in face.corners() {
            assert_eq!(corner.y, 2);
            assert!(corner.x == 2 || corner.x == 3);
            assert!(corner.z == 3 || corner.z == 4);
        }
    }

    #[test]
    fn east_face_corners_lie_on_the_far_x_plane() {
        let face = Face::new(0, 0, 0, BlockType::STONE as BlockTypeSize, BlockSide::EAST);
        for corner in face.corners() {
            assert_eq!(corner.x, 1);
        }
    }

    #[test]
    fn each_side_spans_four_distinct_corners() {
        for side in BlockSide::all() {
            let face = Face::new(1, 1, 1, BlockType::STONE as BlockTypeSize, side);
            let corners = face.corners();
            for i in 0..4 {
                for j in (i + 1)..4 {
                    assert_ne!(corners[i], corners[j], "{:?} repeats a corner", side);
                }
            }
        }
    }

    #[test]
    fn vertices_carry_the_palette_texture_index() {
        let face = Face::new(0, 0, 0, BlockType::STONE as BlockTypeSize, BlockSide::TOP);
        let expected = Vertex::new(Point3::new(0, 1, 1), 2, 0, 0);
        assert_eq!(face.vertices()[0], expected);
    }
}
