//! # Block Module
//!
//! This module provides the core block-related functionality for the voxel
//! world. It includes the compact block ID representation, the block type and
//! face enumerations, and the per-face texture lookup consumed by the
//! renderer collaborator.

use block_type::BlockType;

pub mod block_side;
pub mod block_type;

/// The underlying integer type used to represent block types in the grid.
/// This is used for efficient storage of block data, one byte per cell.
pub type BlockTypeSize = u8;

/// The reserved block ID meaning "empty / no block".
pub const AIR_BLOCK: BlockTypeSize = 0;

/// Maps each block type to its corresponding texture indices for each face.
///
/// The outer array is indexed by `BlockType` as a `usize`.
/// The inner array contains 6 texture indices, one for each face in
/// `BlockSide` order: [North, South, Bottom, Top, West, East].
///
/// Both terrain materials currently use a single texture on all six sides;
/// the row for `AIR` exists only to keep the indexing direct and is never
/// read for rendering.
pub static BLOCK_TYPE_TO_TEXTURE_INDICES: [[usize; 6]; 3] = [
    [0, 0, 0, 0, 0, 0], // AIR (unused)
    [1, 1, 1, 1, 1, 1], // DIRT
    [2, 2, 2, 2, 2, 2], // STONE
];

/// Gets the texture indices for all faces of a block given its raw ID.
///
/// This is a convenience lookup into `BLOCK_TYPE_TO_TEXTURE_INDICES`.
///
/// # Arguments
/// * `btype_int` - The block type as a `BlockTypeSize`
///
/// # Returns
/// An array of 6 texture indices, one for each face of the block. IDs outside
/// the palette fall back to the first row rather than panicking, since the
/// grid accepts any nonzero ID and material mapping for unknown IDs belongs
/// to the renderer collaborator.
pub fn get_texture_indices_from_int(btype_int: BlockTypeSize) -> [usize; 6] {
    match BlockType::get_block_type_from_int(btype_int) {
        Some(btype) => BLOCK_TYPE_TO_TEXTURE_INDICES[btype as usize],
        None => BLOCK_TYPE_TO_TEXTURE_INDICES[0],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_rows_resolve_by_block_type() {
        assert_eq!(
            get_texture_indices_from_int(BlockType::DIRT as BlockTypeSize),
            [1, 1, 1, 1, 1, 1]
        );
        assert_eq!(
            get_texture_indices_from_int(BlockType::STONE as BlockTypeSize),
            [2, 2, 2, 2, 2, 2]
        );
    }

    #[test]
    fn unknown_ids_fall_back_instead_of_panicking() {
        assert_eq!(get_texture_indices_from_int(200), [0, 0, 0, 0, 0, 0]);
    }
}
