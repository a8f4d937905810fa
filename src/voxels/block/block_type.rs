//! # Block Type Module
//!
//! This module defines the fixed palette of block types in the voxel world.
//! It provides functionality for block type identification and conversion from
//! both the compact stored form and the material names used in configuration.

use num_derive::FromPrimitive;

use super::BlockTypeSize;

/// Enumerates all block types in the voxel world.
///
/// The discriminants are the IDs stored in the grid, so `AIR` must remain `0`.
/// The `FromPrimitive` derive allows conversion from the raw stored integer,
/// which is how grid contents are mapped back to palette entries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, FromPrimitive)]
pub enum BlockType {
    /// An air block, which is non-solid and never rendered.
    AIR,

    /// A dirt block, forming the upper terrain layer.
    DIRT,

    /// A stone block, forming the world floor.
    STONE,
}

/// Maps material names to block types.
///
/// The names double as the texture names the renderer collaborator loads for
/// each material, and are what configuration files use to select a block.
pub static BLOCK_TYPE_BY_NAME: phf::Map<&'static str, BlockType> = phf::phf_map! {
    "air" => BlockType::AIR,
    "dirt" => BlockType::DIRT,
    "stone" => BlockType::STONE,
};

impl BlockType {
    /// Converts a `BlockTypeSize` to a `BlockType`.
    ///
    /// This is typically used when mapping raw grid contents back to the
    /// palette, for example when choosing textures for a face.
    ///
    /// # Arguments
    /// * `btype` - The block type as a `BlockTypeSize`
    ///
    /// # Returns
    /// The corresponding `BlockType`, or `None` for IDs outside the palette.
    /// The grid accepts any nonzero ID, so callers must handle the gap.
    pub fn get_block_type_from_int(btype: BlockTypeSize) -> Option<Self> {
        num::FromPrimitive::from_u8(btype)
    }

    /// Looks up a block type by its material name.
    ///
    /// # Arguments
    /// * `name` - A material name such as `"dirt"` or `"stone"`
    ///
    /// # Returns
    /// The matching `BlockType`, or `None` if the name is unknown.
    pub fn get_block_type_from_name(name: &str) -> Option<Self> {
        BLOCK_TYPE_BY_NAME.get(name).copied()
    }

    /// Whether a block of this type occupies its cell.
    ///
    /// Everything except `AIR` is solid; the palette has no translucent or
    /// partial blocks.
    pub fn is_solid(self) -> bool {
        self != BlockType::AIR
    }
}
