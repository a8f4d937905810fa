//! # Voxel Core
//!
//! This module contains the voxel world representation: the block palette,
//! the dense grid that stores block IDs, and the world façade that ties the
//! grid to the cached mesh derivation.
//!
//! ## Architecture
//!
//! * **Block**: the fixed palette of block types, face orientations, and the
//!   compact per-cell ID representation
//! * **Grid**: a fixed-size dense 3D array with bounds-checked access and a
//!   solidity bit mask for fast occupancy tests
//! * **World**: the single owner of grid plus mesh cache, coordinating
//!   mutation, invalidation, and pick rays

pub mod block;
pub mod grid;
pub mod world;
