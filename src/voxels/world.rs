//! # World Module
//!
//! This module provides the `World` struct, the façade the rest of the
//! application talks to. It owns the voxel grid and the mesh cache and keeps
//! the two consistent: every mutation that actually changes a cell marks the
//! cached face list stale, and draw requests rebuild it lazily.
//!
//! ## Architecture
//!
//! The world is deliberately single-threaded and synchronous. All operations
//! run to completion on the calling thread; the grid and cache are mutated
//! only by the thread that also drives rendering and input, so no locking is
//! needed here.
//!
//! ## Data Flow
//!
//! 1. World receives block reads, edits, and pick requests
//! 2. Edits that change a value invalidate the mesh cache
//! 3. The next `visible_faces()` call rebuilds the face list once
//! 4. Picks traverse the grid read-only and never touch the cache

use cgmath::{Point3, Vector3};
use log::debug;

use crate::meshing::face::Face;
use crate::meshing::mesh_cache::MeshCache;
use crate::raycast::{self, Pick};

use super::block::BlockTypeSize;
use super::grid::VoxelGrid;

/// The voxel world: a grid of typed blocks plus the cached face list derived
/// from it.
///
/// # Examples
///
/// ```
/// use voxel_sandbox::voxels::world::World;
///
/// let mut world = World::new(4, 3, 4);
///
/// // Clear one dirt block and the cover below it becomes visible.
/// let faces_before = world.visible_faces().len();
/// world.set_block(2, 1, 2, 0);
/// assert_ne!(world.visible_faces().len(), faces_before);
/// ```
pub struct World {
    /// The block storage, fixed-size for the life of the world.
    grid: VoxelGrid,

    /// Cached renderable faces, rebuilt lazily after mutations.
    mesh_cache: MeshCache,
}

impl World {
    /// Creates a new world with the initial two-layer terrain.
    ///
    /// Layer `y = 0` is stone and layer `y = 1` is dirt, matching a freshly
    /// initialized sandbox. The mesh cache starts dirty, so the first
    /// `visible_faces()` call performs the initial build.
    ///
    /// # Arguments
    /// * `size_x`, `size_y`, `size_z` - The world dimensions in blocks
    pub fn new(size_x: i32, size_y: i32, size_z: i32) -> Self {
        Self::from_grid(VoxelGrid::layered(size_x, size_y, size_z))
    }

    /// Creates a world around an existing grid.
    ///
    /// # Arguments
    /// * `grid` - The grid the world takes ownership of
    pub fn from_grid(grid: VoxelGrid) -> Self {
        World {
            grid,
            mesh_cache: MeshCache::new(),
        }
    }

    /// Read access to the underlying grid.
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Gets the block ID at the specified cell.
    ///
    /// # Returns
    /// The stored ID, or `None` for out-of-bounds coordinates.
    pub fn get_block(&self, x: i32, y: i32, z: i32) -> Option<BlockTypeSize> {
        self.grid.get(x, y, z)
    }

    /// Sets the block at the specified cell.
    ///
    /// The mesh cache is invalidated only when the stored value actually
    /// changes: writing a cell's current value back succeeds without marking
    /// anything stale, so redundant edits cost no rebuild.
    ///
    /// # Arguments
    /// * `x`, `y`, `z` - The cell coordinates
    /// * `btype` - The block ID to store, `AIR_BLOCK` to clear the cell
    ///
    /// # Returns
    /// `true` if the write happened (including no-op rewrites), `false` for
    /// out-of-bounds coordinates.
    pub fn set_block(&mut self, x: i32, y: i32, z: i32, btype: BlockTypeSize) -> bool {
        match self.grid.get(x, y, z) {
            None => false,
            Some(current) if current == btype => true,
            Some(current) => {
                self.grid.set(x, y, z, btype);
                self.mesh_cache.invalidate();
                debug!(
                    "block at ({}, {}, {}) changed {} -> {}",
                    x, y, z, current, btype
                );
                true
            }
        }
    }

    /// Returns the faces visible under the current grid contents.
    ///
    /// Rebuilds the cached list first if any mutation invalidated it;
    /// otherwise this is a cheap cached read.
    pub fn visible_faces(&mut self) -> &[Face] {
        self.mesh_cache.faces(&self.grid)
    }

    /// Casts a pick ray through the world's grid.
    ///
    /// # Arguments
    /// * `origin` - Ray origin (eye position) in world coordinates
    /// * `direction` - Normalized ray direction
    /// * `max_distance` - Interaction range in blocks
    ///
    /// # Returns
    /// The first solid cell hit and the empty cell in front of it, if any.
    pub fn pick(&self, origin: Point3<f32>, direction: Vector3<f32>, max_distance: f32) -> Pick {
        raycast::cast(&self.grid, origin, direction, max_distance)
    }

    /// Number of full mesh rebuilds performed so far.
    ///
    /// Instrumentation for callers that want to confirm caching behavior.
    pub fn mesh_rebuild_count(&self) -> u64 {
        self.mesh_cache.rebuild_count()
    }
}
