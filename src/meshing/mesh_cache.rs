//! # Mesh Cache Module
//!
//! This module derives the renderable face list from a voxel grid and caches
//! it until the grid changes. This is the one piece of cached derived state in
//! the world core, and it has a single owner: the world façade.
//!
//! ## Visibility Algorithm
//!
//! The rebuild performs hidden surface removal by neighbor occupancy: a face
//! is emitted for every solid cell whose neighbor in that face's direction is
//! not solid. Faces between two solid blocks are never emitted regardless of
//! camera position, and faces on the grid boundary are always emitted because
//! out-of-bounds space counts as open air. This is not frustum or backface
//! culling; those belong to the renderer.
//!
//! ## Caching
//!
//! The cache has exactly two states, clean and dirty. `invalidate()` is the
//! only clean-to-dirty transition and a completed rebuild inside `faces()` is
//! the only dirty-to-clean transition. A rebuild scans the whole grid,
//! O(size_x * size_y * size_z); a clean read is O(1). Rebuilds are wholesale,
//! never partial, and the cached list is swapped in only once fully built, so
//! callers observe either the previous complete face set or the new one.

use std::time::Instant;

use cgmath::Point3;
use log::debug;

use crate::voxels::block::block_side::BlockSide;
use crate::voxels::block::AIR_BLOCK;
use crate::voxels::grid::VoxelGrid;

use super::face::Face;

/// Caches the visible face list derived from a voxel grid.
///
/// Created dirty and empty, so the first `faces()` call performs the initial
/// build. The rebuild counter exists so callers (and tests) can observe how
/// often the grid was actually rescanned.
pub struct MeshCache {
    /// The cached face list, valid only while `dirty` is false.
    faces: Vec<Face>,

    /// Whether the cached list is stale relative to the grid.
    dirty: bool,

    /// Number of rebuilds performed since construction.
    rebuild_count: u64,
}

impl MeshCache {
    /// Creates a new, empty cache in the dirty state.
    pub fn new() -> Self {
        MeshCache {
            faces: Vec::new(),
            dirty: true,
            rebuild_count: 0,
        }
    }

    /// Marks the cached face list as stale.
    ///
    /// The next `faces()` call will rescan the grid. Calling this repeatedly
    /// without an intervening `faces()` is harmless; the rebuild happens once.
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Whether the next `faces()` call will rebuild.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Number of full rebuilds performed since construction.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuild_count
    }

    /// Returns the visible faces for the current grid contents.
    ///
    /// If the cache is dirty the whole grid is rescanned first; otherwise the
    /// cached list is returned unchanged. The returned sequence is ordered
    /// deterministically: cells in linear buffer order, the six sides in
    /// `BlockSide::all()` order within each cell.
    ///
    /// # Arguments
    /// * `grid` - The grid this cache derives from
    ///
    /// # Returns
    /// The complete face set implied by the current grid contents.
    pub fn faces(&mut self, grid: &VoxelGrid) -> &[Face] {
        if self.dirty {
            let rebuild_started = Instant::now();

            // Build into a fresh list and swap it in whole, so no caller can
            // observe a partially rebuilt cache.
            self.faces = Self::collect_faces(grid);
            self.dirty = false;
            self.rebuild_count += 1;

            debug!(
                "mesh cache rebuilt: {} faces from {} cells in {:?} (rebuild #{})",
                self.faces.len(),
                grid.cell_count(),
                rebuild_started.elapsed(),
                self.rebuild_count
            );
        }

        &self.faces
    }

    /// Scans the grid and emits one face per exposed side of each solid cell.
    fn collect_faces(grid: &VoxelGrid) -> Vec<Face> {
        let mut faces = Vec::new();

        // x innermost walks the linear block buffer contiguously.
        for z in 0..grid.size_z {
            for y in 0..grid.size_y {
                for x in 0..grid.size_x {
                    let btype = match grid.get(x, y, z) {
                        Some(btype) if btype != AIR_BLOCK => btype,
                        _ => continue,
                    };

                    for side in BlockSide::all() {
                        let neighbor = Point3::new(x, y, z) + side.neighbor_offset();
                        if !grid.is_solid(neighbor.x, neighbor.y, neighbor.z) {
                            faces.push(Face::new(x, y, z, btype, side));
                        }
                    }
                }
            }
        }

        faces
    }
}

impl Default for MeshCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::voxels::block::block_type::BlockType;
    use crate::voxels::block::BlockTypeSize;

    /// Recomputes the expected face set directly from the definition, with no
    /// caching involved.
    fn brute_force_faces(grid: &VoxelGrid) -> HashSet<Face> {
        let mut expected = HashSet::new();
        for z in 0..grid.size_z {
            for y in 0..grid.size_y {
                for x in 0..grid.size_x {
                    let btype = match grid.get(x, y, z) {
                        Some(btype) if btype != AIR_BLOCK => btype,
                        _ => continue,
                    };
                    for side in BlockSide::all() {
                        let offset = side.neighbor_offset();
                        if !grid.is_solid(x + offset.x, y + offset.y, z + offset.z) {
                            expected.insert(Face::new(x, y, z, btype, side));
                        }
                    }
                }
            }
        }
        expected
    }

    #[test]
    fn empty_grid_emits_no_faces() {
        let grid = VoxelGrid::empty(4, 4, 4);
        let mut cache = MeshCache::new();
        assert!(cache.faces(&grid).is_empty());
    }

    #[test]
    fn lone_block_emits_all_six_faces() {
        let mut grid = VoxelGrid::empty(5, 5, 5);
        grid.set(2, 2, 2, BlockType::STONE as BlockTypeSize);

        let mut cache = MeshCache::new();
        let faces = cache.faces(&grid);
        assert_eq!(faces.len(), 6);

        let sides: HashSet<BlockSide> = faces.iter().map(|face| face.block_side).collect();
        assert_eq!(sides.len(), 6);
    }

    #[test]
    fn buried_faces_are_never_emitted() {
        // Two stacked blocks share a hidden pair of faces.
        let mut grid = VoxelGrid::empty(3, 3, 3);
        grid.set(1, 0, 1, BlockType::STONE as BlockTypeSize);
        grid.set(1, 1, 1, BlockType::DIRT as BlockTypeSize);

        let mut cache = MeshCache::new();
        let faces: Vec<Face> = cache.faces(&grid).to_vec();

        assert_eq!(faces.len(), 10);
        assert!(!faces.contains(&Face::new(
            1,
            0,
            1,
            BlockType::STONE as BlockTypeSize,
            BlockSide::TOP
        )));
        assert!(!faces.contains(&Face::new(
            1,
            1,
            1,
            BlockType::DIRT as BlockTypeSize,
            BlockSide::BOTTOM
        )));
    }

    #[test]
    fn cached_faces_match_brute_force_recomputation() {
        fastrand::seed(7);
        let mut grid = VoxelGrid::scattered(6, 5, 6, 0.4);
        let mut cache = MeshCache::new();

        // Interleave mutations and reads; after every mutation the cache must
        // converge back to exactly the set implied by the grid.
        let edits = [
            (0, 0, 0, BlockType::STONE as BlockTypeSize),
            (5, 4, 5, BlockType::DIRT as BlockTypeSize),
            (3, 2, 3, AIR_BLOCK),
            (2, 2, 2, BlockType::DIRT as BlockTypeSize),
        ];

        for (x, y, z, btype) in edits {
            grid.set(x, y, z, btype);
            cache.invalidate();

            let cached: HashSet<Face> = cache.faces(&grid).iter().copied().collect();
            assert_eq!(cached, brute_force_faces(&grid));
        }
    }

    #[test]
    fn clean_reads_do_not_rescan() {
        let grid = VoxelGrid::layered(4, 3, 4);
        let mut cache = MeshCache::new();

        let first: Vec<Face> = cache.faces(&grid).to_vec();
        let second: Vec<Face> = cache.faces(&grid).to_vec();

        assert_eq!(first, second);
        assert_eq!(cache.rebuild_count(), 1);
    }

    #[test]
    fn invalidate_forces_exactly_one_rebuild() {
        let grid = VoxelGrid::layered(4, 3, 4);
        let mut cache = MeshCache::new();

        cache.faces(&grid);
        cache.invalidate();
        cache.invalidate();
        cache.faces(&grid);
        cache.faces(&grid);

        assert_eq!(cache.rebuild_count(), 2);
    }
}
