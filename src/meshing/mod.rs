//! # Meshing Module
//!
//! This module turns voxel grid contents into renderable geometry. It provides
//! the visible-face representation, the cached face-list derivation, and the
//! vertex expansion consumed by the renderer collaborator.
//!
//! ## Data Flow
//!
//! 1. The world façade mutates the grid and invalidates the cache
//! 2. The next draw request asks the cache for the visible faces
//! 3. A dirty cache rescans the grid, culling every face that borders a
//!    solid neighbor
//! 4. The renderer expands the faces it receives into textured quads

pub mod face;
pub mod mesh_cache;
pub mod vertex;
