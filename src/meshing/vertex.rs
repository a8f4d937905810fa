//! Vertex data for the renderer collaborator.
//!
//! This module defines the vertex format produced when visible faces are
//! expanded to quads. The layout is plain-old-data so a renderer can upload
//! slices of it directly.

use cgmath::Point3;

/// A renderer-ready vertex produced from a visible face.
///
/// Cell geometry is integral, so positions stay as integers; the renderer
/// decides how a texture index maps to an actual texture.
///
/// # Memory Layout
/// - Position: 3x i32 (12 bytes)
/// - Texture Index: u32 (4 bytes)
/// - Texture Coordinates: [f32; 2] (8 bytes)
///
/// Total size: 24 bytes
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// X coordinate in world space
    x: i32,
    /// Y coordinate in world space
    y: i32,
    /// Z coordinate in world space
    z: i32,
    /// Index of the texture for the face this vertex belongs to
    texture_index: u32,
    /// UV texture coordinates (normalized 0.0-1.0)
    tex_coords: [f32; 2],
}

impl Vertex {
    /// Creates a new vertex with the given parameters.
    ///
    /// # Arguments
    /// * `pos` - The 3D position of the vertex in world space
    /// * `texture_index` - Index of the texture for the owning face
    /// * `u` - U texture coordinate (0 or 1, quad corners only)
    /// * `v` - V texture coordinate (0 or 1, quad corners only)
    ///
    /// # Returns
    /// A new `Vertex` instance
    pub fn new(pos: Point3<i32>, texture_index: usize, u: u8, v: u8) -> Self {
        Vertex {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            texture_index: texture_index as u32,
            tex_coords: [u as f32, v as f32],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }

    #[test]
    fn construction_preserves_position_and_texture() {
        let vertex = Vertex::new(Point3::new(1, 2, 3), 2, 1, 0);
        assert_eq!(
            vertex,
            Vertex {
                x: 1,
                y: 2,
                z: 3,
                texture_index: 2,
                tex_coords: [1.0, 0.0],
            }
        );
    }
}
