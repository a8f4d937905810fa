//! # Raycast Module
//!
//! This module steps a ray through world space against a voxel grid to find
//! the first solid cell and the empty cell just in front of it. The pair is
//! what block interaction needs: break the hit cell, or place into the cell
//! the ray passed through last.
//!
//! The march samples the ray at a constant small increment rather than
//! walking cell boundaries exactly. The step constant is load-bearing: a
//! sample lands inside every cell the ray crosses only while the step stays
//! well under one cell width, so thin geometry depends on it staying small.

use cgmath::{Point3, Vector3};

use crate::voxels::grid::VoxelGrid;

/// Distance between consecutive samples along the ray, in cell widths.
pub const RAY_STEP: f32 = 0.01;

/// Result of casting a pick ray into the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pick {
    /// The first solid cell the ray entered, if any
    pub hit_cell: Option<Point3<i32>>,

    /// The empty in-bounds cell the ray passed through immediately before
    /// the hit, used as the insertion point when placing a block. Absent when
    /// the ray started inside a solid cell or the preceding sample fell
    /// outside the grid.
    pub place_cell: Option<Point3<i32>>,
}

impl Pick {
    /// A pick that found nothing within range.
    pub fn miss() -> Self {
        Pick {
            hit_cell: None,
            place_cell: None,
        }
    }

    /// Whether the ray found a solid cell.
    pub fn is_hit(&self) -> bool {
        self.hit_cell.is_some()
    }
}

/// Marches a ray through the grid and reports the first solid cell.
///
/// `direction` must be normalized and nonzero. The collaborator producing
/// view directions guarantees that, so no re-normalization or validation
/// happens here.
///
/// # Arguments
/// * `grid` - The grid to march through
/// * `origin` - Ray origin (eye position) in world coordinates
/// * `direction` - Normalized ray direction
/// * `max_distance` - How far the ray travels before giving up
///
/// # Returns
/// A `Pick` carrying the hit cell and its empty predecessor. Both are absent
/// when nothing solid lies within `max_distance`. The march passes straight
/// through out-of-bounds space, so a ray can enter the grid from outside.
pub fn cast(
    grid: &VoxelGrid,
    origin: Point3<f32>,
    direction: Vector3<f32>,
    max_distance: f32,
) -> Pick {
    let steps = (max_distance / RAY_STEP) as i32;

    for i in 0..steps {
        let sample = origin + direction * (RAY_STEP * i as f32);
        let cell = to_cell(sample);

        if grid.is_solid(cell.x, cell.y, cell.z) {
            // The first sample has no predecessor: a ray born inside a solid
            // cell reports the hit but no placement point.
            let place_cell = if i == 0 {
                None
            } else {
                let previous = to_cell(origin + direction * (RAY_STEP * (i - 1) as f32));
                if grid.in_bounds(previous.x, previous.y, previous.z) {
                    Some(previous)
                } else {
                    None
                }
            };

            return Pick {
                hit_cell: Some(cell),
                place_cell,
            };
        }
    }

    Pick::miss()
}

/// Truncates a continuous sample point toward the grid origin, yielding the
/// cell the point is attributed to.
fn to_cell(point: Point3<f32>) -> Point3<i32> {
    Point3::new(point.x as i32, point.y as i32, point.z as i32)
}
