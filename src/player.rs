//! # Player Module
//!
//! This module provides the player pose: where the player stands, where they
//! look, and which block they have selected. The pose is what turns input
//! state into pick rays; it knows nothing about windows, input devices, or
//! collision.

use std::f32::consts::FRAC_PI_2;

use cgmath::{Angle, InnerSpace, Point3, Rad, Vector3};

use crate::voxels::block::block_type::BlockType;
use crate::voxels::block::BlockTypeSize;

/// Safe limit for pitch to prevent gimbal lock
const SAFE_FRAC_PI_2: f32 = FRAC_PI_2 - 0.0001;

/// The player's pose in the world.
///
/// Position is an opaque whole triple: it is read and replaced as a unit via
/// `teleport`, never mutated one axis at a time. Yaw zero with pitch zero
/// looks toward negative Z; positive pitch looks downward.
#[derive(Debug, Clone)]
pub struct Player {
    /// The player's feet position in world space
    pub position: Point3<f32>,

    /// Horizontal rotation (around the Y axis)
    pub yaw: Rad<f32>,

    /// Vertical rotation (around the X axis), clamped short of vertical
    pub pitch: Rad<f32>,

    /// Height of the eyes above the feet, in blocks
    pub eye_height: f32,

    /// The block ID placed on a place action
    pub selected_block: BlockTypeSize,
}

impl Player {
    /// Creates a player standing at `position`, looking level toward
    /// negative Z, with stone selected.
    ///
    /// # Arguments
    /// * `position` - The feet position in world coordinates
    /// * `eye_height` - Eye height above the feet, in blocks
    pub fn new(position: Point3<f32>, eye_height: f32) -> Self {
        Player {
            position,
            yaw: Rad(0.0),
            pitch: Rad(0.0),
            eye_height,
            selected_block: BlockType::STONE as BlockTypeSize,
        }
    }

    /// The eye position pick rays originate from.
    pub fn eye_position(&self) -> Point3<f32> {
        Point3::new(
            self.position.x,
            self.position.y + self.eye_height,
            self.position.z,
        )
    }

    /// The normalized view direction derived from yaw and pitch.
    ///
    /// This is the direction the raycaster receives; it is guaranteed unit
    /// length and nonzero for any pose, which is what lets the raycaster
    /// skip validating it.
    pub fn look_direction(&self) -> Vector3<f32> {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();

        Vector3::new(sin_yaw * cos_pitch, -sin_pitch, -cos_yaw * cos_pitch).normalize()
    }

    /// Applies a mouse delta to yaw and pitch.
    ///
    /// Pitch is clamped just short of straight up and straight down so the
    /// view direction never degenerates.
    ///
    /// # Arguments
    /// * `dx` - Horizontal mouse movement
    /// * `dy` - Vertical mouse movement (positive pitches the view down)
    /// * `sensitivity` - Radians of rotation per unit of mouse movement
    pub fn rotate(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.yaw += Rad(dx * sensitivity);
        self.pitch += Rad(dy * sensitivity);
        self.pitch = Rad(self.pitch.0.clamp(-SAFE_FRAC_PI_2, SAFE_FRAC_PI_2));
    }

    /// Replaces the whole position at once.
    ///
    /// # Arguments
    /// * `position` - The new feet position in world coordinates
    pub fn teleport(&mut self, position: Point3<f32>) {
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Vector3<f32>, expected: Vector3<f32>) {
        assert!(
            (actual - expected).magnitude() < 1e-5,
            "expected {:?}, got {:?}",
            expected,
            actual
        );
    }

    #[test]
    fn level_pose_looks_toward_negative_z() {
        let player = Player::new(Point3::new(0.0, 0.0, 0.0), 1.6);
        assert_close(player.look_direction(), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn positive_pitch_looks_down() {
        let mut player = Player::new(Point3::new(0.0, 0.0, 0.0), 1.6);
        player.rotate(0.0, FRAC_PI_2, 1.0);
        assert_close(player.look_direction(), Vector3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn quarter_turn_yaw_looks_east() {
        let mut player = Player::new(Point3::new(0.0, 0.0, 0.0), 1.6);
        player.rotate(FRAC_PI_2, 0.0, 1.0);
        assert_close(player.look_direction(), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn look_direction_stays_normalized() {
        let mut player = Player::new(Point3::new(0.0, 0.0, 0.0), 1.6);
        for _ in 0..8 {
            player.rotate(0.7, 0.4, 0.5);
            let length = player.look_direction().magnitude();
            assert!((length - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn pitch_clamps_short_of_vertical() {
        let mut player = Player::new(Point3::new(0.0, 0.0, 0.0), 1.6);
        player.rotate(0.0, 100.0, 1.0);
        assert!(player.pitch.0 <= SAFE_FRAC_PI_2);

        // Even pinned at the clamp the direction keeps a horizontal trace.
        let direction = player.look_direction();
        assert!(direction.z < 0.0);
    }

    #[test]
    fn eye_sits_above_the_feet() {
        let player = Player::new(Point3::new(20.0, 3.0, 20.0), 1.6);
        assert_eq!(player.eye_position(), Point3::new(20.0, 4.6, 20.0));
    }

    #[test]
    fn teleport_replaces_the_whole_triple() {
        let mut player = Player::new(Point3::new(0.0, 0.0, 0.0), 1.6);
        player.teleport(Point3::new(5.0, 2.0, 7.0));
        assert_eq!(player.position, Point3::new(5.0, 2.0, 7.0));
    }
}
