#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_rust_codeblocks)]

//! # Voxel Sandbox
//!
//! The world core of a minimal first-person voxel viewer/editor: a dense 3D
//! grid of typed blocks, face-culled mesh derivation with caching, and the
//! ray picking that drives block breaking and placement.
//!
//! ## Key Modules
//!
//! * `voxels` - Block palette, dense grid storage, and the world façade
//! * `meshing` - Visible-face derivation, caching, and vertex expansion
//! * `raycast` - Fixed-step ray marching for block picking
//! * `player` - The pose that turns view state into pick rays
//! * `settings` - JSON-configurable world and interaction parameters
//!
//! ## Architecture
//!
//! The world façade owns the grid and the mesh cache and is the only writer
//! of either. Mutations that change a cell invalidate the cache; the next
//! draw request rebuilds the face list in one pass over the grid. Everything
//! outward of that (windowing, input polling, GPU upload, texture files)
//! belongs to collaborators, not this crate.
//!
//! ## Usage
//!
//! ```
//! use cgmath::{Point3, Vector3};
//! use voxel_sandbox::voxels::world::World;
//!
//! let mut world = World::new(8, 6, 8);
//!
//! // Break whatever the view ray hits first.
//! let pick = world.pick(
//!     Point3::new(4.0, 5.0, 4.0),
//!     Vector3::new(0.0, -1.0, 0.0),
//!     5.0,
//! );
//! if let Some(hit) = pick.hit_cell {
//!     world.set_block(hit.x, hit.y, hit.z, 0);
//! }
//!
//! // Hand the visible quads to a renderer.
//! for face in world.visible_faces() {
//!     let _quad = face.vertices();
//! }
//! ```

use cgmath::Point3;
use log::{info, warn};

use player::Player;
use settings::Settings;
use voxels::block::AIR_BLOCK;
use voxels::world::World;

pub mod meshing;
pub mod player;
pub mod raycast;
pub mod settings;
pub mod voxels;

/// Environment variable naming an optional JSON settings file.
pub const SETTINGS_ENV_VAR: &str = "VOXEL_SANDBOX_SETTINGS";

/// Initializes logging, builds a world from settings, and runs a short
/// edit/pick exercise against it.
///
/// This is the driver behind the `voxel-sandbox` binary. It stands in for
/// the windowed front end: everything it does (build the world, aim a ray
/// from the player pose, break the hit block, place the selected block)
/// is exactly the call sequence an interactive session performs per input
/// event.
pub fn run() {
    let mut log_builder = env_logger::Builder::new();
    log_builder
        .target(env_logger::Target::Stdout)
        .parse_env("RUST_LOG")
        .init();

    info!("Logger initialized");

    let settings = match std::env::var(SETTINGS_ENV_VAR) {
        Ok(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(error) => {
                warn!("falling back to default settings: {}", error);
                Settings::default()
            }
        },
        Err(_) => Settings::default(),
    };

    let mut world = World::new(
        settings.world_size_x,
        settings.world_size_y,
        settings.world_size_z,
    );
    let mut player = Player::new(
        Point3::from(settings.spawn_position),
        settings.player_eye_height,
    );
    if let Ok(selected) = settings.selected_block_type() {
        player.selected_block = selected;
    }

    info!(
        "world {}x{}x{} initialized, {} visible faces",
        settings.world_size_x,
        settings.world_size_y,
        settings.world_size_z,
        world.visible_faces().len()
    );

    // Look down at the terrain in front of the spawn point.
    player.rotate(0.0, 450.0, settings.mouse_sensitivity);

    let pick = world.pick(
        player.eye_position(),
        player.look_direction(),
        settings.interaction_distance,
    );

    if let Some(hit) = pick.hit_cell {
        world.set_block(hit.x, hit.y, hit.z, AIR_BLOCK);
        info!("broke block at ({}, {}, {})", hit.x, hit.y, hit.z);
    }
    if let Some(place) = pick.place_cell {
        world.set_block(place.x, place.y, place.z, player.selected_block);
        info!("placed block at ({}, {}, {})", place.x, place.y, place.z);
    }

    let faces = world.visible_faces();
    let quad_count = faces.len();
    let vertex_count = faces.iter().flat_map(|face| face.vertices()).count();
    info!(
        "{} visible faces ({} vertices) after edits, {} mesh rebuilds",
        quad_count,
        vertex_count,
        world.mesh_rebuild_count()
    );
}
