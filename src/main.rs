//! # Voxel Sandbox Entry Point
//!
//! This is the entry point for the demo driver binary. It simply calls into
//! the library's `run()` function, which initializes logging and exercises
//! the world core the way an interactive front end would.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release
//! ```
//!
//! Point `VOXEL_SANDBOX_SETTINGS` at a JSON file to override the defaults.

fn main() {
    voxel_sandbox::run();
}
