//! Bevy systems
//!
//! This module contains all the systems that operate on entities
//! and resources in the Bevy ECS.

pub mod scene;
pub mod camera;
pub mod cube;
pub mod viewport;
pub mod frame_extraction;

pub use scene::setup_scene;
pub use camera::update_camera_from_input;
pub use cube::spawn_initial_cubies;
pub use viewport::apply_viewport_resize;
pub use frame_extraction::extract_and_process_frame;
