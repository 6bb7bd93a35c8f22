//! Cube controller plugin
//!
//! Registers the controller state and the per-frame pipeline:
//! commands -> animation -> next queued move -> status.

use bevy::prelude::*;

use crate::bevy::resources::{CubeController, CubieAssets, PendingResize};
use crate::bevy::systems::cube::{
    animate_rotation, handle_cube_commands, publish_cube_status, start_next_rotation,
};

pub struct CubePlugin;

impl Plugin for CubePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CubeController>()
            .init_resource::<CubieAssets>()
            .init_resource::<PendingResize>()
            .add_systems(
                Update,
                (
                    handle_cube_commands,
                    animate_rotation,
                    start_next_rotation,
                    publish_cube_status,
                )
                    .chain(),
            );
    }
}
