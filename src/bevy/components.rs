//! Bevy component definitions
//!
//! This module contains all component markers and data structures used
//! to tag and identify entities in the Bevy ECS (Entity Component System).

use bevy::prelude::*;

use crate::cube::CubieState;

/// Marker component for the offscreen rendering camera
///
/// Entities with this component are cameras that render to an offscreen
/// texture instead of a window.
#[derive(Component)]
pub struct OffscreenCamera;

/// Marker component for cameras that can be controlled by user input
///
/// Entities with this component will respond to mouse input for
/// orbit camera control (rotation, zoom).
#[derive(Component)]
pub struct CameraController;

/// One of the 27 small cubes
///
/// Holds the logical grid state; the entity's `Transform` is rewritten from
/// it whenever a rotation completes.
#[derive(Component, Debug, Clone)]
pub struct Cubie(pub CubieState);

/// Temporary parent used to turn a layer's cubies together
#[derive(Component)]
pub struct Pivot;
