//! Camera control system
//!
//! This module implements orbit camera controls that respond to mouse input
//! from the frontend, allowing users to rotate and zoom around the cube.

use bevy::{math::Vec3, prelude::*};

use crate::bevy::components::CameraController;
use crate::bevy::resources::{MouseInputRes, OrbitCameraState};
use crate::config::camera::*;
use crate::tauri_bridge::shared_state::MouseInput;

/// Fraction of the remaining distance to close this frame, scaled so the
/// feel matches `DAMPING_FACTOR` per frame at 60 FPS
pub fn damping_step(dt: f32) -> f32 {
    1.0 - (1.0 - DAMPING_FACTOR).powf(dt * 60.0)
}

/// Screen right and up directions for the current orbit angles
fn view_axes(orbit: &OrbitCameraState) -> (Vec3, Vec3) {
    let right = Vec3::new(orbit.yaw.cos(), 0.0, -orbit.yaw.sin());
    let toward_camera = Vec3::new(
        orbit.pitch.cos() * orbit.yaw.sin(),
        orbit.pitch.sin(),
        orbit.pitch.cos() * orbit.yaw.cos(),
    );
    (right, toward_camera.cross(right))
}

/// Move the orbit targets according to one batch of accumulated input
pub fn apply_input(orbit: &mut OrbitCameraState, input: &MouseInput) {
    // Left button drag rotates
    if input.left_button && (input.delta_x != 0.0 || input.delta_y != 0.0) {
        orbit.target_yaw -= input.delta_x * ROTATION_SPEED;
        orbit.target_pitch =
            (orbit.target_pitch + input.delta_y * ROTATION_SPEED).clamp(MIN_PITCH, MAX_PITCH);
    }

    // Right button drag pans the orbit center in the view plane
    if input.right_button && (input.delta_x != 0.0 || input.delta_y != 0.0) {
        let (right, up) = view_axes(orbit);
        let scale = PAN_SPEED * orbit.target_distance;
        orbit.center += (up * input.delta_y - right * input.delta_x) * scale;
    }

    // Scroll wheel zooms
    if input.scroll_delta != 0.0 {
        orbit.target_distance = (orbit.target_distance - input.scroll_delta * ZOOM_SPEED)
            .clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}

/// Ease the applied orbit toward its targets
pub fn settle(orbit: &mut OrbitCameraState, dt: f32) {
    let t = damping_step(dt);
    orbit.yaw += (orbit.target_yaw - orbit.yaw) * t;
    orbit.pitch += (orbit.target_pitch - orbit.pitch) * t;
    orbit.distance += (orbit.target_distance - orbit.distance) * t;
}

/// Update camera transform based on mouse input
/// Implements damped orbit camera control:
/// - Left button drag: rotate camera (yaw/pitch)
/// - Right button drag: pan the orbit center
/// - Scroll wheel: zoom (adjust distance)
pub fn update_camera_from_input(
    time: Res<Time>,
    mouse_input_res: Option<Res<MouseInputRes>>,
    mut orbit_state: ResMut<OrbitCameraState>,
    mut camera_query: Query<&mut Transform, With<CameraController>>,
) {
    // Read and clear accumulated input
    if let Some(mouse_res) = mouse_input_res {
        if let Ok(mut guard) = mouse_res.0 .0.lock() {
            apply_input(&mut orbit_state, &guard);
            guard.delta_x = 0.0;
            guard.delta_y = 0.0;
            guard.scroll_delta = 0.0;
        }
    }

    settle(&mut orbit_state, time.delta_secs());

    let camera_position = orbit_state.camera_position();
    for mut transform in camera_query.iter_mut() {
        *transform =
            Transform::from_translation(camera_position).looking_at(orbit_state.center, Vec3::Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_moves_target_and_damping_follows() {
        let mut orbit = OrbitCameraState::default();
        let start_yaw = orbit.yaw;
        apply_input(
            &mut orbit,
            &MouseInput {
                delta_x: 100.0,
                left_button: true,
                ..Default::default()
            },
        );
        assert!((orbit.target_yaw - (start_yaw - 0.5)).abs() < 1e-5);
        assert_eq!(orbit.yaw, start_yaw);

        settle(&mut orbit, 1.0 / 60.0);
        let moved = start_yaw - orbit.yaw;
        assert!((moved - 0.5 * DAMPING_FACTOR).abs() < 1e-4, "{moved}");

        for _ in 0..600 {
            settle(&mut orbit, 1.0 / 60.0);
        }
        assert!((orbit.yaw - orbit.target_yaw).abs() < 1e-4);
    }

    #[test]
    fn right_drag_pans_in_the_view_plane() {
        let mut orbit = OrbitCameraState::default();
        let yaw = orbit.target_yaw;
        apply_input(
            &mut orbit,
            &MouseInput {
                delta_x: 40.0,
                delta_y: -25.0,
                right_button: true,
                ..Default::default()
            },
        );
        assert_eq!(orbit.target_yaw, yaw);
        assert!(orbit.center.length() > 0.0);

        // The center slides sideways, never toward or away from the camera
        let view = (orbit.camera_position() - orbit.center).normalize();
        assert!(orbit.center.dot(view).abs() < 1e-4);

        // Dragging right moves the scene right, so the center goes left
        let (right, _) = view_axes(&orbit);
        assert!(orbit.center.dot(right) < 0.0);
    }

    #[test]
    fn left_drag_leaves_the_center_alone() {
        let mut orbit = OrbitCameraState::default();
        apply_input(
            &mut orbit,
            &MouseInput {
                delta_x: 40.0,
                left_button: true,
                ..Default::default()
            },
        );
        assert_eq!(orbit.center, Vec3::ZERO);
    }

    #[test]
    fn drag_without_button_is_ignored() {
        let mut orbit = OrbitCameraState::default();
        let before = orbit.target_yaw;
        apply_input(
            &mut orbit,
            &MouseInput {
                delta_x: 50.0,
                ..Default::default()
            },
        );
        assert_eq!(orbit.target_yaw, before);
    }

    #[test]
    fn zoom_and_pitch_are_clamped() {
        let mut orbit = OrbitCameraState::default();
        apply_input(
            &mut orbit,
            &MouseInput {
                delta_y: 1.0e6,
                scroll_delta: 1.0e6,
                left_button: true,
                ..Default::default()
            },
        );
        assert_eq!(orbit.target_pitch, MAX_PITCH);
        assert_eq!(orbit.target_distance, MIN_DISTANCE);
    }
}
