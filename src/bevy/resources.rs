//! Bevy resource definitions
//!
//! This module contains all global resources used by Bevy systems.
//! Resources are singleton data that can be accessed by any system.

use bevy::prelude::*;
use crossbeam_channel::{Receiver, Sender};
use std::time::Duration;

use rand::Rng;

use crate::config::{camera::START_POSITION, cube::SHUFFLE_MOVES};
use crate::cube::{scramble, Move, MoveHistory, MoveQueue, RotationTween};
use crate::tauri_bridge::shared_state::{
    CubeCommand, SharedCubeStatus, SharedFrameBuffer, SharedMouseInput, SharedPerfStats,
};

// =============================================================================
// Cube
// =============================================================================

/// The layer rotation currently animating
#[derive(Debug)]
pub struct ActiveRotation {
    pub mv: Move,
    pub record: bool,
    pub pivot: Entity,
    pub cubies: Vec<Entity>,
    pub tween: RotationTween,
}

/// Move queue, history and the single in-flight rotation
#[derive(Resource, Default, Debug)]
pub struct CubeController {
    pub queue: MoveQueue,
    pub history: MoveHistory,
    pub active: Option<ActiveRotation>,
}

impl CubeController {
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Animating or holding queued moves
    pub fn is_busy(&self) -> bool {
        self.is_animating() || !self.queue.is_empty()
    }

    /// Queue a random scramble of recorded moves. Ignored while busy.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.is_busy() {
            return false;
        }
        self.queue.extend(scramble(rng, SHUFFLE_MOVES), true);
        true
    }

    /// Queue the undo of the whole history without recording it.
    /// Ignored while busy.
    pub fn solve(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        let undo = self.history.take_undo();
        self.queue.extend(undo, false);
        true
    }

    /// Forget everything; the caller despawns the scene side
    pub fn clear(&mut self) -> Option<ActiveRotation> {
        self.queue.clear();
        self.history.clear();
        self.active.take()
    }
}

/// Meshes and material shared by every cubie spawn, built once at startup
///
/// Meshes are indexed in `cube_positions()` order; each one carries the
/// sticker colors of its home position as vertex colors.
#[derive(Resource, Default, Clone)]
pub struct CubieAssets {
    pub meshes: Vec<Handle<Mesh>>,
    pub material: Handle<StandardMaterial>,
}

/// Receives webview commands
#[derive(Resource, Deref)]
pub struct CubeCommandReceiver(pub Receiver<CubeCommand>);

/// Shared cube status resource for Bevy
#[derive(Resource)]
pub struct CubeStatusRes(pub SharedCubeStatus);

// =============================================================================
// Camera Control
// =============================================================================

/// Orbit camera state for spherical coordinate camera control
///
/// Input moves the `target_*` values; the applied values follow them with
/// damping.
#[derive(Resource, Debug, Clone)]
pub struct OrbitCameraState {
    /// Horizontal rotation angle (radians)
    pub yaw: f32,
    /// Vertical rotation angle (radians), clamped to avoid gimbal lock
    pub pitch: f32,
    /// Distance from the camera to the center point
    pub distance: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
    pub target_distance: f32,
    /// The point the camera orbits around
    pub center: Vec3,
}

impl OrbitCameraState {
    /// Orbit parameters that place the camera at `position`
    pub fn looking_from(position: Vec3, center: Vec3) -> Self {
        let offset = position - center;
        let distance = offset.length();
        let yaw = offset.x.atan2(offset.z);
        let pitch = (offset.y / distance).asin();
        Self {
            yaw,
            pitch,
            distance,
            target_yaw: yaw,
            target_pitch: pitch,
            target_distance: distance,
            center,
        }
    }

    pub fn camera_position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.center + Vec3::new(x, y, z)
    }
}

impl Default for OrbitCameraState {
    fn default() -> Self {
        Self::looking_from(START_POSITION, Vec3::ZERO)
    }
}

/// Resource to hold shared mouse input in Bevy
#[derive(Resource)]
pub struct MouseInputRes(pub SharedMouseInput);

// =============================================================================
// Rendering
// =============================================================================

/// The offscreen render target and the copier reading it back
#[derive(Resource)]
pub struct RenderTargetState {
    pub image: Handle<Image>,
    pub copier: Entity,
    pub width: u32,
    pub height: u32,
}

/// Viewport size requested by the webview, applied on the next frame
#[derive(Resource, Default)]
pub struct PendingResize(pub Option<UVec2>);

/// Shared frame buffer resource for Bevy
#[derive(Resource, Clone)]
pub struct FrameBufferRes(pub SharedFrameBuffer);

// =============================================================================
// Frame Management
// =============================================================================

/// Counter for total frames handed to the webview
#[derive(Resource, Default)]
pub struct ExtractedFrames(pub u32);

/// Number of pre-roll frames to skip before starting output
#[derive(Resource, Default)]
pub struct PreRollFrames(pub u32);

/// Frame rate limiter to control output FPS
#[derive(Resource)]
pub struct FrameRateLimiter {
    pub last_frame_time: std::time::Instant,
    pub min_frame_interval: Duration,
}

impl FrameRateLimiter {
    pub fn new(target_fps: f64) -> Self {
        Self {
            last_frame_time: std::time::Instant::now(),
            min_frame_interval: Duration::from_secs_f64(1.0 / target_fps),
        }
    }
}

// =============================================================================
// Performance Monitoring
// =============================================================================

/// Performance timing tracker for frame processing
#[derive(Resource, Default)]
pub struct FrameTimings {
    pub last_print_time: f64,
    pub frame_times: Vec<f64>,
}

/// Shared performance statistics resource
#[derive(Resource)]
pub struct PerfStatsRes(pub SharedPerfStats);

// =============================================================================
// Channel Communication (Main World <-> Render World)
// =============================================================================

/// Padded pixel rows copied out of the GPU, with the size they were rendered at
pub struct CopiedFrame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Receives data from render world
#[derive(Resource, Deref)]
pub struct MainWorldReceiver(pub Receiver<CopiedFrame>);

/// Sends data to main world
#[derive(Resource, Deref)]
pub struct RenderWorldSender(pub Sender<CopiedFrame>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::{Axis, Direction};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn shuffle_queues_recorded_moves_when_idle() {
        let mut controller = CubeController::default();
        assert!(controller.shuffle(&mut StdRng::seed_from_u64(1)));
        assert_eq!(controller.queue.len(), SHUFFLE_MOVES);
        assert!(controller.queue.pop().is_some_and(|q| q.record));

        // Still busy with the rest of the scramble
        assert!(!controller.shuffle(&mut StdRng::seed_from_u64(2)));
        assert!(!controller.solve());
        assert_eq!(controller.queue.len(), SHUFFLE_MOVES - 1);
    }

    #[test]
    fn solve_queues_unrecorded_undo_and_clears_history() {
        let mut controller = CubeController::default();
        let a = Move::new(Axis::X, 1, Direction::Clockwise).unwrap();
        let b = Move::new(Axis::Y, -1, Direction::CounterClockwise).unwrap();
        controller.history.record(a);
        controller.history.record(b);

        assert!(controller.solve());
        assert!(controller.history.is_empty());
        let first = controller.queue.pop().unwrap();
        assert_eq!(first.mv, b.inverse());
        assert!(!first.record);
        assert_eq!(controller.queue.pop().unwrap().mv, a.inverse());
    }

    #[test]
    fn default_orbit_starts_at_configured_position() {
        let orbit = OrbitCameraState::default();
        assert!(orbit.camera_position().abs_diff_eq(START_POSITION, 1e-4));
        assert!((orbit.distance - 192f32.sqrt()).abs() < 1e-4);
    }
}
