//! Shared state structures for communication between Tauri and Bevy
//!
//! This module defines thread-safe data structures that allow bidirectional
//! communication between the webview and the Bevy render backend.

use crossbeam_channel::Sender;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

use crate::cube::Move;

// =============================================================================
// Frame Buffer
// =============================================================================

/// One rendered frame as raw RGBA8 pixels (4 bytes per pixel)
#[derive(Clone)]
pub struct Frame {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Thread-safe latest frame shared between Bevy and Tauri
#[derive(Clone, Default)]
pub struct SharedFrameBuffer(pub Arc<Mutex<Option<Frame>>>);

/// Frame response containing Base64-encoded RGBA pixel data
#[derive(Serialize, Deserialize)]
pub struct FrameResponse {
    /// Base64-encoded RGBA pixel data (avoids slow JSON array serialization)
    pub data: String,
    pub width: u32,
    pub height: u32,
}

// =============================================================================
// Mouse Input
// =============================================================================

/// Mouse input state received from frontend
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct MouseInput {
    /// Accumulated X movement delta
    pub delta_x: f32,
    /// Accumulated Y movement delta
    pub delta_y: f32,
    /// Accumulated scroll wheel delta
    pub scroll_delta: f32,
    /// Left mouse button is pressed
    pub left_button: bool,
    /// Right mouse button is pressed
    pub right_button: bool,
}

/// Thread-safe mouse input shared between Tauri and Bevy
#[derive(Clone, Default)]
pub struct SharedMouseInput(pub Arc<Mutex<MouseInput>>);

// =============================================================================
// Cube Control
// =============================================================================

/// Requests from the webview, consumed by Bevy once per frame in arrival order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CubeCommand {
    Shuffle,
    Solve,
    Reset,
    Rotate(Move),
    Resize { width: u32, height: u32 },
}

/// Sending half of the command channel, managed by Tauri
#[derive(Clone)]
pub struct CubeCommandSender(pub Sender<CubeCommand>);

/// Snapshot of the cube controller published every frame
#[derive(Serialize, Deserialize, Clone, Default, Debug, PartialEq)]
pub struct CubeStatus {
    /// A layer rotation is currently animating
    pub animating: bool,
    /// Moves waiting behind the current rotation
    pub queued: usize,
    /// Recorded moves a solve would undo
    pub history_len: usize,
    /// Every cubie is at its home position and orientation
    pub solved: bool,
}

/// Thread-safe cube status
#[derive(Clone, Default)]
pub struct SharedCubeStatus(pub Arc<Mutex<CubeStatus>>);

// =============================================================================
// Performance Statistics
// =============================================================================

/// Performance statistics for debugging and monitoring
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct PerformanceStats {
    // Backend (Bevy/Rust) timings
    pub gpu_transfer_ms: f64,
    pub data_processing_ms: f64,
    pub frame_encoding_ms: f64,
    pub bevy_fps: f64,
    pub frame_count: u32,
    pub data_size_kb: f64,
    // Tauri command timings
    pub tauri_get_frame_ms: f64,
    pub tauri_serialize_ms: f64,
}

/// Thread-safe performance statistics
#[derive(Clone, Default)]
pub struct SharedPerfStats(pub Arc<Mutex<PerformanceStats>>);
