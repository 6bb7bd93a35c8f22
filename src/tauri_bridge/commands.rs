//! Tauri command handlers
//!
//! This module contains all the Tauri command functions that can be invoked
//! from the frontend JavaScript code.

use base64::{engine::general_purpose::STANDARD, Engine};
use bevy::log::debug;
use tauri::State;

use crate::config::{RENDER_HEIGHT, RENDER_WIDTH};
use crate::cube::{Axis, Direction, Move};
use super::error::BridgeError;
use super::shared_state::{
    CubeCommand, CubeCommandSender, CubeStatus, FrameResponse, PerformanceStats,
    SharedCubeStatus, SharedFrameBuffer, SharedMouseInput, SharedPerfStats,
};

fn send(sender: &CubeCommandSender, command: CubeCommand) -> Result<(), BridgeError> {
    debug!("[Tauri] Forwarding {:?}", command);
    sender
        .0
        .send(command)
        .map_err(|_| BridgeError::RenderThreadStopped)
}

/// Queue a random scramble (ignored by the cube while it is busy)
#[tauri::command]
pub fn shuffle_cube(sender: State<CubeCommandSender>) -> Result<(), BridgeError> {
    send(&sender, CubeCommand::Shuffle)
}

/// Undo every recorded move, newest first
#[tauri::command]
pub fn solve_cube(sender: State<CubeCommandSender>) -> Result<(), BridgeError> {
    send(&sender, CubeCommand::Solve)
}

/// Instantly rebuild a solved cube and forget the history
#[tauri::command]
pub fn reset_cube(sender: State<CubeCommandSender>) -> Result<(), BridgeError> {
    send(&sender, CubeCommand::Reset)
}

/// Queue a single recorded layer rotation
#[tauri::command]
pub fn rotate_layer(
    sender: State<CubeCommandSender>,
    axis: Axis,
    layer: i32,
    direction: Direction,
) -> Result<(), BridgeError> {
    let mv = Move::new(axis, layer, direction)?;
    send(&sender, CubeCommand::Rotate(mv))
}

/// Resize the offscreen render target to match the webview canvas
#[tauri::command]
pub fn resize_viewport(
    sender: State<CubeCommandSender>,
    width: u32,
    height: u32,
) -> Result<(), BridgeError> {
    if width == 0 || height == 0 {
        return Err(BridgeError::InvalidViewport { width, height });
    }
    send(&sender, CubeCommand::Resize { width, height })
}

/// Get the cube state as of the last rendered frame
#[tauri::command]
pub fn get_cube_status(state: State<SharedCubeStatus>) -> Result<CubeStatus, BridgeError> {
    let guard = state.0.lock()?;
    Ok(guard.clone())
}

/// Get the current rendered frame as Base64-encoded RGBA data
#[tauri::command]
pub fn get_frame(
    state: State<SharedFrameBuffer>,
    perf_state: State<SharedPerfStats>,
) -> Result<FrameResponse, BridgeError> {
    let cmd_start = std::time::Instant::now();

    let guard = state.0.lock()?;
    let frame = guard.as_ref().ok_or(BridgeError::FrameNotReady)?;
    let data_fetch_time = cmd_start.elapsed().as_secs_f64() * 1000.0;

    // Measure Base64 encoding time
    let encode_start = std::time::Instant::now();
    let base64_data = STANDARD.encode(&frame.rgba);
    let encode_time = encode_start.elapsed().as_secs_f64() * 1000.0;

    if let Ok(mut stats) = perf_state.0.lock() {
        stats.tauri_get_frame_ms = data_fetch_time;
        stats.tauri_serialize_ms = encode_time;
    }

    Ok(FrameResponse {
        data: base64_data,
        width: frame.width,
        height: frame.height,
    })
}

/// Get the size of the latest frame, or the initial size before the first one
#[tauri::command]
pub fn get_render_size(state: State<SharedFrameBuffer>) -> Result<(u32, u32), BridgeError> {
    let guard = state.0.lock()?;
    Ok(guard
        .as_ref()
        .map(|frame| (frame.width, frame.height))
        .unwrap_or((RENDER_WIDTH, RENDER_HEIGHT)))
}

/// Get performance statistics
#[tauri::command]
pub fn get_performance_stats(
    state: State<SharedPerfStats>,
) -> Result<PerformanceStats, BridgeError> {
    let guard = state.0.lock()?;
    Ok(guard.clone())
}

/// Receive mouse input from frontend for camera control
/// Input deltas are accumulated until consumed by Bevy
#[tauri::command]
pub fn send_mouse_input(
    state: State<SharedMouseInput>,
    delta_x: f32,
    delta_y: f32,
    scroll_delta: f32,
    left_button: bool,
    right_button: bool,
) -> Result<(), BridgeError> {
    let mut guard = state.0.lock()?;
    // Accumulate deltas (will be cleared when Bevy reads them)
    guard.delta_x += delta_x;
    guard.delta_y += delta_y;
    guard.scroll_delta += scroll_delta;
    // Button state is just the current state
    guard.left_button = left_button;
    guard.right_button = right_button;
    Ok(())
}
