//! Rubik's Cube viewer: a 3x3x3 cube rendered headlessly by Bevy and shown
//! in a Tauri webview.
//!
//! Architecture:
//! - Bevy runs in a background thread with NO window (true headless mode)
//! - A RenderGraph node copies the offscreen target back to the CPU
//! - GPU texture -> Buffer -> CPU channel -> Tauri frontend
//! - Frames reach the webview via the `frame://` protocol (JPEG) or Base64 RGBA
//! - Buttons in the webview send cube commands over a channel; Bevy drains
//!   them once per frame and animates one layer turn at a time
//!
//! # Module Structure
//!
//! - `cube`: Scene-independent cube model (moves, grid, history, scrambles)
//! - `config`: Configuration constants and settings
//! - `tauri_bridge`: Bridge layer between Tauri and Bevy
//!   - `shared_state`: Thread-safe data structures
//!   - `commands`: Tauri command handlers
//!   - `protocol`: Custom protocol handlers
//!   - `error`: Errors returned to the webview
//! - `bevy`: Bevy engine integration
//!   - `components`: ECS components
//!   - `resources`: Global resources
//!   - `plugins`: Frame readback and cube controller plugins
//!   - `systems`: Scene, camera, cube, viewport and frame systems
//!   - `app`: Application setup

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

// Module declarations
mod bevy;
mod config;
pub mod cube;
mod tauri_bridge;

use ::bevy::log::error;
use tauri_bridge::{
    CubeCommandSender, SharedCubeStatus, SharedFrameBuffer, SharedMouseInput, SharedPerfStats,
};

/// Main entry point for the Tauri application
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Create shared state
    let buffer = SharedFrameBuffer::default();
    let perf_stats = SharedPerfStats::default();
    let mouse_input = SharedMouseInput::default();
    let cube_status = SharedCubeStatus::default();
    let (command_tx, command_rx) = crossbeam_channel::unbounded();

    // Start Bevy in background thread. The webview polls until the first
    // frame arrives, so there is nothing to wait for here.
    bevy::app::start_bevy(bevy::app::BridgeHandles {
        frame_buffer: buffer.clone(),
        perf_stats: perf_stats.clone(),
        mouse_input: mouse_input.clone(),
        cube_status: cube_status.clone(),
        commands: command_rx,
    });

    // Clone for the custom protocol handler
    let protocol_buffer = buffer.clone();
    let protocol_perf_stats = perf_stats.clone();

    // Build and run Tauri application
    let result = tauri::Builder::default()
        .manage(buffer)
        .manage(perf_stats)
        .manage(mouse_input)
        .manage(cube_status)
        .manage(CubeCommandSender(command_tx))
        // Register custom protocol "frame://" for direct binary transfer
        .register_asynchronous_uri_scheme_protocol("frame", move |_ctx, request, responder| {
            let buffer = protocol_buffer.clone();
            let perf_stats = protocol_perf_stats.clone();

            // Handle the request in a separate thread to avoid blocking
            std::thread::spawn(move || {
                // For Tauri v2, URL format is: http://frame.localhost/path
                let response = tauri_bridge::protocol::handle_frame_protocol(
                    request.uri().path(),
                    &buffer,
                    &perf_stats,
                );
                responder.respond(response);
            });
        })
        .invoke_handler(tauri::generate_handler![
            tauri_bridge::commands::shuffle_cube,
            tauri_bridge::commands::solve_cube,
            tauri_bridge::commands::reset_cube,
            tauri_bridge::commands::rotate_layer,
            tauri_bridge::commands::resize_viewport,
            tauri_bridge::commands::get_cube_status,
            tauri_bridge::commands::get_frame,
            tauri_bridge::commands::get_render_size,
            tauri_bridge::commands::get_performance_stats,
            tauri_bridge::commands::send_mouse_input
        ])
        .run(tauri::generate_context!());

    if let Err(err) = result {
        error!("[Tauri] Application error: {}", err);
        std::process::exit(1);
    }
}
