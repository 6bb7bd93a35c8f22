//! Bridge layer between Tauri and Bevy
//!
//! This module handles all communication between the webview and the Bevy
//! rendering backend, including command handlers, custom protocols,
//! and shared state management.

pub mod shared_state;
pub mod commands;
pub mod error;
pub mod protocol;

// Re-export commonly used types
pub use error::BridgeError;
pub use shared_state::{
    CubeCommand, CubeCommandSender, SharedCubeStatus, SharedFrameBuffer, SharedMouseInput,
    SharedPerfStats,
};
