//! Bevy plugins
//!
//! This module contains custom Bevy plugins that extend the engine's
//! functionality for our specific use case.

pub mod cube;
pub mod image_copy;

pub use cube::CubePlugin;
pub use image_copy::{ImageCopier, ImageCopyPlugin};
