//! Configuration constants and settings for the cube viewer
//!
//! This module contains all configurable parameters such as render resolution,
//! frame rates, cube geometry, animation timing and lighting.

/// Initial width of the offscreen render target in pixels
pub const RENDER_WIDTH: u32 = 800;

/// Initial height of the offscreen render target in pixels
pub const RENDER_HEIGHT: u32 = 600;

/// Smallest render target edge accepted from a viewport resize
pub const MIN_RENDER_DIMENSION: u32 = 64;

/// Largest render target edge accepted from a viewport resize
pub const MAX_RENDER_DIMENSION: u32 = 2048;

/// Target frames per second for the Bevy render loop
pub const TARGET_FPS: f64 = 60.0;

/// Number of pre-roll frames to skip before starting output
/// This allows the scene to fully load and stabilize
pub const PRE_ROLL_FRAMES: u32 = 30;

/// Camera settings
pub mod camera {
    use bevy::math::Vec3;

    /// Where the camera starts, looking at the origin
    pub const START_POSITION: Vec3 = Vec3::new(8.0, 8.0, 8.0);

    /// Vertical field of view in degrees
    pub const FOV_DEGREES: f32 = 45.0;

    pub const NEAR: f32 = 0.1;
    pub const FAR: f32 = 100.0;

    /// Background color as `0xRRGGBB`
    pub const BACKGROUND: u32 = 0x222222;

    /// Rotation speed multiplier for mouse drag
    pub const ROTATION_SPEED: f32 = 0.005;

    /// Pan speed per pixel of right drag, scaled by the orbit distance
    pub const PAN_SPEED: f32 = 0.001;

    /// Zoom speed multiplier for scroll wheel
    pub const ZOOM_SPEED: f32 = 0.5;

    /// Minimum camera distance from center point
    pub const MIN_DISTANCE: f32 = 4.0;

    /// Maximum camera distance from center point
    pub const MAX_DISTANCE: f32 = 30.0;

    /// Maximum pitch angle (radians) to prevent camera flipping
    pub const MAX_PITCH: f32 = 1.5;

    /// Minimum pitch angle (radians) to prevent camera flipping
    pub const MIN_PITCH: f32 = -1.5;

    /// Fraction of the remaining orbit distance covered per 1/60 s frame
    pub const DAMPING_FACTOR: f32 = 0.05;
}

/// Puzzle geometry, timing and colors
pub mod cube {
    use std::time::Duration;

    /// Edge length of one cubie; the gap to `SPACING` shows the grid lines
    pub const CUBIE_SIZE: f32 = 0.95;

    /// Distance between neighbouring cubie centers
    pub const SPACING: f32 = 1.0;

    /// Duration of one animated quarter turn
    pub const ANIMATION_DURATION: Duration = Duration::from_millis(500);

    /// Number of random moves queued by a shuffle
    pub const SHUFFLE_MOVES: usize = 20;

    pub const UP_COLOR: u32 = 0xFFFF00;
    pub const DOWN_COLOR: u32 = 0xFFFFFF;
    pub const FRONT_COLOR: u32 = 0xFF0000;
    pub const BACK_COLOR: u32 = 0xFFA500;
    pub const LEFT_COLOR: u32 = 0x0000FF;
    pub const RIGHT_COLOR: u32 = 0x008000;

    /// Faces hidden inside the puzzle
    pub const INTERIOR_COLOR: u32 = 0x222222;
}

/// Lighting settings
pub mod lighting {
    use bevy::math::Vec3;

    /// Ambient brightness (cd/m^2)
    pub const AMBIENT_BRIGHTNESS: f32 = 600.0;

    /// Key light position and illuminance (lux)
    pub const KEY_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 20.0, 10.0);
    pub const KEY_LIGHT_ILLUMINANCE: f32 = 8_000.0;

    /// Fill light from the opposite corner
    pub const BACK_LIGHT_POSITION: Vec3 = Vec3::new(-10.0, -10.0, -10.0);
    pub const BACK_LIGHT_ILLUMINANCE: f32 = 3_000.0;
}

/// Performance monitoring settings
pub mod performance {
    /// Interval for printing performance stats (seconds)
    pub const STATS_PRINT_INTERVAL: f64 = 2.0;

    /// Number of frame timing samples to keep for averaging
    pub const FRAME_TIMING_SAMPLES: usize = 60;
}

/// Image compression settings
pub mod compression {
    /// JPEG quality level (0-100, higher = better quality but larger size)
    pub const JPEG_QUALITY: u8 = 85;
}
