//! Cube model
//!
//! Scene-independent logic for the 3x3x3 puzzle: layer moves, the cubie grid,
//! move queue and history, scrambles, sticker colors and rotation timing.
//! The Bevy systems drive the animated cube through these types.

pub mod history;
pub mod moves;
pub mod palette;
pub mod scramble;
pub mod state;
pub mod tween;

pub use history::{MoveHistory, MoveQueue, QueuedMove};
pub use moves::{Axis, Direction, Move, MoveError, LAYERS};
pub use palette::{sticker_color, Face};
pub use scramble::scramble;
pub use state::{cube_positions, CubeState, CubieState};
pub use tween::RotationTween;
