//! Layer moves
//!
//! A move turns one layer of the cube (all cubies sharing a coordinate along
//! an axis) by a quarter turn in either direction.

use bevy::math::{IVec3, Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use thiserror::Error;

/// Errors raised while building a move
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("layer index {0} is outside -1..=1")]
    LayerOutOfRange(i32),
}

/// Rotation axis of a layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Positive unit vector of the axis
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    /// The grid coordinate this axis selects
    pub fn component(self, position: IVec3) -> i32 {
        match self {
            Axis::X => position.x,
            Axis::Y => position.y,
            Axis::Z => position.z,
        }
    }
}

/// Turn direction, seen from the positive end of the axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Clockwise, Direction::CounterClockwise];

    /// `+1` clockwise, `-1` counter-clockwise
    pub fn sign(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }

    pub fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// Valid layer indices along any axis
pub const LAYERS: [i32; 3] = [-1, 0, 1];

/// A quarter turn of one layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub axis: Axis,
    pub layer: i32,
    pub direction: Direction,
}

impl Move {
    /// Build a move, rejecting layer indices outside `-1..=1`
    pub fn new(axis: Axis, layer: i32, direction: Direction) -> Result<Self, MoveError> {
        if !LAYERS.contains(&layer) {
            return Err(MoveError::LayerOutOfRange(layer));
        }
        Ok(Self {
            axis,
            layer,
            direction,
        })
    }

    /// The move that undoes this one
    pub fn inverse(self) -> Self {
        Self {
            direction: self.direction.inverse(),
            ..self
        }
    }

    /// Signed pivot angle of the completed turn in radians.
    /// Clockwise turns rotate by -90 degrees about the positive axis.
    pub fn angle(self) -> f32 {
        -(self.direction.sign() as f32) * FRAC_PI_2
    }

    /// Pivot angle for an eased progress value in `[0, 1]`
    pub fn angle_at(self, eased: f32) -> f32 {
        self.angle() * eased
    }

    /// Rotation applied to every cubie of the layer once the turn completes
    pub fn quarter_turn(self) -> Quat {
        Quat::from_axis_angle(self.axis.unit(), self.angle())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_layers_outside_the_grid() {
        assert_eq!(
            Move::new(Axis::X, 2, Direction::Clockwise),
            Err(MoveError::LayerOutOfRange(2))
        );
        assert!(Move::new(Axis::Y, -1, Direction::CounterClockwise).is_ok());
    }

    #[test]
    fn inverse_flips_only_the_direction() {
        let mv = Move::new(Axis::Z, 0, Direction::Clockwise).unwrap();
        let inv = mv.inverse();
        assert_eq!(inv.axis, Axis::Z);
        assert_eq!(inv.layer, 0);
        assert_eq!(inv.direction, Direction::CounterClockwise);
        assert_eq!(inv.inverse(), mv);
    }

    #[test]
    fn clockwise_turns_negatively_about_the_axis() {
        let mv = Move::new(Axis::Y, 1, Direction::Clockwise).unwrap();
        assert!((mv.angle() + FRAC_PI_2).abs() < 1e-6);
        let turned = mv.quarter_turn() * Vec3::X;
        assert!(turned.abs_diff_eq(Vec3::Z, 1e-5), "{turned:?}");
    }

    #[test]
    fn serializes_with_lowercase_names() {
        let mv = Move::new(Axis::X, -1, Direction::CounterClockwise).unwrap();
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(
            json,
            r#"{"axis":"x","layer":-1,"direction":"counter_clockwise"}"#
        );
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mv);
    }
}
