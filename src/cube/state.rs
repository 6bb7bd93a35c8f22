//! Logical cubie grid
//!
//! Every cubie is tagged with the grid coordinate it started at and the one
//! it occupies now. Orientation is kept as a quaternion that is snapped back
//! to an axis-aligned rotation after each quarter turn, so the model never
//! drifts no matter how many moves are applied.

use bevy::math::{IVec3, Mat3, Quat};
use bevy::prelude::Transform;

use super::moves::{Axis, Move, LAYERS};

const ROTATION_EPSILON: f32 = 1e-4;

/// The 27 grid coordinates in construction order (x, then y, then z)
pub fn cube_positions() -> impl Iterator<Item = IVec3> {
    LAYERS.into_iter().flat_map(|x| {
        LAYERS
            .into_iter()
            .flat_map(move |y| LAYERS.into_iter().map(move |z| IVec3::new(x, y, z)))
    })
}

/// Round a rotation to the nearest one whose basis vectors are axis-aligned
pub fn snap_rotation(rotation: Quat) -> Quat {
    let m = Mat3::from_quat(rotation);
    let snapped = Mat3::from_cols(m.x_axis.round(), m.y_axis.round(), m.z_axis.round());
    Quat::from_mat3(&snapped).normalize()
}

/// Whether two rotations are the same (q and -q describe one rotation)
pub fn same_rotation(a: Quat, b: Quat) -> bool {
    a.dot(b).abs() > 1.0 - ROTATION_EPSILON
}

/// One cubie's place in the puzzle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubieState {
    /// Grid coordinate in the solved cube; fixes the sticker colors
    pub home: IVec3,
    /// Grid coordinate it occupies now, each component in `-1..=1`
    pub position: IVec3,
    /// Accumulated quarter turns, always axis-aligned
    pub orientation: Quat,
}

impl CubieState {
    /// A cubie sitting solved at `home`
    pub fn new(home: IVec3) -> Self {
        Self {
            home,
            position: home,
            orientation: Quat::IDENTITY,
        }
    }

    /// Whether the cubie currently belongs to a layer. Selection uses the
    /// logical coordinate, never the animated transform.
    pub fn in_layer(&self, axis: Axis, layer: i32) -> bool {
        axis.component(self.position) == layer
    }

    /// Apply a quarter turn to this cubie, whether or not it sits in the
    /// turned layer. Callers select the layer first.
    pub fn turn(&mut self, mv: &Move) {
        let rotation = mv.quarter_turn();
        self.position = (rotation * self.position.as_vec3()).round().as_ivec3();
        self.orientation = snap_rotation(rotation * self.orientation);
    }

    /// Scene transform for the cubie resting on the grid
    pub fn transform(&self, spacing: f32) -> Transform {
        Transform::from_translation(self.position.as_vec3() * spacing)
            .with_rotation(self.orientation)
    }

    /// Back at its home coordinate with no net rotation
    pub fn is_home(&self) -> bool {
        self.position == self.home && same_rotation(self.orientation, Quat::IDENTITY)
    }

}

/// The whole puzzle without any scene attached
#[derive(Debug, Clone, PartialEq)]
pub struct CubeState {
    cubies: Vec<CubieState>,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeState {
    /// A solved cube, cubies in `cube_positions()` order
    pub fn new() -> Self {
        Self {
            cubies: cube_positions().map(CubieState::new).collect(),
        }
    }

    pub fn cubies(&self) -> &[CubieState] {
        &self.cubies
    }

    /// Indices of the cubies currently in a layer
    pub fn layer(&self, axis: Axis, layer: i32) -> Vec<usize> {
        self.cubies
            .iter()
            .enumerate()
            .filter(|(_, c)| c.in_layer(axis, layer))
            .map(|(i, _)| i)
            .collect()
    }

    /// Turn one layer immediately
    pub fn apply(&mut self, mv: &Move) {
        for index in self.layer(mv.axis, mv.layer) {
            self.cubies[index].turn(mv);
        }
    }

    pub fn apply_all<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for mv in moves {
            self.apply(mv);
        }
    }

    /// Every cubie is home
    pub fn is_solved(&self) -> bool {
        self.cubies.iter().all(CubieState::is_home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::math::Vec3;
    use crate::cube::moves::Direction;
    use std::collections::HashSet;

    fn mv(axis: Axis, layer: i32, direction: Direction) -> Move {
        Move::new(axis, layer, direction).unwrap()
    }

    #[test]
    fn builds_twenty_seven_distinct_cubies() {
        let cube = CubeState::new();
        assert_eq!(cube.cubies().len(), 27);
        let unique: HashSet<_> = cube.cubies().iter().map(|c| c.position).collect();
        assert_eq!(unique.len(), 27);
        assert_eq!(cube.cubies()[0].home, IVec3::new(-1, -1, -1));
        assert_eq!(cube.cubies()[1].home, IVec3::new(-1, -1, 0));
        assert!(cube.is_solved());
    }

    #[test]
    fn every_layer_holds_nine_cubies() {
        let mut cube = CubeState::new();
        cube.apply(&mv(Axis::X, 1, Direction::Clockwise));
        cube.apply(&mv(Axis::Y, 0, Direction::CounterClockwise));
        for axis in Axis::ALL {
            for layer in LAYERS {
                assert_eq!(cube.layer(axis, layer).len(), 9, "{axis:?} {layer}");
            }
        }
    }

    #[test]
    fn turn_moves_only_the_selected_layer() {
        let mut cube = CubeState::new();
        let before = cube.clone();
        let turn = mv(Axis::Z, 1, Direction::Clockwise);
        cube.apply(&turn);
        for (now, then) in cube.cubies().iter().zip(before.cubies()) {
            if then.position.z == 1 {
                assert_eq!(now.position.z, 1);
            } else {
                assert_eq!(now, then);
            }
        }
        assert!(!cube.is_solved());
    }

    #[test]
    fn clockwise_top_turn_carries_front_to_left() {
        let mut cubie = CubieState::new(IVec3::new(0, 1, 1));
        cubie.turn(&mv(Axis::Y, 1, Direction::Clockwise));
        assert_eq!(cubie.position, IVec3::new(-1, 1, 0));
        assert_eq!((cubie.orientation * Vec3::Z).round(), Vec3::NEG_X);
    }

    #[test]
    fn four_quarter_turns_are_identity() {
        let mut cube = CubeState::new();
        let turn = mv(Axis::X, -1, Direction::CounterClockwise);
        for _ in 0..4 {
            cube.apply(&turn);
        }
        assert!(cube.is_solved());
    }

    #[test]
    fn move_then_inverse_is_identity() {
        let mut cube = CubeState::new();
        let turn = mv(Axis::Y, 0, Direction::Clockwise);
        cube.apply(&turn);
        cube.apply(&turn.inverse());
        assert!(cube.is_solved());
    }

    #[test]
    fn center_cubie_never_moves() {
        let mut cube = CubeState::new();
        for axis in Axis::ALL {
            cube.apply(&mv(axis, 0, Direction::Clockwise));
        }
        let center = cube
            .cubies()
            .iter()
            .find(|c| c.home == IVec3::ZERO)
            .unwrap();
        assert_eq!(center.position, IVec3::ZERO);
    }

    #[test]
    fn snapping_removes_float_drift() {
        let noisy = Quat::from_axis_angle(Vec3::X, std::f32::consts::FRAC_PI_2 + 0.01);
        let snapped = snap_rotation(noisy);
        assert!(same_rotation(
            snapped,
            Quat::from_axis_angle(Vec3::X, std::f32::consts::FRAC_PI_2)
        ));
    }

    #[test]
    fn transform_places_cubie_on_grid() {
        let cubie = CubieState::new(IVec3::new(1, -1, 0));
        let transform = cubie.transform(1.0);
        assert_eq!(transform.translation, Vec3::new(1.0, -1.0, 0.0));
        assert_eq!(transform.rotation, Quat::IDENTITY);
    }
}
