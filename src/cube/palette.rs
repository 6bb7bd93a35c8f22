//! Sticker colors
//!
//! A cubie face shows a sticker only if the cubie's home position is on the
//! matching outer face of the puzzle; every other face is painted with the
//! interior color.

use bevy::math::{IVec3, Vec3};

use crate::config::cube::{
    BACK_COLOR, DOWN_COLOR, FRONT_COLOR, INTERIOR_COLOR, LEFT_COLOR, RIGHT_COLOR, UP_COLOR,
};

/// Outer face of the puzzle, named by where it points in the solved cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    Right,
    Left,
    Up,
    Down,
    Front,
    Back,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Right,
        Face::Left,
        Face::Up,
        Face::Down,
        Face::Front,
        Face::Back,
    ];

    /// Face for an axis-aligned outward normal
    pub fn from_normal(normal: Vec3) -> Option<Face> {
        let n = normal.round().as_ivec3();
        match (n.x, n.y, n.z) {
            (1, 0, 0) => Some(Face::Right),
            (-1, 0, 0) => Some(Face::Left),
            (0, 1, 0) => Some(Face::Up),
            (0, -1, 0) => Some(Face::Down),
            (0, 0, 1) => Some(Face::Front),
            (0, 0, -1) => Some(Face::Back),
            _ => None,
        }
    }

    /// Outward grid normal
    pub fn normal(self) -> IVec3 {
        match self {
            Face::Right => IVec3::X,
            Face::Left => IVec3::NEG_X,
            Face::Up => IVec3::Y,
            Face::Down => IVec3::NEG_Y,
            Face::Front => IVec3::Z,
            Face::Back => IVec3::NEG_Z,
        }
    }

    /// Sticker color as `0xRRGGBB`
    pub fn color(self) -> u32 {
        match self {
            Face::Right => RIGHT_COLOR,
            Face::Left => LEFT_COLOR,
            Face::Up => UP_COLOR,
            Face::Down => DOWN_COLOR,
            Face::Front => FRONT_COLOR,
            Face::Back => BACK_COLOR,
        }
    }

    /// Whether a grid position lies on this outer face
    pub fn contains(self, position: IVec3) -> bool {
        let n = self.normal();
        position.dot(n) == 1
    }
}

/// Color of the cubie face pointing along `normal`, for a cubie whose home
/// grid position is `home`
pub fn sticker_color(home: IVec3, normal: Vec3) -> u32 {
    match Face::from_normal(normal) {
        Some(face) if face.contains(home) => face.color(),
        _ => INTERIOR_COLOR,
    }
}

/// Split `0xRRGGBB` into channel bytes
pub fn rgb_bytes(color: u32) -> [u8; 3] {
    [(color >> 16) as u8, (color >> 8) as u8, color as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_shows_three_stickers() {
        let home = IVec3::new(1, 1, 1);
        let colored: Vec<_> = Face::ALL
            .iter()
            .filter(|f| sticker_color(home, f.normal().as_vec3()) != INTERIOR_COLOR)
            .collect();
        assert_eq!(colored, vec![&Face::Right, &Face::Up, &Face::Front]);
    }

    #[test]
    fn center_shows_no_stickers() {
        for face in Face::ALL {
            assert_eq!(
                sticker_color(IVec3::ZERO, face.normal().as_vec3()),
                INTERIOR_COLOR
            );
        }
    }

    #[test]
    fn standard_color_scheme() {
        assert_eq!(sticker_color(IVec3::new(0, 1, 0), Vec3::Y), 0xFFFF00);
        assert_eq!(sticker_color(IVec3::new(0, -1, 0), Vec3::NEG_Y), 0xFFFFFF);
        assert_eq!(sticker_color(IVec3::new(0, 0, 1), Vec3::Z), 0xFF0000);
        assert_eq!(sticker_color(IVec3::new(0, 0, -1), Vec3::NEG_Z), 0xFFA500);
        assert_eq!(sticker_color(IVec3::new(-1, 0, 0), Vec3::NEG_X), 0x0000FF);
        assert_eq!(sticker_color(IVec3::new(1, 0, 0), Vec3::X), 0x008000);
    }

    #[test]
    fn splits_channels() {
        assert_eq!(rgb_bytes(0xFFA500), [0xFF, 0xA5, 0x00]);
    }
}
