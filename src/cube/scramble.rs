//! Random scrambles

use rand::Rng;

use super::moves::{Axis, Direction, Move, LAYERS};

/// Draw one move with axis, layer and direction picked uniformly
pub fn random_move<R: Rng>(rng: &mut R) -> Move {
    Move {
        axis: Axis::ALL[rng.random_range(0..Axis::ALL.len())],
        layer: LAYERS[rng.random_range(0..LAYERS.len())],
        direction: Direction::ALL[rng.random_range(0..Direction::ALL.len())],
    }
}

/// A sequence of independent random moves. Consecutive moves may cancel
/// each other out.
pub fn scramble<R: Rng>(rng: &mut R, count: usize) -> Vec<Move> {
    (0..count).map(|_| random_move(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn scramble_has_requested_length_and_valid_layers() {
        let mut rng = StdRng::seed_from_u64(7);
        let moves = scramble(&mut rng, 20);
        assert_eq!(moves.len(), 20);
        assert!(moves.iter().all(|m| LAYERS.contains(&m.layer)));
    }

    #[test]
    fn same_seed_gives_same_scramble() {
        let a = scramble(&mut StdRng::seed_from_u64(42), 20);
        let b = scramble(&mut StdRng::seed_from_u64(42), 20);
        assert_eq!(a, b);
    }

    #[test]
    fn draws_cover_every_axis_and_direction() {
        let mut rng = StdRng::seed_from_u64(3);
        let moves = scramble(&mut rng, 500);
        for axis in Axis::ALL {
            assert!(moves.iter().any(|m| m.axis == axis));
        }
        for direction in Direction::ALL {
            assert!(moves.iter().any(|m| m.direction == direction));
        }
    }
}
