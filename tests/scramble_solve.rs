use rand::rngs::StdRng;
use rand::SeedableRng;
use rubiks_cube_viewer_lib::cube::{
    scramble, Axis, CubeState, Direction, Move, MoveHistory, MoveQueue, LAYERS,
};

fn scrambled(seed: u64) -> (CubeState, MoveHistory) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut state = CubeState::new();
    let mut history = MoveHistory::default();
    for mv in scramble(&mut rng, 20) {
        state.apply(&mv);
        history.record(mv);
    }
    (state, history)
}

#[test]
fn undoing_the_history_solves_any_scramble() {
    for seed in 0..32 {
        let (mut state, mut history) = scrambled(seed);
        let undo = history.take_undo();
        assert_eq!(undo.len(), 20);
        assert!(history.is_empty());

        state.apply_all(&undo);
        assert!(state.is_solved(), "seed {seed} left the cube unsolved");
    }
}

#[test]
fn every_layer_always_holds_nine_cubies() {
    let (state, _) = scrambled(99);
    for axis in Axis::ALL {
        for layer in LAYERS {
            assert_eq!(state.layer(axis, layer).len(), 9, "{axis:?} {layer}");
        }
    }
}

#[test]
fn queue_pops_in_arrival_order() {
    let r = Move::new(Axis::X, 1, Direction::Clockwise).unwrap();
    let u = Move::new(Axis::Y, 1, Direction::CounterClockwise).unwrap();
    let f = Move::new(Axis::Z, 1, Direction::Clockwise).unwrap();

    let mut queue = MoveQueue::default();
    queue.push(r, true);
    queue.extend([u, f], false);

    let order: Vec<(Move, bool)> = std::iter::from_fn(|| queue.pop())
        .map(|queued| (queued.mv, queued.record))
        .collect();
    assert_eq!(order, vec![(r, true), (u, false), (f, false)]);
}

#[test]
fn a_single_turn_is_undone_by_its_inverse() {
    let mv = Move::new(Axis::Z, -1, Direction::CounterClockwise).unwrap();
    let mut state = CubeState::new();
    state.apply(&mv);
    assert!(!state.is_solved());
    state.apply(&mv.inverse());
    assert!(state.is_solved());
}

#[test]
fn rejects_layers_outside_the_grid() {
    assert!(Move::new(Axis::Y, 2, Direction::Clockwise).is_err());
}
