//! Pending and completed moves

use std::collections::VecDeque;

use super::moves::Move;

/// A move waiting to be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuedMove {
    pub mv: Move,
    /// Whether the move lands in the history once it completes.
    /// Undo moves played by a solve are not recorded.
    pub record: bool,
}

/// FIFO of moves waiting for the current rotation to finish
#[derive(Debug, Default, Clone)]
pub struct MoveQueue(VecDeque<QueuedMove>);

impl MoveQueue {
    /// Append one move behind everything already waiting
    pub fn push(&mut self, mv: Move, record: bool) {
        self.0.push_back(QueuedMove { mv, record });
    }

    /// Append a batch, keeping its order
    pub fn extend(&mut self, moves: impl IntoIterator<Item = Move>, record: bool) {
        self.0
            .extend(moves.into_iter().map(|mv| QueuedMove { mv, record }));
    }

    /// Next move to animate
    pub fn pop(&mut self) -> Option<QueuedMove> {
        self.0.pop_front()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Stack of completed, recorded moves
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveHistory(Vec<Move>);

impl MoveHistory {
    /// Remember a completed move so a solve can undo it
    pub fn record(&mut self, mv: Move) {
        self.0.push(mv);
    }

    /// Recorded moves, oldest first
    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Drain the history into the sequence that undoes it:
    /// newest move first, each one inverted.
    pub fn take_undo(&mut self) -> Vec<Move> {
        std::mem::take(&mut self.0)
            .into_iter()
            .rev()
            .map(Move::inverse)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::moves::{Axis, Direction};

    fn mv(axis: Axis, layer: i32, direction: Direction) -> Move {
        Move::new(axis, layer, direction).unwrap()
    }

    #[test]
    fn queue_is_first_in_first_out() {
        let a = mv(Axis::X, 1, Direction::Clockwise);
        let b = mv(Axis::Y, 0, Direction::CounterClockwise);
        let mut queue = MoveQueue::default();
        queue.push(a, true);
        queue.push(b, false);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(QueuedMove { mv: a, record: true }));
        assert_eq!(queue.pop(), Some(QueuedMove { mv: b, record: false }));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn undo_reverses_order_and_direction() {
        let a = mv(Axis::X, 1, Direction::Clockwise);
        let b = mv(Axis::Z, -1, Direction::CounterClockwise);
        let mut history = MoveHistory::default();
        history.record(a);
        history.record(b);

        let undo = history.take_undo();
        assert_eq!(undo, vec![b.inverse(), a.inverse()]);
        assert!(history.is_empty());
    }
}
