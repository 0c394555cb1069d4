use alloc::vec::Vec;

use crate::*;

/// Stack of board snapshots. Never empty: the bottom entry is the seed state
/// of the round and cannot be undone past.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    snapshots: Vec<Board>,
}

impl History {
    pub fn new(seed: &Board) -> Self {
        Self {
            snapshots: Vec::from([seed.clone()]),
        }
    }

    /// Stores a value copy of `board` on top of the stack.
    pub fn snapshot(&mut self, board: &Board) {
        self.snapshots.push(board.clone());
        log::trace!("snapshot taken, history length {}", self.snapshots.len());
    }

    /// Drops the newest snapshot and returns a copy of the one below it, or
    /// `None` when only the seed state is left.
    pub fn undo(&mut self) -> Option<Board> {
        if self.snapshots.len() <= 1 {
            return None;
        }
        self.snapshots.pop();
        self.snapshots.last().cloned()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }
}
