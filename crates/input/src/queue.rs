//! Bounded buffer of inputs waiting for the next tick.
//!
//! Keys pressed between two ticks are kept in arrival order so quick turn
//! sequences (e.g. up then left) are not lost. Each tick pops one.

use arrayvec::ArrayVec;

use crate::types::GameInput;

/// Maximum number of inputs buffered between ticks.
pub const INPUT_QUEUE_CAPACITY: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: ArrayVec<GameInput, INPUT_QUEUE_CAPACITY>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer an input. Returns `false` (dropping it) when the queue is full.
    pub fn push(&mut self, input: GameInput) -> bool {
        self.pending.try_push(input).is_ok()
    }

    /// Take the oldest buffered input, if any.
    pub fn pop(&mut self) -> Option<GameInput> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_arrival_order() {
        let mut q = InputQueue::new();
        assert!(q.push(GameInput::Up));
        assert!(q.push(GameInput::Left));
        assert_eq!(q.pop(), Some(GameInput::Up));
        assert_eq!(q.pop(), Some(GameInput::Left));
        assert_eq!(q.pop(), None);
    }

    #[test]
    fn drops_newest_when_full() {
        let mut q = InputQueue::new();
        for _ in 0..INPUT_QUEUE_CAPACITY {
            assert!(q.push(GameInput::Down));
        }
        assert!(!q.push(GameInput::Confirm));
        assert_eq!(q.len(), INPUT_QUEUE_CAPACITY);

        q.clear();
        assert!(q.is_empty());
    }
}
