//! Per-tick input queue.
//!
//! Key events arrive between ticks; the host loop pushes them here and hands
//! the whole batch to the simulation once per tick. Capacity is fixed so the
//! loop never allocates for input.

use arrayvec::ArrayVec;

use crate::types::{GameAction, MAX_INPUTS_PER_TICK};

#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: ArrayVec<GameAction, MAX_INPUTS_PER_TICK>,
    batch: ArrayVec<GameAction, MAX_INPUTS_PER_TICK>,
    dropped: u64,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action for the next tick. Returns false when full.
    ///
    /// `Quit` is never dropped: when the queue is full it replaces the newest
    /// pending action.
    pub fn push(&mut self, action: GameAction) -> bool {
        if self.pending.try_push(action).is_ok() {
            return true;
        }
        self.dropped += 1;
        if action == GameAction::Quit {
            self.pending.pop();
            self.pending.push(action);
        }
        false
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Actions discarded because the queue was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    /// Hand the pending actions over in arrival order and start a new batch.
    ///
    /// The returned slice stays valid until the next call.
    pub fn drain(&mut self) -> &[GameAction] {
        std::mem::swap(&mut self.pending, &mut self.batch);
        self.pending.clear();
        &self.batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_preserves_arrival_order() {
        let mut q = InputQueue::new();
        q.push(GameAction::MoveLeft);
        q.push(GameAction::MoveUp);
        q.push(GameAction::MoveLeft);

        assert_eq!(
            q.drain(),
            &[GameAction::MoveLeft, GameAction::MoveUp, GameAction::MoveLeft]
        );
        assert!(q.is_empty());
        assert!(q.drain().is_empty());
    }

    #[test]
    fn test_overflow_drops_and_counts() {
        let mut q = InputQueue::new();
        for _ in 0..MAX_INPUTS_PER_TICK {
            assert!(q.push(GameAction::MoveRight));
        }
        assert!(!q.push(GameAction::MoveDown));
        assert_eq!(q.len(), MAX_INPUTS_PER_TICK);
        assert_eq!(q.dropped(), 1);
        assert!(!q.drain().contains(&GameAction::MoveDown));
    }

    #[test]
    fn test_quit_survives_full_queue() {
        let mut q = InputQueue::new();
        for _ in 0..MAX_INPUTS_PER_TICK {
            q.push(GameAction::MoveRight);
        }
        q.push(GameAction::Quit);

        let batch = q.drain();
        assert_eq!(batch.len(), MAX_INPUTS_PER_TICK);
        assert_eq!(batch.last(), Some(&GameAction::Quit));
    }
}
