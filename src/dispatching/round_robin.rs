//! Round-robin time-slicing.
//!
//! # Algorithm
//!
//! 1. Queue every runnable process in collection order.
//! 2. Dequeue the head and run it for one slice.
//! 3. Requeue it at the tail unless it finished.
//!
//! Each turn consumes exactly one slice. The quantum is recorded but does
//! not change the step size.

use std::collections::VecDeque;

use super::SelectionPolicy;
use crate::models::Process;

/// Quantum used when none is given.
pub const DEFAULT_QUANTUM: u32 = 1;

/// FIFO rotation over process indices.
#[derive(Debug, Clone, Default)]
pub struct RoundRobin {
    quantum: u32,
    queue: VecDeque<usize>,
}

impl RoundRobin {
    /// Creates a round-robin policy with the given quantum.
    pub fn new(quantum: u32) -> Self {
        Self {
            quantum,
            queue: VecDeque::new(),
        }
    }

    /// Process indices currently waiting, head first.
    pub fn queued(&self) -> impl Iterator<Item = usize> + '_ {
        self.queue.iter().copied()
    }

    /// Number of queued processes.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}

impl SelectionPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn prepare(&mut self, processes: &[Process]) {
        self.queue.clear();
        self.queue
            .extend((0..processes.len()).filter(|&i| processes[i].is_runnable()));
    }

    fn select_next(&mut self, _processes: &[Process]) -> Option<usize> {
        self.queue.pop_front()
    }

    fn on_slice_complete(&mut self, index: usize, process: &Process) {
        if !process.is_finished() {
            self.queue.push_back(index);
        }
    }

    fn quantum(&self) -> Option<u32> {
        Some(self.quantum)
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}
