//! Priority scheduling with priority decay.
//!
//! # Algorithm
//!
//! 1. Collect the unfinished processes in collection order.
//! 2. Stable-sort them by priority, highest first.
//! 3. Run the head for one slice and lower its priority by the decay amount.
//!
//! The working set is rebuilt from the collection every slice, so processes
//! with equal priority always resolve in collection order.
//!
//! # Complexity
//! O(n log n) per slice.

use super::SelectionPolicy;
use crate::models::Process;

/// Priority decay applied per executed slice.
pub const DEFAULT_PRIORITY_DECAY: i32 = 3;

/// Highest-priority-first selection with aging by decay.
///
/// # Example
/// ```
/// use u_cpusim::dispatching::{PriorityDecay, SelectionPolicy};
///
/// let policy = PriorityDecay::with_decay(5);
/// assert_eq!(policy.priority_decay(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityDecay {
    /// Priority lost per executed slice.
    pub decay: i32,
}

impl Default for PriorityDecay {
    fn default() -> Self {
        Self {
            decay: DEFAULT_PRIORITY_DECAY,
        }
    }
}

impl PriorityDecay {
    /// Creates a policy with a custom decay amount.
    pub fn with_decay(decay: i32) -> Self {
        Self { decay }
    }

    /// Indices of unfinished processes, highest priority first.
    pub fn ordered_working_set(processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len())
            .filter(|&i| !processes[i].is_finished())
            .collect();
        // `sort_by` is stable: ties keep collection order
        indices.sort_by(|&a, &b| processes[b].priority.cmp(&processes[a].priority));
        indices
    }
}

impl SelectionPolicy for PriorityDecay {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn prepare(&mut self, _processes: &[Process]) {}

    fn select_next(&mut self, processes: &[Process]) -> Option<usize> {
        Self::ordered_working_set(processes).first().copied()
    }

    fn priority_decay(&self) -> i32 {
        self.decay
    }

    fn description(&self) -> &'static str {
        "Priority Scheduling with Decay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessState;

    fn make(id: u32, required: u32, priority: i32) -> Process {
        Process::new(id, required).with_priority(priority)
    }

    #[test]
    fn test_highest_priority_first() {
        let processes = vec![make(1, 1, 3), make(2, 1, 40), make(3, 1, 12)];
        let mut policy = PriorityDecay::default();
        policy.prepare(&processes);
        assert_eq!(policy.select_next(&processes), Some(1));
        assert_eq!(PriorityDecay::ordered_working_set(&processes), vec![1, 2, 0]);
    }

    #[test]
    fn test_ties_keep_collection_order() {
        let processes = vec![make(1, 1, 7), make(2, 1, 9), make(3, 1, 9), make(4, 1, 9)];
        assert_eq!(
            PriorityDecay::ordered_working_set(&processes),
            vec![1, 2, 3, 0]
        );
    }

    #[test]
    fn test_finished_excluded() {
        let mut processes = vec![make(1, 0, 50), make(2, 3, 1)];
        processes[0].state = ProcessState::Finished;
        let mut policy = PriorityDecay::default();
        assert_eq!(policy.select_next(&processes), Some(1));
    }

    #[test]
    fn test_empty_working_set() {
        let mut processes = vec![make(1, 0, 1)];
        processes[0].state = ProcessState::Finished;
        let mut policy = PriorityDecay::default();
        assert_eq!(policy.select_next(&processes), None);
        assert_eq!(policy.select_next(&[]), None);
    }

    #[test]
    fn test_decay_and_metadata() {
        let policy = PriorityDecay::default();
        assert_eq!(policy.priority_decay(), 3);
        assert_eq!(policy.name(), "PRIORITY");
        assert!(policy.quantum().is_none());
    }
}
