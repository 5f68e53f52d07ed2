//! Selection policies for the time-slice engine.
//!
//! A policy decides which process receives the next time slice. The engine
//! in [`crate::scheduler`] owns everything else (applying the slice,
//! reporting, termination), so the two classic algorithms differ only in
//! their selection data structure:
//!
//! - [`PriorityDecay`]: re-sorts the unfinished processes by priority every
//!   slice; the running process loses priority as it runs.
//! - [`RoundRobin`]: rotates process indices through a FIFO queue.
//!
//! # Usage
//!
//! ```
//! use u_cpusim::dispatching::{PriorityDecay, SelectionPolicy};
//! use u_cpusim::models::Process;
//!
//! let processes = vec![
//!     Process::new(1, 3).with_priority(5),
//!     Process::new(2, 1).with_priority(9),
//! ];
//! let mut policy = PriorityDecay::default();
//! policy.prepare(&processes);
//! assert_eq!(policy.select_next(&processes), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

mod priority;
mod round_robin;

pub use priority::{PriorityDecay, DEFAULT_PRIORITY_DECAY};
pub use round_robin::{RoundRobin, DEFAULT_QUANTUM};

use crate::models::Process;
use std::fmt::Debug;

/// Strategy that picks the process for the next time slice.
///
/// Processes are addressed by their index in the collection handed to the
/// engine. The collection has the same length and order for every call of
/// one run.
pub trait SelectionPolicy: Send + Debug {
    /// Policy name (e.g., "PRIORITY", "RR").
    fn name(&self) -> &'static str;

    /// Resets internal state at the start of a run.
    ///
    /// Called once, after the engine has normalized process states.
    fn prepare(&mut self, processes: &[Process]);

    /// Returns the index of the process to run next, or `None` when no
    /// process is left to run.
    fn select_next(&mut self, processes: &[Process]) -> Option<usize>;

    /// Amount subtracted from the running process's priority per slice.
    fn priority_decay(&self) -> i32 {
        0
    }

    /// Observes the process at `index` after it executed a slice.
    fn on_slice_complete(&mut self, _index: usize, _process: &Process) {}

    /// Time quantum recorded for this policy, if it has one.
    fn quantum(&self) -> Option<u32> {
        None
    }

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
