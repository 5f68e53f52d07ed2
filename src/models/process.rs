//! Process control block model.
//!
//! A process is the unit of work the CPU scheduler dispatches. It carries
//! its scheduling priority, the number of time slices it still needs, and
//! the number of slices it has already consumed.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 3.1

use std::fmt;

use serde::{Deserialize, Serialize};

/// Process identifier.
pub type ProcessId = u32;

/// Lifecycle state of a process.
///
/// There are no blocked or waiting states: every unfinished process is
/// either ready or the single running one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessState {
    /// Waiting for the CPU.
    Ready,
    /// Selected for the current time slice.
    Running,
    /// All required time consumed. Terminal.
    Finished,
}

impl ProcessState {
    /// Upper-case label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProcessState::Ready => "READY",
            ProcessState::Running => "RUNNING",
            ProcessState::Finished => "FINISHED",
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A process control block (PCB).
///
/// # Time Representation
/// All times are counted in whole time slices. `cpu_time + required_time`
/// stays equal to the initial required time for the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub id: ProcessId,
    /// Scheduling priority (higher = scheduled first).
    pub priority: i32,
    /// Time slices consumed so far.
    pub cpu_time: u32,
    /// Time slices still needed to finish.
    pub required_time: u32,
    /// Lifecycle state.
    pub state: ProcessState,
}

impl Process {
    /// Creates a ready process that needs `required_time` slices.
    pub fn new(id: ProcessId, required_time: u32) -> Self {
        Self {
            id,
            priority: 0,
            cpu_time: 0,
            required_time,
            state: ProcessState::Ready,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has reached its terminal state.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == ProcessState::Finished
    }

    /// Whether the process may be selected for a slice.
    #[inline]
    pub fn is_runnable(&self) -> bool {
        !self.is_finished() && self.required_time > 0
    }

    /// Total work of the process (consumed + remaining).
    #[inline]
    pub fn total_time(&self) -> u32 {
        self.cpu_time + self.required_time
    }

    /// Finishes a process that has no remaining work, without running it.
    ///
    /// Called once per process at the start of a run, after validation has
    /// ruled out `Running` records. Returns `true` when the process was
    /// finished by this call.
    pub(crate) fn prepare_for_run(&mut self) -> bool {
        if self.required_time == 0 && !self.is_finished() {
            self.state = ProcessState::Finished;
            true
        } else {
            false
        }
    }

    /// Executes one time slice.
    ///
    /// Consumes one unit of required time, accounts one unit of CPU time and
    /// lowers the priority by `priority_decay`, saturating at the `i32`
    /// bounds. The process ends up `Finished` when no work remains, `Ready`
    /// otherwise.
    pub(crate) fn execute_slice(&mut self, priority_decay: i32) {
        debug_assert!(self.required_time > 0);
        self.required_time -= 1;
        self.cpu_time += 1;
        self.priority = self.priority.saturating_sub(priority_decay);
        self.state = if self.required_time == 0 {
            ProcessState::Finished
        } else {
            ProcessState::Ready
        };
    }
}
