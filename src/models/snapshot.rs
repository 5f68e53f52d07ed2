//! State snapshot model.
//!
//! A snapshot is an owned copy of the whole process table at one point of
//! the simulation. Reporters consume snapshots; they never see the live
//! collection.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, ProcessState};

/// Why a snapshot was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotKind {
    /// Pristine state before any slice executes.
    Initial,
    /// A process was selected and is about to run the slice.
    Slice,
}

/// The process table at one time slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot kind.
    pub kind: SnapshotKind,
    /// Time-slice counter (0-based).
    pub time_slice: u64,
    /// Process selected for this slice. `None` for the initial snapshot.
    pub running: Option<ProcessId>,
    /// Copy of every process, finished ones included.
    pub processes: Vec<Process>,
}

impl Snapshot {
    /// Captures the initial state (t=0, nothing running).
    pub fn initial(processes: &[Process]) -> Self {
        Self {
            kind: SnapshotKind::Initial,
            time_slice: 0,
            running: None,
            processes: processes.to_vec(),
        }
    }

    /// Captures the table while `running` holds the CPU.
    pub fn slice(time_slice: u64, running: ProcessId, processes: &[Process]) -> Self {
        Self {
            kind: SnapshotKind::Slice,
            time_slice,
            running: Some(running),
            processes: processes.to_vec(),
        }
    }

    /// Finds a process by ID.
    pub fn process(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of processes in the given state.
    pub fn count_in_state(&self, state: ProcessState) -> usize {
        self.processes.iter().filter(|p| p.state == state).count()
    }

    /// Whether every process is finished.
    pub fn all_finished(&self) -> bool {
        self.processes.iter().all(Process::is_finished)
    }
}
