//! Run summary metrics.
//!
//! Computes per-process and average timing indicators from the selection
//! order of a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Completion time | Slice count at the end of the process's last slice |
//! | Turnaround | Completion - arrival (all processes arrive at t=0) |
//! | Waiting time | Turnaround - CPU time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessId};

/// Timing indicators of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Process identifier.
    pub id: ProcessId,
    /// Slices executed.
    pub cpu_time: u32,
    /// Time at which the process finished. `None` = not finished.
    pub completion_time: Option<u64>,
    /// Completion time minus arrival time (0).
    pub turnaround_time: Option<u64>,
    /// Turnaround time minus CPU time.
    pub waiting_time: Option<u64>,
}

/// Outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Policy name ("PRIORITY", "RR", ...).
    pub algorithm: String,
    /// Recorded quantum, if the policy has one.
    pub quantum: Option<u32>,
    /// Number of slices executed.
    pub total_slices: u64,
    /// Process ID that ran in each slice.
    pub selection_order: Vec<ProcessId>,
    /// Per-process statistics in collection order.
    pub processes: Vec<ProcessStats>,
    /// Mean turnaround time over finished processes.
    pub avg_turnaround_time: f64,
    /// Mean waiting time over finished processes.
    pub avg_waiting_time: f64,
}

impl RunSummary {
    /// Computes the summary from a selection order and the final table.
    ///
    /// # Arguments
    /// * `algorithm` - Policy name.
    /// * `quantum` - Recorded quantum.
    /// * `selection_order` - Process ID per executed slice.
    /// * `processes` - Process table after the run.
    pub fn calculate(
        algorithm: &str,
        quantum: Option<u32>,
        selection_order: Vec<ProcessId>,
        processes: &[Process],
    ) -> Self {
        // Last slice index per process
        let mut last_slice: HashMap<ProcessId, u64> = HashMap::new();
        for (slice, &pid) in selection_order.iter().enumerate() {
            last_slice.insert(pid, slice as u64);
        }

        let stats: Vec<ProcessStats> = processes
            .iter()
            .map(|p| {
                let completion = p
                    .is_finished()
                    .then(|| last_slice.get(&p.id).map_or(0, |&s| s + 1));
                ProcessStats {
                    id: p.id,
                    cpu_time: p.cpu_time,
                    completion_time: completion,
                    turnaround_time: completion,
                    waiting_time: completion.map(|c| c.saturating_sub(u64::from(p.cpu_time))),
                }
            })
            .collect();

        let avg_turnaround_time = mean_of(stats.iter().map(|s| s.turnaround_time));
        let avg_waiting_time = mean_of(stats.iter().map(|s| s.waiting_time));

        Self {
            algorithm: algorithm.to_string(),
            quantum,
            total_slices: selection_order.len() as u64,
            selection_order,
            processes: stats,
            avg_turnaround_time,
            avg_waiting_time,
        }
    }

    /// Statistics for one process.
    pub fn stats_for(&self, id: ProcessId) -> Option<&ProcessStats> {
        self.processes.iter().find(|s| s.id == id)
    }

    /// Whether every process finished.
    pub fn all_finished(&self) -> bool {
        self.processes.iter().all(|s| s.completion_time.is_some())
    }
}

/// Mean over the present values; 0.0 when there are none.
fn mean_of(values: impl Iterator<Item = Option<u64>>) -> f64 {
    let (sum, count) = values
        .flatten()
        .fold((0u64, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
