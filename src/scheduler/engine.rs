//! Discrete time-slice engine.
//!
//! # Algorithm
//!
//! 1. Validate the process table and finish zero-work processes without
//!    running them.
//! 2. Ask the policy for the next process index; stop when there is none.
//! 3. Mark it `Running` and report the whole table *before* the slice.
//! 4. Execute the slice: one unit of required time, one unit of CPU time,
//!    priority decay.
//! 5. Let the policy observe the result and advance the slice counter.
//!
//! # Complexity
//! O(W * (s + r)) where W = total required time, s = selection cost and
//! r = reporting cost per slice.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::RunSummary;
use crate::dispatching::{PriorityDecay, RoundRobin, SelectionPolicy, DEFAULT_PRIORITY_DECAY};
use crate::error::{SimError, SimResult};
use crate::models::{Process, ProcessState, Snapshot};
use crate::report::Reporter;
use crate::validation::validate_processes;

/// Scheduling algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Algorithm {
    /// Highest priority first; the running process loses `decay` priority
    /// per slice.
    Priority {
        /// Priority lost per executed slice.
        decay: i32,
    },
    /// FIFO rotation, one slice per turn.
    RoundRobin {
        /// Recorded quantum. Does not change the step size.
        quantum: u32,
    },
}

impl Algorithm {
    /// Priority scheduling with the default decay of 3.
    pub fn priority() -> Self {
        Algorithm::Priority {
            decay: DEFAULT_PRIORITY_DECAY,
        }
    }

    /// Round-robin scheduling with the given quantum.
    pub fn round_robin(quantum: u32) -> Self {
        Algorithm::RoundRobin { quantum }
    }

    /// Builds the selection policy for this algorithm.
    pub fn into_policy(self) -> Box<dyn SelectionPolicy> {
        match self {
            Algorithm::Priority { decay } => Box::new(PriorityDecay::with_decay(decay)),
            Algorithm::RoundRobin { quantum } => Box::new(RoundRobin::new(quantum)),
        }
    }
}

/// Time-slice scheduler driving a [`SelectionPolicy`].
///
/// # Example
///
/// ```
/// use u_cpusim::models::Process;
/// use u_cpusim::report::RecordingReporter;
/// use u_cpusim::scheduler::{Algorithm, Scheduler};
///
/// let mut processes = vec![
///     Process::new(1, 2).with_priority(10),
///     Process::new(2, 1).with_priority(5),
/// ];
/// let mut reporter = RecordingReporter::new();
/// let summary = Scheduler::new(Algorithm::priority())
///     .run(&mut processes, &mut reporter)
///     .unwrap();
///
/// assert_eq!(summary.total_slices, 3);
/// assert_eq!(summary.selection_order, vec![1, 1, 2]);
/// assert!(processes.iter().all(|p| p.is_finished()));
/// ```
#[derive(Debug)]
pub struct Scheduler {
    policy: Box<dyn SelectionPolicy>,
    initial_report: bool,
}

impl Scheduler {
    /// Creates a scheduler for a built-in algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self::with_policy(algorithm.into_policy())
    }

    /// Creates a scheduler for a custom policy.
    pub fn with_policy(policy: Box<dyn SelectionPolicy>) -> Self {
        Self {
            policy,
            initial_report: true,
        }
    }

    /// Whether to report the pristine table before the first slice
    /// (default: `true`).
    pub fn with_initial_report(mut self, enabled: bool) -> Self {
        self.initial_report = enabled;
        self
    }

    /// The active selection policy.
    pub fn policy(&self) -> &dyn SelectionPolicy {
        self.policy.as_ref()
    }

    /// Runs the simulation until every process is finished.
    ///
    /// Mutates `processes` in place and reports one snapshot per slice.
    /// Returns the run summary.
    ///
    /// # Errors
    /// - [`SimError::Validation`] if the table is inconsistent (nothing is
    ///   mutated in that case).
    /// - [`SimError::Io`] if the reporter fails.
    /// - [`SimError::UnrunnableSelection`] if the policy selects a process
    ///   that cannot run.
    pub fn run<R: Reporter + ?Sized>(
        &mut self,
        processes: &mut [Process],
        reporter: &mut R,
    ) -> SimResult<RunSummary> {
        validate_processes(processes).map_err(SimError::Validation)?;

        let total_work: u64 = processes.iter().map(|p| u64::from(p.required_time)).sum();
        info!(
            policy = self.policy.name(),
            quantum = ?self.policy.quantum(),
            processes = processes.len(),
            total_work,
            "simulation started"
        );

        for p in processes.iter_mut() {
            if p.prepare_for_run() {
                warn!(pid = p.id, "process has no required time; finished without running");
            }
        }
        self.policy.prepare(processes);

        reporter.begin(self.policy.description())?;
        if self.initial_report {
            reporter.report(&Snapshot::initial(processes))?;
        }

        let decay = self.policy.priority_decay();
        let mut selection_order = Vec::new();
        let mut time_slice: u64 = 0;

        while let Some(index) = self.policy.select_next(processes) {
            let Some(current) = processes.get_mut(index).filter(|p| p.is_runnable()) else {
                return Err(SimError::UnrunnableSelection { index });
            };
            current.state = ProcessState::Running;
            let pid = current.id;

            reporter.report(&Snapshot::slice(time_slice, pid, processes))?;

            let current = &mut processes[index];
            current.execute_slice(decay);
            debug!(
                time_slice,
                pid,
                priority = current.priority,
                remaining = current.required_time,
                state = %current.state,
                "slice executed"
            );

            self.policy.on_slice_complete(index, &processes[index]);
            selection_order.push(pid);
            time_slice += 1;
        }

        reporter.finish()?;
        info!(total_slices = time_slice, "simulation finished");

        Ok(RunSummary::calculate(
            self.policy.name(),
            self.policy.quantum(),
            selection_order,
            processes,
        ))
    }
}
