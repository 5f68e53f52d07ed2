//! Time-slice scheduler and run metrics.
//!
//! Provides the engine that drives a selection policy slice by slice and
//! the summary computed from a finished run.
//!
//! # Algorithm
//!
//! `Scheduler` owns the shared per-slice logic: select, mark running,
//! report, execute, observe. Only the selection step differs between
//! algorithms (see [`crate::dispatching`]).
//!
//! # Termination
//!
//! Every slice consumes one unit of some process's required time, so a run
//! executes exactly the sum of the initial required times.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod engine;
mod summary;

pub use engine::{Algorithm, Scheduler};
pub use summary::{ProcessStats, RunSummary};
