//! CPU scheduling simulator for the U-Engine ecosystem.
//!
//! Simulates a fixed set of processes on a single CPU in discrete time
//! slices, under priority scheduling with priority decay or round-robin
//! time-slicing, and reports the process table at every slice.
//!
//! # Modules
//!
//! - **`models`**: `Process` (PCB), `ProcessState`, `Snapshot`
//! - **`dispatching`**: `SelectionPolicy` with `PriorityDecay` and `RoundRobin`
//! - **`scheduler`**: `Scheduler` time-slice engine, `Algorithm`, `RunSummary`
//! - **`report`**: `Reporter` sinks (table, JSON lines, in-memory)
//! - **`generator`**: random initial process tables
//! - **`config`**: `SimulationConfig`
//! - **`validation`**: input integrity checks
//! - **`selection`**: interactive algorithm menu
//!
//! # Example
//!
//! ```
//! use u_cpusim::models::Process;
//! use u_cpusim::report::RecordingReporter;
//! use u_cpusim::scheduler::{Algorithm, Scheduler};
//!
//! let mut processes = vec![
//!     Process::new(1, 2).with_priority(10),
//!     Process::new(2, 1).with_priority(5),
//! ];
//! let mut reporter = RecordingReporter::new();
//! let summary = Scheduler::new(Algorithm::round_robin(2))
//!     .run(&mut processes, &mut reporter)
//!     .unwrap();
//! assert_eq!(summary.selection_order, vec![1, 2, 1]);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod generator;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod selection;
pub mod validation;

pub use error::{SimError, SimResult};
