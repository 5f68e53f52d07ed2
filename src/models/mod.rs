//! Simulation domain models.
//!
//! Provides the process control block and the snapshot type reporters
//! consume.
//!
//! # Domain Mappings
//!
//! | u-cpusim | OS textbook | Meaning |
//! |----------|-------------|---------|
//! | Process | PCB | One schedulable unit |
//! | time slice | quantum tick | One unit of simulated CPU time |
//! | Snapshot | process table dump | State of every PCB at one tick |

mod process;
mod snapshot;

pub use process::{Process, ProcessId, ProcessState};
pub use snapshot::{Snapshot, SnapshotKind};
