//! Snapshot reporters.
//!
//! The engine hands every snapshot to a [`Reporter`] synchronously, one call
//! per time slice. Reporters only see owned copies of the process table.
//!
//! - [`TableReporter`]: fixed-width text table (ID, Priority, CPU Time,
//!   Required Time, State).
//! - [`JsonLinesReporter`]: one JSON object per snapshot.
//! - [`RecordingReporter`]: keeps snapshots in memory.

mod json;
mod recording;
mod table;

pub use json::JsonLinesReporter;
pub use recording::RecordingReporter;
pub use table::TableReporter;

use std::io;

use crate::models::Snapshot;

/// Sink for simulation snapshots.
pub trait Reporter {
    /// Called once before the first slice with the algorithm description.
    fn begin(&mut self, _algorithm: &str) -> io::Result<()> {
        Ok(())
    }

    /// Consumes one snapshot.
    fn report(&mut self, snapshot: &Snapshot) -> io::Result<()>;

    /// Called once after the last slice.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn begin(&mut self, algorithm: &str) -> io::Result<()> {
        (**self).begin(algorithm)
    }

    fn report(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        (**self).report(snapshot)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}

impl<R: Reporter + ?Sized> Reporter for Box<R> {
    fn begin(&mut self, algorithm: &str) -> io::Result<()> {
        (**self).begin(algorithm)
    }

    fn report(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        (**self).report(snapshot)
    }

    fn finish(&mut self) -> io::Result<()> {
        (**self).finish()
    }
}
