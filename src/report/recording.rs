//! In-memory reporter.

use std::io;

use super::Reporter;
use crate::models::{ProcessId, Snapshot, SnapshotKind};

/// Collects every snapshot it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    /// Algorithm descriptions passed to `begin`.
    pub banners: Vec<String>,
    /// Snapshots in arrival order.
    pub snapshots: Vec<Snapshot>,
}

impl RecordingReporter {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots taken for executed slices (initial snapshot excluded).
    pub fn slices(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots
            .iter()
            .filter(|s| s.kind == SnapshotKind::Slice)
    }

    /// IDs of the running process per slice, in order.
    pub fn selection_order(&self) -> Vec<ProcessId> {
        self.slices().filter_map(|s| s.running).collect()
    }
}

impl Reporter for RecordingReporter {
    fn begin(&mut self, algorithm: &str) -> io::Result<()> {
        self.banners.push(algorithm.to_string());
        Ok(())
    }

    fn report(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        self.snapshots.push(snapshot.clone());
        Ok(())
    }
}
