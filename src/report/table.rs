//! Fixed-width table reporter.

use std::io::{self, Write};

use super::Reporter;
use crate::models::{Snapshot, SnapshotKind};

const SEPARATOR: &str = "----------------------------------------";

/// Renders snapshots as a text table.
///
/// ```text
/// Time slice: 0
///         ID       Priority       CPU Time  Required Time     State
///          1             10              0              2   RUNNING
/// ----------------------------------------
/// ```
#[derive(Debug)]
pub struct TableReporter<W: Write> {
    out: W,
}

impl<W: Write> TableReporter<W> {
    /// Creates a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TableReporter<io::Stdout> {
    /// Creates a reporter writing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter for TableReporter<W> {
    fn begin(&mut self, algorithm: &str) -> io::Result<()> {
        writeln!(self.out, "=== {algorithm} ===")
    }

    fn report(&mut self, snapshot: &Snapshot) -> io::Result<()> {
        if snapshot.kind == SnapshotKind::Initial {
            writeln!(self.out, "=== Initial process state ===")?;
        }
        writeln!(self.out, "Time slice: {}", snapshot.time_slice)?;
        writeln!(
            self.out,
            "{:>10}{:>15}{:>15}{:>15}{:>10}",
            "ID", "Priority", "CPU Time", "Required Time", "State"
        )?;
        for p in &snapshot.processes {
            writeln!(
                self.out,
                "{:>10}{:>15}{:>15}{:>15}{:>10}",
                p.id,
                p.priority,
                p.cpu_time,
                p.required_time,
                p.state.as_str()
            )?;
        }
        writeln!(self.out, "{SEPARATOR}")
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
