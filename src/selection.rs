//! Interactive algorithm selection.
//!
//! Reads a menu choice (`1` = priority scheduling, `2` = round-robin) and,
//! for round-robin, a time quantum. Any other choice is a clean no-op: the
//! rejection message is printed and no algorithm is returned.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::dispatching::DEFAULT_QUANTUM;
use crate::scheduler::Algorithm;

/// Message printed for an unrecognized menu choice.
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice, no scheduling performed.";

/// Parsed menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// `1`
    Priority,
    /// `2`
    RoundRobin,
    /// Anything else.
    Invalid,
}

/// Parses one line of menu input.
pub fn parse_menu_choice(input: &str) -> MenuChoice {
    match input.trim().parse::<i64>() {
        Ok(1) => MenuChoice::Priority,
        Ok(2) => MenuChoice::RoundRobin,
        _ => MenuChoice::Invalid,
    }
}

/// Parses a quantum, falling back to [`DEFAULT_QUANTUM`] on bad input.
pub fn parse_quantum(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(q) => q,
        Err(_) => {
            warn!(input = input.trim(), default = DEFAULT_QUANTUM, "unparsable quantum");
            DEFAULT_QUANTUM
        }
    }
}

/// Prompts for an algorithm on `output` and reads the answer from `input`.
///
/// When `quantum` is given, round-robin uses it instead of asking for one.
/// Returns `Ok(None)` after printing [`INVALID_CHOICE_MESSAGE`] when the
/// choice is not recognized (end of input included).
pub fn prompt_algorithm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    priority_decay: i32,
    quantum: Option<u32>,
) -> io::Result<Option<Algorithm>> {
    writeln!(output, "Select scheduling algorithm: 1. Priority  2. Round robin")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    match parse_menu_choice(&line) {
        MenuChoice::Priority => Ok(Some(Algorithm::Priority {
            decay: priority_decay,
        })),
        MenuChoice::RoundRobin => {
            if let Some(q) = quantum {
                return Ok(Some(Algorithm::round_robin(q)));
            }
            write!(output, "Enter time quantum: ")?;
            output.flush()?;
            line.clear();
            input.read_line(&mut line)?;
            Ok(Some(Algorithm::round_robin(parse_quantum(&line))))
        }
        MenuChoice::Invalid => {
            writeln!(output, "{INVALID_CHOICE_MESSAGE}")?;
            Ok(None)
        }
    }
}
