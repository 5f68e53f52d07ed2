//! Input validation for simulation runs.
//!
//! Checks structural integrity of a process table and a configuration
//! before scheduling. Detects:
//! - Duplicate process IDs
//! - Processes whose state contradicts their remaining work
//! - Empty generation ranges
//! - Ranges that allow processes without work
//!
//! A process with zero required time in a `Ready` state is *not* an error:
//! the engine finishes it without running it.

use std::collections::HashSet;
use std::fmt;

use crate::config::SimulationConfig;
use crate::models::{Process, ProcessState};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same ID.
    DuplicateId,
    /// A process state contradicts its counters.
    InconsistentState,
    /// A configured range has min > max.
    EmptyRange,
    /// The required time range includes zero.
    ZeroRequiredTime,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process table before a run.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. No `Finished` process with remaining work
/// 3. No process already `Running`
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        match p.state {
            ProcessState::Finished if p.required_time > 0 => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InconsistentState,
                    format!(
                        "Process {} is FINISHED but still requires {} slice(s)",
                        p.id, p.required_time
                    ),
                ));
            }
            ProcessState::Running => {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InconsistentState,
                    format!("Process {} is already RUNNING before the run starts", p.id),
                ));
            }
            _ => {}
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a simulation configuration.
///
/// Checks:
/// 1. `priority_min <= priority_max`
/// 2. `required_min <= required_max`
/// 3. `required_min >= 1`
pub fn validate_config(config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.priority_min > config.priority_max {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRange,
            format!(
                "priority range {}..={} is empty",
                config.priority_min, config.priority_max
            ),
        ));
    }

    if config.required_min > config.required_max {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRange,
            format!(
                "required time range {}..={} is empty",
                config.required_min, config.required_max
            ),
        ));
    }

    if config.required_min == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroRequiredTime,
            "required time range must start at 1 or more",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(1, 3).with_priority(10),
            Process::new(2, 1).with_priority(5),
            Process::new(3, 6).with_priority(30),
        ]
    }

    #[test]
    fn test_valid_processes() {
        assert!(validate_processes(&sample_processes()).is_ok());
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let mut processes = sample_processes();
        processes.push(Process::new(2, 4));

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains('2'));
    }

    #[test]
    fn test_zero_work_ready_is_allowed() {
        let processes = vec![Process::new(1, 0)];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_finished_with_work() {
        let mut processes = sample_processes();
        processes[0].state = ProcessState::Finished;

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InconsistentState));
    }

    #[test]
    fn test_already_running() {
        let mut processes = sample_processes();
        processes[1].state = ProcessState::Running;

        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors[0].message.contains("RUNNING"));
    }

    #[test]
    fn test_multiple_errors() {
        let mut processes = vec![Process::new(1, 2), Process::new(1, 2)];
        processes[1].state = ProcessState::Running;

        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_config_empty_ranges() {
        let config = SimulationConfig::default()
            .with_priority_range(10, 1)
            .with_required_range(5, 2);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors
                .iter()
                .filter(|e| e.kind == ValidationErrorKind::EmptyRange)
                .count(),
            2
        );
    }

    #[test]
    fn test_config_zero_required() {
        let config = SimulationConfig::default().with_required_range(0, 3);
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::ZeroRequiredTime);
    }

    #[test]
    fn test_config_negative_priorities_allowed() {
        let config = SimulationConfig::default().with_priority_range(-20, -1);
        assert!(validate_config(&config).is_ok());
    }
}
