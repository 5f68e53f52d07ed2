//! Simulation configuration.
//!
//! Controls how many processes are generated, the ranges their initial
//! values are drawn from, and the priority decay used by priority
//! scheduling. All fields have defaults, so a config file only needs the
//! fields it changes.
//!
//! ```json
//! { "process_count": 8, "priority_max": 20, "seed": 7 }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dispatching::DEFAULT_PRIORITY_DECAY;
use crate::error::SimResult;
use crate::validation::{self, ValidationResult};

/// Parameters for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of processes to generate.
    pub process_count: usize,
    /// Lowest initial priority (inclusive).
    pub priority_min: i32,
    /// Highest initial priority (inclusive).
    pub priority_max: i32,
    /// Lowest initial required time in slices (inclusive).
    pub required_min: u32,
    /// Highest initial required time in slices (inclusive).
    pub required_max: u32,
    /// Priority lost per executed slice under priority scheduling.
    pub priority_decay: i32,
    /// RNG seed. `None` = seeded from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            process_count: 5,
            priority_min: 1,
            priority_max: 50,
            required_min: 1,
            required_max: 10,
            priority_decay: DEFAULT_PRIORITY_DECAY,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> SimResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parses a configuration from JSON text.
    pub fn from_json_str(text: &str) -> SimResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Sets the number of processes.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_min = min;
        self.priority_max = max;
        self
    }

    /// Sets the required time range.
    pub fn with_required_range(mut self, min: u32, max: u32) -> Self {
        self.required_min = min;
        self.required_max = max;
        self
    }

    /// Sets the priority decay.
    pub fn with_priority_decay(mut self, decay: i32) -> Self {
        self.priority_decay = decay;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks that every range is non-empty and required times are positive.
    pub fn validate(&self) -> ValidationResult {
        validation::validate_config(self)
    }
}
