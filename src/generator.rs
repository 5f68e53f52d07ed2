//! Random initial process generation.
//!
//! Produces the fixed process table a run starts from: IDs `1..=N`, random
//! priorities and required times drawn uniformly from the configured
//! ranges, no CPU time consumed, every process `Ready`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::SimulationConfig;
use crate::error::{SimError, SimResult};
use crate::models::{Process, ProcessId};

/// Generates initial process tables from a [`SimulationConfig`].
///
/// # Example
/// ```
/// use u_cpusim::config::SimulationConfig;
/// use u_cpusim::generator::ProcessGenerator;
///
/// let generator = ProcessGenerator::new(SimulationConfig::default().with_seed(42)).unwrap();
/// let processes = generator.generate_seeded();
/// assert_eq!(processes.len(), 5);
/// assert!(processes.iter().all(|p| (1..=10).contains(&p.required_time)));
/// ```
#[derive(Debug, Clone)]
pub struct ProcessGenerator {
    config: SimulationConfig,
}

impl ProcessGenerator {
    /// Creates a generator after validating the configuration.
    pub fn new(config: SimulationConfig) -> SimResult<Self> {
        config.validate().map_err(SimError::Validation)?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Generates processes with the given RNG.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let c = &self.config;
        (1..=c.process_count as ProcessId)
            .map(|id| {
                let priority = rng.random_range(c.priority_min..=c.priority_max);
                let required = rng.random_range(c.required_min..=c.required_max);
                debug!(pid = id, priority, required, "generated process");
                Process::new(id, required).with_priority(priority)
            })
            .collect()
    }

    /// Generates processes from the configured seed, or from OS entropy
    /// when no seed is set.
    pub fn generate_seeded(&self) -> Vec<Process> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.generate(&mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessState;
    use rand::rngs::SmallRng;

    #[test]
    fn test_generate_defaults() {
        let generator = ProcessGenerator::new(SimulationConfig::default()).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        let processes = generator.generate(&mut rng);

        assert_eq!(processes.len(), 5);
        for (i, p) in processes.iter().enumerate() {
            assert_eq!(p.id, i as u32 + 1);
            assert!((1..=50).contains(&p.priority));
            assert!((1..=10).contains(&p.required_time));
            assert_eq!(p.cpu_time, 0);
            assert_eq!(p.state, ProcessState::Ready);
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let config = SimulationConfig::default().with_seed(7).with_process_count(20);
        let generator = ProcessGenerator::new(config).unwrap();
        assert_eq!(generator.generate_seeded(), generator.generate_seeded());
    }

    #[test]
    fn test_degenerate_ranges() {
        let config = SimulationConfig::default()
            .with_priority_range(4, 4)
            .with_required_range(2, 2)
            .with_process_count(3);
        let generator = ProcessGenerator::new(config).unwrap();
        let mut rng = SmallRng::seed_from_u64(1);
        let processes = generator.generate(&mut rng);
        assert!(processes.iter().all(|p| p.priority == 4 && p.required_time == 2));
    }

    #[test]
    fn test_config_accessor() {
        let config = SimulationConfig::default().with_process_count(9).with_seed(3);
        let generator = ProcessGenerator::new(config.clone()).unwrap();
        assert_eq!(generator.config(), &config);
    }

    #[test]
    fn test_zero_processes() {
        let config = SimulationConfig::default().with_process_count(0);
        let generator = ProcessGenerator::new(config).unwrap();
        assert!(generator.generate_seeded().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimulationConfig::default().with_required_range(0, 5);
        let err = ProcessGenerator::new(config).unwrap_err();
        assert!(matches!(err, SimError::Validation(_)));
    }
}
