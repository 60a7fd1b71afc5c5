//! Timing harness comparing the two flag-check variants.
//!
//! Every scenario is run through [`Variant::Baseline`] and
//! [`Variant::ShortCircuit`] with the same warmup and iteration counts.
//!
//! # Example
//!
//! ```
//! use has_flag::bench::{default_scenarios, run, BenchConfig};
//!
//! let config = BenchConfig::new(100, 10).unwrap();
//! let report = run(&config, &default_scenarios(), |_| {});
//! assert_eq!(report.scenarios.len(), 10);
//! ```

pub mod report;
pub mod scenario;

use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::error::{HasFlagError, Result};
use crate::flag::{present, present_eager};

pub use report::{BenchReport, ScenarioResult};
pub use scenario::{default_scenarios, select_scenarios, FlagSelection, Scenario};

/// Default timed iterations per scenario and variant.
pub const DEFAULT_ITERATIONS: usize = 500_000;

/// Default untimed warmup calls per scenario and variant.
pub const DEFAULT_WARMUP: usize = 1_000;

/// An implementation of the flag check under measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Always searches for both the flag and the terminator.
    Baseline,
    /// Searches for the terminator only once the flag is found.
    ShortCircuit,
}

impl Variant {
    /// Run this variant's check.
    pub fn check(self, flag: &str, args: &[String]) -> bool {
        match self {
            Self::Baseline => present_eager(flag, args),
            Self::ShortCircuit => present(flag, args),
        }
    }
}

/// Iteration counts for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    iterations: usize,
    warmup: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            warmup: DEFAULT_WARMUP,
        }
    }
}

impl BenchConfig {
    /// Create a config. `iterations` must be non-zero.
    pub fn new(iterations: usize, warmup: usize) -> Result<Self> {
        if iterations == 0 {
            return Err(HasFlagError::InvalidBenchConfig {
                message: "iterations must be greater than zero".to_string(),
            });
        }
        Ok(Self { iterations, warmup })
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn warmup(&self) -> usize {
        self.warmup
    }
}

fn drive(variant: Variant, scenario: &Scenario, count: usize) {
    for i in 0..count {
        let flag = scenario.flags.flag_for(i);
        black_box(variant.check(black_box(flag), black_box(&scenario.argv)));
    }
}

/// Warm up, then time `config.iterations()` calls of `variant`.
pub fn time_variant(variant: Variant, scenario: &Scenario, config: &BenchConfig) -> Duration {
    drive(variant, scenario, config.warmup);

    let start = Instant::now();
    drive(variant, scenario, config.iterations);
    start.elapsed()
}

/// Time one scenario under both variants.
pub fn run_scenario(scenario: &Scenario, config: &BenchConfig) -> ScenarioResult {
    let baseline = time_variant(Variant::Baseline, scenario, config);
    let optimized = time_variant(Variant::ShortCircuit, scenario, config);

    tracing::debug!(
        "{}: baseline {:?}, optimized {:?}",
        scenario.name,
        baseline,
        optimized
    );

    ScenarioResult {
        name: scenario.name.clone(),
        baseline,
        optimized,
    }
}

/// Run every scenario, calling `on_result` as each one finishes.
pub fn run<F>(config: &BenchConfig, scenarios: &[Scenario], mut on_result: F) -> BenchReport
where
    F: FnMut(&ScenarioResult),
{
    tracing::info!(
        "Benchmarking {} scenarios, {} iterations each",
        scenarios.len(),
        config.iterations
    );

    let results = scenarios
        .iter()
        .map(|scenario| {
            let result = run_scenario(scenario, config);
            on_result(&result);
            result
        })
        .collect();

    BenchReport {
        iterations: config.iterations,
        scenarios: results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_iterations() {
        let err = BenchConfig::new(0, 10).unwrap_err();
        assert!(matches!(err, HasFlagError::InvalidBenchConfig { .. }));
    }

    #[test]
    fn config_allows_zero_warmup() {
        let config = BenchConfig::new(5, 0).unwrap();
        assert_eq!(config.iterations(), 5);
        assert_eq!(config.warmup(), 0);
    }

    #[test]
    fn default_config_matches_constants() {
        let config = BenchConfig::default();
        assert_eq!(config.iterations(), DEFAULT_ITERATIONS);
        assert_eq!(config.warmup(), DEFAULT_WARMUP);
    }

    #[test]
    fn variants_agree_on_every_scenario() {
        for scenario in default_scenarios() {
            for i in 0..5 {
                let flag = scenario.flags.flag_for(i);
                assert_eq!(
                    Variant::Baseline.check(flag, &scenario.argv),
                    Variant::ShortCircuit.check(flag, &scenario.argv),
                    "{} / {}",
                    scenario.name,
                    flag
                );
            }
        }
    }

    #[test]
    fn run_reports_each_scenario_in_order() {
        let config = BenchConfig::new(10, 1).unwrap();
        let scenarios = default_scenarios();
        let mut seen = Vec::new();
        let report = run(&config, &scenarios, |r| seen.push(r.name.clone()));

        assert_eq!(report.iterations, 10);
        assert_eq!(report.scenarios.len(), scenarios.len());
        assert_eq!(seen[0], "Short flag in small argv");
        assert_eq!(seen.len(), scenarios.len());
    }

    #[test]
    fn run_with_no_scenarios_is_empty() {
        let report = run(&BenchConfig::default(), &[], |_| {});
        assert!(report.scenarios.is_empty());
        assert_eq!(report.total_baseline(), Duration::ZERO);
    }
}
