//! Benchmark results and comparisons.

use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::ui::{format_duration, Table};

fn serialize_ms<S: Serializer>(d: &Duration, s: S) -> std::result::Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_nanos() as f64 / 1_000_000.0)
}

fn improvement(baseline: Duration, optimized: Duration) -> f64 {
    let b = baseline.as_secs_f64();
    if b == 0.0 {
        return 0.0;
    }
    (b - optimized.as_secs_f64()) / b * 100.0
}

fn speedup(baseline: Duration, optimized: Duration) -> f64 {
    let o = optimized.as_secs_f64();
    if o == 0.0 {
        return 0.0;
    }
    baseline.as_secs_f64() / o
}

/// Timings for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioResult {
    pub name: String,
    #[serde(rename = "baseline_ms", serialize_with = "serialize_ms")]
    pub baseline: Duration,
    #[serde(rename = "optimized_ms", serialize_with = "serialize_ms")]
    pub optimized: Duration,
}

impl ScenarioResult {
    /// Percentage of baseline time saved (negative when slower).
    pub fn improvement_percent(&self) -> f64 {
        improvement(self.baseline, self.optimized)
    }

    /// Baseline time divided by optimized time.
    pub fn speedup(&self) -> f64 {
        speedup(self.baseline, self.optimized)
    }
}

/// Results for a full benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchReport {
    pub iterations: usize,
    pub scenarios: Vec<ScenarioResult>,
}

#[derive(Serialize)]
struct Summary<'a> {
    #[serde(flatten)]
    report: &'a BenchReport,
    #[serde(serialize_with = "serialize_ms")]
    total_baseline_ms: Duration,
    #[serde(serialize_with = "serialize_ms")]
    total_optimized_ms: Duration,
    improvement_percent: f64,
    speedup: f64,
}

impl BenchReport {
    /// Sum of baseline timings.
    pub fn total_baseline(&self) -> Duration {
        self.scenarios.iter().map(|s| s.baseline).sum()
    }

    /// Sum of optimized timings.
    pub fn total_optimized(&self) -> Duration {
        self.scenarios.iter().map(|s| s.optimized).sum()
    }

    /// Overall improvement across all scenarios.
    pub fn improvement_percent(&self) -> f64 {
        improvement(self.total_baseline(), self.total_optimized())
    }

    /// Overall speedup across all scenarios.
    pub fn speedup(&self) -> f64 {
        speedup(self.total_baseline(), self.total_optimized())
    }

    /// Serialize the report with its totals.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&Summary {
            report: self,
            total_baseline_ms: self.total_baseline(),
            total_optimized_ms: self.total_optimized(),
            improvement_percent: self.improvement_percent(),
            speedup: self.speedup(),
        })
    }

    /// Render the per-scenario table.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new(vec![
            "Scenario",
            "Baseline",
            "Optimized",
            "Improvement",
            "Speedup",
        ]);

        for s in &self.scenarios {
            let baseline = format_duration(s.baseline);
            let optimized = format_duration(s.optimized);
            let improvement = format!("{:.2}%", s.improvement_percent());
            let speedup = format!("{:.2}x", s.speedup());
            table.add_row(vec![
                s.name.as_str(),
                baseline.as_str(),
                optimized.as_str(),
                improvement.as_str(),
                speedup.as_str(),
            ]);
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, baseline_ms: u64, optimized_ms: u64) -> ScenarioResult {
        ScenarioResult {
            name: name.to_string(),
            baseline: Duration::from_millis(baseline_ms),
            optimized: Duration::from_millis(optimized_ms),
        }
    }

    #[test]
    fn improvement_and_speedup() {
        let r = result("a", 200, 100);
        assert!((r.improvement_percent() - 50.0).abs() < 1e-9);
        assert!((r.speedup() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn slower_optimized_is_negative_improvement() {
        let r = result("a", 100, 200);
        assert!((r.improvement_percent() + 100.0).abs() < 1e-9);
        assert!((r.speedup() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_timings_do_not_divide_by_zero() {
        let r = result("a", 0, 0);
        assert_eq!(r.improvement_percent(), 0.0);
        assert_eq!(r.speedup(), 0.0);
    }

    #[test]
    fn totals_sum_scenarios() {
        let report = BenchReport {
            iterations: 10,
            scenarios: vec![result("a", 100, 50), result("b", 300, 150)],
        };
        assert_eq!(report.total_baseline(), Duration::from_millis(400));
        assert_eq!(report.total_optimized(), Duration::from_millis(200));
        assert!((report.speedup() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn json_includes_totals() {
        let report = BenchReport {
            iterations: 10,
            scenarios: vec![result("a", 100, 50)],
        };
        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["iterations"], 10);
        assert_eq!(json["scenarios"][0]["name"], "a");
        assert_eq!(json["scenarios"][0]["baseline_ms"], 100.0);
        assert_eq!(json["total_optimized_ms"], 50.0);
        assert_eq!(json["speedup"], 2.0);
    }

    #[test]
    fn table_has_row_per_scenario() {
        let report = BenchReport {
            iterations: 10,
            scenarios: vec![result("a", 100, 50), result("b", 300, 150)],
        };
        let table = report.to_table();
        assert_eq!(table.row_count(), 2);
        let rendered = table.render();
        assert!(rendered.contains("Baseline"));
        assert!(rendered.contains("50.00%"));
        assert!(rendered.contains("2.00x"));
    }
}
