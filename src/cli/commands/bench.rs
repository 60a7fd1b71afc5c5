//! Bench command implementation.
//!
//! The `has-flag bench` command times the baseline check against the
//! short-circuit check over the built-in scenarios.

use crate::bench::{self, default_scenarios, select_scenarios, BenchConfig, BenchReport};
use crate::cli::args::BenchArgs;
use crate::error::Result;
use crate::ui::{format_duration, OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The bench command implementation.
pub struct BenchCommand {
    args: BenchArgs,
}

impl BenchCommand {
    /// Create a new bench command.
    pub fn new(args: BenchArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &BenchArgs {
        &self.args
    }
}

fn show_summary(report: &BenchReport, ui: &mut dyn UserInterface) {
    ui.message(&report.to_table().render());
    ui.message("");
    ui.message(&format!(
        "Total baseline:  {}",
        format_duration(report.total_baseline())
    ));
    ui.message(&format!(
        "Total optimized: {}",
        format_duration(report.total_optimized())
    ));
    ui.success(&format!(
        "Overall: {:.2}% faster ({:.2}x)",
        report.improvement_percent(),
        report.speedup()
    ));
}

impl Command for BenchCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let scenarios = select_scenarios(default_scenarios(), &self.args.scenarios)?;

        if self.args.list && self.args.json {
            ui.message(&serde_json::to_string_pretty(&scenarios)?);
            return Ok(CommandResult::success());
        }

        if self.args.list {
            for scenario in &scenarios {
                ui.message(&scenario.name);
            }
            return Ok(CommandResult::success());
        }

        let config = BenchConfig::new(self.args.iterations, self.args.warmup)?;

        if !self.args.json && ui.output_mode() != OutputMode::Quiet {
            ui.show_header("has-flag benchmark");
            ui.message(&format!("Iterations per test: {}", config.iterations()));
            if config.warmup() == 0 {
                ui.warning("Warmup disabled; early timings may be skewed");
            }
        }

        let mut spinner = ui.start_spinner("Running scenarios");
        let report = bench::run(&config, &scenarios, |result| {
            spinner.set_message(&format!("Finished {}", result.name));
        });

        if self.args.json {
            spinner.finish_and_clear();
            ui.message(&report.to_json()?);
            return Ok(CommandResult::success());
        }

        spinner.finish_success(&format!("Ran {} scenarios", report.scenarios.len()));

        if ui.output_mode().shows_detail() {
            for result in &report.scenarios {
                ui.message(&format!(
                    "{}: baseline {}, optimized {}",
                    result.name,
                    format_duration(result.baseline),
                    format_duration(result.optimized)
                ));
            }
        }

        show_summary(&report, ui);
        Ok(CommandResult::success())
    }
}
