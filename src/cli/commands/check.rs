//! Check command implementation.
//!
//! The `has-flag check` command reports whether a flag is present in the
//! argument list given after `--`, and exits non-zero when it is not.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::flag::{full_token, token_present, FlagChecker};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// Exit code when the flag is absent.
pub const ABSENT_EXIT_CODE: i32 = 1;

#[derive(Debug, Serialize)]
struct CheckOutput<'a> {
    flag: &'a str,
    token: &'a str,
    present: bool,
}

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let checker = FlagChecker::new(self.args.args.iter().cloned());
        let token = full_token(&self.args.flag);
        let present = token_present(&token, checker.args());

        tracing::debug!(
            "Checked {} against {} arguments: {}",
            token,
            checker.args().len(),
            present
        );

        let result = if present {
            CommandResult::success()
        } else {
            CommandResult::failure(ABSENT_EXIT_CODE)
        };

        if self.args.json {
            let output = serde_json::to_string_pretty(&CheckOutput {
                flag: &self.args.flag,
                token: &token,
                present,
            })?;
            ui.message(&output);
            return Ok(result);
        }

        if ui.output_mode() == OutputMode::Quiet {
            return Ok(result);
        }

        if present {
            ui.success(&format!("{} is present", token));
            return Ok(result);
        }

        ui.message(&format!("{} is absent", token));

        if ui.output_mode().shows_detail() {
            match (checker.position(&token), checker.terminator_position()) {
                (Some(index), Some(terminator)) if index == terminator => {
                    ui.message(&format!(
                        "  {} is the terminator at position {}",
                        token, index
                    ));
                }
                (Some(index), Some(terminator)) => {
                    ui.message(&format!(
                        "  found at position {} after the terminator at position {}",
                        index, terminator
                    ));
                }
                _ => {}
            }
        }

        Ok(result)
    }
}
