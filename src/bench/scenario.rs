//! Benchmark scenarios.

use serde::Serialize;

use crate::error::{HasFlagError, Result};

/// Which flag(s) a scenario checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagSelection {
    /// The same flag on every iteration.
    Single(String),
    /// Iteration `i` checks `flags[i % flags.len()]`.
    Cycle(Vec<String>),
}

impl FlagSelection {
    /// Flag for the given iteration.
    pub fn flag_for(&self, iteration: usize) -> &str {
        match self {
            Self::Single(flag) => flag,
            Self::Cycle(flags) if flags.is_empty() => "",
            Self::Cycle(flags) => &flags[iteration % flags.len()],
        }
    }
}

/// A named argument list and the flags checked against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scenario {
    pub name: String,
    pub argv: Vec<String>,
    pub flags: FlagSelection,
}

impl Scenario {
    /// A scenario that checks one flag.
    pub fn single(name: &str, argv: &[&str], flag: &str) -> Self {
        Self {
            name: name.to_string(),
            argv: argv.iter().map(|s| s.to_string()).collect(),
            flags: FlagSelection::Single(flag.to_string()),
        }
    }

    /// A scenario that cycles through several flags.
    pub fn cycle(name: &str, argv: &[&str], flags: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            argv: argv.iter().map(|s| s.to_string()).collect(),
            flags: FlagSelection::Cycle(flags.iter().map(|s| s.to_string()).collect()),
        }
    }

    /// Case-insensitive substring match on the name.
    pub fn matches(&self, filter: &str) -> bool {
        self.name
            .to_lowercase()
            .contains(&filter.to_lowercase())
    }
}

fn numbered_flags(range: std::ops::RangeInclusive<usize>) -> Vec<String> {
    range.map(|i| format!("--flag{i}")).collect()
}

fn large(name: &str, argv: Vec<String>, flag: &str) -> Scenario {
    Scenario {
        name: name.to_string(),
        argv,
        flags: FlagSelection::Single(flag.to_string()),
    }
}

/// The built-in scenario catalogue.
pub fn default_scenarios() -> Vec<Scenario> {
    let mut with_terminator = numbered_flags(1..=5);
    with_terminator.push("--".to_string());
    with_terminator.extend(numbered_flags(6..=10));

    vec![
        Scenario::single("Short flag in small argv", &["-f", "-u", "-b"], "u"),
        Scenario::single(
            "Long flag in small argv",
            &["--foo", "--unicorn", "--bar"],
            "unicorn",
        ),
        Scenario::single(
            "Flag with value",
            &["--foo", "--unicorn=rainbow", "--bar"],
            "unicorn=rainbow",
        ),
        Scenario::single(
            "Flag before terminator",
            &["--unicorn", "--", "--foo"],
            "unicorn",
        ),
        Scenario::single(
            "Flag after terminator (not found)",
            &["--foo", "--", "--unicorn"],
            "unicorn",
        ),
        large("Large argv (20 flags)", numbered_flags(1..=20), "flag15"),
        large("Large argv with terminator", with_terminator, "flag3"),
        large(
            "Flag not found in large argv",
            numbered_flags(1..=10),
            "notfound",
        ),
        Scenario::single(
            "Repeated checks (same argv, same flag)",
            &["--foo", "--bar", "--baz"],
            "bar",
        ),
        Scenario::cycle(
            "Repeated checks (same argv, different flags)",
            &["--foo", "--bar", "--baz", "--qux", "--quux"],
            &["foo", "bar", "baz", "qux", "quux"],
        ),
    ]
}

/// Keep only scenarios matching any of `filters`. No filters keeps all.
pub fn select_scenarios(scenarios: Vec<Scenario>, filters: &[String]) -> Result<Vec<Scenario>> {
    if filters.is_empty() {
        return Ok(scenarios);
    }

    if let Some(missing) = filters
        .iter()
        .find(|filter| !scenarios.iter().any(|s| s.matches(filter)))
    {
        return Err(HasFlagError::UnknownScenario {
            name: missing.clone(),
        });
    }

    Ok(scenarios
        .into_iter()
        .filter(|s| filters.iter().any(|f| s.matches(f)))
        .collect())
}
