//! has-flag - check whether a command-line flag is present.
//!
//! The core is a single pure predicate, [`present`], which looks for a flag
//! in an argument list and ignores anything after the `--` terminator.
//!
//! # Modules
//!
//! - [`flag`] - Flag presence checks
//! - [`bench`] - Timing harness for the check variants
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use has_flag::{present, FlagChecker};
//!
//! assert!(present("unicorn", &["--foo", "--unicorn", "--bar"]));
//!
//! let checker = FlagChecker::new(["-x", "--", "-y"]);
//! assert!(checker.present("-x"));
//! assert!(!checker.present("y"));
//! ```

pub mod bench;
pub mod cli;
pub mod error;
pub mod flag;
pub mod ui;

pub use error::{HasFlagError, Result};
pub use flag::{
    full_token, present, present_eager, present_in_env, token_present, FlagChecker, TERMINATOR,
};
