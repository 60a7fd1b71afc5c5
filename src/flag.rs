//! Flag presence checks.
//!
//! A flag is looked up by its *full token*: the caller's name with a `-` or
//! `--` prefix added when it doesn't already start with a dash. Only
//! occurrences before the first [`TERMINATOR`] count.
//!
//! # Example
//!
//! ```
//! use has_flag::present;
//!
//! assert!(present("u", &["-f", "-u", "-b"]));
//! assert!(present("unicorn", &["--unicorn", "--", "--foo"]));
//! assert!(!present("unicorn", &["--foo", "--", "--unicorn"]));
//! ```
//!
//! Passing `--` itself as the flag (or the empty name, which derives `--`)
//! searches for the terminator token. Its first occurrence is also the
//! terminator's, and a flag at the terminator's index is not before it, so
//! such a flag is never reported present.

use std::borrow::Cow;
use std::ffi::OsString;

use crate::error::{HasFlagError, Result};

/// The end-of-options marker.
pub const TERMINATOR: &str = "--";

/// Derive the token actually searched for in the argument list.
///
/// Names already starting with `-` are used verbatim. Single-character
/// names get `-`, everything else (including the empty name) gets `--`.
pub fn full_token(flag: &str) -> Cow<'_, str> {
    if flag.starts_with('-') {
        return Cow::Borrowed(flag);
    }

    let mut chars = flag.chars();
    let single = chars.next().is_some() && chars.next().is_none();
    let prefix = if single { "-" } else { "--" };

    Cow::Owned(format!("{prefix}{flag}"))
}

fn position<S: AsRef<str>>(args: &[S], token: &str) -> Option<usize> {
    args.iter().position(|arg| arg.as_ref() == token)
}

/// Check whether `flag` is present in `args` before any `--` terminator.
///
/// The terminator is only searched for once the flag has been found.
pub fn present<S: AsRef<str>>(flag: &str, args: &[S]) -> bool {
    token_present(&full_token(flag), args)
}

/// Like [`present`], for a token that has already been through [`full_token`].
pub fn token_present<S: AsRef<str>>(token: &str, args: &[S]) -> bool {
    let Some(index) = position(args, token) else {
        return false;
    };

    match position(args, TERMINATOR) {
        Some(terminator) => index < terminator,
        None => true,
    }
}

/// Same result as [`present`], but always performs both searches.
pub fn present_eager<S: AsRef<str>>(flag: &str, args: &[S]) -> bool {
    let token = full_token(flag);
    let index = position(args, &token);
    let terminator = position(args, TERMINATOR);

    match (index, terminator) {
        (Some(index), Some(terminator)) => index < terminator,
        (Some(_), None) => true,
        (None, _) => false,
    }
}

/// Check `flag` against the current process arguments.
///
/// The full vector is used as-is, program name included. Arguments that are
/// not valid UTF-8 are converted lossily.
pub fn present_in_env(flag: &str) -> bool {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    present(flag, &args)
}

/// An argument list that flags can be checked against repeatedly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagChecker {
    args: Vec<String>,
}

impl FlagChecker {
    /// Create a checker over an explicit argument list.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a checker over the current process arguments.
    ///
    /// Fails on the first argument that is not valid UTF-8.
    pub fn from_env() -> Result<Self> {
        Self::from_os_args(std::env::args_os())
    }

    /// Create a checker from OS strings, rejecting non-UTF-8 arguments.
    pub fn from_os_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .enumerate()
            .map(|(index, arg)| {
                arg.into_string()
                    .map_err(|arg| HasFlagError::NonUtf8Argument {
                        index,
                        lossy: arg.to_string_lossy().into_owned(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Checking flags against {} arguments", args.len());
        Ok(Self { args })
    }

    /// The arguments being checked.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Check whether `flag` is present before any terminator.
    pub fn present(&self, flag: &str) -> bool {
        present(flag, &self.args)
    }

    /// Index of the first argument equal to `token`, if any.
    pub fn position(&self, token: &str) -> Option<usize> {
        position(&self.args, token)
    }

    /// Index of the first terminator, if any.
    pub fn terminator_position(&self) -> Option<usize> {
        position(&self.args, TERMINATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: [&str; 0] = [];

    #[test]
    fn full_token_single_char_gets_short_prefix() {
        assert_eq!(full_token("u"), "-u");
    }

    #[test]
    fn full_token_multi_char_gets_long_prefix() {
        assert_eq!(full_token("unicorn"), "--unicorn");
    }

    #[test]
    fn full_token_dashed_is_verbatim() {
        assert_eq!(full_token("-x"), "-x");
        assert_eq!(full_token("--foo"), "--foo");
        assert!(matches!(full_token("-x"), Cow::Borrowed(_)));
    }

    #[test]
    fn full_token_empty_gets_long_prefix() {
        assert_eq!(full_token(""), "--");
    }

    #[test]
    fn full_token_counts_chars_not_bytes() {
        assert_eq!(full_token("é"), "-é");
        assert_eq!(full_token("ab"), "--ab");
    }

    #[test]
    fn short_flag() {
        assert!(present("u", &["-f", "-u", "-b"]));
    }

    #[test]
    fn long_flag() {
        assert!(present("unicorn", &["--foo", "--unicorn", "--bar"]));
    }

    #[test]
    fn flag_with_value_matches_literally() {
        assert!(present(
            "unicorn=rainbow",
            &["--foo", "--unicorn=rainbow", "--bar"]
        ));
        assert!(!present("unicorn", &["--foo", "--unicorn=rainbow"]));
    }

    #[test]
    fn flag_before_terminator() {
        assert!(present("unicorn", &["--unicorn", "--", "--foo"]));
    }

    #[test]
    fn flag_after_terminator() {
        assert!(!present("unicorn", &["--foo", "--", "--unicorn"]));
    }

    #[test]
    fn dashed_flag_used_verbatim() {
        assert!(present("-x", &["-x", "-y"]));
        assert!(!present("-x", &["--x"]));
    }

    #[test]
    fn short_name_does_not_match_long_form() {
        assert!(!present("u", &["--u"]));
    }

    #[test]
    fn absent_flag() {
        assert!(!present("unicorn", &["--foo", "--bar"]));
        assert!(!present("unicorn", &NONE));
    }

    #[test]
    fn first_occurrence_decides() {
        assert!(present("foo", &["--foo", "--", "--foo"]));
    }

    #[test]
    fn terminator_as_flag_is_never_present() {
        assert!(!present("--", &["a", "--", "--foo"]));
        assert!(!present("--", &["--", "--"]));
        assert!(!present("--", &["a", "b"]));
        assert!(!present_eager("--", &["a", "--"]));
    }

    #[test]
    fn empty_flag_searches_for_terminator() {
        assert!(!present("", &["x", "--"]));
        assert!(!present("", &["x"]));
        assert!(!present_eager("", &["x", "--"]));
    }

    #[test]
    fn token_present_uses_token_verbatim() {
        assert!(token_present("--unicorn", &["--unicorn"]));
        assert!(!token_present("unicorn", &["--unicorn"]));
        assert!(!token_present("--unicorn", &["--", "--unicorn"]));
    }

    #[test]
    fn accepts_owned_strings() {
        let args = vec!["--foo".to_string(), "--bar".to_string()];
        assert!(present("bar", &args));
    }

    #[test]
    fn repeated_calls_agree() {
        let args = ["--foo", "--", "--bar"];
        for _ in 0..3 {
            assert!(present("foo", &args));
            assert!(!present("bar", &args));
        }
    }

    #[test]
    fn eager_agrees_with_short_circuit() {
        let cases: &[(&str, &[&str])] = &[
            ("u", &["-f", "-u", "-b"]),
            ("unicorn", &["--foo", "--", "--unicorn"]),
            ("unicorn", &["--unicorn", "--", "--foo"]),
            ("missing", &["--foo", "--"]),
            ("--", &["a", "--"]),
            ("", &[]),
        ];
        for &(flag, args) in cases {
            assert_eq!(present(flag, args), present_eager(flag, args), "{flag}");
        }
    }

    #[test]
    fn checker_present() {
        let checker = FlagChecker::new(["--foo", "--", "--bar"]);
        assert!(checker.present("foo"));
        assert!(!checker.present("bar"));
        assert_eq!(checker.terminator_position(), Some(1));
        assert_eq!(checker.args().len(), 3);
    }

    #[test]
    fn checker_from_os_args_accepts_utf8() {
        let checker =
            FlagChecker::from_os_args(vec![OsString::from("prog"), OsString::from("-v")]).unwrap();
        assert!(checker.present("v"));
    }

    #[cfg(unix)]
    #[test]
    fn checker_from_os_args_rejects_non_utf8() {
        use std::os::unix::ffi::OsStringExt;

        let bad = OsString::from_vec(vec![b'-', 0xff]);
        let err = FlagChecker::from_os_args(vec![OsString::from("prog"), bad]).unwrap_err();
        assert!(matches!(
            err,
            HasFlagError::NonUtf8Argument { index: 1, .. }
        ));
    }

    #[test]
    fn present_in_env_ignores_unknown_flag() {
        assert!(!present_in_env("definitely-not-a-test-harness-flag"));
    }

    #[test]
    fn present_in_env_matches_process_args() {
        let args: Vec<String> = std::env::args().collect();
        for arg in &args {
            assert_eq!(present_in_env(arg), present(arg, &args), "{arg}");
        }
    }

    #[test]
    fn from_env_reads_process_args() {
        let args: Vec<String> = std::env::args().collect();
        let checker = FlagChecker::from_env().unwrap();
        assert_eq!(checker.args(), args.as_slice());
        if let Some(program) = args.first() {
            assert_eq!(checker.present(program), present(program, &args));
        }
    }

    #[test]
    fn checker_position_finds_first_match() {
        let checker = FlagChecker::new(["--foo", "--", "--foo"]);
        assert_eq!(checker.position("--foo"), Some(0));
        assert_eq!(checker.position("--bar"), None);
    }

    #[test]
    fn checker_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FlagChecker>();
    }
}
