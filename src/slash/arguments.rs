//! Placeholder analysis and substitution for command bodies.
//!
//! Two placeholder families are recognized:
//! - `$ARGUMENTS` / `$ARGS` expand to every argument joined by a space
//! - `$1`, `$2`, ... expand to a single 1-based positional argument

use crate::error::{Result, SlashError};
use once_cell::sync::Lazy;
use regex::{Captures, NoExpand, Regex};
use std::collections::BTreeSet;

static ALL_ARGUMENTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(?:ARGUMENTS|ARGS)").expect("valid all-arguments regex"));

static POSITIONAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(\d+)").expect("valid positional regex"));

static HINT_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[[^\]]+\]").expect("valid hint regex"));

/// Missing slots named in a validation message before it is truncated.
const MAX_LISTED_MISSING: usize = 10;

/// How many arguments a command demands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentCount {
    /// Body uses the all-arguments placeholder; any count is accepted.
    Variable,
    /// At least this many positional arguments. Zero means none accepted.
    AtLeast(usize),
}

/// Argument requirements derived from a command body and its hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredArguments {
    pub has_all_arguments: bool,
    pub max_positional: usize,
    pub required: ArgumentCount,
}

impl RequiredArguments {
    /// Analyze `body` and `argument_hint`.
    ///
    /// The all-arguments placeholder dominates: positional references are not
    /// inspected when it is present.
    pub fn extract(body: &str, argument_hint: &str) -> Self {
        if ALL_ARGUMENTS.is_match(body) {
            return Self {
                has_all_arguments: true,
                max_positional: 0,
                required: ArgumentCount::Variable,
            };
        }

        let max_positional = positional_indices(body).max().unwrap_or(0);
        let hinted = HINT_TOKEN.find_iter(argument_hint).count();

        Self {
            has_all_arguments: false,
            max_positional,
            required: ArgumentCount::AtLeast(max_positional.max(hinted)),
        }
    }

    /// Minimum argument count, or `None` when the count is unbounded.
    pub fn required_count(&self) -> Option<usize> {
        match self.required {
            ArgumentCount::Variable => None,
            ArgumentCount::AtLeast(n) => Some(n),
        }
    }

    /// Check a supplied argument count against these requirements.
    pub fn validate(&self, command: &str, supplied: usize) -> Result<()> {
        let required = match self.required {
            ArgumentCount::Variable => return Ok(()),
            ArgumentCount::AtLeast(n) => n,
        };

        if required == 0 {
            if supplied > 0 {
                return Err(SlashError::InvalidArguments {
                    command: command.to_string(),
                    message: format!(
                        "command '{}' does not accept arguments, but {} argument(s) were provided",
                        command, supplied
                    ),
                });
            }
            return Ok(());
        }

        if supplied < required {
            let mut missing = ((supplied + 1)..=required)
                .take(MAX_LISTED_MISSING)
                .map(|i| format!("${}", i))
                .collect::<Vec<_>>()
                .join(", ");
            if required - supplied > MAX_LISTED_MISSING {
                missing.push_str(&format!(", ... (${})", required));
            }
            return Err(SlashError::InvalidArguments {
                command: command.to_string(),
                message: format!(
                    "command '{}' requires {} argument(s), but only {} provided. Missing: {}",
                    command, required, supplied, missing
                ),
            });
        }

        Ok(())
    }
}

/// True if `body` contains any placeholder of either family.
pub fn has_placeholders(body: &str) -> bool {
    ALL_ARGUMENTS.is_match(body) || POSITIONAL.is_match(body)
}

/// True if every position `1..=required` is referenced in `body`, or the
/// all-arguments placeholder is present, or nothing is required.
pub fn has_all_required(body: &str, required: usize) -> bool {
    if ALL_ARGUMENTS.is_match(body) || required == 0 {
        return true;
    }

    let referenced: BTreeSet<usize> = positional_indices(body).collect();
    (1..=required).all(|i| referenced.contains(&i))
}

/// Replace placeholders in `body` with `args`.
///
/// Positions outside `1..=args.len()` resolve to an empty string.
pub fn substitute(body: &str, args: &[String]) -> String {
    let joined = args.join(" ");
    let expanded = ALL_ARGUMENTS.replace_all(body, NoExpand(&joined));

    POSITIONAL
        .replace_all(&expanded, |caps: &Captures| match caps[1].parse::<usize>() {
            Ok(index) if index >= 1 => args.get(index - 1).cloned().unwrap_or_default(),
            Ok(_) => String::new(),
            Err(_) if args.is_empty() => String::new(),
            Err(_) => caps[0].to_string(),
        })
        .into_owned()
}

fn positional_indices(body: &str) -> impl Iterator<Item = usize> + '_ {
    POSITIONAL
        .captures_iter(body)
        .filter_map(|caps| caps[1].parse::<usize>().ok())
}
