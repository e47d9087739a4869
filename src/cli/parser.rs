//! Argument parsing
//!
//! Turns raw command-line tokens into argument assignments against a
//! command's [`Definition`]. Accepted forms, all equivalent:
//!
//! ```text
//! --argument-name=value
//! --argument-name value
//! -argument-alias=value
//! -argument-alias value
//! ```
//!
//! `--help` anywhere in the input stops parsing. A single token left over
//! after all flags are consumed goes to the primary argument, if one exists.

use thiserror::Error;
use tracing::{debug, trace};

use crate::cli::definition::Definition;

/// Reasons a token list cannot be applied to a command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// `--help` was given; not a failure of the input, but parsing stops.
    #[error("help requested")]
    HelpRequested,

    #[error("No value given for argument \"{name}\"")]
    MissingValue { name: String },

    #[error("Attempting to set unknown argument \"{name}\"")]
    UnknownArgument { name: String },

    #[error("No setter method available for argument \"{name}\"")]
    MissingSetter { name: String },

    #[error("Required argument \"{name}\" not set.")]
    MissingRequired { name: String },
}

/// A value bound to an argument by its canonical name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: String,
}

fn is_help_flag(token: &str) -> bool {
    token
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("--help"))
}

/// Resolve `input` against `definition`.
///
/// `--help` anywhere in `input` wins over every other token. Returns the
/// assignments in input order, the primary argument's positional assignment
/// last. Nothing is applied to the command here; the caller
/// invokes setters only once the whole input is known to be valid.
pub fn parse<C>(definition: &Definition<C>, input: &[String]) -> Result<Vec<Assignment>, ParseError> {
    if let Some(index) = input.iter().position(|token| is_help_flag(token)) {
        debug!("help flag found at position {}", index);
        return Err(ParseError::HelpRequested);
    }

    let mut consumed = vec![false; input.len()];
    let mut assignments: Vec<Assignment> = Vec::new();

    for (index, token) in input.iter().enumerate() {
        if consumed[index] || !token.starts_with('-') {
            continue;
        }

        let segment = token.trim_start_matches('-');

        let (name, value) = match segment.split_once('=') {
            Some((name, value)) => {
                consumed[index] = true;
                (name, value.to_string())
            }
            None => {
                let next = index + 1;
                match input.get(next) {
                    Some(value) if !value.starts_with('-') => {
                        consumed[index] = true;
                        consumed[next] = true;
                        (segment, value.clone())
                    }
                    _ => {
                        return Err(ParseError::MissingValue {
                            name: segment.to_string(),
                        })
                    }
                }
            }
        };

        let name = name.to_lowercase();
        let arg = definition
            .find_arg(&name)
            .ok_or_else(|| ParseError::UnknownArgument { name: name.clone() })?;

        if !definition.has_setter(&arg.name) {
            return Err(ParseError::MissingSetter {
                name: arg.name.clone(),
            });
        }

        trace!("matched {} to argument {}", name, arg.name);
        assignments.push(Assignment {
            name: arg.name.clone(),
            value,
        });
    }

    if let Some(primary) = definition.primary_arg() {
        let already_set = assignments.iter().any(|a| a.name == primary);
        let leftover: Vec<&String> = input
            .iter()
            .zip(&consumed)
            .filter(|(_, used)| !**used)
            .map(|(token, _)| token)
            .collect();

        if !already_set && leftover.len() == 1 {
            if !definition.has_setter(primary) {
                return Err(ParseError::MissingSetter {
                    name: primary.to_string(),
                });
            }
            debug!("assigning leftover token to primary argument {}", primary);
            assignments.push(Assignment {
                name: primary.to_string(),
                value: leftover[0].clone(),
            });
        } else if leftover.len() > 1 {
            debug!(
                "{} unflagged tokens left over, primary argument {} not assigned",
                leftover.len(),
                primary
            );
        }
    }

    for arg in definition.args() {
        if arg.required && !assignments.iter().any(|a| a.name == arg.name) {
            return Err(ParseError::MissingRequired {
                name: arg.name.clone(),
            });
        }
    }

    Ok(assignments)
}
