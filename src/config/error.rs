//! Error types for option parsing and registry construction.

use thiserror::Error;

use super::value::OptionKind;

/// Error type for a failed parse.
///
/// Every variant is fatal: the parser stops at the first violation and
/// never hands back a partially populated configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token did not start with a dash.
    #[error("Expected -[option] or --[option], got {token}")]
    MalformedToken {
        /// The offending token
        token: String,
    },

    /// A single-dash token with several characters carried an `=` value.
    #[error(
        "Unrecognized option {name} in {token}\nHelp: Single dashes are used for either one \
         single-character option (e.g. cmd -n 5),\nor for multiple single-character boolean \
         options. Did you mean to use two dashes\ninstead of one?"
    )]
    AmbiguousClusterValue {
        /// Text between the dash and the `=`
        name: String,
        /// The whole token
        token: String,
    },

    /// A character inside a boolean cluster named a non-boolean option.
    #[error(
        "Non-boolean argument {member} in {token}\nHelp: Single dashes are used for either one \
         single-character option (e.g. cmd -n 5),\nor for multiple single-character boolean \
         options. Try separating non-boolean options out."
    )]
    InvalidClusterMember {
        /// The offending cluster character
        member: char,
        /// The whole cluster token
        token: String,
    },

    /// No registered option answers to the given name.
    #[error("Unrecognized option {name}{}", cluster_context(.cluster))]
    UnrecognizedOption {
        /// Name as written on the command line
        name: String,
        /// Whole token, when the name came from a boolean cluster
        cluster: Option<String>,
    },

    /// A non-boolean option was given no value.
    #[error("Missing value for option {option}")]
    MissingValue {
        /// Name as written on the command line
        option: String,
    },

    /// The supplied value cannot be converted to the option's type.
    #[error("{}", mismatch_message(.option, .expected, .value))]
    TypeMismatch {
        /// Name as written on the command line
        option: String,
        /// The option's declared type
        expected: OptionKind,
        /// The rejected value
        value: String,
    },

    /// The supplied integer does not fit the option's range.
    #[error("Argument {value} overflows for int option {option}")]
    IntegerOverflow {
        /// Name as written on the command line
        option: String,
        /// The rejected value
        value: String,
    },
}

impl ParseError {
    /// Creates a `TypeMismatch` error.
    #[must_use]
    pub fn mismatch(option: &str, expected: OptionKind, value: &str) -> Self {
        Self::TypeMismatch {
            option: option.to_string(),
            expected,
            value: value.to_string(),
        }
    }
}

fn cluster_context(cluster: &Option<String>) -> String {
    cluster
        .as_ref()
        .map_or_else(String::new, |token| format!(" in {token}"))
}

fn mismatch_message(option: &str, expected: &OptionKind, value: &str) -> String {
    match expected {
        OptionKind::Int => {
            format!("Expected integer argument for int option {option}, got {value}")
        }
        kind => format!("Unexpected argument {value} for {kind} option {option}"),
    }
}

/// Error type for an invalid option table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// An option was declared with an empty name or alias.
    #[error("Option names must not be empty")]
    EmptyName,

    /// Two options share a canonical name or alias.
    #[error("Option name '{name}' is declared more than once")]
    DuplicateName {
        /// The repeated name
        name: String,
    },

    /// Two options are stored under the same configuration field.
    #[error("Configuration field '{field}' is declared more than once")]
    DuplicateField {
        /// The repeated field
        field: String,
    },
}
