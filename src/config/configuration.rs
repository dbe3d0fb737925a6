//! The parsed, read-only configuration.

use std::fmt;

use super::error::ParseError;
use super::parser::Parser;
use super::registry::{OptionSlot, Registry};
use super::value::OptionValue;

/// Option values after a successful parse.
///
/// Owns every option's storage and is addressable by configuration field
/// (e.g. `"log_util"` for the `--logutil` option).
///
/// # Construction
///
/// Use [`Configuration::parse_from_iter`] for the built-in options, or
/// [`Parser::parse`] with a custom [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    registry: Registry,
}

impl Configuration {
    pub(crate) const fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Parses the built-in options from arguments (without the program name).
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered.
    pub fn parse_from_iter<I, T>(args: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tokens: Vec<String> = args.into_iter().map(Into::into).collect();
        Parser::standard().parse(&tokens)
    }

    /// Value stored under `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&OptionValue> {
        self.registry.by_field(field).map(OptionSlot::value)
    }

    /// Value of an integer field.
    #[must_use]
    pub fn int(&self, field: &str) -> Option<i32> {
        match self.get(field)? {
            OptionValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Value of a string field.
    #[must_use]
    pub fn string(&self, field: &str) -> Option<&str> {
        match self.get(field)? {
            OptionValue::Str(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Value of a boolean field.
    #[must_use]
    pub fn flag(&self, field: &str) -> Option<bool> {
        match self.get(field)? {
            OptionValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Value of a character field.
    #[must_use]
    pub fn character(&self, field: &str) -> Option<char> {
        match self.get(field)? {
            OptionValue::Char(value) => Some(*value),
            _ => None,
        }
    }

    /// Options in declaration order.
    pub fn options(&self) -> std::slice::Iter<'_, OptionSlot> {
        self.registry.iter()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{{")?;

        let count = self.registry.len();
        for (i, slot) in self.registry.iter().enumerate() {
            let separator = if i + 1 < count { "," } else { "" };
            writeln!(f, "    {}: {}{separator}", slot.spec().field(), slot.value())?;
        }

        writeln!(f, "}}")
    }
}
