//! Option types, typed values, and the per-type coercion table.
//!
//! Every option declares an [`OptionKind`]. A raw command-line token is turned
//! into an [`OptionValue`] of that kind by the coercer registered for it in
//! [`OptionKind::coercer`].

use std::fmt;

use super::error::ParseError;

/// Semantic type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
    /// Free-form text
    String,
    /// Exactly one character
    Char,
    /// Switch that may be given without a value
    Bool,
    /// Non-negative 32-bit integer
    Int,
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::String => "string",
            Self::Char => "char",
            Self::Bool => "boolean",
            Self::Int => "int",
        };
        f.write_str(name)
    }
}

/// A typed option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Value of a [`OptionKind::String`] option
    Str(String),
    /// Value of a [`OptionKind::Char`] option
    Char(char),
    /// Value of a [`OptionKind::Bool`] option
    Bool(bool),
    /// Value of a [`OptionKind::Int`] option
    Int(i32),
}

impl OptionValue {
    /// Returns the kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> OptionKind {
        match self {
            Self::Str(_) => OptionKind::String,
            Self::Char(_) => OptionKind::Char,
            Self::Bool(_) => OptionKind::Bool,
            Self::Int(_) => OptionKind::Int,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Char(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
        }
    }
}

/// Whether the token read ahead as a candidate value was actually used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookAhead {
    /// The candidate value was consumed (or there was none)
    Keep,
    /// The candidate value belongs to the next option; give it back
    Revoke,
}

/// Result of a successful coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coerced {
    /// The converted value
    pub value: OptionValue,
    /// Look-ahead signal for the cursor
    pub look_ahead: LookAhead,
}

impl Coerced {
    const fn kept(value: OptionValue) -> Self {
        Self {
            value,
            look_ahead: LookAhead::Keep,
        }
    }
}

/// Signature shared by all per-kind coercers.
///
/// Arguments are the raw value and the option name as written by the user
/// (used only for diagnostics).
pub type Coercer = fn(&str, &str) -> Result<Coerced, ParseError>;

impl OptionKind {
    /// Returns the coercer for this kind.
    #[must_use]
    pub const fn coercer(self) -> Coercer {
        match self {
            Self::String => coerce_string,
            Self::Char => coerce_char,
            Self::Bool => coerce_bool,
            Self::Int => coerce_int,
        }
    }
}

/// Converts `raw` into a value of type `kind`.
///
/// # Errors
///
/// Returns [`ParseError::TypeMismatch`] if `raw` is not a valid literal for
/// `kind`, or [`ParseError::IntegerOverflow`] if an integer does not fit.
pub fn coerce(kind: OptionKind, raw: &str, option: &str) -> Result<Coerced, ParseError> {
    (kind.coercer())(raw, option)
}

#[allow(clippy::unnecessary_wraps)] // Must match the `Coercer` signature
fn coerce_string(raw: &str, _option: &str) -> Result<Coerced, ParseError> {
    Ok(Coerced::kept(OptionValue::Str(raw.to_string())))
}

fn coerce_char(raw: &str, option: &str) -> Result<Coerced, ParseError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Coerced::kept(OptionValue::Char(c))),
        _ => Err(ParseError::mismatch(option, OptionKind::Char, raw)),
    }
}

fn coerce_bool(raw: &str, option: &str) -> Result<Coerced, ParseError> {
    match raw {
        "" | "1" | "true" => Ok(Coerced::kept(OptionValue::Bool(true))),
        "0" | "false" => Ok(Coerced::kept(OptionValue::Bool(false))),
        // Not a value at all: the next option follows a bare switch
        next if next.starts_with('-') => Ok(Coerced {
            value: OptionValue::Bool(true),
            look_ahead: LookAhead::Revoke,
        }),
        _ => Err(ParseError::mismatch(option, OptionKind::Bool, raw)),
    }
}

fn coerce_int(raw: &str, option: &str) -> Result<Coerced, ParseError> {
    let mut value: i32 = 0;

    for c in raw.chars() {
        let Some(digit) = c.to_digit(10).and_then(|d| i32::try_from(d).ok()) else {
            return Err(ParseError::mismatch(option, OptionKind::Int, raw));
        };

        if (i32::MAX - digit) / 10 < value {
            return Err(ParseError::IntegerOverflow {
                option: option.to_string(),
                value: raw.to_string(),
            });
        }

        value = value * 10 + digit;
    }

    Ok(Coerced::kept(OptionValue::Int(value)))
}
