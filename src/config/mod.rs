//! Command-line option layer for the renderer.
//!
//! This module provides:
//! - Option declarations and the ordered option table ([`OptionSpec`], [`Registry`])
//! - Typed values and per-type coercion ([`OptionKind`], [`OptionValue`], [`coerce`])
//! - Token classification ([`Shape`], [`classify`])
//! - The parse loop ([`Parser`]) and its cursor ([`Cursor`])
//! - The parsed result ([`Configuration`])
//! - Default values and the built-in option table ([`defaults`])
//!
//! # Accepted Shapes
//!
//! Every token must start with a dash:
//!
//! - `--name=value` and `-n=value` carry their value in the same token.
//! - `--name value` and `-n value` take the value from the following token.
//! - `-abc` (one dash, several characters, no `=`) is a cluster: each character
//!   names a boolean option that is switched on.
//!
//! A token with one dash, several characters, and an `=` is rejected: single
//! dashes never introduce a multi-character option.
//!
//! # Boolean Semantics
//!
//! Boolean options accept `1`/`true` and `0`/`false`, or no value at all
//! (meaning `true`). When a boolean option is written without `=` and the next
//! token starts with a dash, that token is not a value: the option becomes
//! `true` and the next token is parsed as the following option.
//!
//! # Errors
//!
//! Parsing stops at the first error; there is no partial result.

mod configuration;
mod cursor;
pub mod defaults;
mod error;
mod parser;
mod registry;
mod shape;
mod value;

#[cfg(test)]
mod shape_tests;

pub use configuration::Configuration;
pub use cursor::Cursor;
pub use error::{ParseError, RegistryError};
pub use parser::{MatchResult, Parser};
pub use registry::{OptionSlot, OptionSpec, Registry};
pub use shape::{Shape, classify};
pub use value::{Coerced, Coercer, LookAhead, OptionKind, OptionValue, coerce};
