//! The parse loop: dispatches each token against the registry.
//!
//! One iteration handles one option occurrence. The token under the cursor
//! is classified, clusters are expanded into boolean activations, and named
//! options are matched, coerced, and assigned. The loop then moves the
//! cursor by the number of tokens the match consumed, giving one back if a
//! boolean option's look-ahead turned out to be the next option.

use super::configuration::Configuration;
use super::cursor::Cursor;
use super::error::ParseError;
use super::registry::Registry;
use super::shape::{Shape, classify};
use super::value::{LookAhead, OptionKind, coerce};

/// Outcome of matching one candidate name against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// No option answers to the name.
    NoMatch,
    /// Name and value came from the same token.
    ConsumedOne,
    /// The value came from the following token.
    ConsumedTwo,
}

/// Where the candidate value of an option came from.
#[derive(Debug, Clone, Copy)]
enum Supplied<'a> {
    /// After `=` in the same token
    Attached(&'a str),
    /// The following token, or empty if there is none
    Following(&'a str),
    /// A member of a boolean cluster; no value
    Cluster { member: char, token: &'a str },
}

impl<'a> Supplied<'a> {
    const fn raw(self) -> &'a str {
        match self {
            Self::Attached(value) | Self::Following(value) => value,
            Self::Cluster { .. } => "",
        }
    }
}

/// Parses argument tokens into a [`Configuration`].
///
/// # Example
///
/// ```
/// use render_opts::config::Parser;
///
/// let args: Vec<String> = ["-n", "8", "-qp"].iter().map(ToString::to_string).collect();
/// let config = Parser::standard().parse(&args).unwrap();
///
/// assert_eq!(config.int("nthreads"), Some(8));
/// assert_eq!(config.flag("quiet"), Some(true));
/// assert_eq!(config.flag("partial"), Some(true));
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    registry: Registry,
}

impl Parser {
    /// Creates a parser over the given option table.
    #[must_use]
    pub const fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// Creates a parser over the renderer's built-in options.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(Registry::standard())
    }

    /// Parses `tokens` (the arguments without the program name).
    ///
    /// Options not mentioned keep their defaults; an option given more than
    /// once keeps the last value.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; nothing is returned for
    /// a partially parsed sequence.
    pub fn parse(mut self, tokens: &[String]) -> Result<Configuration, ParseError> {
        let mut cursor = Cursor::new(tokens);

        while let Some(token) = cursor.current() {
            self.step(token, &mut cursor)?;
        }

        tracing::debug!(tokens = tokens.len(), "parsed command line");
        Ok(Configuration::new(self.registry))
    }

    /// Handles the option occurrence starting at the cursor.
    fn step(&mut self, token: &str, cursor: &mut Cursor<'_>) -> Result<(), ParseError> {
        let shape = classify(token)?;
        tracing::debug!(position = cursor.position(), token, ?shape, "classified token");

        let (name, supplied) = match shape {
            Shape::Cluster { members } => {
                self.resolve_cluster(token, members)?;
                cursor.advance();
                return Ok(());
            }
            Shape::Named {
                name,
                value: Some(value),
            } => (name, Supplied::Attached(value)),
            Shape::Named { name, value: None } => {
                (name, Supplied::Following(cursor.peek().unwrap_or("")))
            }
        };

        let (matched, look_ahead) = self.dispatch(name, supplied)?;
        match matched {
            MatchResult::NoMatch => {
                return Err(ParseError::UnrecognizedOption {
                    name: name.to_string(),
                    cluster: None,
                });
            }
            MatchResult::ConsumedOne => cursor.advance(),
            MatchResult::ConsumedTwo => cursor.advance_pair(),
        }

        if look_ahead == LookAhead::Revoke {
            tracing::trace!(position = cursor.position(), "returning look-ahead token");
            cursor.regress();
        }

        Ok(())
    }

    /// Activates every boolean option named by the characters of a cluster.
    fn resolve_cluster(&mut self, token: &str, members: &str) -> Result<(), ParseError> {
        let mut buf = [0; 4];

        for member in members.chars() {
            let name = member.encode_utf8(&mut buf);
            let (matched, _) = self.dispatch(name, Supplied::Cluster { member, token })?;

            if matched == MatchResult::NoMatch {
                return Err(ParseError::UnrecognizedOption {
                    name: name.to_string(),
                    cluster: Some(token.to_string()),
                });
            }
        }

        Ok(())
    }

    /// Matches `name` against the registry and assigns the coerced value.
    fn dispatch(
        &mut self,
        name: &str,
        supplied: Supplied<'_>,
    ) -> Result<(MatchResult, LookAhead), ParseError> {
        let Some((index, slot)) = self.registry.find(name) else {
            return Ok((MatchResult::NoMatch, LookAhead::Keep));
        };
        let kind = slot.kind();

        if let Supplied::Cluster { member, token } = supplied {
            if kind != OptionKind::Bool {
                return Err(ParseError::InvalidClusterMember {
                    member,
                    token: token.to_string(),
                });
            }
        }

        let raw = supplied.raw();
        if kind != OptionKind::Bool && raw.is_empty() {
            return Err(ParseError::MissingValue {
                option: name.to_string(),
            });
        }

        let coerced = coerce(kind, raw, name)?;

        let matched = match supplied {
            Supplied::Following(value) if !value.is_empty() => MatchResult::ConsumedTwo,
            Supplied::Attached(value) if coerced.look_ahead == LookAhead::Revoke => {
                // Nothing was read ahead, so the dash-prefixed text is the value itself
                return Err(ParseError::mismatch(name, kind, value));
            }
            _ => MatchResult::ConsumedOne,
        };

        tracing::debug!(option = name, value = %coerced.value, ?matched, "assigned option");
        self.registry.assign(index, coerced.value);

        Ok((matched, coerced.look_ahead))
    }
}
