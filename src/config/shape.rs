//! Classification of a single token into one of the accepted shapes.

use super::error::ParseError;

/// Grammar shape of one command-line token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape<'a> {
    /// `--name`, `--name=value`, `-n`, or `-n=value`.
    Named {
        /// Option name with the dashes stripped
        name: &'a str,
        /// Value after the first `=`, if the token had one
        value: Option<&'a str>,
    },

    /// `-abc`: every character is a separate boolean option.
    Cluster {
        /// The characters after the dash
        members: &'a str,
    },
}

/// Classifies `token` by its dash prefix and the position of its first `=`.
///
/// # Errors
///
/// Returns an error if:
/// - The token does not start with a dash ([`ParseError::MalformedToken`])
/// - The token is a single-dash cluster carrying an `=` value
///   ([`ParseError::AmbiguousClusterValue`])
pub fn classify(token: &str) -> Result<Shape<'_>, ParseError> {
    let stripped = token.trim_start_matches('-');
    let dashes = token.len() - stripped.len();

    if dashes == 0 {
        return Err(ParseError::MalformedToken {
            token: token.to_string(),
        });
    }

    let equals = stripped.find('=');
    let first_len = stripped.chars().next().map_or(0, char::len_utf8);
    let multi_char = stripped.len() > first_len;

    // A single dash introduces either one single-character option or a cluster
    if dashes == 1 && multi_char && equals.is_none_or(|index| index > first_len) {
        if let Some(index) = equals {
            return Err(ParseError::AmbiguousClusterValue {
                name: stripped[..index].to_string(),
                token: token.to_string(),
            });
        }
        return Ok(Shape::Cluster { members: stripped });
    }

    Ok(match stripped.split_once('=') {
        Some((name, value)) => Shape::Named {
            name,
            value: Some(value),
        },
        None => Shape::Named {
            name: stripped,
            value: None,
        },
    })
}
