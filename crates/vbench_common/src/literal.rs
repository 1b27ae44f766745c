//! Validated stimulus and check literals.
//!
//! A [`Literal`] is a test-case value that has already been checked against
//! its pin's kind: the length matches the pin width and every character is a
//! legal 9-value logic state. Validating once at parse time means the
//! emitter can format literals without any failure path.

use crate::logic::Logic;
use crate::pin::PinKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated literal value for a pin.
///
/// Displays in VHDL form: single-quoted for a bit (`'1'`), double-quoted
/// for a vector (`"0101"`).
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Literal {
    /// A single-bit literal for a `Bit` pin.
    Bit(Logic),
    /// A vector literal; length always equals the pin's declared width.
    Vector(Vec<Logic>),
}

/// Errors raised when a raw test-case value does not fit its pin.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LiteralError {
    /// The literal's character count does not match the pin width.
    #[error("expected {expected} logic character(s), found {found}")]
    WidthMismatch {
        /// The pin's declared width (1 for a bit pin).
        expected: u32,
        /// The number of characters actually supplied.
        found: usize,
    },

    /// A character outside the 9-value std_logic alphabet.
    #[error("invalid logic character '{0}'")]
    InvalidChar(char),
}

impl Literal {
    /// Parses and validates a raw string against the pin's kind.
    ///
    /// Characters are matched case-insensitively and normalized to their
    /// canonical form. The string must have exactly one character for a
    /// `Bit` pin and exactly `w` characters for a `Vector(w)` pin.
    pub fn parse(text: &str, kind: PinKind) -> Result<Self, LiteralError> {
        let values = text
            .chars()
            .map(|c| Logic::from_char(c).ok_or(LiteralError::InvalidChar(c)))
            .collect::<Result<Vec<Logic>, LiteralError>>()?;
        match kind {
            PinKind::Bit => {
                if values.len() != 1 {
                    return Err(LiteralError::WidthMismatch {
                        expected: 1,
                        found: values.len(),
                    });
                }
                Ok(Literal::Bit(values[0]))
            }
            PinKind::Vector(w) => {
                if values.len() != w as usize {
                    return Err(LiteralError::WidthMismatch {
                        expected: w,
                        found: values.len(),
                    });
                }
                Ok(Literal::Vector(values))
            }
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bit(v) => write!(f, "'{v}'"),
            Literal::Vector(values) => {
                write!(f, "\"")?;
                for v in values {
                    write!(f, "{v}")?;
                }
                write!(f, "\"")
            }
        }
    }
}
