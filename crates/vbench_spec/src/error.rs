//! Error types for spec loading and validation.

use vbench_common::LiteralError;

/// Errors that can occur when loading or validating a JSON test-case file.
///
/// Validation is all-or-nothing: no partial [`TestSpec`](crate::TestSpec)
/// is ever returned, and every message names the offending field or pin.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// An I/O error occurred while reading the spec file.
    #[error("failed to read spec file: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON content could not be deserialized.
    #[error("failed to parse spec: {0}")]
    Json(String),

    /// A required identifier field is empty.
    #[error("field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// `clocked` is true but `clock_period` is absent.
    #[error("missing required field: clock_period (entity is clocked)")]
    MissingClockPeriod,

    /// `clock_period` is present but too small to have distinct edges.
    /// A period below 2 has a zero half-period, which degenerates the
    /// emitted clock into `wait for 0 ns;`.
    #[error("invalid clock_period {0}: must be an integer of at least 2")]
    InvalidClockPeriod(i64),

    /// `clocked` is true but `clock_pin` is absent or empty.
    #[error("missing required field: clock_pin (entity is clocked)")]
    MissingClockPin,

    /// A pin name appears in more than one of the input, output, and
    /// clock pin declarations.
    #[error("pin name collision: '{0}' is declared more than once")]
    PinCollision(String),

    /// A declared vector width is not at least 1.
    #[error("invalid width {width} for pin '{pin}': must be >= 1")]
    InvalidWidth {
        /// The pin whose width is invalid.
        pin: String,
        /// The declared width.
        width: i64,
    },

    /// A test case's `_wait` magnitude exceeds the supported edge count.
    #[error("test case {case}: wait value {wait} is out of range")]
    InvalidWait {
        /// Zero-based index of the offending test case.
        case: usize,
        /// The raw `_wait` value.
        wait: i64,
    },

    /// A test case references a pin that was never declared.
    #[error("test case {case}: unknown pin '{pin}'")]
    UnknownPin {
        /// Zero-based index of the offending test case.
        case: usize,
        /// The undeclared pin name.
        pin: String,
    },

    /// A test-case literal does not fit its pin's kind.
    #[error("test case {case}, pin '{pin}': {source}")]
    BadLiteral {
        /// Zero-based index of the offending test case.
        case: usize,
        /// The pin whose literal is invalid.
        pin: String,
        /// The underlying literal validation failure.
        source: LiteralError,
    },
}
