//! Pin kinds: single-bit pins vs. fixed-width vector pins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a pin on the entity boundary.
///
/// Derived from the spec file's pin maps: a `null` width means a single
/// `std_logic` bit, an integer width `w` means a `std_logic_vector` of
/// `w` bits. The kind drives both signal declarations and literal quoting
/// (single quotes for bits, double quotes for vectors).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum PinKind {
    /// A single-bit `std_logic` pin.
    Bit,
    /// A `std_logic_vector` pin of the given width (always >= 1).
    Vector(u32),
}

impl PinKind {
    /// Returns the width in bits (1 for a single-bit pin).
    pub fn width(&self) -> u32 {
        match self {
            PinKind::Bit => 1,
            PinKind::Vector(w) => *w,
        }
    }
}

impl fmt::Display for PinKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinKind::Bit => write!(f, "bit"),
            PinKind::Vector(w) => write!(f, "vector[{w}]"),
        }
    }
}
