//! IEEE 1164 nine-state logic values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single 9-state logic value following the IEEE 1164 standard.
///
/// The nine states represent:
/// - `U` — uninitialized
/// - `X` — forcing unknown
/// - `Zero` — forcing 0
/// - `One` — forcing 1
/// - `Z` — high-impedance (tri-state, not driven)
/// - `W` — weak unknown
/// - `L` — weak 0
/// - `H` — weak 1
/// - `DontCare` — don't care ('-')
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[repr(u8)]
pub enum Logic {
    /// Uninitialized.
    U = 0,
    /// Forcing unknown.
    X = 1,
    /// Forcing 0 (driven low).
    Zero = 2,
    /// Forcing 1 (driven high).
    One = 3,
    /// High-impedance (tri-state).
    Z = 4,
    /// Weak unknown.
    W = 5,
    /// Weak 0.
    L = 6,
    /// Weak 1.
    H = 7,
    /// Don't care.
    DontCare = 8,
}

impl Logic {
    /// Converts a character to a [`Logic`] value.
    ///
    /// Accepts the full 9-value std_logic alphabet, case-insensitively:
    /// 'U', 'X', '0', '1', 'Z', 'W', 'L', 'H', and '-'.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'u' | 'U' => Some(Logic::U),
            'x' | 'X' => Some(Logic::X),
            '0' => Some(Logic::Zero),
            '1' => Some(Logic::One),
            'z' | 'Z' => Some(Logic::Z),
            'w' | 'W' => Some(Logic::W),
            'l' | 'L' => Some(Logic::L),
            'h' | 'H' => Some(Logic::H),
            '-' => Some(Logic::DontCare),
            _ => None,
        }
    }

    /// Returns the canonical (uppercase) std_logic character for this value.
    pub fn to_char(self) -> char {
        match self {
            Logic::U => 'U',
            Logic::X => 'X',
            Logic::Zero => '0',
            Logic::One => '1',
            Logic::Z => 'Z',
            Logic::W => 'W',
            Logic::L => 'L',
            Logic::H => 'H',
            Logic::DontCare => '-',
        }
    }
}

impl fmt::Display for Logic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::Logic;
    use super::Logic::*;

    #[test]
    fn from_char_canonical() {
        assert_eq!(Logic::from_char('U'), Some(U));
        assert_eq!(Logic::from_char('X'), Some(X));
        assert_eq!(Logic::from_char('0'), Some(Zero));
        assert_eq!(Logic::from_char('1'), Some(One));
        assert_eq!(Logic::from_char('Z'), Some(Z));
        assert_eq!(Logic::from_char('W'), Some(W));
        assert_eq!(Logic::from_char('L'), Some(L));
        assert_eq!(Logic::from_char('H'), Some(H));
        assert_eq!(Logic::from_char('-'), Some(DontCare));
    }

    #[test]
    fn from_char_lowercase() {
        assert_eq!(Logic::from_char('u'), Some(U));
        assert_eq!(Logic::from_char('x'), Some(X));
        assert_eq!(Logic::from_char('z'), Some(Z));
        assert_eq!(Logic::from_char('w'), Some(W));
        assert_eq!(Logic::from_char('l'), Some(L));
        assert_eq!(Logic::from_char('h'), Some(H));
    }

    #[test]
    fn from_char_invalid() {
        assert_eq!(Logic::from_char('2'), None);
        assert_eq!(Logic::from_char('a'), None);
        assert_eq!(Logic::from_char(' '), None);
    }

    #[test]
    fn to_char_roundtrip() {
        for v in [U, X, Zero, One, Z, W, L, H, DontCare] {
            assert_eq!(Logic::from_char(v.to_char()), Some(v));
        }
    }

    #[test]
    fn display() {
        assert_eq!(format!("{Zero}"), "0");
        assert_eq!(format!("{One}"), "1");
        assert_eq!(format!("{U}"), "U");
        assert_eq!(format!("{DontCare}"), "-");
    }

    #[test]
    fn serde_roundtrip() {
        let json = serde_json::to_string(&H).unwrap();
        let back: Logic = serde_json::from_str(&json).unwrap();
        assert_eq!(back, H);
    }
}
