//! Shared foundational types for the vbench VHDL testbench generator.
//!
//! This crate provides the value types every other vbench crate builds on:
//! 9-value IEEE 1164 logic values, pin kinds (single bit vs. vector), and
//! validated stimulus/check literals.

#![warn(missing_docs)]

pub mod literal;
pub mod logic;
pub mod pin;

pub use literal::{Literal, LiteralError};
pub use logic::Logic;
pub use pin::PinKind;
