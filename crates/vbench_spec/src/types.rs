//! Spec data types: the raw serde schema and the validated model.
//!
//! [`RawSpec`] mirrors the JSON test-case file field for field. The
//! validated [`TestSpec`] is what the rest of the generator consumes:
//! literals are normalized, the `_wait` integer is decoded into a tagged
//! [`WaitSpec`], and each test case's assignments are pre-split into input
//! drives and output checks.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use vbench_common::{Literal, PinKind};

/// The top-level JSON test-case file, exactly as written on disk.
///
/// Widths and the clock period are kept as raw integers here so that
/// validation can report out-of-range values instead of serde rejecting
/// them with a generic type error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawSpec {
    /// The VHDL library the entity under test lives in.
    pub library: String,
    /// The entity under test.
    pub entity: String,
    /// The architecture of the entity to instantiate.
    pub architecture: String,
    /// Whether the entity has a clock input.
    pub clocked: bool,
    /// Clock period in simulated time units; required when `clocked`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_period: Option<i64>,
    /// Name of the clock pin; required when `clocked`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_pin: Option<String>,
    /// Generic parameter associations, emitted verbatim.
    #[serde(default)]
    pub generic_params: BTreeMap<String, GenericValue>,
    /// Input pin names mapped to `null` (bit) or a vector width.
    pub input_pins: BTreeMap<String, Option<i64>>,
    /// Output pin names mapped to `null` (bit) or a vector width.
    pub output_pins: BTreeMap<String, Option<i64>>,
    /// Ordered stimulus/check steps.
    pub test_cases: Vec<RawTestCase>,
}

/// One raw test case: a `_wait` directive plus pin-to-literal assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawTestCase {
    /// The timing directive: 0 = fixed delay, +n = n rising edges,
    /// -n = n falling edges.
    #[serde(rename = "_wait")]
    pub wait: i64,
    /// Every other key in the object is a pin assignment.
    #[serde(flatten)]
    pub assignments: BTreeMap<String, String>,
}

/// A generic parameter value, carried through verbatim from the JSON file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenericValue {
    /// A boolean generic.
    Bool(bool),
    /// An integer generic.
    Int(i64),
    /// A floating-point generic.
    Float(f64),
    /// A string generic, emitted without added quoting.
    Str(String),
}

impl fmt::Display for GenericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenericValue::Bool(b) => write!(f, "{b}"),
            GenericValue::Int(i) => write!(f, "{i}"),
            GenericValue::Float(x) => write!(f, "{x}"),
            GenericValue::Str(s) => write!(f, "{s}"),
        }
    }
}

/// The decoded timing directive of a test case.
///
/// The file format packs this into a single signed integer; it is decoded
/// into a tagged variant at parse time so downstream logic never has to
/// re-inspect the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitSpec {
    /// Advance by the fixed settling delay (10 time units).
    FixedDelay,
    /// Advance until the n-th rising clock edge from the current point.
    RisingEdges(u32),
    /// Advance until the n-th falling clock edge from the current point.
    FallingEdges(u32),
}

impl WaitSpec {
    /// Decodes the raw `_wait` integer: 0 is the fixed delay, a positive
    /// value counts rising edges, a negative value counts falling edges.
    ///
    /// Returns `None` when the magnitude does not fit an edge count, so a
    /// wait of 2^32 + 1 is rejected instead of silently wrapping.
    pub fn from_raw(wait: i64) -> Option<Self> {
        let magnitude = u32::try_from(wait.unsigned_abs()).ok()?;
        Some(if wait > 0 {
            WaitSpec::RisingEdges(magnitude)
        } else if wait < 0 {
            WaitSpec::FallingEdges(magnitude)
        } else {
            WaitSpec::FixedDelay
        })
    }

    /// Re-encodes the directive into the file format's signed integer.
    pub fn to_raw(self) -> i64 {
        match self {
            WaitSpec::FixedDelay => 0,
            WaitSpec::RisingEdges(n) => n as i64,
            WaitSpec::FallingEdges(n) => -(n as i64),
        }
    }
}

/// The clock configuration of a clocked entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockSpec {
    /// The clock pin name.
    pub pin: String,
    /// The clock period in simulated time units (ns).
    pub period: u64,
}

/// One validated stimulus/check step.
#[derive(Debug, Clone, PartialEq)]
pub struct TestCase {
    /// Input-pin assignments to drive, in sorted pin order.
    pub drives: Vec<(String, Literal)>,
    /// Output-pin expectations to assert, in sorted pin order.
    pub checks: Vec<(String, Literal)>,
    /// The decoded timing directive.
    pub wait: WaitSpec,
}

/// The validated, immutable representation of a test-case file.
///
/// Constructed once by [`parse_spec`](crate::parse_spec), read-only
/// thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct TestSpec {
    /// The VHDL library of the entity under test.
    pub library: String,
    /// The entity under test.
    pub entity: String,
    /// The architecture to instantiate.
    pub architecture: String,
    /// Clock configuration; `None` for unclocked entities.
    pub clock: Option<ClockSpec>,
    /// Generic parameter associations in sorted name order.
    pub generic_params: Vec<(String, GenericValue)>,
    /// Input pins and their kinds.
    pub inputs: BTreeMap<String, PinKind>,
    /// Output pins and their kinds.
    pub outputs: BTreeMap<String, PinKind>,
    /// Ordered stimulus/check steps.
    pub test_cases: Vec<TestCase>,
}

impl TestSpec {
    /// Looks up the kind of a declared pin.
    ///
    /// # Panics
    ///
    /// Panics if the pin was never declared. Validation guarantees every
    /// pin referenced by a test case exists, so an unknown name here is a
    /// programming error, not a user input problem.
    pub fn kind_of(&self, pin: &str) -> PinKind {
        self.inputs
            .get(pin)
            .or_else(|| self.outputs.get(pin))
            .copied()
            .unwrap_or_else(|| panic!("pin '{pin}' queried but never declared"))
    }

    /// Converts the validated spec back into the raw file schema.
    ///
    /// Used for serialization round-trips; literals are written in their
    /// canonical (uppercase, unquoted) form.
    pub fn to_raw(&self) -> RawSpec {
        let strip = |lit: &Literal| {
            let s = lit.to_string();
            s[1..s.len() - 1].to_string()
        };
        RawSpec {
            library: self.library.clone(),
            entity: self.entity.clone(),
            architecture: self.architecture.clone(),
            clocked: self.clock.is_some(),
            clock_period: self.clock.as_ref().map(|c| c.period as i64),
            clock_pin: self.clock.as_ref().map(|c| c.pin.clone()),
            generic_params: self.generic_params.iter().cloned().collect(),
            input_pins: kinds_to_raw(&self.inputs),
            output_pins: kinds_to_raw(&self.outputs),
            test_cases: self
                .test_cases
                .iter()
                .map(|tc| RawTestCase {
                    wait: tc.wait.to_raw(),
                    assignments: tc
                        .drives
                        .iter()
                        .chain(tc.checks.iter())
                        .map(|(pin, lit)| (pin.clone(), strip(lit)))
                        .collect(),
                })
                .collect(),
        }
    }
}

fn kinds_to_raw(pins: &BTreeMap<String, PinKind>) -> BTreeMap<String, Option<i64>> {
    pins.iter()
        .map(|(name, kind)| {
            let width = match kind {
                PinKind::Bit => None,
                PinKind::Vector(w) => Some(*w as i64),
            };
            (name.clone(), width)
        })
        .collect()
}
