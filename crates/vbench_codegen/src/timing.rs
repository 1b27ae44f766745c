//! Timing resolution: mapping `_wait` directives to simulated time.
//!
//! Each test case's wait directive is resolved against a [`TimeCursor`],
//! the absolute simulated time (in ns) already consumed by earlier cases.
//! The cursor only advances, never rewinds, as the resolver folds over the
//! ordered test-case sequence.
//!
//! Edge arithmetic assumes the canonical clock emitted by
//! [`clock`](crate::clock): low at time zero with a 50% duty cycle, so the
//! first rising edge falls at half the period and the first falling edge at
//! one full period. Any change to that generator must be mirrored here.

use crate::error::TimingError;
use vbench_spec::{ClockSpec, WaitSpec};

/// The fixed settling delay, in ns, used by `_wait = 0`.
pub const SETTLE_DELAY_NS: u64 = 10;

/// The absolute simulated time consumed so far, in nanoseconds.
///
/// Monotonic by construction: [`resolve`] only ever returns a cursor at or
/// beyond its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeCursor {
    ns: u64,
}

impl TimeCursor {
    /// A cursor at simulated time zero.
    pub fn zero() -> Self {
        Self { ns: 0 }
    }

    /// The absolute simulated time in nanoseconds.
    pub fn ns(&self) -> u64 {
        self.ns
    }

    fn advance_to(&self, ns: u64) -> Self {
        debug_assert!(
            ns >= self.ns,
            "time cursor cannot rewind: {} -> {ns}",
            self.ns
        );
        Self { ns }
    }
}

impl Default for TimeCursor {
    fn default() -> Self {
        Self::zero()
    }
}

/// A wait directive resolved to a concrete wait instruction and end time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedWait {
    /// The wait instruction to emit.
    pub kind: WaitKind,
    /// The absolute simulated time, in ns, at which the wait completes.
    /// Used in assertion diagnostics so failures name a concrete time.
    pub end_ns: u64,
}

/// The concrete form of a resolved wait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitKind {
    /// A flat delay of the given number of nanoseconds.
    Delay(u64),
    /// A wait for `count` clock edges of the given polarity.
    Edges {
        /// How many edges to count.
        count: u32,
        /// `true` for rising edges, `false` for falling.
        rising: bool,
    },
}

/// Resolves one test case's wait directive against the current cursor.
///
/// Returns the resolved wait together with the advanced cursor. Fails with
/// [`TimingError::EdgeWaitUnclocked`] when an edge-counting wait is
/// requested on an unclocked entity; `_wait = 0` is the flat settling
/// delay regardless of clocking.
pub fn resolve(
    case: usize,
    wait: WaitSpec,
    clock: Option<&ClockSpec>,
    cursor: TimeCursor,
) -> Result<(ResolvedWait, TimeCursor), TimingError> {
    match wait {
        WaitSpec::FixedDelay => {
            let end_ns = cursor.ns() + SETTLE_DELAY_NS;
            Ok((
                ResolvedWait {
                    kind: WaitKind::Delay(SETTLE_DELAY_NS),
                    end_ns,
                },
                cursor.advance_to(end_ns),
            ))
        }
        WaitSpec::RisingEdges(n) => {
            let clock = clock.ok_or(TimingError::EdgeWaitUnclocked {
                case,
                wait: wait.to_raw(),
            })?;
            let end_ns = nth_edge_after(cursor.ns(), clock.period, n, true);
            Ok((
                ResolvedWait {
                    kind: WaitKind::Edges {
                        count: n,
                        rising: true,
                    },
                    end_ns,
                },
                cursor.advance_to(end_ns),
            ))
        }
        WaitSpec::FallingEdges(n) => {
            let clock = clock.ok_or(TimingError::EdgeWaitUnclocked {
                case,
                wait: wait.to_raw(),
            })?;
            let end_ns = nth_edge_after(cursor.ns(), clock.period, n, false);
            Ok((
                ResolvedWait {
                    kind: WaitKind::Edges {
                        count: n,
                        rising: false,
                    },
                    end_ns,
                },
                cursor.advance_to(end_ns),
            ))
        }
    }
}

/// Computes the absolute time of the n-th edge of the given polarity
/// strictly after time `t`.
///
/// The clock starts low at time zero with half period `h = period / 2`
/// (integer division, matching the emitted clock process). Rising edges
/// occur at `h, 3h, 5h, ...`; falling edges at `2h, 4h, 6h, ...`. An edge
/// exactly at `t` has already been consumed and does not count.
fn nth_edge_after(t: u64, period: u64, n: u32, rising: bool) -> u64 {
    let h = period / 2;
    let full = 2 * h;
    debug_assert!(n >= 1, "edge count must be positive");
    // Validation rejects periods below 2, so the half-period is nonzero.
    debug_assert!(h >= 1, "clock period {period} has no usable edges");
    if rising {
        // Rising edges at h + k * full, k >= 0.
        let consumed = if t < h { 0 } else { (t - h) / full + 1 };
        h + (consumed + n as u64 - 1) * full
    } else {
        // Falling edges at full * (k + 1), k >= 0.
        let consumed = t / full;
        full * (consumed + n as u64)
    }
}
