//! VHDL testbench emission for the vbench generator.
//!
//! Takes a validated [`TestSpec`](vbench_spec::TestSpec) and produces the
//! complete testbench text: the timing resolver converts each test case's
//! wait directive into a concrete simulated-time or clock-edge wait, the
//! stimulus emitter turns drives and checks into signal assignments and
//! assertions, and the assembler stitches the fragments together with the
//! entity instantiation and (for clocked specs) a free-running clock
//! process.

#![warn(missing_docs)]

pub mod assemble;
pub mod clock;
pub mod error;
pub mod stimulus;
pub mod timing;

pub use assemble::{generate, Testbench};
pub use error::TimingError;
pub use timing::{ResolvedWait, TimeCursor, WaitKind, SETTLE_DELAY_NS};
