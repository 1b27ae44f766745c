//! Test-case schema model for the vbench testbench generator.
//!
//! Parses the declarative JSON test-case file into a validated, immutable
//! [`TestSpec`]: identifiers checked, pin kinds resolved, literals
//! normalized into 9-value logic, and `_wait` directives decoded into
//! tagged [`WaitSpec`] variants. All validation happens here; downstream
//! crates operate on the clean model without failure paths of their own
//! (save timing resolution, which lives in `vbench_codegen`).

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::SchemaError;
pub use loader::{load_spec, parse_spec};
pub use types::{ClockSpec, GenericValue, RawSpec, RawTestCase, TestCase, TestSpec, WaitSpec};
