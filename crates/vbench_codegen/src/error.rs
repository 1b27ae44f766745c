//! Error types for timing resolution.

/// Errors that can occur while resolving test-case timing.
///
/// Raised before any output text is assembled, so generation is
/// all-or-nothing: the caller receives either a complete testbench or an
/// error, never a truncated one.
#[derive(Debug, thiserror::Error)]
pub enum TimingError {
    /// An edge-counting wait was requested but the entity has no clock.
    #[error("test case {case}: wait of {wait} requires a clock edge, but the entity is not clocked")]
    EdgeWaitUnclocked {
        /// Zero-based index of the offending test case.
        case: usize,
        /// The raw `_wait` value that requested the edge.
        wait: i64,
    },
}
