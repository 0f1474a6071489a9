//! Structured error types for gridviewport.
//!
//! The range resolvers themselves never fail: degenerate inputs clamp to the
//! nearest valid range so rendering is never stalled. The only fallible
//! surface is accepting externally built column geometry, where a malformed
//! snapshot is a contract violation by the caller.

/// All errors that can occur when validating a column-metrics snapshot.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// A column's `index` field does not match its position in the sequence.
    #[error("column at position {position} carries index {index}")]
    IndexMismatch { position: usize, index: usize },

    /// A column has a negative width.
    #[error("column {index} has negative width {width}")]
    NegativeWidth { index: usize, width: f64 },

    /// A column's left offset does not continue from the previous column's
    /// trailing edge, breaking the cumulative-sum invariant.
    #[error("column {index} starts at {left} but the previous column ends at {expected}")]
    NonContiguousLeft {
        index: usize,
        left: f64,
        expected: f64,
    },

    /// A frozen column appears after an unfrozen one; frozen columns must
    /// form a contiguous prefix.
    #[error("column {index} is frozen but follows an unfrozen column")]
    FrozenAfterUnfrozen { index: usize },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MetricsError>;
