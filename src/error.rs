//! The error type shared by every structure in this crate.

use thiserror::Error;

/// Everything that can go wrong when misusing one of the structures in this
/// crate.
///
/// Violated preconditions surface before any state is mutated. Note that
/// "key not found" and "edge not found" are *not* errors: lookups report
/// absence through `Option` (or `bool`) return values and reserve this type
/// for actual contract violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A query or removal was invoked on a structure with no elements.
    #[error("operation invoked on an empty collection")]
    EmptyCollection,

    /// An index fell outside `[0, len)` (or `[0, len]` for insertions that
    /// may append).
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The length of the structure at the time of the call.
        len: usize,
    },

    /// A user-supplied comparator returned something other than -1, 0, or 1.
    #[error("comparator returned {0}, expected -1 (less), 0 (equal) or 1 (greater)")]
    InvalidComparator(i32),

    /// A caller precondition was violated; the message names it.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
