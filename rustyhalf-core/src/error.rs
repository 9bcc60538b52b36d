//! Error taxonomy for lane operations.
//!
//! All of these are programmer errors. The panicking entry points report
//! them through `panic!("{err}")`; the `try_*` twins return them.
//! Numeric outcomes (division by zero, overflow, NaN) are never errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaneError {
    #[error("lane index {index} out of range for {length} lanes")]
    LaneIndexOutOfBounds { index: usize, length: usize },

    #[error("array access [{offset}, {offset} + {length}) out of bounds for array of length {array_len}")]
    ArrayOutOfBounds {
        offset: usize,
        length: usize,
        array_len: usize,
    },

    #[error("slice origin {origin} out of range [0, {length}]")]
    InvalidSliceOrigin { origin: usize, length: usize },

    #[error("bad part number {part}, expected 0 or 1")]
    InvalidPart { part: usize },

    #[error("shuffle index {index} at lane {lane} out of range for {length} lanes")]
    ShuffleIndexOutOfRange { lane: usize, index: i32, length: usize },

    #[error("unsupported lane count {lanes}: expected 4, 8, 16 or 32")]
    UnsupportedLaneCount { lanes: usize },
}
