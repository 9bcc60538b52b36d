//! Bounds checks shared by vectors, masks and shuffles.

use rustyhalf_core::LaneError;

/// Panic with the error's message, reporting the caller's location.
pub(crate) trait OrPanic<T> {
    fn or_panic(self) -> T;
}

impl<T> OrPanic<T> for Result<T, LaneError> {
    #[inline]
    #[track_caller]
    fn or_panic(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        }
    }
}

#[inline]
pub(crate) fn check_lane(index: usize, length: usize) -> Result<(), LaneError> {
    if index < length {
        Ok(())
    } else {
        Err(LaneError::LaneIndexOutOfBounds { index, length })
    }
}

/// `[offset, offset + length)` must lie inside an array of `array_len`.
#[inline]
pub(crate) fn check_range(offset: usize, length: usize, array_len: usize) -> Result<(), LaneError> {
    match offset.checked_add(length) {
        Some(end) if end <= array_len => Ok(()),
        _ => Err(LaneError::ArrayOutOfBounds {
            offset,
            length,
            array_len,
        }),
    }
}

/// Single element access at `base + delta`.
#[inline]
pub(crate) fn check_element(base: usize, delta: usize, array_len: usize) -> Result<usize, LaneError> {
    match base.checked_add(delta) {
        Some(index) if index < array_len => Ok(index),
        _ => Err(LaneError::ArrayOutOfBounds {
            offset: base.saturating_add(delta),
            length: 1,
            array_len,
        }),
    }
}

#[inline]
pub(crate) fn check_origin(origin: usize, length: usize) -> Result<(), LaneError> {
    if origin <= length {
        Ok(())
    } else {
        Err(LaneError::InvalidSliceOrigin { origin, length })
    }
}

#[inline]
pub(crate) fn check_part(part: usize) -> Result<(), LaneError> {
    if part <= 1 {
        Ok(())
    } else {
        Err(LaneError::InvalidPart { part })
    }
}
