//! Lane shuffles: per-lane source indices for rearrangements.
//!
//! Indices are stored partially wrapped. A source in `[0, N)` is kept as
//! is; any other value `i` is stored as `i.rem_euclid(N) - N`, a negative
//! "exceptional" index that still remembers its wrapped lane. Single-input
//! rearranges use the wrapped lane; two-input rearranges read exceptional
//! lanes from the second vector; [`LaneShuffle::check_indexes`] rejects
//! them outright.

use core::fmt;

use rustyhalf_core::{Float16, LaneError};

use crate::checks::{check_lane, check_range, OrPanic};
use crate::mask::LaneMask;
use crate::species::assert_lane_count;
use crate::vector::HalfVector;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LaneShuffle<const N: usize> {
    indices: [i32; N],
}

#[inline]
fn partial_wrap<const N: usize>(index: i64) -> i32 {
    let n = N as i64;
    if (0..n).contains(&index) {
        index as i32
    } else {
        (index.rem_euclid(n) - n) as i32
    }
}

#[inline]
fn full_wrap<const N: usize>(index: i64) -> i32 {
    index.rem_euclid(N as i64) as i32
}

impl<const N: usize> LaneShuffle<N> {
    /// ```compile_fail
    /// use rustyhalf_rs::LaneShuffle;
    ///
    /// let s = LaneShuffle::<12>::from_fn(|i| i as i32);
    /// ```
    pub fn from_fn(mut f: impl FnMut(usize) -> i32) -> Self {
        assert_lane_count::<N>();
        Self {
            indices: core::array::from_fn(|i| partial_wrap::<N>(f(i) as i64)),
        }
    }

    pub fn from_values(indices: [i32; N]) -> Self {
        Self::from_fn(|i| indices[i])
    }

    #[track_caller]
    pub fn from_array(indices: &[i32], offset: usize) -> Self {
        Self::try_from_array(indices, offset).or_panic()
    }

    pub fn try_from_array(indices: &[i32], offset: usize) -> Result<Self, LaneError> {
        check_range(offset, N, indices.len())?;
        Ok(Self::from_fn(|i| indices[offset + i]))
    }

    /// Lane `i` takes `start + i * step`. With `wrap` the value is reduced
    /// modulo `N`; otherwise out-of-range values become exceptional.
    pub fn iota(start: i32, step: i32, wrap: bool) -> Self {
        assert_lane_count::<N>();
        Self {
            indices: core::array::from_fn(|i| {
                let v = start as i64 + i as i64 * step as i64;
                if wrap {
                    full_wrap::<N>(v)
                } else {
                    partial_wrap::<N>(v)
                }
            }),
        }
    }

    /// Interleave two vectors: applied with `rearrange_two(s, b)` to `a`,
    /// part 0 yields `a0 b0 a1 b1 ...` and part 1 the upper halves.
    #[track_caller]
    pub fn make_zip(part: usize) -> Self {
        Self::try_make_zip(part).or_panic()
    }

    pub fn try_make_zip(part: usize) -> Result<Self, LaneError> {
        crate::checks::check_part(part)?;
        let base = part * ((N + 1) >> 1);
        Ok(Self::from_fn(|i| (i / 2 + (i & 1) * N + base) as i32))
    }

    /// Inverse of [`LaneShuffle::make_zip`]: part 0 gathers even lanes of
    /// the concatenation, part 1 the odd lanes.
    #[track_caller]
    pub fn make_unzip(part: usize) -> Self {
        Self::try_make_unzip(part).or_panic()
    }

    pub fn try_make_unzip(part: usize) -> Result<Self, LaneError> {
        crate::checks::check_part(part)?;
        Ok(Self::from_fn(|i| (2 * i + part) as i32))
    }

    #[inline]
    pub const fn length(self) -> usize {
        N
    }

    /// Stored (partially wrapped) index of lane `i`.
    #[track_caller]
    pub fn lane_source(self, i: usize) -> i32 {
        check_lane(i, N).or_panic();
        self.indices[i]
    }

    /// Source lane in `[0, N)` for lane `i`.
    #[inline]
    pub(crate) fn wrapped_source(self, i: usize) -> usize {
        full_wrap::<N>(self.indices[i] as i64) as usize
    }

    #[inline]
    pub(crate) fn is_exceptional(self, i: usize) -> bool {
        self.indices[i] < 0
    }

    #[inline]
    pub fn to_array(self) -> [i32; N] {
        self.indices
    }

    #[track_caller]
    pub fn into_array(self, out: &mut [i32], offset: usize) {
        self.try_into_array(out, offset).or_panic()
    }

    pub fn try_into_array(self, out: &mut [i32], offset: usize) -> Result<(), LaneError> {
        check_range(offset, N, out.len())?;
        out[offset..offset + N].copy_from_slice(&self.indices);
        Ok(())
    }

    /// Set for lanes whose source is in range.
    pub fn lane_is_valid(self) -> LaneMask<N> {
        LaneMask::from_fn(|i| self.indices[i] >= 0)
    }

    #[track_caller]
    pub fn check_indexes(self) -> Self {
        self.try_check_indexes().or_panic()
    }

    pub fn try_check_indexes(self) -> Result<Self, LaneError> {
        match self.indices.iter().position(|&v| v < 0) {
            None => Ok(self),
            Some(lane) => Err(LaneError::ShuffleIndexOutOfRange {
                lane,
                index: self.indices[lane],
                length: N,
            }),
        }
    }

    /// Every lane reduced into `[0, N)`.
    pub fn wrap_indexes(self) -> Self {
        Self {
            indices: core::array::from_fn(|i| self.wrapped_source(i) as i32),
        }
    }

    /// Composition: lane `i` of the result is `self[s[i]]`, with `s`
    /// wrapped.
    pub fn rearrange(self, s: Self) -> Self {
        Self {
            indices: core::array::from_fn(|i| self.indices[s.wrapped_source(i)]),
        }
    }

    /// Stored indices as lane values, exceptional ones negative.
    pub fn to_vector(self) -> HalfVector<N> {
        HalfVector::from_fn(|i| Float16::from_i32(self.indices[i]))
    }
}

impl<const N: usize> fmt::Debug for LaneShuffle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Shuffle")?;
        f.debug_list().entries(self.indices.iter()).finish()
    }
}

impl<const N: usize> fmt::Display for LaneShuffle<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
