//! Lane masks: one boolean per lane of a species.

use core::fmt;
use core::ops::{BitAnd, BitOr, BitXor, Not};

use rustyhalf_core::LaneError;
use smallvec::SmallVec;

use crate::checks::{check_lane, check_range, OrPanic};
use crate::species::assert_lane_count;

/// Boolean per lane. Masks of different lane counts are different types.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LaneMask<const N: usize> {
    bits: [bool; N],
}

impl<const N: usize> LaneMask<N> {
    /// ```compile_fail
    /// use rustyhalf_rs::LaneMask;
    ///
    /// let m = LaneMask::<6>::from_values([true; 6]);
    /// ```
    #[inline]
    pub fn from_values(bits: [bool; N]) -> Self {
        assert_lane_count::<N>();
        Self { bits }
    }

    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> bool) -> Self {
        Self::from_values(core::array::from_fn(f))
    }

    /// Load `N` booleans starting at `offset`.
    #[track_caller]
    pub fn from_array(bits: &[bool], offset: usize) -> Self {
        Self::try_from_array(bits, offset).or_panic()
    }

    pub fn try_from_array(bits: &[bool], offset: usize) -> Result<Self, LaneError> {
        check_range(offset, N, bits.len())?;
        Ok(Self::from_fn(|i| bits[offset + i]))
    }

    /// Lane `i` takes bit `i` of `bits`; higher bits are ignored.
    pub fn from_long(bits: u64) -> Self {
        Self::from_fn(|i| (bits >> i) & 1 == 1)
    }

    pub fn to_long(self) -> u64 {
        self.bits
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &b)| acc | ((b as u64) << i))
    }

    #[inline]
    pub fn to_array(self) -> [bool; N] {
        self.bits
    }

    #[track_caller]
    pub fn into_array(self, out: &mut [bool], offset: usize) {
        self.try_into_array(out, offset).or_panic()
    }

    pub fn try_into_array(self, out: &mut [bool], offset: usize) -> Result<(), LaneError> {
        check_range(offset, N, out.len())?;
        out[offset..offset + N].copy_from_slice(&self.bits);
        Ok(())
    }

    #[inline]
    pub const fn length(self) -> usize {
        N
    }

    #[inline]
    #[track_caller]
    pub fn lane_is_set(self, i: usize) -> bool {
        self.try_lane_is_set(i).or_panic()
    }

    pub fn try_lane_is_set(self, i: usize) -> Result<bool, LaneError> {
        check_lane(i, N)?;
        Ok(self.bits[i])
    }

    /// Copy of this mask with lane `i` replaced.
    #[track_caller]
    pub fn with_lane(self, i: usize, value: bool) -> Self {
        check_lane(i, N).or_panic();
        let mut bits = self.bits;
        bits[i] = value;
        Self { bits }
    }

    // ------------------------------------------------------------------
    // Logic
    // ------------------------------------------------------------------

    #[inline]
    fn zip_with(self, other: Self, f: impl Fn(bool, bool) -> bool) -> Self {
        Self::from_fn(|i| f(self.bits[i], other.bits[i]))
    }

    pub fn and(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a & b)
    }

    pub fn or(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a | b)
    }

    pub fn xor(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a ^ b)
    }

    /// `self & !other`.
    pub fn and_not(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a & !b)
    }

    /// Lanes where both masks agree.
    pub fn eq_lanes(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a == b)
    }

    pub fn not(self) -> Self {
        Self::from_fn(|i| !self.bits[i])
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn true_count(self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Index of the first set lane, or `N` when none is set.
    pub fn first_true(self) -> usize {
        self.bits.iter().position(|&b| b).unwrap_or(N)
    }

    /// Index of the last set lane, or `-1` when none is set.
    pub fn last_true(self) -> isize {
        self.bits
            .iter()
            .rposition(|&b| b)
            .map_or(-1, |i| i as isize)
    }

    pub fn any_true(self) -> bool {
        self.bits.iter().any(|&b| b)
    }

    pub fn all_true(self) -> bool {
        self.bits.iter().all(|&b| b)
    }

    /// Indices of the set lanes, ascending.
    pub fn true_lanes(self) -> SmallVec<[usize; 32]> {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &b)| b.then_some(i))
            .collect()
    }

    /// Mask with the first `true_count()` lanes set.
    pub fn compress(self) -> Self {
        let count = self.true_count();
        Self::from_fn(|i| i < count)
    }

    /// This mask restricted to lanes with `0 <= offset + i < limit`.
    pub fn index_in_range(self, offset: i64, limit: i64) -> Self {
        Self::from_fn(|i| {
            self.bits[i]
                && offset
                    .checked_add(i as i64)
                    .is_some_and(|index| index >= 0 && index < limit)
        })
    }
}

impl<const N: usize> BitAnd for LaneMask<N> {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl<const N: usize> BitOr for LaneMask<N> {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl<const N: usize> BitXor for LaneMask<N> {
    type Output = Self;
    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        self.xor(rhs)
    }
}

impl<const N: usize> Not for LaneMask<N> {
    type Output = Self;
    #[inline(always)]
    fn not(self) -> Self {
        LaneMask::not(self)
    }
}

impl<const N: usize> fmt::Debug for LaneMask<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Mask[")?;
        for &b in &self.bits {
            f.write_str(if b { "T" } else { "." })?;
        }
        f.write_str("]")
    }
}

impl<const N: usize> fmt::Display for LaneMask<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
