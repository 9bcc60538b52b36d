//! `HalfVector<N>`: an immutable value of `N` binary16 lanes.
//!
//! Every lanewise operation is defined per lane by the scalar semantics in
//! `rustyhalf_core`. Masked forms compute the unmasked result and then
//! keep the first operand in lanes whose mask bit is unset. Cross-lane
//! movement (slice, compress, gather, ...) lives in `movement.rs`.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Div, Mul, Neg, Sub};

use rustyhalf_core::{
    Associative, Binary, Comparison, Float16, LaneError, Ternary, Test, Unary,
};

use crate::checks::{check_element, check_lane, check_range, OrPanic};
use crate::mask::LaneMask;
use crate::shuffle::LaneShuffle;
use crate::species::{assert_lane_count, Species, VectorShape};

#[derive(Clone, Copy)]
pub struct HalfVector<const N: usize> {
    pub(crate) lanes: [Float16; N],
}

/// 4 lanes, 64-bit shape.
pub type HalfVector64 = HalfVector<4>;
/// 8 lanes, 128-bit shape.
pub type HalfVector128 = HalfVector<8>;
/// 16 lanes, 256-bit shape.
pub type HalfVector256 = HalfVector<16>;
/// 32 lanes, 512-bit shape.
pub type HalfVector512 = HalfVector<32>;

// ============================================================================
// Construction
// ============================================================================

impl<const N: usize> HalfVector<N> {
    /// Lane counts other than 4, 8, 16 and 32 are rejected at compile time:
    ///
    /// ```compile_fail
    /// use rustyhalf_rs::{Float16, HalfVector};
    ///
    /// let v = HalfVector::<5>::from_lanes([Float16::ZERO; 5]);
    /// ```
    #[inline]
    pub fn from_lanes(lanes: [Float16; N]) -> Self {
        assert_lane_count::<N>();
        Self { lanes }
    }

    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> Float16) -> Self {
        Self::from_lanes(core::array::from_fn(f))
    }

    #[inline]
    pub fn zero() -> Self {
        Self::broadcast(Float16::ZERO)
    }

    #[inline]
    pub fn broadcast(e: Float16) -> Self {
        Self::from_lanes([e; N])
    }

    /// Broadcast of an integer, converted numerically with one rounding.
    pub fn broadcast_long(e: i64) -> Self {
        Self::broadcast(Float16::from_i64(e))
    }

    /// `{0, 1, ..., N-1}`.
    pub fn iota() -> Self {
        Self::from_fn(|i| Float16::from_i64(i as i64))
    }

    /// `self + iota * scale`.
    pub fn add_index(self, scale: i32) -> Self {
        let scale = Float16::from_i32(scale);
        Self::from_fn(|i| {
            let step = Float16::from_i64(i as i64).mul(scale);
            self.lanes[i].add(step)
        })
    }

    // ------------------------------------------------------------------
    // Memory
    // ------------------------------------------------------------------

    /// Load `N` lanes from `a[offset..offset + N]`.
    #[track_caller]
    pub fn from_array(a: &[Float16], offset: usize) -> Self {
        Self::try_from_array(a, offset).or_panic()
    }

    pub fn try_from_array(a: &[Float16], offset: usize) -> Result<Self, LaneError> {
        check_range(offset, N, a.len())?;
        Ok(Self::from_fn(|i| a[offset + i]))
    }

    /// Masked load. Unset lanes are zero and their positions are never
    /// read, so they may lie outside `a`.
    #[track_caller]
    pub fn from_array_masked(a: &[Float16], offset: usize, m: LaneMask<N>) -> Self {
        Self::try_from_array_masked(a, offset, m).or_panic()
    }

    pub fn try_from_array_masked(
        a: &[Float16],
        offset: usize,
        m: LaneMask<N>,
    ) -> Result<Self, LaneError> {
        let mut lanes = [Float16::ZERO; N];
        for (i, lane) in lanes.iter_mut().enumerate() {
            if m.lane_is_set(i) {
                *lane = a[check_element(offset, i, a.len())?];
            }
        }
        Ok(Self::from_lanes(lanes))
    }

    /// Load from raw binary16 bit patterns.
    #[track_caller]
    pub fn from_bits_array(bits: &[u16], offset: usize) -> Self {
        Self::try_from_bits_array(bits, offset).or_panic()
    }

    pub fn try_from_bits_array(bits: &[u16], offset: usize) -> Result<Self, LaneError> {
        check_range(offset, N, bits.len())?;
        Ok(Self::from_fn(|i| Float16::from_bits(bits[offset + i])))
    }

    #[track_caller]
    pub fn into_array(self, out: &mut [Float16], offset: usize) {
        self.try_into_array(out, offset).or_panic()
    }

    pub fn try_into_array(self, out: &mut [Float16], offset: usize) -> Result<(), LaneError> {
        check_range(offset, N, out.len())?;
        out[offset..offset + N].copy_from_slice(&self.lanes);
        Ok(())
    }

    /// Masked store. Only set lanes are written or bounds-checked.
    #[track_caller]
    pub fn into_array_masked(self, out: &mut [Float16], offset: usize, m: LaneMask<N>) {
        self.try_into_array_masked(out, offset, m).or_panic()
    }

    pub fn try_into_array_masked(
        self,
        out: &mut [Float16],
        offset: usize,
        m: LaneMask<N>,
    ) -> Result<(), LaneError> {
        for i in m.true_lanes() {
            check_element(offset, i, out.len())?;
        }
        for i in m.true_lanes() {
            out[offset + i] = self.lanes[i];
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Lane access and conversions
    // ------------------------------------------------------------------

    #[inline]
    pub const fn length(self) -> usize {
        N
    }

    #[inline]
    pub const fn species(self) -> Species<N> {
        Species::new()
    }

    #[inline]
    pub const fn shape(self) -> VectorShape {
        Species::<N>::SHAPE
    }

    #[track_caller]
    pub fn lane(self, i: usize) -> Float16 {
        self.try_lane(i).or_panic()
    }

    pub fn try_lane(self, i: usize) -> Result<Float16, LaneError> {
        check_lane(i, N)?;
        Ok(self.lanes[i])
    }

    /// Copy with lane `i` replaced by `e`.
    #[track_caller]
    pub fn with_lane(self, i: usize, e: Float16) -> Self {
        self.try_with_lane(i, e).or_panic()
    }

    pub fn try_with_lane(self, i: usize, e: Float16) -> Result<Self, LaneError> {
        check_lane(i, N)?;
        let mut lanes = self.lanes;
        lanes[i] = e;
        Ok(Self::from_lanes(lanes))
    }

    #[inline]
    pub fn to_array(self) -> [Float16; N] {
        self.lanes
    }

    #[inline]
    pub fn as_array(&self) -> &[Float16; N] {
        &self.lanes
    }

    pub fn to_bits_array(self) -> [u16; N] {
        self.lanes.map(Float16::to_bits)
    }

    /// Lane bit patterns reinterpreted as signed 16-bit integers.
    pub fn view_as_integral_lanes(self) -> [i16; N] {
        self.lanes.map(|v| v.to_bits() as i16)
    }

    /// Truncating, saturating conversion; NaN becomes 0.
    pub fn to_int_array(self) -> [i32; N] {
        self.lanes.map(Float16::to_i32)
    }

    pub fn to_long_array(self) -> [i64; N] {
        self.lanes.map(Float16::to_i64)
    }

    pub fn to_float_array(self) -> [f32; N] {
        self.lanes.map(Float16::to_f32)
    }

    pub fn to_double_array(self) -> [f64; N] {
        self.lanes.map(Float16::to_f64)
    }

    /// Lane values truncated to integers, as a shuffle.
    pub fn to_shuffle(self) -> LaneShuffle<N> {
        LaneShuffle::from_fn(|i| self.lanes[i].to_i32())
    }
}

// ============================================================================
// Lanewise
// ============================================================================

impl<const N: usize> HalfVector<N> {
    #[inline]
    fn map(self, f: impl Fn(Float16) -> Float16) -> Self {
        Self {
            lanes: self.lanes.map(f),
        }
    }

    #[inline]
    fn zip_map(self, other: Self, f: impl Fn(Float16, Float16) -> Float16) -> Self {
        Self::from_fn(|i| f(self.lanes[i], other.lanes[i]))
    }

    /// Lanes from `other` where `m` is set, from `self` elsewhere.
    pub fn blend(self, other: Self, m: LaneMask<N>) -> Self {
        Self::from_fn(|i| {
            if m.lane_is_set(i) {
                other.lanes[i]
            } else {
                self.lanes[i]
            }
        })
    }

    pub fn lanewise_unary(self, op: Unary) -> Self {
        self.map(|a| op.apply(a))
    }

    pub fn lanewise_unary_masked(self, op: Unary, m: LaneMask<N>) -> Self {
        self.blend(self.lanewise_unary(op), m)
    }

    pub fn lanewise(self, op: Binary, other: Self) -> Self {
        self.zip_map(other, |a, b| op.apply(a, b))
    }

    pub fn lanewise_masked(self, op: Binary, other: Self, m: LaneMask<N>) -> Self {
        self.blend(self.lanewise(op, other), m)
    }

    pub fn lanewise_scalar(self, op: Binary, e: Float16) -> Self {
        self.lanewise(op, Self::broadcast(e))
    }

    pub fn lanewise_scalar_masked(self, op: Binary, e: Float16, m: LaneMask<N>) -> Self {
        self.lanewise_masked(op, Self::broadcast(e), m)
    }

    /// Scalar operand given as an integer and converted numerically.
    pub fn lanewise_long(self, op: Binary, e: i64) -> Self {
        self.lanewise(op, Self::broadcast_long(e))
    }

    pub fn lanewise_long_masked(self, op: Binary, e: i64, m: LaneMask<N>) -> Self {
        self.lanewise_masked(op, Self::broadcast_long(e), m)
    }

    pub fn lanewise_ternary(self, op: Ternary, b: Self, c: Self) -> Self {
        Self::from_fn(|i| op.apply(self.lanes[i], b.lanes[i], c.lanes[i]))
    }

    pub fn lanewise_ternary_masked(self, op: Ternary, b: Self, c: Self, m: LaneMask<N>) -> Self {
        self.blend(self.lanewise_ternary(op, b, c), m)
    }

    // ------------------------------------------------------------------
    // Named shortcuts
    // ------------------------------------------------------------------

    #[inline(always)]
    pub fn add(self, other: Self) -> Self {
        self.lanewise(Binary::Add, other)
    }

    #[inline(always)]
    pub fn sub(self, other: Self) -> Self {
        self.lanewise(Binary::Sub, other)
    }

    #[inline(always)]
    pub fn mul(self, other: Self) -> Self {
        self.lanewise(Binary::Mul, other)
    }

    #[inline(always)]
    pub fn div(self, other: Self) -> Self {
        self.lanewise(Binary::Div, other)
    }

    #[inline(always)]
    pub fn add_masked(self, other: Self, m: LaneMask<N>) -> Self {
        self.lanewise_masked(Binary::Add, other, m)
    }

    #[inline(always)]
    pub fn sub_masked(self, other: Self, m: LaneMask<N>) -> Self {
        self.lanewise_masked(Binary::Sub, other, m)
    }

    #[inline(always)]
    pub fn mul_masked(self, other: Self, m: LaneMask<N>) -> Self {
        self.lanewise_masked(Binary::Mul, other, m)
    }

    #[inline(always)]
    pub fn div_masked(self, other: Self, m: LaneMask<N>) -> Self {
        self.lanewise_masked(Binary::Div, other, m)
    }

    #[inline(always)]
    pub fn min(self, other: Self) -> Self {
        self.lanewise(Binary::Min, other)
    }

    #[inline(always)]
    pub fn max(self, other: Self) -> Self {
        self.lanewise(Binary::Max, other)
    }

    #[inline(always)]
    pub fn first_non_zero(self, other: Self) -> Self {
        self.lanewise(Binary::FirstNonZero, other)
    }

    #[inline(always)]
    pub fn pow(self, other: Self) -> Self {
        self.lanewise(Binary::Pow, other)
    }

    #[inline(always)]
    pub fn atan2(self, other: Self) -> Self {
        self.lanewise(Binary::Atan2, other)
    }

    #[inline(always)]
    pub fn hypot(self, other: Self) -> Self {
        self.lanewise(Binary::Hypot, other)
    }

    #[inline(always)]
    pub fn neg(self) -> Self {
        self.lanewise_unary(Unary::Neg)
    }

    #[inline(always)]
    pub fn abs(self) -> Self {
        self.lanewise_unary(Unary::Abs)
    }

    #[inline(always)]
    pub fn sqrt(self) -> Self {
        self.lanewise_unary(Unary::Sqrt)
    }

    /// `self * b + c` with a single rounding per lane.
    #[inline(always)]
    pub fn fma(self, b: Self, c: Self) -> Self {
        self.lanewise_ternary(Ternary::Fma, b, c)
    }

    #[inline(always)]
    pub fn fma_masked(self, b: Self, c: Self, m: LaneMask<N>) -> Self {
        self.lanewise_ternary_masked(Ternary::Fma, b, c, m)
    }
}

// ============================================================================
// Comparisons and tests
// ============================================================================

impl<const N: usize> HalfVector<N> {
    /// IEEE comparison per lane; NaN lanes are false except under `Ne`.
    pub fn compare(self, op: Comparison, other: Self) -> LaneMask<N> {
        LaneMask::from_fn(|i| op.apply(self.lanes[i], other.lanes[i]))
    }

    /// Comparison result ANDed with `m`.
    pub fn compare_masked(self, op: Comparison, other: Self, m: LaneMask<N>) -> LaneMask<N> {
        self.compare(op, other) & m
    }

    pub fn compare_scalar(self, op: Comparison, e: Float16) -> LaneMask<N> {
        self.compare(op, Self::broadcast(e))
    }

    pub fn compare_scalar_masked(self, op: Comparison, e: Float16, m: LaneMask<N>) -> LaneMask<N> {
        self.compare_scalar(op, e) & m
    }

    pub fn compare_long(self, op: Comparison, e: i64) -> LaneMask<N> {
        self.compare(op, Self::broadcast_long(e))
    }

    pub fn compare_long_masked(self, op: Comparison, e: i64, m: LaneMask<N>) -> LaneMask<N> {
        self.compare_long(op, e) & m
    }

    pub fn test(self, op: Test) -> LaneMask<N> {
        LaneMask::from_fn(|i| op.apply(self.lanes[i]))
    }

    /// Test result, false in lanes unset in `m`.
    pub fn test_masked(self, op: Test, m: LaneMask<N>) -> LaneMask<N> {
        self.test(op) & m
    }
}

// ============================================================================
// Reductions
// ============================================================================

/// Pairwise tree over the slice. An empty slice yields the identity.
fn tree_reduce(lanes: &[Float16], op: Associative) -> Float16 {
    match lanes.len() {
        0 => op.identity(),
        1 => lanes[0],
        n => {
            let (lo, hi) = lanes.split_at(n / 2);
            op.apply(tree_reduce(lo, op), tree_reduce(hi, op))
        }
    }
}

fn reduce_slice(lanes: &[Float16], op: Associative) -> Float16 {
    match op {
        // Order matters: the earliest lane with nonzero bits wins.
        Associative::FirstNonZero => lanes
            .iter()
            .copied()
            .find(|v| !v.is_default())
            .unwrap_or(Float16::ZERO),
        _ => tree_reduce(lanes, op),
    }
}

impl<const N: usize> HalfVector<N> {
    /// Combine all lanes. ADD and MUL use a pairwise order, so results may
    /// differ from a left-to-right fold within the reduction tolerance.
    pub fn reduce_lanes(self, op: Associative) -> Float16 {
        reduce_slice(&self.lanes, op)
    }

    /// Combine the lanes set in `m`; with no lane set the result is the
    /// operator's identity.
    pub fn reduce_lanes_masked(self, op: Associative, m: LaneMask<N>) -> Float16 {
        let mut selected = [Float16::ZERO; N];
        let mut count = 0;
        for i in m.true_lanes() {
            selected[count] = self.lanes[i];
            count += 1;
        }
        reduce_slice(&selected[..count], op)
    }

    pub fn reduce_lanes_to_long(self, op: Associative) -> i64 {
        self.reduce_lanes(op).to_i64()
    }

    pub fn reduce_lanes_to_long_masked(self, op: Associative, m: LaneMask<N>) -> i64 {
        self.reduce_lanes_masked(op, m).to_i64()
    }
}

// ============================================================================
// Rearrangement
// ============================================================================

impl<const N: usize> HalfVector<N> {
    /// `r[i] = self[s[i]]` with exceptional indices wrapped.
    pub fn rearrange(self, s: LaneShuffle<N>) -> Self {
        Self::from_fn(|i| self.lanes[s.wrapped_source(i)])
    }

    /// As [`HalfVector::rearrange`], with unset lanes zero.
    pub fn rearrange_masked(self, s: LaneShuffle<N>, m: LaneMask<N>) -> Self {
        Self::zero().blend(self.rearrange(s), m)
    }

    /// Valid shuffle lanes read `self`, exceptional lanes read `other`.
    pub fn rearrange_two(self, s: LaneShuffle<N>, other: Self) -> Self {
        Self::from_fn(|i| {
            let src = s.wrapped_source(i);
            if s.is_exceptional(i) {
                other.lanes[src]
            } else {
                self.lanes[src]
            }
        })
    }

    /// Use this vector's lanes as indices into `data`, wrapped modulo `N`.
    pub fn select_from(self, data: Self) -> Self {
        data.rearrange(self.to_shuffle())
    }

    pub fn select_from_masked(self, data: Self, m: LaneMask<N>) -> Self {
        data.rearrange_masked(self.to_shuffle(), m)
    }

    /// Indices wrap modulo `2N` over the concatenation `v1 ++ v2`.
    pub fn select_from_two(self, v1: Self, v2: Self) -> Self {
        let span = 2 * N as i64;
        Self::from_fn(|i| {
            let idx = (self.lanes[i].to_i32() as i64).rem_euclid(span) as usize;
            if idx < N {
                v1.lanes[idx]
            } else {
                v2.lanes[idx - N]
            }
        })
    }
}

// ============================================================================
// Operators and trait impls
// ============================================================================

macro_rules! impl_bin_op {
    ($trait:ident, $method:ident, $op:expr) => {
        impl<const N: usize> $trait for HalfVector<N> {
            type Output = Self;
            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                self.lanewise($op, rhs)
            }
        }

        impl<const N: usize> $trait<Float16> for HalfVector<N> {
            type Output = Self;
            #[inline(always)]
            fn $method(self, rhs: Float16) -> Self {
                self.lanewise_scalar($op, rhs)
            }
        }
    };
}

impl_bin_op!(Add, add, Binary::Add);
impl_bin_op!(Sub, sub, Binary::Sub);
impl_bin_op!(Mul, mul, Binary::Mul);
impl_bin_op!(Div, div, Binary::Div);

impl<const N: usize> Neg for HalfVector<N> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        self.lanewise_unary(Unary::Neg)
    }
}

impl<const N: usize> Default for HalfVector<N> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Bitwise lane equality: NaN lanes with equal payloads are equal and
/// `0.0 != -0.0`.
impl<const N: usize> PartialEq for HalfVector<N> {
    fn eq(&self, other: &Self) -> bool {
        self.to_bits_array() == other.to_bits_array()
    }
}

impl<const N: usize> Eq for HalfVector<N> {}

impl<const N: usize> Hash for HalfVector<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bits_array().hash(state);
    }
}

impl<const N: usize> From<[Float16; N]> for HalfVector<N> {
    fn from(lanes: [Float16; N]) -> Self {
        Self::from_lanes(lanes)
    }
}

impl<const N: usize> From<HalfVector<N>> for [Float16; N] {
    fn from(v: HalfVector<N>) -> Self {
        v.lanes
    }
}

impl<const N: usize> fmt::Debug for HalfVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.lanes.iter()).finish()
    }
}

impl<const N: usize> fmt::Display for HalfVector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
