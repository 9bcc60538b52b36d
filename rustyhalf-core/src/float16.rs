//! IEEE-754 binary16 scalar.
//!
//! `Float16` is the raw 16-bit pattern of a half-precision value:
//!
//! ```text
//!   bit 15      sign
//!   bits 14-10  exponent (bias 15)
//!   bits 9-0    mantissa
//! ```
//!
//! Every bit pattern is a valid value, including signalling/quiet NaNs,
//! signed zeros and subnormals. `from_bits`/`to_bits` are pure
//! reinterpretations, so arrays of lanes round-trip bit-exactly.
//!
//! Arithmetic is evaluated in binary64 and rounded once to binary16 with
//! round-to-nearest-even. The sum, difference and product of two binary16
//! values are exact in binary64; quotient and square root are correctly
//! rounded there first, and binary64 has more than `2 * 11 + 2` significand
//! bits, so the second rounding cannot go wrong.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Bit layout
// ---------------------------------------------------------------------------

const SIGN_MASK: u16 = 0x8000;
const EXP_MASK: u16 = 0x7C00;
const MAN_MASK: u16 = 0x03FF;
const QUIET_BIT: u16 = 0x0200;

/// Exponent bias of binary16.
pub const EXP_BIAS: i32 = 15;
/// Explicit mantissa bits of binary16.
pub const MANTISSA_BITS: u32 = 10;

/// binary64 exponent bias minus binary16 exponent bias.
const REBIAS: u64 = 1023 - 15;
/// 2^-24, the value of one subnormal step.
const SUBNORMAL_STEP: f64 = 1.0 / 16_777_216.0;

/// A half-precision (IEEE-754 binary16) value, stored as its bit pattern.
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct Float16(u16);

impl Float16 {
    pub const ZERO: Self = Self(0x0000);
    pub const NEG_ZERO: Self = Self(0x8000);
    pub const ONE: Self = Self(0x3C00);
    pub const NEG_ONE: Self = Self(0xBC00);
    pub const INFINITY: Self = Self(0x7C00);
    pub const NEG_INFINITY: Self = Self(0xFC00);
    /// The canonical quiet NaN.
    pub const NAN: Self = Self(0x7E00);
    /// Largest finite value, 65504.
    pub const MAX: Self = Self(0x7BFF);
    /// Most negative finite value, -65504.
    pub const MIN: Self = Self(0xFBFF);
    /// Smallest positive normal value, 2^-14.
    pub const MIN_POSITIVE: Self = Self(0x0400);
    /// Smallest positive subnormal value, 2^-24.
    pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);
    /// Gap between 1.0 and the next larger value, 2^-10.
    pub const EPSILON: Self = Self(0x1400);

    // -- Bit reinterpretation --

    #[inline(always)]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    #[inline(always)]
    pub const fn to_bits(self) -> u16 {
        self.0
    }

    // -- Encoding --

    /// Round a binary64 value to the nearest binary16 value (ties to even).
    ///
    /// Overflow goes to the signed infinity, underflow through the subnormal
    /// range to the signed zero. NaN keeps its sign and the top ten payload
    /// bits and is made quiet.
    pub fn from_f64(value: f64) -> Self {
        let bits = value.to_bits();
        let sign = ((bits >> 48) as u16) & SIGN_MASK;
        let exp = ((bits >> 52) & 0x7FF) as i32;
        let man = bits & 0x000F_FFFF_FFFF_FFFF;

        if exp == 0x7FF {
            if man == 0 {
                return Self(sign | EXP_MASK);
            }
            let payload = (man >> 42) as u16 & MAN_MASK;
            return Self(sign | EXP_MASK | QUIET_BIT | payload);
        }
        if exp == 0 {
            // binary64 zero or subnormal: far below half of 2^-24.
            return Self(sign);
        }

        let e = exp - 1023;
        let sig = man | (1u64 << 52);

        if e >= 16 {
            return Self(sign | EXP_MASK);
        }

        if e >= -14 {
            let mut kept = round_shift(sig, 42);
            let mut biased = (e + EXP_BIAS) as u16;
            if kept == 0x800 {
                kept = 0x400;
                biased += 1;
            }
            if biased >= 0x1F {
                return Self(sign | EXP_MASK);
            }
            return Self(sign | (biased << MANTISSA_BITS) | (kept as u16 & MAN_MASK));
        }

        // Subnormal result: count in units of 2^-24.
        let shift = (28 - e) as u32;
        if shift >= 64 {
            return Self(sign);
        }
        // A carry into 0x400 is the smallest normal encoding, which is
        // exactly the right pattern.
        Self(sign | round_shift(sig, shift) as u16)
    }

    #[inline]
    pub fn from_f32(value: f32) -> Self {
        Self::from_f64(value as f64)
    }

    /// Numeric conversion from an integer, rounding to nearest.
    #[inline]
    pub fn from_i64(value: i64) -> Self {
        // Anything that does not fit binary64 exactly is far beyond MAX.
        Self::from_f64(value as f64)
    }

    #[inline]
    pub fn from_i32(value: i32) -> Self {
        Self::from_f64(value as f64)
    }

    // -- Decoding --

    /// Exact widening to binary64.
    pub fn to_f64(self) -> f64 {
        let sign = ((self.0 & SIGN_MASK) as u64) << 48;
        let exp = (self.0 & EXP_MASK) >> MANTISSA_BITS;
        let man = (self.0 & MAN_MASK) as u64;
        match exp {
            0 => {
                let magnitude = man as f64 * SUBNORMAL_STEP;
                if sign != 0 {
                    -magnitude
                } else {
                    magnitude
                }
            }
            0x1F => f64::from_bits(sign | 0x7FF0_0000_0000_0000 | (man << 42)),
            _ => f64::from_bits(sign | ((exp as u64 + REBIAS) << 52) | (man << 42)),
        }
    }

    /// Exact widening to binary32.
    #[inline]
    pub fn to_f32(self) -> f32 {
        self.to_f64() as f32
    }

    /// Truncate toward zero, saturating; NaN converts to 0.
    #[inline]
    pub fn to_i32(self) -> i32 {
        self.to_f64() as i32
    }

    /// Truncate toward zero, saturating; NaN converts to 0.
    #[inline]
    pub fn to_i64(self) -> i64 {
        self.to_f64() as i64
    }

    // -- Classification --

    #[inline]
    pub const fn is_nan(self) -> bool {
        (self.0 & EXP_MASK) == EXP_MASK && (self.0 & MAN_MASK) != 0
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        (self.0 & !SIGN_MASK) == EXP_MASK
    }

    #[inline]
    pub const fn is_finite(self) -> bool {
        (self.0 & EXP_MASK) != EXP_MASK
    }

    #[inline]
    pub const fn is_subnormal(self) -> bool {
        (self.0 & EXP_MASK) == 0 && (self.0 & MAN_MASK) != 0
    }

    /// Sign bit set. True for -0.0 and negative NaN patterns.
    #[inline]
    pub const fn is_sign_negative(self) -> bool {
        (self.0 & SIGN_MASK) != 0
    }

    /// The all-zero bit pattern (+0.0 only).
    #[inline]
    pub const fn is_default(self) -> bool {
        self.0 == 0
    }

    /// +0.0 or -0.0.
    #[inline]
    pub const fn is_zero(self) -> bool {
        (self.0 & !SIGN_MASK) == 0
    }

    // -- Arithmetic --

    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        Self::from_f64(self.to_f64() + rhs.to_f64())
    }

    #[inline]
    pub fn sub(self, rhs: Self) -> Self {
        Self::from_f64(self.to_f64() - rhs.to_f64())
    }

    #[inline]
    pub fn mul(self, rhs: Self) -> Self {
        Self::from_f64(self.to_f64() * rhs.to_f64())
    }

    #[inline]
    pub fn div(self, rhs: Self) -> Self {
        Self::from_f64(self.to_f64() / rhs.to_f64())
    }

    #[inline]
    pub fn sqrt(self) -> Self {
        Self::from_f64(self.to_f64().sqrt())
    }

    /// Fused multiply-add `self * b + c` with a single rounding.
    ///
    /// The product is exact in binary64. The sum is split into its rounded
    /// value and exact error (two-sum); a non-zero error is folded back as a
    /// sticky bit (round-to-odd) before the final rounding to binary16.
    pub fn fma(self, b: Self, c: Self) -> Self {
        let p = self.to_f64() * b.to_f64();
        let z = c.to_f64();
        let s = p + z;
        if !s.is_finite() || s == 0.0 {
            return Self::from_f64(s);
        }

        let p_virtual = s - z;
        let z_virtual = s - p_virtual;
        let err = (p - p_virtual) + (z - z_virtual);
        if err == 0.0 || s.to_bits() & 1 == 1 {
            return Self::from_f64(s);
        }

        let bits = s.to_bits();
        let odd = if (err > 0.0) == (s > 0.0) {
            f64::from_bits(bits + 1)
        } else {
            f64::from_bits(bits - 1)
        };
        Self::from_f64(odd)
    }

    /// Flip the sign bit.
    #[inline]
    pub const fn neg(self) -> Self {
        Self(self.0 ^ SIGN_MASK)
    }

    /// Clear the sign bit.
    #[inline]
    pub const fn abs(self) -> Self {
        Self(self.0 & !SIGN_MASK)
    }

    /// Minimum; NaN propagates and -0.0 is below +0.0.
    pub fn min(self, other: Self) -> Self {
        if self.is_nan() {
            return self;
        }
        if other.is_nan() {
            return other;
        }
        if self.is_zero() && other.is_zero() {
            return Self(self.0 | other.0);
        }
        if self.to_f64() <= other.to_f64() {
            self
        } else {
            other
        }
    }

    /// Maximum; NaN propagates and +0.0 is above -0.0.
    pub fn max(self, other: Self) -> Self {
        if self.is_nan() {
            return self;
        }
        if other.is_nan() {
            return other;
        }
        if self.is_zero() && other.is_zero() {
            return Self(self.0 & other.0);
        }
        if self.to_f64() >= other.to_f64() {
            self
        } else {
            other
        }
    }

    /// `self` unless it is the all-zero pattern, else `other`.
    ///
    /// -0.0 and every NaN count as non-zero.
    #[inline]
    pub const fn first_non_zero(self, other: Self) -> Self {
        if self.is_default() {
            other
        } else {
            self
        }
    }

    // -- Ordering --

    /// Total order: -inf < ... < -0.0 < +0.0 < ... < +inf < NaN, with every
    /// NaN pattern equal to every other.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self.is_nan(), other.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => order_key(self.0).cmp(&order_key(other.0)),
        }
    }

    // -- Neighbours --

    /// Smallest value greater than `self`.
    pub fn next_up(self) -> Self {
        if self.is_nan() || self.0 == Self::INFINITY.0 {
            return self;
        }
        if self.is_zero() {
            return Self::MIN_POSITIVE_SUBNORMAL;
        }
        if self.is_sign_negative() {
            Self(self.0 - 1)
        } else {
            Self(self.0 + 1)
        }
    }

    /// Largest value less than `self`.
    pub fn next_down(self) -> Self {
        if self.is_nan() || self.0 == Self::NEG_INFINITY.0 {
            return self;
        }
        if self.is_zero() {
            return Self(SIGN_MASK | 1);
        }
        if self.is_sign_negative() {
            Self(self.0 + 1)
        } else {
            Self(self.0 - 1)
        }
    }

    /// Unit in the last place: the gap between `|self|` and the next larger
    /// magnitude. NaN for NaN, +inf for infinities.
    pub fn ulp(self) -> Self {
        let exp = ((self.0 & EXP_MASK) >> MANTISSA_BITS) as i32;
        match exp {
            0x1F if self.is_nan() => Self::NAN,
            0x1F => Self::INFINITY,
            0 => Self::MIN_POSITIVE_SUBNORMAL,
            _ => {
                let e = exp - EXP_BIAS - MANTISSA_BITS as i32;
                if e >= -14 {
                    Self(((e + EXP_BIAS) as u16) << MANTISSA_BITS)
                } else {
                    Self(1 << (e + 24))
                }
            }
        }
    }
}

/// Shift `sig` right by `shift` bits, rounding to nearest, ties to even.
#[inline]
fn round_shift(sig: u64, shift: u32) -> u64 {
    let kept = sig >> shift;
    let rem = sig & ((1u64 << shift) - 1);
    let half = 1u64 << (shift - 1);
    if rem > half || (rem == half && kept & 1 == 1) {
        kept + 1
    } else {
        kept
    }
}

/// Map a non-NaN bit pattern onto a signed key that sorts numerically.
#[inline]
fn order_key(bits: u16) -> i32 {
    let b = bits as i16 as i32;
    if b < 0 {
        b ^ 0x7FFF
    } else {
        b
    }
}

// ---------------------------------------------------------------------------
// Trait impls
// ---------------------------------------------------------------------------

impl PartialEq for Float16 {
    /// IEEE equality: NaN equals nothing, +0.0 == -0.0.
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        self.0 == other.0 || (self.is_zero() && other.is_zero())
    }
}

impl PartialOrd for Float16 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_f64().partial_cmp(&other.to_f64())
    }
}

macro_rules! impl_scalar_op {
    ($trait:ident, $method:ident) => {
        impl $trait for Float16 {
            type Output = Self;
            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                Float16::$method(self, rhs)
            }
        }
    };
}

impl_scalar_op!(Add, add);
impl_scalar_op!(Sub, sub);
impl_scalar_op!(Mul, mul);
impl_scalar_op!(Div, div);

impl Neg for Float16 {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Float16::neg(self)
    }
}

impl From<Float16> for f64 {
    fn from(v: Float16) -> f64 {
        v.to_f64()
    }
}

impl From<Float16> for f32 {
    fn from(v: Float16) -> f32 {
        v.to_f32()
    }
}

impl From<f32> for Float16 {
    fn from(v: f32) -> Self {
        Float16::from_f32(v)
    }
}

impl From<f64> for Float16 {
    fn from(v: f64) -> Self {
        Float16::from_f64(v)
    }
}

impl fmt::Debug for Float16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_f32(), f)
    }
}

impl fmt::Display for Float16 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn h(v: f64) -> Float16 {
        Float16::from_f64(v)
    }

    #[test]
    fn test_constants_decode() {
        assert_eq!(Float16::ONE.to_f64(), 1.0);
        assert_eq!(Float16::NEG_ONE.to_f64(), -1.0);
        assert_eq!(Float16::MAX.to_f64(), 65504.0);
        assert_eq!(Float16::MIN.to_f64(), -65504.0);
        assert_eq!(Float16::MIN_POSITIVE.to_f64(), 2f64.powi(-14));
        assert_eq!(Float16::MIN_POSITIVE_SUBNORMAL.to_f64(), 2f64.powi(-24));
        assert_eq!(Float16::EPSILON.to_f64(), 2f64.powi(-10));
        assert!(Float16::INFINITY.to_f64().is_infinite());
        assert!(Float16::NAN.to_f64().is_nan());
        assert!(Float16::NEG_ZERO.to_f64().is_sign_negative());
    }

    #[test]
    fn test_every_pattern_round_trips_through_f64() {
        for bits in 0..=u16::MAX {
            let v = Float16::from_bits(bits);
            let back = Float16::from_f64(v.to_f64());
            if v.is_nan() {
                assert!(back.is_nan(), "bits {:#06x}", bits);
                // Quiet NaNs keep their payload.
                if bits & QUIET_BIT != 0 {
                    assert_eq!(back.to_bits(), bits);
                }
            } else {
                assert_eq!(back.to_bits(), bits, "bits {:#06x}", bits);
            }
        }
    }

    #[test]
    fn test_rounding_ties_to_even() {
        // Spacing is 2 in [2048, 4096).
        assert_eq!(h(2049.0).to_f64(), 2048.0);
        assert_eq!(h(2051.0).to_f64(), 2052.0);
        assert_eq!(h(2049.5).to_f64(), 2050.0);
        // Spacing is 2^-10 just above one.
        assert_eq!(h(1.0 + 2f64.powi(-11)).to_bits(), 0x3C00);
        assert_eq!(h(1.0 + 3.0 * 2f64.powi(-11)).to_bits(), 0x3C02);
    }

    #[test]
    fn test_overflow_boundary() {
        assert_eq!(h(65519.0).to_bits(), Float16::MAX.to_bits());
        assert_eq!(h(65520.0).to_bits(), Float16::INFINITY.to_bits());
        assert_eq!(h(-1e10).to_bits(), Float16::NEG_INFINITY.to_bits());
        assert_eq!(Float16::from_i64(i64::MAX).to_bits(), Float16::INFINITY.to_bits());
    }

    #[test]
    fn test_subnormal_rounding() {
        let step = 2f64.powi(-24);
        assert_eq!(h(step).to_bits(), 0x0001);
        assert_eq!(h(step * 0.5).to_bits(), 0x0000); // tie to even
        assert_eq!(h(step * 0.5000001).to_bits(), 0x0001);
        assert_eq!(h(step * 1.5).to_bits(), 0x0002); // tie to even
        assert_eq!(h(-step * 0.25).to_bits(), 0x8000);
        // Largest subnormal rounds up into the smallest normal.
        assert_eq!(h(1023.75 * step).to_bits(), 0x0400);
        assert_eq!(h(1e-300).to_bits(), 0x0000);
    }

    #[test]
    fn test_nan_encoding_is_quiet() {
        let signalling = f64::from_bits(0x7FF0_0000_0000_0001);
        let v = h(signalling);
        assert!(v.is_nan());
        assert_ne!(v.to_bits() & QUIET_BIT, 0);
        let neg_nan = h(-f64::NAN);
        assert!(neg_nan.is_nan());
        assert!(neg_nan.is_sign_negative());
    }

    #[test]
    fn test_integer_conversions_truncate_and_saturate() {
        assert_eq!(h(2.75).to_i32(), 2);
        assert_eq!(h(-2.75).to_i32(), -2);
        assert_eq!(Float16::NAN.to_i32(), 0);
        assert_eq!(Float16::INFINITY.to_i32(), i32::MAX);
        assert_eq!(Float16::NEG_INFINITY.to_i64(), i64::MIN);
        assert_eq!(Float16::from_i32(-7).to_f64(), -7.0);
        assert_eq!(Float16::from_i64(4097).to_f64(), 4096.0);
    }

    #[test]
    fn test_arithmetic_matches_single_rounding() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..10_000 {
            let a = Float16::from_bits(rng.gen());
            let b = Float16::from_bits(rng.gen());
            if a.is_nan() || b.is_nan() {
                continue;
            }
            // binary32 also has enough bits for a harmless second rounding.
            let (x, y) = (a.to_f32(), b.to_f32());
            assert_eq!((a + b).to_bits(), Float16::from_f32(x + y).to_bits());
            assert_eq!((a - b).to_bits(), Float16::from_f32(x - y).to_bits());
            assert_eq!((a * b).to_bits(), Float16::from_f32(x * y).to_bits());
            let q = a / b;
            if !q.is_nan() {
                assert_eq!(q.to_bits(), Float16::from_f32(x / y).to_bits());
            }
        }
    }

    #[test]
    fn test_fma_single_rounding() {
        let a = h(1.0 + 2f64.powi(-10));
        let c = h(-(1.0 + 2f64.powi(-9)));
        // a*a = 1 + 2^-9 + 2^-20; the separate product loses 2^-20.
        assert_eq!((a * a + c).to_bits(), 0x0000);
        assert_eq!(a.fma(a, c).to_f64(), 2f64.powi(-20));
        assert!(Float16::INFINITY.fma(Float16::ZERO, Float16::ONE).is_nan());
        assert_eq!(h(3.0).fma(h(4.0), h(5.0)).to_f64(), 17.0);
    }

    #[test]
    fn test_neg_abs_are_bitwise() {
        assert_eq!(Float16::ZERO.neg().to_bits(), 0x8000);
        assert_eq!(Float16::NEG_ZERO.abs().to_bits(), 0x0000);
        assert_eq!(Float16::from_bits(0xFE01).abs().to_bits(), 0x7E01);
    }

    #[test]
    fn test_min_max_signed_zero_and_nan() {
        assert_eq!(Float16::ZERO.min(Float16::NEG_ZERO).to_bits(), 0x8000);
        assert_eq!(Float16::NEG_ZERO.max(Float16::ZERO).to_bits(), 0x0000);
        assert!(Float16::ONE.min(Float16::NAN).is_nan());
        assert!(Float16::NAN.max(Float16::ONE).is_nan());
        assert_eq!(h(-3.0).min(h(2.0)).to_f64(), -3.0);
        assert_eq!(h(-3.0).max(h(2.0)).to_f64(), 2.0);
    }

    #[test]
    fn test_ieee_equality_and_total_order() {
        assert_ne!(Float16::NAN, Float16::NAN);
        assert_eq!(Float16::ZERO, Float16::NEG_ZERO);
        assert!(Float16::NAN.partial_cmp(&Float16::ONE).is_none());
        assert_eq!(Float16::NEG_ZERO.total_cmp(&Float16::ZERO), Ordering::Less);
        assert_eq!(Float16::NAN.total_cmp(&Float16::from_bits(0xFE55)), Ordering::Equal);
        assert_eq!(Float16::INFINITY.total_cmp(&Float16::NAN), Ordering::Less);
        assert_eq!(Float16::NEG_INFINITY.total_cmp(&Float16::MIN), Ordering::Less);
        assert_eq!(h(-2.0).total_cmp(&h(-1.0)), Ordering::Less);
    }

    #[test]
    fn test_first_non_zero_uses_bit_pattern() {
        assert_eq!(Float16::ZERO.first_non_zero(Float16::ONE).to_bits(), 0x3C00);
        assert_eq!(Float16::NEG_ZERO.first_non_zero(Float16::ONE).to_bits(), 0x8000);
        assert!(Float16::NAN.first_non_zero(Float16::ONE).is_nan());
    }

    #[test]
    fn test_ulp() {
        assert_eq!(Float16::ONE.ulp().to_f64(), 2f64.powi(-10));
        assert_eq!(Float16::MAX.ulp().to_f64(), 32.0);
        assert_eq!(Float16::MIN_POSITIVE.ulp().to_f64(), 2f64.powi(-24));
        assert_eq!(Float16::ZERO.ulp().to_f64(), 2f64.powi(-24));
        assert_eq!(h(-1024.0).ulp().to_f64(), 1.0);
        assert!(Float16::NAN.ulp().is_nan());
        assert_eq!(Float16::NEG_INFINITY.ulp().to_bits(), Float16::INFINITY.to_bits());
    }

    #[test]
    fn test_next_up_down() {
        assert_eq!(Float16::ONE.next_up().to_bits(), 0x3C01);
        assert_eq!(Float16::ONE.next_down().to_bits(), 0x3BFF);
        assert_eq!(Float16::MAX.next_up().to_bits(), Float16::INFINITY.to_bits());
        assert_eq!(Float16::NEG_ZERO.next_up().to_bits(), 0x0001);
        assert_eq!(Float16::ZERO.next_down().to_bits(), 0x8001);
        assert_eq!(Float16::from_bits(0x8001).next_up().to_bits(), 0x8000);
        assert_eq!(Float16::NEG_ONE.next_up().to_bits(), 0xBBFF);
        assert_eq!(Float16::INFINITY.next_up().to_bits(), Float16::INFINITY.to_bits());
        assert_eq!(Float16::INFINITY.next_down().to_bits(), Float16::MAX.to_bits());
    }

    #[test]
    fn test_classification() {
        assert!(Float16::from_bits(0x7C01).is_nan());
        assert!(!Float16::INFINITY.is_nan());
        assert!(Float16::NEG_INFINITY.is_infinite());
        assert!(!Float16::NAN.is_finite());
        assert!(Float16::MAX.is_finite());
        assert!(Float16::from_bits(0x0200).is_subnormal());
        assert!(Float16::NEG_ZERO.is_sign_negative());
        assert!(!Float16::NEG_ZERO.is_default());
        assert!(Float16::NEG_ZERO.is_zero());
    }
}
