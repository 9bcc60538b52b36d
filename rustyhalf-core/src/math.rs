//! Half-precision transcendental functions.
//!
//! Every function widens its binary16 input to binary64, evaluates there and
//! rounds the result once back to binary16. Two evaluators exist:
//!
//! - the fast path (`sin`, `exp`, ...) calls the host math library through
//!   the `f64` inherent methods. This is what lanewise operators compute.
//! - the strict path (`strict_sin`, `strict_exp`, ...) calls the `libm`
//!   crate, a portable fdlibm port whose results do not depend on the
//!   platform.
//!
//! Neither path promises correct rounding. Results are accepted when they
//! equal the fast reference exactly or lie within one ULP of the strict
//! reference (see [`crate::tolerance::matches_math_or_strict`]).
//!
//! The `vh*` slice kernels follow the VML naming convention (`vs` single,
//! `vd` double, `vh` half) and process whole slices element-wise.

use crate::float16::Float16;

/// Widen to binary64 with NaN operands quietened. Host libraries may treat
/// a signalling NaN differently from a quiet one (`pow(sNaN, 0)` is NaN on
/// glibc but 1 everywhere else).
#[inline(always)]
fn widen(x: Float16) -> f64 {
    let v = x.to_f64();
    if v.is_nan() {
        f64::NAN.copysign(v)
    } else {
        v
    }
}

// ============================================================================
// Unary functions
// ============================================================================

macro_rules! unary_math {
    ($(#[$doc:meta])* $name:ident, $strict:ident, $kernel:ident, $fast_fn:path, $libm_fn:path) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(x: Float16) -> Float16 {
            Float16::from_f64($fast_fn(widen(x)))
        }

        /// Strict (fdlibm) reference for the function of the same name.
        #[inline]
        pub fn $strict(x: Float16) -> Float16 {
            Float16::from_f64($libm_fn(widen(x)))
        }

        /// Slice kernel: `out[i] = f(x[i])`.
        pub fn $kernel(x: &[Float16], out: &mut [Float16]) {
            debug_assert_eq!(x.len(), out.len());
            for (o, &v) in out.iter_mut().zip(x.iter()) {
                *o = $name(v);
            }
        }
    };
}

unary_math!(
    /// Sine of an angle in radians.
    sin, strict_sin, vhsin, f64::sin, libm::sin
);
unary_math!(
    /// Cosine of an angle in radians.
    cos, strict_cos, vhcos, f64::cos, libm::cos
);
unary_math!(
    /// Tangent of an angle in radians.
    tan, strict_tan, vhtan, f64::tan, libm::tan
);
unary_math!(
    /// Arc sine, NaN outside `[-1, 1]`.
    asin, strict_asin, vhasin, f64::asin, libm::asin
);
unary_math!(
    /// Arc cosine, NaN outside `[-1, 1]`.
    acos, strict_acos, vhacos, f64::acos, libm::acos
);
unary_math!(atan, strict_atan, vhatan, f64::atan, libm::atan);
unary_math!(
    /// e^x. Overflows to +inf above ~11.09.
    exp, strict_exp, vhexp, f64::exp, libm::exp
);
unary_math!(
    /// e^x - 1, accurate near zero.
    expm1, strict_expm1, vhexpm1, f64::exp_m1, libm::expm1
);
unary_math!(
    /// Natural logarithm.
    log, strict_log, vhlog, f64::ln, libm::log
);
unary_math!(
    /// ln(1 + x), accurate near zero.
    log1p, strict_log1p, vhlog1p, f64::ln_1p, libm::log1p
);
unary_math!(log10, strict_log10, vhlog10, f64::log10, libm::log10);
unary_math!(sinh, strict_sinh, vhsinh, f64::sinh, libm::sinh);
unary_math!(cosh, strict_cosh, vhcosh, f64::cosh, libm::cosh);
unary_math!(tanh, strict_tanh, vhtanh, f64::tanh, libm::tanh);
unary_math!(cbrt, strict_cbrt, vhcbrt, f64::cbrt, libm::cbrt);

// ============================================================================
// Binary functions
// ============================================================================

macro_rules! binary_math {
    ($(#[$doc:meta])* $name:ident, $strict:ident, $fast_fn:path, $libm_fn:path) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(a: Float16, b: Float16) -> Float16 {
            Float16::from_f64($fast_fn(widen(a), widen(b)))
        }

        /// Strict (fdlibm) reference for the function of the same name.
        #[inline]
        pub fn $strict(a: Float16, b: Float16) -> Float16 {
            Float16::from_f64($libm_fn(widen(a), widen(b)))
        }
    };
}

binary_math!(
    /// Angle of the point `(b, a)`, i.e. `atan(a / b)` with quadrant.
    atan2, strict_atan2, f64::atan2, libm::atan2
);
binary_math!(
    /// `a` raised to the power `b`.
    pow, strict_pow, f64::powf, libm::pow
);
binary_math!(
    /// `sqrt(a^2 + b^2)` without intermediate overflow.
    hypot, strict_hypot, f64::hypot, libm::hypot
);

/// Slice kernel for `pow`: `out[i] = a[i] ^ b[i]`.
pub fn vhpow(a: &[Float16], b: &[Float16], out: &mut [Float16]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    for ((o, &x), &y) in out.iter_mut().zip(a.iter()).zip(b.iter()) {
        *o = pow(x, y);
    }
}

/// Slice kernel for `sqrt`. Correctly rounded, unlike the functions above.
pub fn vhsqrt(x: &[Float16], out: &mut [Float16]) {
    debug_assert_eq!(x.len(), out.len());
    for (o, &v) in out.iter_mut().zip(x.iter()) {
        *o = v.sqrt();
    }
}
