//! ULP tolerance protocol.
//!
//! Two kinds of results are not bit-exact by contract:
//!
//! - approximate library functions (SIN, EXP, POW, ...), accepted when they
//!   equal the fast reference exactly **or** lie within one ULP of the
//!   strict reference;
//! - ADD/MUL reductions, whose lane combination order is unspecified and
//!   which are accepted within `factor * ulp(actual)` of a left-to-right
//!   fold.
//!
//! The factors live in [`Tolerance`], which can be overridden from the
//! environment.

use core::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::float16::Float16;
use crate::operators::Associative;

/// Environment variable overriding [`Tolerance::add_error_factor`].
pub const ADD_ERROR_FACTOR_ENV: &str = "RUSTYHALF_ADD_ERROR_FACTOR";
/// Environment variable overriding [`Tolerance::mul_error_factor`].
pub const MUL_ERROR_FACTOR_ENV: &str = "RUSTYHALF_MUL_ERROR_FACTOR";

// ---------------------------------------------------------------------------
// Checks
// ---------------------------------------------------------------------------

/// `actual` is NaN together with `expected`, or lies in
/// `[expected.next_down(), expected.next_up()]`.
pub fn is_within_one_ulp(actual: Float16, expected: Float16) -> bool {
    match (actual.is_nan(), expected.is_nan()) {
        (true, true) => true,
        (false, false) => {
            actual.total_cmp(&expected.next_down()) != Ordering::Less
                && actual.total_cmp(&expected.next_up()) != Ordering::Greater
        }
        _ => false,
    }
}

/// Acceptance rule for approximate functions: exact agreement with the
/// fast reference, or one-ULP closeness to the strict reference.
pub fn matches_math_or_strict(actual: Float16, math: Float16, strict: Float16) -> bool {
    if actual.total_cmp(&math) == Ordering::Equal {
        return true;
    }
    if is_within_one_ulp(actual, strict) {
        tracing::trace!(
            actual = actual.to_f32(),
            math = math.to_f32(),
            strict = strict.to_f32(),
            "accepted through strict one-ulp fallback"
        );
        return true;
    }
    tracing::debug!(
        actual = actual.to_f32(),
        math = math.to_f32(),
        strict = strict.to_f32(),
        "result outside both math and strict tolerance"
    );
    false
}

/// `actual` equals `expected` (NaN matching NaN, signed zeros matching), or
/// differs by at most `factor * ulp(actual)`.
///
/// The ULP is taken at the computed result, so a result that lands one
/// binade above the reference is judged on the coarser spacing.
pub fn is_within_relative_ulps(actual: Float16, expected: Float16, factor: f64) -> bool {
    if actual.is_nan() || expected.is_nan() {
        return actual.is_nan() && expected.is_nan();
    }
    if actual == expected {
        return true;
    }
    if actual.is_infinite() || expected.is_infinite() {
        return false;
    }
    let delta = (actual.to_f64() - expected.to_f64()).abs();
    delta <= factor * actual.ulp().to_f64()
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Relative error factors for order-sensitive reductions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerance {
    /// ULP multiple allowed for ADD reductions (default: 10).
    pub add_error_factor: f64,
    /// ULP multiple allowed for MUL reductions (default: 50).
    pub mul_error_factor: f64,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            add_error_factor: 10.0,
            mul_error_factor: 50.0,
        }
    }
}

impl Tolerance {
    /// Defaults, overridden by `RUSTYHALF_ADD_ERROR_FACTOR` and
    /// `RUSTYHALF_MUL_ERROR_FACTOR` when they hold positive numbers.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Tolerance::from_env`] with an explicit variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut tolerance = Self::default();
        if let Some(v) = parse_factor(ADD_ERROR_FACTOR_ENV, lookup(ADD_ERROR_FACTOR_ENV)) {
            tolerance.add_error_factor = v;
        }
        if let Some(v) = parse_factor(MUL_ERROR_FACTOR_ENV, lookup(MUL_ERROR_FACTOR_ENV)) {
            tolerance.mul_error_factor = v;
        }
        tolerance
    }

    /// ULP factor for a reduction. Order-insensitive reductions are exact.
    pub fn factor_for(&self, op: Associative) -> f64 {
        match op {
            Associative::Add => self.add_error_factor,
            Associative::Mul => self.mul_error_factor,
            Associative::Min | Associative::Max | Associative::FirstNonZero => 0.0,
        }
    }

    /// Check a reduction result against a left-to-right fold.
    pub fn accepts_reduction(&self, op: Associative, actual: Float16, expected: Float16) -> bool {
        is_within_relative_ulps(actual, expected, self.factor_for(op))
    }
}

fn parse_factor(key: &str, raw: Option<String>) -> Option<f64> {
    let raw = raw?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => {
            tracing::debug!(key, factor = v, "tolerance override applied");
            Some(v)
        }
        _ => {
            tracing::warn!(key, value = %raw, "ignoring invalid tolerance override");
            None
        }
    }
}
