//! Lane operator tokens.
//!
//! Closed enumerations of every operation a lane vector can apply, each with
//! its scalar semantics. Vector code dispatches on these tokens and applies
//! the scalar function lane by lane, so the per-lane meaning of an operator
//! is defined here and nowhere else.

use core::fmt;

use crate::float16::Float16;
use crate::math;

// ============================================================================
// Unary
// ============================================================================

/// Lanewise unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unary {
    Neg,
    Abs,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Exp,
    Expm1,
    Log,
    Log1p,
    Log10,
    Sinh,
    Cosh,
    Tanh,
    Cbrt,
}

impl Unary {
    pub const ALL: [Unary; 18] = [
        Unary::Neg,
        Unary::Abs,
        Unary::Sqrt,
        Unary::Sin,
        Unary::Cos,
        Unary::Tan,
        Unary::Asin,
        Unary::Acos,
        Unary::Atan,
        Unary::Exp,
        Unary::Expm1,
        Unary::Log,
        Unary::Log1p,
        Unary::Log10,
        Unary::Sinh,
        Unary::Cosh,
        Unary::Tanh,
        Unary::Cbrt,
    ];

    /// Scalar semantics of the operator.
    pub fn apply(self, a: Float16) -> Float16 {
        match self {
            Unary::Neg => a.neg(),
            Unary::Abs => a.abs(),
            Unary::Sqrt => a.sqrt(),
            Unary::Sin => math::sin(a),
            Unary::Cos => math::cos(a),
            Unary::Tan => math::tan(a),
            Unary::Asin => math::asin(a),
            Unary::Acos => math::acos(a),
            Unary::Atan => math::atan(a),
            Unary::Exp => math::exp(a),
            Unary::Expm1 => math::expm1(a),
            Unary::Log => math::log(a),
            Unary::Log1p => math::log1p(a),
            Unary::Log10 => math::log10(a),
            Unary::Sinh => math::sinh(a),
            Unary::Cosh => math::cosh(a),
            Unary::Tanh => math::tanh(a),
            Unary::Cbrt => math::cbrt(a),
        }
    }

    /// Strict reference. Identical to [`Unary::apply`] for the exactly
    /// rounded operators.
    pub fn apply_strict(self, a: Float16) -> Float16 {
        match self {
            Unary::Sin => math::strict_sin(a),
            Unary::Cos => math::strict_cos(a),
            Unary::Tan => math::strict_tan(a),
            Unary::Asin => math::strict_asin(a),
            Unary::Acos => math::strict_acos(a),
            Unary::Atan => math::strict_atan(a),
            Unary::Exp => math::strict_exp(a),
            Unary::Expm1 => math::strict_expm1(a),
            Unary::Log => math::strict_log(a),
            Unary::Log1p => math::strict_log1p(a),
            Unary::Log10 => math::strict_log10(a),
            Unary::Sinh => math::strict_sinh(a),
            Unary::Cosh => math::strict_cosh(a),
            Unary::Tanh => math::strict_tanh(a),
            Unary::Cbrt => math::strict_cbrt(a),
            Unary::Neg | Unary::Abs | Unary::Sqrt => self.apply(a),
        }
    }

    /// True for the library functions that are not correctly rounded.
    pub fn is_approximate(self) -> bool {
        !matches!(self, Unary::Neg | Unary::Abs | Unary::Sqrt)
    }

    pub fn name(self) -> &'static str {
        match self {
            Unary::Neg => "NEG",
            Unary::Abs => "ABS",
            Unary::Sqrt => "SQRT",
            Unary::Sin => "SIN",
            Unary::Cos => "COS",
            Unary::Tan => "TAN",
            Unary::Asin => "ASIN",
            Unary::Acos => "ACOS",
            Unary::Atan => "ATAN",
            Unary::Exp => "EXP",
            Unary::Expm1 => "EXPM1",
            Unary::Log => "LOG",
            Unary::Log1p => "LOG1P",
            Unary::Log10 => "LOG10",
            Unary::Sinh => "SINH",
            Unary::Cosh => "COSH",
            Unary::Tanh => "TANH",
            Unary::Cbrt => "CBRT",
        }
    }
}

// ============================================================================
// Binary
// ============================================================================

/// Lanewise binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binary {
    Add,
    Sub,
    Mul,
    Div,
    Min,
    Max,
    /// `a` unless `a` is the all-zero bit pattern, else `b`.
    FirstNonZero,
    Atan2,
    Pow,
    Hypot,
}

impl Binary {
    pub const ALL: [Binary; 10] = [
        Binary::Add,
        Binary::Sub,
        Binary::Mul,
        Binary::Div,
        Binary::Min,
        Binary::Max,
        Binary::FirstNonZero,
        Binary::Atan2,
        Binary::Pow,
        Binary::Hypot,
    ];

    pub fn apply(self, a: Float16, b: Float16) -> Float16 {
        match self {
            Binary::Add => a.add(b),
            Binary::Sub => a.sub(b),
            Binary::Mul => a.mul(b),
            Binary::Div => a.div(b),
            Binary::Min => a.min(b),
            Binary::Max => a.max(b),
            Binary::FirstNonZero => a.first_non_zero(b),
            Binary::Atan2 => math::atan2(a, b),
            Binary::Pow => math::pow(a, b),
            Binary::Hypot => math::hypot(a, b),
        }
    }

    pub fn apply_strict(self, a: Float16, b: Float16) -> Float16 {
        match self {
            Binary::Atan2 => math::strict_atan2(a, b),
            Binary::Pow => math::strict_pow(a, b),
            Binary::Hypot => math::strict_hypot(a, b),
            _ => self.apply(a, b),
        }
    }

    pub fn is_approximate(self) -> bool {
        matches!(self, Binary::Atan2 | Binary::Pow | Binary::Hypot)
    }

    pub fn name(self) -> &'static str {
        match self {
            Binary::Add => "ADD",
            Binary::Sub => "SUB",
            Binary::Mul => "MUL",
            Binary::Div => "DIV",
            Binary::Min => "MIN",
            Binary::Max => "MAX",
            Binary::FirstNonZero => "FIRST_NONZERO",
            Binary::Atan2 => "ATAN2",
            Binary::Pow => "POW",
            Binary::Hypot => "HYPOT",
        }
    }
}

// ============================================================================
// Ternary
// ============================================================================

/// Lanewise ternary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ternary {
    /// `a * b + c` with one rounding.
    Fma,
}

impl Ternary {
    pub fn apply(self, a: Float16, b: Float16, c: Float16) -> Float16 {
        match self {
            Ternary::Fma => a.fma(b, c),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Ternary::Fma => "FMA",
        }
    }
}

// ============================================================================
// Associative (reductions)
// ============================================================================

/// Operators usable for cross-lane reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associative {
    Add,
    Mul,
    Min,
    Max,
    /// Value of the lowest-numbered lane that is not the all-zero pattern.
    FirstNonZero,
}

impl Associative {
    pub const ALL: [Associative; 5] = [
        Associative::Add,
        Associative::Mul,
        Associative::Min,
        Associative::Max,
        Associative::FirstNonZero,
    ];

    /// Result of reducing zero lanes.
    pub const fn identity(self) -> Float16 {
        match self {
            Associative::Add | Associative::FirstNonZero => Float16::ZERO,
            Associative::Mul => Float16::ONE,
            Associative::Min => Float16::INFINITY,
            Associative::Max => Float16::NEG_INFINITY,
        }
    }

    pub fn apply(self, a: Float16, b: Float16) -> Float16 {
        self.as_binary().apply(a, b)
    }

    pub const fn as_binary(self) -> Binary {
        match self {
            Associative::Add => Binary::Add,
            Associative::Mul => Binary::Mul,
            Associative::Min => Binary::Min,
            Associative::Max => Binary::Max,
            Associative::FirstNonZero => Binary::FirstNonZero,
        }
    }

    /// Whether the result may depend on the order lanes are combined in.
    pub const fn is_order_sensitive(self) -> bool {
        matches!(self, Associative::Add | Associative::Mul)
    }

    pub fn name(self) -> &'static str {
        self.as_binary().name()
    }
}

// ============================================================================
// Comparison
// ============================================================================

/// Lanewise comparisons producing a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Comparison {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl Comparison {
    pub const ALL: [Comparison; 6] = [
        Comparison::Eq,
        Comparison::Ne,
        Comparison::Lt,
        Comparison::Le,
        Comparison::Gt,
        Comparison::Ge,
    ];

    /// IEEE comparison: every ordered test is false when either side is
    /// NaN, and `Ne` is true.
    pub fn apply(self, a: Float16, b: Float16) -> bool {
        match self {
            Comparison::Eq => a == b,
            Comparison::Ne => a != b,
            Comparison::Lt => a < b,
            Comparison::Le => a <= b,
            Comparison::Gt => a > b,
            Comparison::Ge => a >= b,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Comparison::Eq => "EQ",
            Comparison::Ne => "NE",
            Comparison::Lt => "LT",
            Comparison::Le => "LE",
            Comparison::Gt => "GT",
            Comparison::Ge => "GE",
        }
    }
}

// ============================================================================
// Test (unary predicates)
// ============================================================================

/// Lanewise classification predicates producing a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Test {
    /// Bit pattern is all zero (+0.0 only).
    IsDefault,
    /// Sign bit is set, including -0.0 and negative NaNs.
    IsNegative,
    IsFinite,
    IsNaN,
    IsInfinite,
}

impl Test {
    pub const ALL: [Test; 5] = [
        Test::IsDefault,
        Test::IsNegative,
        Test::IsFinite,
        Test::IsNaN,
        Test::IsInfinite,
    ];

    pub fn apply(self, a: Float16) -> bool {
        match self {
            Test::IsDefault => a.is_default(),
            Test::IsNegative => a.is_sign_negative(),
            Test::IsFinite => a.is_finite(),
            Test::IsNaN => a.is_nan(),
            Test::IsInfinite => a.is_infinite(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Test::IsDefault => "IS_DEFAULT",
            Test::IsNegative => "IS_NEGATIVE",
            Test::IsFinite => "IS_FINITE",
            Test::IsNaN => "IS_NAN",
            Test::IsInfinite => "IS_INFINITE",
        }
    }
}

macro_rules! impl_display_by_name {
    ($($ty:ident),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.name())
                }
            }
        )*
    };
}

impl_display_by_name!(Unary, Binary, Ternary, Associative, Comparison, Test);
