//! # RustyHalf Core
//!
//! Scalar foundation of the rustyhalf lane-vector engine.
//!
//! This crate provides:
//! - **Float16**: bit-exact IEEE-754 binary16 values with correctly rounded
//!   arithmetic, classification, total ordering and ULP helpers.
//! - **Operators**: closed enums (`Unary`, `Binary`, `Ternary`,
//!   `Associative`, `Comparison`, `Test`) carrying the per-lane semantics
//!   that vector operations dispatch on.
//! - **Math**: approximate transcendental functions, with fast (host libm)
//!   and strict (portable fdlibm) evaluators.
//! - **Tolerance**: the acceptance protocol for approximate results and the
//!   reduction error factors.

pub mod error;
pub mod float16;
pub mod math;
pub mod operators;
pub mod tolerance;

pub use error::LaneError;
pub use float16::Float16;
pub use operators::{Associative, Binary, Comparison, Ternary, Test, Unary};
pub use tolerance::{
    is_within_one_ulp, is_within_relative_ulps, matches_math_or_strict, Tolerance,
};
