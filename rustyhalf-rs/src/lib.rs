//! # RustyHalf
//!
//! Fixed-width vectors of IEEE-754 binary16 lanes.
//!
//! - **Species**: `Species<N>` tokens for the 64/128/256/512-bit shapes
//!   (`N` = 4, 8, 16, 32 lanes). The lane count is a const parameter, so
//!   combining vectors of different species does not compile.
//! - **HalfVector**: lanewise arithmetic and math, comparisons, tests,
//!   reductions, conversions and memory access, each with a masked form.
//! - **LaneMask** / **LaneShuffle**: per-lane predicates and source
//!   indices.
//! - **Movement**: slice/unslice, compress/expand, gather/scatter and
//!   the rearrange/select family.
//!
//! Bounds violations panic; every panicking entry point has a `try_*`
//! twin returning [`LaneError`].
//!
//! ```
//! use rustyhalf_rs::{Associative, Float16, SPECIES_128};
//!
//! let data: Vec<Float16> = (0..37).map(|i| Float16::from_i32(i)).collect();
//! let mut acc = SPECIES_128.zero();
//! let mut i = 0;
//! while i < SPECIES_128.loop_bound(data.len()) {
//!     acc = acc + SPECIES_128.from_array(&data, i);
//!     i += SPECIES_128.length();
//! }
//! let mut total = acc.reduce_lanes(Associative::Add);
//! for &x in &data[i..] {
//!     total = total + x;
//! }
//! assert_eq!(total.to_i32(), 666);
//! ```

mod checks;
pub mod mask;
mod movement;
pub mod shuffle;
pub mod species;
pub mod vector;

pub use mask::LaneMask;
pub use shuffle::LaneShuffle;
pub use species::{
    Species, VectorShape, ELEMENT_BITS, SPECIES_128, SPECIES_256, SPECIES_512, SPECIES_64,
    SPECIES_MAX,
};
pub use vector::{HalfVector, HalfVector128, HalfVector256, HalfVector512, HalfVector64};

pub use rustyhalf_core::{
    math, tolerance, Associative, Binary, Comparison, Float16, LaneError, Ternary, Test,
    Tolerance, Unary,
};
