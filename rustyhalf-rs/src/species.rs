//! Vector species: the (shape, element kind) pair that fixes a lane count.
//!
//! The element kind is always binary16, so a species is identified by its
//! shape alone. `Species<N>` is a zero-sized token whose lane count is a
//! const parameter; vectors, masks and shuffles carry the same parameter, so
//! mixing species is a type error rather than a runtime check.

use core::fmt;

use rustyhalf_core::{Float16, LaneError};

use crate::mask::LaneMask;
use crate::shuffle::LaneShuffle;
use crate::vector::HalfVector;

/// Bits per lane.
pub const ELEMENT_BITS: usize = 16;

/// Bit-width class of a vector register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorShape {
    S64Bit,
    S128Bit,
    S256Bit,
    S512Bit,
}

impl VectorShape {
    pub const ALL: [VectorShape; 4] = [
        VectorShape::S64Bit,
        VectorShape::S128Bit,
        VectorShape::S256Bit,
        VectorShape::S512Bit,
    ];

    #[inline]
    pub const fn vector_bit_size(self) -> usize {
        match self {
            VectorShape::S64Bit => 64,
            VectorShape::S128Bit => 128,
            VectorShape::S256Bit => 256,
            VectorShape::S512Bit => 512,
        }
    }

    /// Number of 16-bit lanes in this shape.
    #[inline]
    pub const fn lane_count(self) -> usize {
        self.vector_bit_size() / ELEMENT_BITS
    }

    pub const fn for_lane_count(lanes: usize) -> Option<VectorShape> {
        match lanes {
            4 => Some(VectorShape::S64Bit),
            8 => Some(VectorShape::S128Bit),
            16 => Some(VectorShape::S256Bit),
            32 => Some(VectorShape::S512Bit),
            _ => None,
        }
    }

    pub fn try_for_lane_count(lanes: usize) -> Result<VectorShape, LaneError> {
        Self::for_lane_count(lanes).ok_or(LaneError::UnsupportedLaneCount { lanes })
    }
}

/// Half-precision species with `N` lanes.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Species<const N: usize> {
    _private: (),
}

/// 64-bit shape, 4 lanes.
pub const SPECIES_64: Species<4> = Species::new();
/// 128-bit shape, 8 lanes.
pub const SPECIES_128: Species<8> = Species::new();
/// 256-bit shape, 16 lanes.
pub const SPECIES_256: Species<16> = Species::new();
/// 512-bit shape, 32 lanes.
pub const SPECIES_512: Species<32> = Species::new();
/// Widest supported shape.
pub const SPECIES_MAX: Species<32> = SPECIES_512;

/// Evaluates [`Species::SHAPE`] so that building any lane type with an
/// unsupported `N` is rejected at compile time.
#[inline(always)]
pub(crate) const fn assert_lane_count<const N: usize>() {
    let _shape = Species::<N>::SHAPE;
}

impl<const N: usize> Species<N> {
    /// Shape of this species. Evaluating it for an unsupported `N` fails
    /// at compile time.
    pub const SHAPE: VectorShape = match VectorShape::for_lane_count(N) {
        Some(shape) => shape,
        None => panic!("unsupported lane count: expected 4, 8, 16 or 32"),
    };

    pub const fn new() -> Self {
        let _ = Self::SHAPE;
        Self { _private: () }
    }

    #[inline]
    pub const fn length(self) -> usize {
        N
    }

    #[inline]
    pub const fn shape(self) -> VectorShape {
        Self::SHAPE
    }

    #[inline]
    pub const fn element_size(self) -> usize {
        ELEMENT_BITS
    }

    #[inline]
    pub const fn vector_bit_size(self) -> usize {
        N * ELEMENT_BITS
    }

    #[inline]
    pub const fn vector_byte_size(self) -> usize {
        N * ELEMENT_BITS / 8
    }

    /// Largest multiple of the lane count not exceeding `n`.
    ///
    /// Loops of the form `while i < species.loop_bound(len)` step through
    /// whole vectors and leave the tail to scalar code.
    #[inline]
    pub const fn loop_bound(self, n: usize) -> usize {
        n - n % N
    }

    pub fn zero(self) -> HalfVector<N> {
        HalfVector::zero()
    }

    pub fn broadcast(self, e: Float16) -> HalfVector<N> {
        HalfVector::broadcast(e)
    }

    pub fn broadcast_long(self, e: i64) -> HalfVector<N> {
        HalfVector::broadcast_long(e)
    }

    /// `{0, 1, 2, ..., N-1}`.
    pub fn iota(self) -> HalfVector<N> {
        HalfVector::iota()
    }

    pub fn mask_all(self, value: bool) -> LaneMask<N> {
        LaneMask::from_values([value; N])
    }

    /// Lane `i` is set when `0 <= offset + i < limit`.
    pub fn index_in_range(self, offset: i64, limit: i64) -> LaneMask<N> {
        LaneMask::from_fn(|i| {
            offset
                .checked_add(i as i64)
                .is_some_and(|index| index >= 0 && index < limit)
        })
    }

    #[track_caller]
    pub fn load_mask(self, bits: &[bool], offset: usize) -> LaneMask<N> {
        LaneMask::from_array(bits, offset)
    }

    #[track_caller]
    pub fn from_array(self, a: &[Float16], offset: usize) -> HalfVector<N> {
        HalfVector::from_array(a, offset)
    }

    pub fn iota_shuffle(self, start: i32, step: i32, wrap: bool) -> LaneShuffle<N> {
        LaneShuffle::iota(start, step, wrap)
    }
}

impl<const N: usize> Default for Species<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for Species<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Species[{:?}, {}x f16]", Self::SHAPE, N)
    }
}
