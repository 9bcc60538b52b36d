//! Cross-lane movement: slice, unslice, compress, expand, gather, scatter.

use rustyhalf_core::{Float16, LaneError};

use crate::checks::{check_element, check_origin, check_part, check_range, OrPanic};
use crate::mask::LaneMask;
use crate::vector::HalfVector;

// ============================================================================
// Slice / unslice
// ============================================================================

impl<const N: usize> HalfVector<N> {
    /// `N` consecutive lanes of `self ++ other` starting at `origin`.
    #[track_caller]
    pub fn slice_with(self, origin: usize, other: Self) -> Self {
        self.try_slice_with(origin, other).or_panic()
    }

    pub fn try_slice_with(self, origin: usize, other: Self) -> Result<Self, LaneError> {
        check_origin(origin, N)?;
        Ok(Self::from_fn(|i| {
            let j = i + origin;
            if j < N {
                self.lanes[j]
            } else {
                other.lanes[j - N]
            }
        }))
    }

    /// Shift lanes down by `origin`, filling with zero.
    #[track_caller]
    pub fn slice(self, origin: usize) -> Self {
        self.slice_with(origin, Self::zero())
    }

    /// As [`HalfVector::slice_with`], with unset lanes zero.
    #[track_caller]
    pub fn slice_masked(self, origin: usize, other: Self, m: LaneMask<N>) -> Self {
        Self::zero().blend(self.slice_with(origin, other), m)
    }

    pub fn try_slice_masked(
        self,
        origin: usize,
        other: Self,
        m: LaneMask<N>,
    ) -> Result<Self, LaneError> {
        Ok(Self::zero().blend(self.try_slice_with(origin, other)?, m))
    }

    /// Inverse of slice. Conceptually `self` is inserted into `other ++
    /// other` at `origin`; `part` picks which half is returned.
    ///
    /// - part 0: lanes `[origin, N)` come from `self[0..N-origin]`, the
    ///   rest from `other`.
    /// - part 1: lanes `[0, origin)` come from `self[N-origin..N]`, the
    ///   rest from `other`.
    #[track_caller]
    pub fn unslice_with(self, origin: usize, other: Self, part: usize) -> Self {
        self.try_unslice_with(origin, other, part).or_panic()
    }

    pub fn try_unslice_with(
        self,
        origin: usize,
        other: Self,
        part: usize,
    ) -> Result<Self, LaneError> {
        check_origin(origin, N)?;
        check_part(part)?;
        Ok(Self::from_fn(|i| match part {
            0 if i >= origin => self.lanes[i - origin],
            1 if i < origin => self.lanes[i + N - origin],
            _ => other.lanes[i],
        }))
    }

    /// Shift lanes up by `origin`, filling with zero.
    #[track_caller]
    pub fn unslice(self, origin: usize) -> Self {
        self.unslice_with(origin, Self::zero(), 0)
    }

    /// Masked unslice: only lanes of `self` selected by `m` are inserted;
    /// every other destination lane keeps `other`.
    #[track_caller]
    pub fn unslice_masked(self, origin: usize, other: Self, part: usize, m: LaneMask<N>) -> Self {
        self.try_unslice_masked(origin, other, part, m).or_panic()
    }

    pub fn try_unslice_masked(
        self,
        origin: usize,
        other: Self,
        part: usize,
        m: LaneMask<N>,
    ) -> Result<Self, LaneError> {
        check_part(part)?;
        // Rotating `other` by origin makes the unslice below restore it in
        // every lane that m leaves unset.
        let rotated = other.try_slice_with(origin, other)?;
        rotated.blend(self, m).try_unslice_with(origin, other, part)
    }
}

// ============================================================================
// Compress / expand
// ============================================================================

impl<const N: usize> HalfVector<N> {
    /// Set lanes packed to the front in order; the tail is zero.
    pub fn compress(self, m: LaneMask<N>) -> Self {
        let mut lanes = [Float16::ZERO; N];
        for (k, i) in m.true_lanes().into_iter().enumerate() {
            lanes[k] = self.lanes[i];
        }
        Self::from_lanes(lanes)
    }

    /// Leading lanes distributed to the set lanes in order; unset lanes are
    /// zero.
    pub fn expand(self, m: LaneMask<N>) -> Self {
        let mut lanes = [Float16::ZERO; N];
        for (k, i) in m.true_lanes().into_iter().enumerate() {
            lanes[i] = self.lanes[k];
        }
        Self::from_lanes(lanes)
    }
}

// ============================================================================
// Gather / scatter
// ============================================================================

impl<const N: usize> HalfVector<N> {
    /// Lane `i` reads `a[offset + index_map[map_offset + i]]`.
    #[track_caller]
    pub fn gather(a: &[Float16], offset: usize, index_map: &[usize], map_offset: usize) -> Self {
        Self::try_gather(a, offset, index_map, map_offset).or_panic()
    }

    pub fn try_gather(
        a: &[Float16],
        offset: usize,
        index_map: &[usize],
        map_offset: usize,
    ) -> Result<Self, LaneError> {
        Self::try_gather_masked(a, offset, index_map, map_offset, LaneMask::from_values([true; N]))
    }

    /// Masked gather. Unset lanes are zero and never touch `a`.
    #[track_caller]
    pub fn gather_masked(
        a: &[Float16],
        offset: usize,
        index_map: &[usize],
        map_offset: usize,
        m: LaneMask<N>,
    ) -> Self {
        Self::try_gather_masked(a, offset, index_map, map_offset, m).or_panic()
    }

    pub fn try_gather_masked(
        a: &[Float16],
        offset: usize,
        index_map: &[usize],
        map_offset: usize,
        m: LaneMask<N>,
    ) -> Result<Self, LaneError> {
        check_range(map_offset, N, index_map.len())?;
        let mut lanes = [Float16::ZERO; N];
        for i in m.true_lanes() {
            lanes[i] = a[check_element(offset, index_map[map_offset + i], a.len())?];
        }
        Ok(Self::from_lanes(lanes))
    }

    /// Lane `i` is written to `a[offset + index_map[map_offset + i]]` in
    /// ascending lane order, so on duplicate indices the highest lane wins.
    #[track_caller]
    pub fn scatter(self, a: &mut [Float16], offset: usize, index_map: &[usize], map_offset: usize) {
        self.try_scatter(a, offset, index_map, map_offset).or_panic()
    }

    pub fn try_scatter(
        self,
        a: &mut [Float16],
        offset: usize,
        index_map: &[usize],
        map_offset: usize,
    ) -> Result<(), LaneError> {
        self.try_scatter_masked(a, offset, index_map, map_offset, LaneMask::from_values([true; N]))
    }

    #[track_caller]
    pub fn scatter_masked(
        self,
        a: &mut [Float16],
        offset: usize,
        index_map: &[usize],
        map_offset: usize,
        m: LaneMask<N>,
    ) {
        self.try_scatter_masked(a, offset, index_map, map_offset, m)
            .or_panic()
    }

    /// Masked scatter. Every destination is checked before anything is
    /// written, so a failed call leaves `a` untouched.
    pub fn try_scatter_masked(
        self,
        a: &mut [Float16],
        offset: usize,
        index_map: &[usize],
        map_offset: usize,
        m: LaneMask<N>,
    ) -> Result<(), LaneError> {
        check_range(map_offset, N, index_map.len())?;
        let lanes = m.true_lanes();
        let mut targets = [0usize; N];
        for &i in &lanes {
            targets[i] = check_element(offset, index_map[map_offset + i], a.len())?;
        }
        for &i in &lanes {
            a[targets[i]] = self.lanes[i];
        }
        Ok(())
    }
}
