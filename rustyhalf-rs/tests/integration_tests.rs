use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustyhalf_rs::tolerance::{is_within_one_ulp, matches_math_or_strict};
use rustyhalf_rs::{
    Associative, Binary, Float16, HalfVector, LaneError, LaneMask, LaneShuffle, Tolerance, Unary,
    SPECIES_128, SPECIES_512, SPECIES_64,
};

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn h(v: f64) -> Float16 {
    Float16::from_f64(v)
}

fn random_bits<const N: usize>(rng: &mut StdRng) -> HalfVector<N> {
    HalfVector::from_fn(|_| Float16::from_bits(rng.gen()))
}

fn random_in<const N: usize>(rng: &mut StdRng, lo: f64, hi: f64) -> HalfVector<N> {
    HalfVector::from_fn(|_| h(rng.gen_range(lo..hi)))
}

fn random_mask<const N: usize>(rng: &mut StdRng) -> LaneMask<N> {
    LaneMask::from_fn(|_| rng.gen_bool(0.5))
}

/// Left-to-right fold from the identity, the reference order for
/// reductions.
fn sequential_reduce<const N: usize>(v: HalfVector<N>, op: Associative) -> Float16 {
    v.to_array()
        .iter()
        .fold(op.identity(), |acc, &x| op.apply(acc, x))
}

// ============================================================================
// Per-shape properties
// ============================================================================

macro_rules! shape_properties {
    ($module:ident, $n:literal) => {
        mod $module {
            use super::*;

            const N: usize = $n;

            #[test]
            fn test_load_store_round_trip() {
                let mut rng = seeded_rng();
                let data: Vec<Float16> = (0..3 * N + 1).map(|_| Float16::from_bits(rng.gen())).collect();
                let mut out = vec![Float16::ZERO; data.len()];
                for offset in 0..=data.len() - N {
                    let v = HalfVector::<N>::from_array(&data, offset);
                    v.into_array(&mut out, offset);
                    let got: Vec<u16> = out[offset..offset + N].iter().map(|x| x.to_bits()).collect();
                    let want: Vec<u16> = data[offset..offset + N].iter().map(|x| x.to_bits()).collect();
                    assert_eq!(got, want);
                }
            }

            #[test]
            fn test_masked_identity() {
                let mut rng = seeded_rng();
                let none = LaneMask::<N>::from_values([false; N]);
                let all = LaneMask::<N>::from_values([true; N]);
                for _ in 0..50 {
                    let a = random_bits::<N>(&mut rng);
                    let b = random_bits::<N>(&mut rng);
                    for op in Binary::ALL {
                        assert_eq!(a.lanewise_masked(op, b, none), a, "{op}");
                        assert_eq!(a.lanewise_masked(op, b, all), a.lanewise(op, b), "{op}");
                    }
                    for op in Unary::ALL {
                        assert_eq!(a.lanewise_unary_masked(op, none), a, "{op}");
                    }
                }
            }

            #[test]
            fn test_zip_unzip_round_trip() {
                let mut rng = seeded_rng();
                let a = random_bits::<N>(&mut rng);
                let b = random_bits::<N>(&mut rng);
                let lo = a.rearrange_two(LaneShuffle::make_zip(0), b);
                let hi = a.rearrange_two(LaneShuffle::make_zip(1), b);
                for i in 0..N {
                    let src = if i % 2 == 0 { a } else { b };
                    assert_eq!(lo.lane(i).to_bits(), src.lane(i / 2).to_bits());
                    assert_eq!(hi.lane(i).to_bits(), src.lane(N / 2 + i / 2).to_bits());
                }
                assert_eq!(lo.rearrange_two(LaneShuffle::make_unzip(0), hi), a);
                assert_eq!(lo.rearrange_two(LaneShuffle::make_unzip(1), hi), b);
            }

            #[test]
            fn test_compress_expand() {
                let mut rng = seeded_rng();
                for _ in 0..50 {
                    let v = random_bits::<N>(&mut rng);
                    let m = random_mask::<N>(&mut rng);
                    let c = v.compress(m);
                    for k in m.true_count()..N {
                        assert_eq!(c.lane(k).to_bits(), 0);
                    }
                    assert_eq!(c.expand(m), HalfVector::zero().blend(v, m));
                    assert_eq!(v.compress(m).expand(m).compress(m), c);
                }
            }

            #[test]
            fn test_reduction_identities() {
                let mut rng = seeded_rng();
                let v = random_bits::<N>(&mut rng);
                let none = LaneMask::<N>::from_values([false; N]);
                for op in Associative::ALL {
                    assert_eq!(
                        v.reduce_lanes_masked(op, none).to_bits(),
                        op.identity().to_bits(),
                        "{op}"
                    );
                }
                assert_eq!(v.reduce_lanes_masked(Associative::Min, none), Float16::INFINITY);
                assert_eq!(v.reduce_lanes_masked(Associative::Max, none), Float16::NEG_INFINITY);
            }

            #[test]
            fn test_exact_reductions_match_fold() {
                let mut rng = seeded_rng();
                for _ in 0..100 {
                    let v = random_bits::<N>(&mut rng);
                    for op in [Associative::Min, Associative::Max, Associative::FirstNonZero] {
                        let got = v.reduce_lanes(op);
                        let want = sequential_reduce(v, op);
                        if want.is_nan() {
                            assert!(got.is_nan(), "{op}");
                        } else {
                            assert_eq!(got.to_bits(), want.to_bits(), "{op}");
                        }
                    }
                }
            }

            #[test]
            fn test_slice_unslice() {
                let mut rng = seeded_rng();
                let a = random_bits::<N>(&mut rng);
                let b = random_bits::<N>(&mut rng);
                let zero = HalfVector::<N>::zero();
                for origin in 0..=N {
                    let s = a.slice_with(origin, b);
                    for i in 0..N {
                        let want = if i + origin < N { a.lane(i + origin) } else { b.lane(i + origin - N) };
                        assert_eq!(s.lane(i).to_bits(), want.to_bits());
                    }
                    let lo = s.unslice_with(origin, zero, 0);
                    let hi = s.unslice_with(origin, zero, 1);
                    for i in 0..N {
                        let want = if i >= origin { a.lane(i) } else { b.lane(i) };
                        let got = if i >= origin { lo.lane(i) } else { hi.lane(i) };
                        assert_eq!(got.to_bits(), want.to_bits());
                    }
                }
            }

            #[test]
            fn test_select_from_wraparound() {
                let v1 = HalfVector::<N>::iota();
                let v2 = HalfVector::<N>::iota() + h(1000.0);
                let idx = HalfVector::<N>::broadcast_long((N + 2) as i64);
                assert_eq!(idx.select_from(v1).lane(0), h(2.0));
                assert_eq!(idx.select_from_two(v1, v2).lane(0), h(1002.0));
                let idx = HalfVector::<N>::broadcast_long((2 * N + 1) as i64);
                assert_eq!(idx.select_from_two(v1, v2).lane(N - 1), h(1.0));
            }

            #[test]
            fn test_loop_bound_and_index_in_range() {
                let species = rustyhalf_rs::Species::<N>::new();
                for len in 0..4 * N {
                    let bound = species.loop_bound(len);
                    assert_eq!(bound % N, 0);
                    assert!(bound <= len && len - bound < N);
                    let tail = species.index_in_range(bound as i64, len as i64);
                    assert_eq!(tail.true_count(), len - bound);
                }
            }
        }
    };
}

shape_properties!(shape_64, 4);
shape_properties!(shape_128, 8);
shape_properties!(shape_256, 16);
shape_properties!(shape_512, 32);

// ============================================================================
// Fixed scenarios
// ============================================================================

#[test]
fn test_mask_population() {
    let m = SPECIES_64.load_mask(&[false, true, false, true], 0);
    assert_eq!(m.true_count(), 2);
    assert_eq!(m.first_true(), 1);
    assert_eq!(m.last_true(), 3);
}

#[test]
fn test_select_from_lane_six_of_four() {
    let idx = SPECIES_64.broadcast_long(6);
    let v1 = HalfVector::from_lanes([h(10.0), h(11.0), h(12.0), h(13.0)]);
    let v2 = HalfVector::from_lanes([h(20.0), h(21.0), h(22.0), h(23.0)]);
    assert_eq!(idx.select_from(v1).lane(0), h(12.0));
    assert_eq!(idx.select_from_two(v1, v2).lane(0), h(22.0));
}

#[test]
fn test_loop_bound_with_tail() {
    assert_eq!(SPECIES_128.loop_bound(37), 32);
    let data: Vec<Float16> = (0..37).map(|i| Float16::from_i32(i)).collect();
    let mut out = vec![Float16::ZERO; 37];
    let mut i = 0;
    while i < SPECIES_128.loop_bound(data.len()) {
        let v = SPECIES_128.from_array(&data, i);
        (v * h(2.0)).into_array(&mut out, i);
        i += SPECIES_128.length();
    }
    let m = SPECIES_128.index_in_range(i as i64, data.len() as i64);
    let tail = HalfVector::<8>::from_array_masked(&data, i, m);
    (tail * h(2.0)).into_array_masked(&mut out, i, m);
    for (k, x) in out.iter().enumerate() {
        assert_eq!(x.to_i32(), 2 * k as i32);
    }
}

// ============================================================================
// Tolerance protocol
// ============================================================================

#[test]
fn test_approximate_unary_within_one_ulp_of_strict() {
    let patterns: Vec<Float16> = (0..=u16::MAX).map(Float16::from_bits).collect();
    for op in Unary::ALL.into_iter().filter(|op| op.is_approximate()) {
        for chunk in patterns.chunks_exact(32) {
            let r = HalfVector::<32>::from_array(chunk, 0).lanewise_unary(op);
            for (i, &x) in chunk.iter().enumerate() {
                let strict = op.apply_strict(x);
                assert!(
                    is_within_one_ulp(r.lane(i), strict),
                    "{op}({x:?}) = {:?}, strict {:?}",
                    r.lane(i),
                    strict
                );
                assert!(matches_math_or_strict(r.lane(i), op.apply(x), strict));
            }
        }
    }
}

#[test]
fn test_approximate_binary_within_one_ulp_of_strict() {
    let mut grid = vec![
        Float16::ZERO,
        Float16::NEG_ZERO,
        Float16::INFINITY,
        Float16::NEG_INFINITY,
        Float16::NAN,
        Float16::from_bits(0x7C01),
        Float16::from_bits(0xFE01),
        Float16::MIN_POSITIVE_SUBNORMAL,
        Float16::MAX,
    ];
    for v in [0.5, 1.0, 2.0, 3.0, 2.75, 9.5] {
        grid.push(h(v));
        grid.push(h(-v));
    }
    // Every (x, y) pair of the grid, 32 lanes at a time.
    let pairs: Vec<(Float16, Float16)> = grid
        .iter()
        .flat_map(|&x| grid.iter().map(move |&y| (x, y)))
        .collect();
    for op in Binary::ALL.into_iter().filter(|op| op.is_approximate()) {
        for chunk in pairs.chunks(32) {
            let a = HalfVector::<32>::from_fn(|i| chunk.get(i).map_or(Float16::ONE, |p| p.0));
            let b = HalfVector::<32>::from_fn(|i| chunk.get(i).map_or(Float16::ONE, |p| p.1));
            let r = a.lanewise(op, b);
            for i in 0..chunk.len() {
                let (x, y) = chunk[i];
                let strict = op.apply_strict(x, y);
                assert!(
                    is_within_one_ulp(r.lane(i), strict),
                    "{op}({x:?}, {y:?}) = {:?}, strict {:?}",
                    r.lane(i),
                    strict
                );
            }
        }
    }
}

#[test]
fn test_protocol_rejects_two_ulp_error() {
    let v = SPECIES_128.iota().add(SPECIES_128.broadcast(h(0.5)));
    let r = v.lanewise_unary(Unary::Log);
    for i in 0..8 {
        let x = v.lane(i);
        let (fast, strict) = (Unary::Log.apply(x), Unary::Log.apply_strict(x));
        assert!(matches_math_or_strict(r.lane(i), fast, strict));
        for off in [strict.next_up().next_up(), strict.next_down().next_down()] {
            assert_ne!(off.to_bits(), fast.to_bits());
            assert!(!matches_math_or_strict(off, fast, strict), "log({x:?}) accepted {off:?}");
        }
    }
}

#[test]
fn test_add_reduction_within_tolerance() {
    let tolerance = Tolerance::default();
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let v = random_in::<8>(&mut rng, 0.5, 1.0);
        let got = v.reduce_lanes(Associative::Add);
        let want = sequential_reduce(v, Associative::Add);
        assert!(tolerance.accepts_reduction(Associative::Add, got, want), "{got} vs {want}");
    }
}

#[test]
fn test_mul_reduction_within_tolerance() {
    let tolerance = Tolerance::default();
    let mut rng = seeded_rng();
    for _ in 0..200 {
        let v = random_in::<8>(&mut rng, 0.9, 1.1);
        let m = random_mask::<8>(&mut rng);
        let got = v.reduce_lanes_masked(Associative::Mul, m);
        let selected = HalfVector::<8>::broadcast(Float16::ONE).blend(v, m);
        let want = sequential_reduce(selected, Associative::Mul);
        assert!(tolerance.accepts_reduction(Associative::Mul, got, want), "{got} vs {want}");
    }
}

// ============================================================================
// Error reporting
// ============================================================================

#[test]
fn test_out_of_bounds_errors() {
    let data = vec![Float16::ONE; 10];
    match HalfVector::<8>::try_from_array(&data, 4) {
        Err(LaneError::ArrayOutOfBounds { offset, length, array_len }) => {
            assert_eq!((offset, length, array_len), (4, 8, 10));
        }
        other => panic!("expected ArrayOutOfBounds, got {other:?}"),
    }
    assert!(matches!(
        SPECIES_512.zero().try_lane(32),
        Err(LaneError::LaneIndexOutOfBounds { index: 32, length: 32 })
    ));
    assert!(matches!(
        SPECIES_64.iota().try_slice_with(5, SPECIES_64.zero()),
        Err(LaneError::InvalidSliceOrigin { origin: 5, length: 4 })
    ));
    assert!(matches!(
        SPECIES_64.iota().try_unslice_masked(1, SPECIES_64.zero(), 3, SPECIES_64.mask_all(true)),
        Err(LaneError::InvalidPart { part: 3 })
    ));
    assert!(matches!(
        LaneShuffle::<8>::from_values([0, 1, 2, 3, 4, 5, 6, 9]).try_check_indexes(),
        Err(LaneError::ShuffleIndexOutOfRange { lane: 7, .. })
    ));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_panicking_load() {
    let data = vec![Float16::ONE; 3];
    let _ = HalfVector::<4>::from_array(&data, 0);
}

#[test]
#[should_panic(expected = "bad part number")]
fn test_panicking_zip_part() {
    let _ = LaneShuffle::<4>::make_zip(2);
}
