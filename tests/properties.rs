//! Property-based round-trip tests (P1-P5) over arbitrary point sequences.

use gorilla::{decode, encode, EncodeOptions, Point, ScaleDecimals};
use proptest::prelude::*;

fn finite_f64() -> impl Strategy<Value = f64> {
    (-1.0e9f64..1.0e9).prop_filter("finite", |v| v.is_finite())
}

proptest! {
    /// P1: every finite-valued input round-trips bit-exactly with metrics off.
    #[test]
    fn p1_lossless_roundtrip(
        ts in prop::collection::vec(-1_000_000i64..1_000_000, 0..200),
        vals in prop::collection::vec(finite_f64(), 0..200),
    ) {
        let n = ts.len().min(vals.len());
        let points: Vec<Point> = ts[..n].iter().zip(&vals[..n]).map(|(&t, &v)| Point::new(t, v)).collect();

        let bytes = encode(&points, EncodeOptions::default()).unwrap();
        let out = decode(&bytes).unwrap();

        prop_assert_eq!(out.len(), points.len());
        for (a, b) in points.iter().zip(out.iter()) {
            prop_assert_eq!(a.ts, b.ts);
            prop_assert_eq!(a.value.to_bits(), b.value.to_bits());
        }
    }

    /// P2: metrics mode with auto scaling stays within 1e-6 for values with <= 6 decimals.
    #[test]
    fn p2_metrics_roundtrip_within_tolerance(
        ts in prop::collection::vec(0i64..1_000_000, 1..100),
        raw in prop::collection::vec(-1_000i64..1_000, 1..100),
    ) {
        let n = ts.len().min(raw.len());
        let points: Vec<Point> = ts[..n].iter().zip(&raw[..n])
            .map(|(&t, &r)| Point::new(t, (r as f64) / 1000.0))
            .collect();

        let opts = EncodeOptions { metrics_mode: true, is_counter: false, scale_decimals: ScaleDecimals::Auto };
        let bytes = encode(&points, opts).unwrap();
        let out = decode(&bytes).unwrap();

        prop_assert_eq!(out.len(), points.len());
        for (a, b) in points.iter().zip(out.iter()) {
            prop_assert_eq!(a.ts, b.ts);
            prop_assert!((a.value - b.value).abs() <= 1e-6);
        }
    }

    /// P3: non-decreasing counters round-trip within 1e-6 under counter mode.
    #[test]
    fn p3_counter_roundtrip_within_tolerance(
        ts in prop::collection::vec(0i64..1_000_000, 2..100),
        increments in prop::collection::vec(0u32..10_000, 2..100),
    ) {
        let n = ts.len().min(increments.len());
        let mut running = 0.0f64;
        let points: Vec<Point> = ts[..n].iter().zip(&increments[..n]).map(|(&t, &inc)| {
            running += inc as f64;
            Point::new(t, running)
        }).collect();

        let opts = EncodeOptions { metrics_mode: true, is_counter: true, scale_decimals: ScaleDecimals::Auto };
        let bytes = encode(&points, opts).unwrap();
        let out = decode(&bytes).unwrap();

        prop_assert_eq!(out.len(), points.len());
        for (a, b) in points.iter().zip(out.iter()) {
            prop_assert_eq!(a.ts, b.ts);
            prop_assert!((a.value - b.value).abs() <= 1e-6);
        }
    }

    /// P4: timestamp varint boundary deltas round-trip exactly, as both a
    /// first delta and a delta-of-delta.
    #[test]
    fn p4_varint_boundaries(delta in prop::sample::select(vec![-2048i64, -2047, -255, -63, 0, 64, 256, 2048, 2049])) {
        let points = vec![Point::new(1_000_000, 1.0), Point::new(1_000_000 + delta, 2.0)];
        let out = decode(&encode(&points, EncodeOptions::default()).unwrap()).unwrap();
        prop_assert_eq!(out[1].ts, points[1].ts);

        let three = vec![
            Point::new(0, 1.0),
            Point::new(1000, 2.0),
            Point::new(2000 + delta, 3.0),
        ];
        let out3 = decode(&encode(&three, EncodeOptions::default()).unwrap()).unwrap();
        prop_assert_eq!(out3[2].ts, three[2].ts);
    }

    /// P5: XOR window boundary cases (identical, sign-only, mantissa-only,
    /// exponent-only differences) all round-trip bit-exactly.
    #[test]
    fn p5_value_xor_boundaries(base in finite_f64()) {
        let sign_flip = -base;
        let mantissa_flip = f64::from_bits(base.to_bits() ^ 1);
        let exponent_flip = base * 2.0;

        for variant in [base, sign_flip, mantissa_flip, exponent_flip] {
            if !variant.is_finite() {
                continue;
            }
            let points = vec![Point::new(0, base), Point::new(1, variant)];
            let out = decode(&encode(&points, EncodeOptions::default()).unwrap()).unwrap();
            prop_assert_eq!(out[1].value.to_bits(), variant.to_bits());
        }
    }
}
