//! Integration tests for numeric backends

mod common;

use common::*;
use perfstat_core::math::distributions::studentized_range;
use perfstat_core::{NumericBackend, Precision};
use proptest::prelude::*;

#[test]
fn exact_normal_round_trip() {
    let backend = NumericBackend::Exact;
    for p in probability_grid() {
        let z = backend.normal_quantile(p).unwrap();
        let back = backend.normal_cdf(z.value).unwrap();
        assert_eq!(z.precision, Precision::Exact);
        assert_abs_diff_eq!(back.value, p, epsilon = 1e-9);
    }
}

#[test]
fn approximate_cdf_tracks_exact_cdf() {
    for x in [-3.0, -1.5, -0.2, 0.0, 0.7, 1.96, 2.5] {
        let exact = NumericBackend::Exact.normal_cdf(x).unwrap().value;
        let approx = NumericBackend::Approximate.normal_cdf(x).unwrap();
        assert_eq!(approx.precision, Precision::Approximate);
        assert_abs_diff_eq!(approx.value, exact, epsilon = 1e-6);
    }
}

#[test]
fn studentized_range_two_groups_matches_t() {
    // For k = 2 the studentized range is sqrt(2)|T|, so its tail is the
    // two-sided t tail at q / sqrt(2).
    let backend = NumericBackend::Exact;
    for &(q, df) in &[(2.5, 5.0), (3.151, 10.0), (4.0, 30.0)] {
        let via_range = studentized_range::sf(q, 2, df);
        let via_t = backend
            .t_two_sided_p(q / std::f64::consts::SQRT_2, df)
            .unwrap()
            .value;
        assert_abs_diff_eq!(via_range, via_t, epsilon = 1e-4);
    }
}

#[test]
fn studentized_range_tail_shrinks_with_more_df() {
    for (k, df) in tukey_grid() {
        let narrow = studentized_range::sf(3.5, k, df);
        let wide = studentized_range::sf(3.5, k, df * 4.0);
        assert!(wide <= narrow + 1e-9, "k={k} df={df}: {wide} > {narrow}");
    }
}

proptest! {
    #[test]
    fn prop_f_tail_is_probability(f in 0.0f64..50.0, df1 in 1.0f64..10.0, df2 in 2.0f64..200.0) {
        for backend in [NumericBackend::Exact, NumericBackend::Approximate] {
            let p = backend.f_upper_tail(f, df1, df2).unwrap();
            prop_assert!((0.0..=1.0).contains(&p.value));
            prop_assert_eq!(p.precision, backend.precision());
        }
    }

    #[test]
    fn prop_t_p_value_decreases_with_magnitude(t in 0.0f64..6.0, df in 2.0f64..100.0) {
        let backend = NumericBackend::Exact;
        let p_small = backend.t_two_sided_p(t, df).unwrap().value;
        let p_large = backend.t_two_sided_p(t + 0.5, df).unwrap().value;
        prop_assert!(p_large <= p_small + 1e-12);
    }
}
