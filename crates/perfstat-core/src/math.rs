//! Mathematical utilities shared across perfstat
//!
//! Closed-form approximations and numerical integrals that back the
//! [`NumericBackend`](crate::NumericBackend). The exact special functions
//! come from `statrs`; what lives here is either an integral `statrs` does not
//! provide (the studentized range) or a documented coarse fallback.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Normal distribution approximations
    pub mod normal {
        use std::f64::consts::SQRT_2;

        /// Standard normal probabilities and their quantiles.
        const Z_TABLE: [(f64, f64); 9] = [
            (0.5, 0.0),
            (0.8, 0.8416),
            (0.85, 1.0364),
            (0.9, 1.2816),
            (0.95, 1.6449),
            (0.975, 1.96),
            (0.99, 2.3263),
            (0.995, 2.5758),
            (0.999, 3.0902),
        ];

        /// Standard normal CDF via the Abramowitz and Stegun erf approximation
        ///
        /// Absolute error is below 1.5e-7.
        pub fn cdf(x: f64) -> f64 {
            if x < -8.0 {
                return 0.0;
            }
            if x > 8.0 {
                return 1.0;
            }
            0.5 * (1.0 + erf(x / SQRT_2))
        }

        /// Coarse inverse normal CDF
        ///
        /// Snaps `p` to the nearest entry of a table of conventional
        /// probabilities (0.8, 0.9, 0.975, ...). Exact at those entries, off by
        /// up to several tenths elsewhere. Mirrored for `p < 0.5`.
        pub fn ppf_table(p: f64) -> f64 {
            if p <= 0.0 {
                return f64::NEG_INFINITY;
            }
            if p >= 1.0 {
                return f64::INFINITY;
            }
            if p < 0.5 {
                return -ppf_table(1.0 - p);
            }
            let mut best = Z_TABLE[0];
            for entry in Z_TABLE.iter().skip(1) {
                if (entry.0 - p).abs() < (best.0 - p).abs() {
                    best = *entry;
                }
            }
            best.1
        }

        /// Error function approximation
        pub(crate) fn erf(x: f64) -> f64 {
            // Abramowitz and Stegun 7.1.26
            let a1 = 0.254829592;
            let a2 = -0.284496736;
            let a3 = 1.421413741;
            let a4 = -1.453152027;
            let a5 = 1.061405429;
            let p = 0.3275911;

            let sign = if x < 0.0 { -1.0 } else { 1.0 };
            let x = x.abs();

            let t = 1.0 / (1.0 + p * x);
            let y = 1.0 - (((((a5 * t + a4) * t) + a3) * t + a2) * t + a1) * t * (-x * x).exp();

            sign * y
        }

    }

    /// Bucketed p-values used when no special-function evaluation is wanted
    ///
    /// These are step functions. They are only fit for a rough screening
    /// verdict, and the backend tags every value they produce as approximate.
    pub mod coarse {
        /// Upper-tail probability of an F statistic
        pub fn f_upper_tail(f: f64) -> f64 {
            let cdf = if f < 1.0 {
                0.5
            } else if f < 2.0 {
                0.75
            } else if f < 3.0 {
                0.90
            } else if f < 4.0 {
                0.95
            } else if f < 5.0 {
                0.975
            } else {
                0.99
            };
            1.0 - cdf
        }

        /// Two-sided p-value of a t statistic
        pub fn t_two_sided(t: f64) -> f64 {
            let t = t.abs();
            if t < 1.96 {
                0.05
            } else if t < 2.576 {
                0.01
            } else {
                0.001
            }
        }

        /// Upper-tail probability of a studentized range statistic
        pub fn studentized_range_upper_tail(q: f64) -> f64 {
            if q < 2.0 {
                0.5
            } else if q < 3.0 {
                0.1
            } else if q < 4.0 {
                0.01
            } else {
                0.001
            }
        }

    }

    /// Studentized range distribution
    ///
    /// The range of `k` independent standard normals divided by an
    /// independent `sqrt(chi2(df) / df)`. `statrs` has no implementation, so
    /// the CDF is evaluated as the double integral
    ///
    /// ```text
    /// P(Q <= q) = ∫ g_df(s) W(q s) ds,   W(w) = k ∫ φ(z) [Φ(z) - Φ(z - w)]^(k-1) dz
    /// ```
    ///
    /// with composite Simpson rules on both axes. The outer integral is split
    /// where the range CDF saturates. Agreement with published critical-value
    /// tables is better than 1e-4 for `df >= 1`.
    pub mod studentized_range {
        use statrs::function::erf::erfc;
        use statrs::function::gamma::ln_gamma;
        use std::f64::consts::{PI, SQRT_2};

        const INNER_INTERVALS: usize = 160;
        const OUTER_INTERVALS: usize = 200;
        const INNER_LIMIT: f64 = 8.0;
        const INFINITE_DF: f64 = 25_000.0;
        const RANGE_SATURATION: f64 = 8.0;

        fn phi(z: f64) -> f64 {
            (-0.5 * z * z).exp() / (2.0 * PI).sqrt()
        }

        fn big_phi(z: f64) -> f64 {
            0.5 * erfc(-z / SQRT_2)
        }

        fn simpson<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, intervals: usize) -> f64 {
            let h = (b - a) / intervals as f64;
            let mut acc = f(a) + f(b);
            for i in 1..intervals {
                let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
                acc += weight * f(a + i as f64 * h);
            }
            acc * h / 3.0
        }

        /// CDF of the range of `k` standard normals (infinite df)
        pub fn range_cdf(w: f64, k: usize) -> f64 {
            if w <= 0.0 || k < 2 {
                return 0.0;
            }
            let power = (k - 1) as i32;
            let integrand = |z: f64| {
                let band = (big_phi(z) - big_phi(z - w)).max(0.0);
                phi(z) * band.powi(power)
            };
            (k as f64 * simpson(integrand, -INNER_LIMIT, INNER_LIMIT, INNER_INTERVALS)).min(1.0)
        }

        /// CDF of the studentized range with `k` groups and `df` degrees of freedom
        pub fn cdf(q: f64, k: usize, df: f64) -> f64 {
            if q.is_nan() || k < 2 || df.is_nan() || df < 1.0 {
                return f64::NAN;
            }
            if q <= 0.0 {
                return 0.0;
            }
            if q.is_infinite() {
                return 1.0;
            }
            if df > INFINITE_DF {
                return range_cdf(q, k);
            }

            // density of s = sqrt(chi2(df) / df)
            let log_norm = 0.5 * df * df.ln() - ln_gamma(0.5 * df) - (0.5 * df - 1.0) * 2f64.ln();
            let density = |s: f64| (log_norm + (df - 1.0) * s.ln() - 0.5 * df * s * s).exp();

            let sd = 1.0 / (2.0 * df).sqrt();
            let upper_spread = if df < 3.0 { 1.0 } else { sd };
            let lo = (1.0 - 8.0 * sd).max(1e-9);
            let hi = 1.0 + 8.0 * upper_spread;

            // W(q s) is saturated above s = RANGE_SATURATION / q
            let split = (RANGE_SATURATION / q).clamp(lo, hi);
            let weighted_density = |s: f64| density(s) * range_cdf(q * s, k);
            let mut mass = 0.0;
            let mut weighted = 0.0;
            for (a, b) in [(lo, split), (split, hi)] {
                if b > a {
                    mass += simpson(&density, a, b, OUTER_INTERVALS);
                    weighted += simpson(&weighted_density, a, b, OUTER_INTERVALS);
                }
            }
            if mass <= 0.0 {
                return f64::NAN;
            }
            (weighted / mass).clamp(0.0, 1.0)
        }

        /// Upper-tail probability `P(Q > q)`
        pub fn sf(q: f64, k: usize, df: f64) -> f64 {
            1.0 - cdf(q, k, df)
        }

    }
}
