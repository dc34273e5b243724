//! Wald interval for a binomial proportion.
//!
//! The normal approximation to the binomial: for `s` successes in `n` trials,
//! `p = s/n`, `se = sqrt(p(1-p)/n)`, and the interval is `p ± z * se` for a
//! critical value `z`. The bounds are not clamped to [0, 1] and a proportion
//! of exactly 0 or 1 produces a zero-width interval; both are inherent to
//! the Wald form and kept as documented behavior.

/// A Wald interval together with its point estimate and standard error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaldInterval {
    /// Point estimate `successes / trials`.
    pub proportion: f64,
    /// Standard error `sqrt(p(1-p)/n)`.
    pub standard_error: f64,
    /// `proportion - z * standard_error` (may be below 0).
    pub lower_bound: f64,
    /// `proportion + z * standard_error` (may exceed 1).
    pub upper_bound: f64,
}

/// Compute the Wald interval for `successes` out of `trials` at critical
/// value `z`.
///
/// # Arguments
///
/// * `successes` - Number of positive outcomes, `<= trials`
/// * `trials` - Number of observations, > 0
/// * `z` - Standard normal critical value, e.g. 1.959964 for 95%
///
/// # Panics
///
/// Panics if `trials` is zero or `successes > trials` (callers reject empty
/// groups with a typed error before reaching this kernel).
pub fn wald_interval(successes: usize, trials: usize, z: f64) -> WaldInterval {
    assert!(trials > 0, "Wald interval requires at least one trial");
    assert!(
        successes <= trials,
        "successes ({successes}) exceeds trials ({trials})"
    );

    let n = trials as f64;
    let p = successes as f64 / n;
    let se = (p * (1.0 - p) / n).sqrt();
    let margin = z * se;

    WaldInterval {
        proportion: p,
        standard_error: se,
        lower_bound: p - margin,
        upper_bound: p + margin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Z_95: f64 = 1.959_963_985;

    #[test]
    fn test_reference_interval() {
        // p = 0.6, n = 5: se = sqrt(0.6*0.4/5) = 0.2190890
        let ci = wald_interval(3, 5, Z_95);
        assert!((ci.proportion - 0.6).abs() < 1e-12);
        assert!((ci.standard_error - 0.219_089_023).abs() < 1e-9);
        assert!((ci.lower_bound - 0.170_593_405).abs() < 1e-8);
        assert!((ci.upper_bound - 1.029_406_595).abs() < 1e-8);
        // The upper bound exceeding 1 is expected for the Wald form
        assert!(ci.upper_bound > 1.0);
    }

    #[test]
    fn test_zero_width_at_extremes() {
        let all = wald_interval(5, 5, Z_95);
        assert_eq!(all.standard_error, 0.0);
        assert_eq!(all.lower_bound, 1.0);
        assert_eq!(all.upper_bound, 1.0);

        let none = wald_interval(0, 5, Z_95);
        assert_eq!(none.standard_error, 0.0);
        assert_eq!(none.lower_bound, 0.0);
        assert_eq!(none.upper_bound, 0.0);
    }

    #[test]
    fn test_width_shrinks_with_sample_size() {
        let small = wald_interval(6, 10, Z_95);
        let large = wald_interval(600, 1000, Z_95);
        let width = |ci: &WaldInterval| ci.upper_bound - ci.lower_bound;
        assert!(width(&large) < width(&small));
    }

    #[test]
    #[should_panic(expected = "at least one trial")]
    fn test_rejects_zero_trials() {
        wald_interval(0, 0, Z_95);
    }
}
