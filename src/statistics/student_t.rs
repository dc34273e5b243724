//! Student-t CDF via the regularized incomplete beta function.
//!
//! For a t statistic with `df` degrees of freedom:
//! ```text
//! x = df / (df + t^2)
//! P(T > |t|) = 0.5 * I_x(df/2, 1/2)
//! ```
//! where `I_x` is the regularized incomplete beta function, evaluated with
//! the Lentz continued-fraction expansion. The log-gamma function uses the
//! Lanczos approximation (g = 7, 9 terms).
//!
//! # Reference
//!
//! Press, W. H. et al. (2007). "Numerical Recipes", 3rd ed., §6.1–6.4.

/// Lanczos coefficients for g = 7.
const LANCZOS: [f64; 8] = [
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_13,
    -176.615_029_162_140_59,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_571_6e-6,
    1.505_632_735_149_311_6e-7,
];

/// ln(2 * pi)
const LN_2PI: f64 = 1.837_877_066_409_345_5;

/// Maximum iterations for the continued-fraction expansion.
const BETACF_MAX_ITER: usize = 200;

/// Convergence tolerance for the continued fraction.
const BETACF_EPS: f64 = 3e-14;

/// Floor to keep denominators away from zero (Lentz's method).
const BETACF_FPMIN: f64 = 1e-300;

/// Natural log of the gamma function, Lanczos approximation.
///
/// Accurate to roughly 15 significant digits for positive arguments.
/// Uses the reflection formula for `x < 0.5`.
///
/// # Panics
///
/// Panics if `x` is zero or a negative integer (gamma pole).
pub fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Reflection: Gamma(x) Gamma(1-x) = pi / sin(pi x)
        let sin_term = (std::f64::consts::PI * x).sin();
        assert!(sin_term != 0.0, "ln_gamma pole at {x}");
        return std::f64::consts::PI.ln() - sin_term.abs().ln() - ln_gamma(1.0 - x);
    }

    let z = x - 1.0;
    let mut acc = 0.999_999_999_999_809_93;
    for (i, c) in LANCZOS.iter().enumerate() {
        acc += c / (z + i as f64 + 1.0);
    }
    let t = z + 7.5;
    0.5 * LN_2PI + (z + 0.5) * t.ln() - t + acc.ln()
}

/// Regularized incomplete beta function `I_x(a, b)`.
///
/// Evaluated via the continued-fraction expansion, using the symmetry
/// `I_x(a, b) = 1 - I_{1-x}(b, a)` to pick the rapidly converging branch.
///
/// # Arguments
///
/// * `x` - Upper limit of integration, in [0, 1]
/// * `a`, `b` - Shape parameters, both > 0
///
/// # Panics
///
/// Panics if `x` is outside [0, 1] or a shape parameter is non-positive.
pub fn regularized_incomplete_beta(x: f64, a: f64, b: f64) -> f64 {
    assert!(
        (0.0..=1.0).contains(&x),
        "Incomplete beta requires x in [0, 1], got {x}"
    );
    assert!(a > 0.0 && b > 0.0, "Beta shape parameters must be positive");

    if x == 0.0 {
        return 0.0;
    }
    if x == 1.0 {
        return 1.0;
    }

    // Prefactor x^a (1-x)^b / (a B(a, b)), computed in log space
    let ln_front =
        ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln();
    let front = ln_front.exp();

    if x < (a + 1.0) / (a + b + 2.0) {
        front * beta_continued_fraction(a, b, x) / a
    } else {
        1.0 - front * beta_continued_fraction(b, a, 1.0 - x) / b
    }
}

/// Continued-fraction expansion for the incomplete beta function,
/// evaluated with the modified Lentz algorithm.
fn beta_continued_fraction(a: f64, b: f64, x: f64) -> f64 {
    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < BETACF_FPMIN {
        d = BETACF_FPMIN;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=BETACF_MAX_ITER {
        let m = m as f64;
        let m2 = 2.0 * m;

        // Even step
        let aa = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 + aa * d;
        if d.abs() < BETACF_FPMIN {
            d = BETACF_FPMIN;
        }
        c = 1.0 + aa / c;
        if c.abs() < BETACF_FPMIN {
            c = BETACF_FPMIN;
        }
        d = 1.0 / d;
        h *= d * c;

        // Odd step
        let aa = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 + aa * d;
        if d.abs() < BETACF_FPMIN {
            d = BETACF_FPMIN;
        }
        c = 1.0 + aa / c;
        if c.abs() < BETACF_FPMIN {
            c = BETACF_FPMIN;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < BETACF_EPS {
            break;
        }
    }

    h
}

/// Cumulative distribution function of Student's t distribution.
///
/// Returns `P(T <= t)` for `T` with `df` degrees of freedom. The two-tailed
/// p-value of an observed statistic `t` is `2 * (1 - student_t_cdf(|t|, df))`.
///
/// # Arguments
///
/// * `t` - Evaluation point (any real)
/// * `df` - Degrees of freedom, > 0 (need not be an integer; Welch's test
///   produces fractional values)
///
/// # Panics
///
/// Panics if `df` is not strictly positive or `t` is NaN.
pub fn student_t_cdf(t: f64, df: f64) -> f64 {
    assert!(df > 0.0, "Degrees of freedom must be positive, got {df}");
    assert!(!t.is_nan(), "t statistic must not be NaN");

    if t == 0.0 {
        return 0.5;
    }

    let x = df / (df + t * t);
    let tail = 0.5 * regularized_incomplete_beta(x, 0.5 * df, 0.5);

    if t > 0.0 {
        1.0 - tail
    } else {
        tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_ln_gamma_integers() {
        // Gamma(n) = (n-1)!
        assert!(ln_gamma(1.0).abs() < 1e-12);
        assert!(ln_gamma(2.0).abs() < 1e-12);
        assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-10);
        assert!((ln_gamma(11.0) - 3_628_800.0_f64.ln()).abs() < 1e-9);
    }

    #[test]
    fn test_ln_gamma_half() {
        // Gamma(1/2) = sqrt(pi)
        let expected = std::f64::consts::PI.sqrt().ln();
        assert!((ln_gamma(0.5) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_incomplete_beta_endpoints() {
        assert_eq!(regularized_incomplete_beta(0.0, 2.0, 3.0), 0.0);
        assert_eq!(regularized_incomplete_beta(1.0, 2.0, 3.0), 1.0);
    }

    #[test]
    fn test_incomplete_beta_symmetric_midpoint() {
        // I_{1/2}(a, a) = 1/2 by symmetry
        for a in [0.5, 1.0, 2.5, 10.0] {
            let v = regularized_incomplete_beta(0.5, a, a);
            assert!((v - 0.5).abs() < TOL, "I_0.5({a},{a}) = {v}");
        }
    }

    #[test]
    fn test_incomplete_beta_uniform_case() {
        // a = b = 1 reduces to the identity: I_x(1, 1) = x
        for x in [0.1, 0.25, 0.5, 0.9] {
            assert!((regularized_incomplete_beta(x, 1.0, 1.0) - x).abs() < TOL);
        }
    }

    #[test]
    fn test_t_cdf_at_zero() {
        assert_eq!(student_t_cdf(0.0, 5.0), 0.5);
        assert_eq!(student_t_cdf(0.0, 1.0), 0.5);
    }

    #[test]
    fn test_t_cdf_known_values() {
        // Reference values from the t distribution
        assert!((student_t_cdf(1.0, 10.0) - 0.829_553_434).abs() < 1e-7);
        assert!((student_t_cdf(2.228, 10.0) - 0.974_994_114).abs() < 1e-7);
        assert!((student_t_cdf(-1.5, 7.0) - 0.088_649_243).abs() < 1e-7);
        assert!((student_t_cdf(0.5, 3.0) - 0.674_276_018).abs() < 1e-7);
        assert!((student_t_cdf(3.0, 25.0) - 0.996_980_910).abs() < 1e-7);
    }

    #[test]
    fn test_t_cdf_fractional_df() {
        // Welch's test yields non-integer df; value verified independently
        assert!(
            (student_t_cdf(1.264_911_064, 7.692_307_692) - 0.878_562_194).abs() < 1e-7
        );
    }

    #[test]
    fn test_t_cdf_complement_symmetry() {
        for (t, df) in [(0.7, 4.0), (2.1, 12.0), (1.3, 7.5)] {
            let upper = student_t_cdf(t, df);
            let lower = student_t_cdf(-t, df);
            assert!((upper + lower - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_t_cdf_extreme_statistic() {
        assert!(student_t_cdf(50.0, 10.0) > 0.999_999);
        assert!(student_t_cdf(-50.0, 10.0) < 1e-6);
    }

    #[test]
    #[should_panic(expected = "Degrees of freedom")]
    fn test_t_cdf_rejects_zero_df() {
        student_t_cdf(1.0, 0.0);
    }
}
