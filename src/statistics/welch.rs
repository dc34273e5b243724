//! Welch's two-sample t statistic.
//!
//! Welch's test compares the means of two samples without assuming equal
//! variances. Applied to 0/1 outcome vectors the means are the groups'
//! conversion rates, so the statistic tests for a difference in conversion.
//!
//! The effective degrees of freedom come from the Welch–Satterthwaite
//! equation and are generally fractional.

/// Arithmetic mean of a sample.
///
/// # Panics
///
/// Panics if `data` is empty.
pub fn mean(data: &[f64]) -> f64 {
    assert!(!data.is_empty(), "Cannot compute mean of empty slice");
    data.iter().sum::<f64>() / data.len() as f64
}

/// Unbiased sample variance (denominator `n - 1`).
///
/// # Panics
///
/// Panics if `data` has fewer than two elements.
pub fn sample_variance(data: &[f64]) -> f64 {
    assert!(
        data.len() >= 2,
        "Sample variance requires at least 2 observations, got {}",
        data.len()
    );
    let m = mean(data);
    let sum_sq: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    sum_sq / (data.len() - 1) as f64
}

/// Compute Welch's t statistic and Welch–Satterthwaite degrees of freedom
/// from per-group summary statistics.
///
/// ```text
/// t  = (m_a - m_b) / sqrt(v_a/n_a + v_b/n_b)
/// df = (v_a/n_a + v_b/n_b)^2
///      / [ (v_a/n_a)^2/(n_a - 1) + (v_b/n_b)^2/(n_b - 1) ]
/// ```
///
/// # Arguments
///
/// * `mean_a`, `var_a`, `n_a` - First group's mean, sample variance, size
/// * `mean_b`, `var_b`, `n_b` - Second group's mean, sample variance, size
///
/// # Returns
///
/// The pair `(t, df)`.
///
/// # Panics
///
/// Panics if either group has fewer than two observations or if the pooled
/// standard error is zero (callers reject both cases with typed errors
/// before reaching this kernel).
pub fn welch_statistic(
    mean_a: f64,
    var_a: f64,
    n_a: usize,
    mean_b: f64,
    var_b: f64,
    n_b: usize,
) -> (f64, f64) {
    assert!(n_a >= 2 && n_b >= 2, "Welch's test requires n >= 2 per group");

    let se_a = var_a / n_a as f64;
    let se_b = var_b / n_b as f64;
    let pooled = se_a + se_b;
    assert!(
        pooled > 0.0,
        "Pooled standard error is zero; t statistic undefined"
    );

    let t = (mean_a - mean_b) / pooled.sqrt();
    let df = pooled * pooled
        / (se_a * se_a / (n_a as f64 - 1.0) + se_b * se_b / (n_b as f64 - 1.0));

    (t, df)
}
