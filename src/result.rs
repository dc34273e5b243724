//! Derived result types produced by the engine.
//!
//! All of these are plain data: computed on demand from the current record
//! set, never cached, and serializable for downstream reporting layers.

use serde::{Deserialize, Serialize};

/// Aggregated conversion statistics for one experiment arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupSummary {
    /// Arm label.
    pub group: String,
    /// Number of records in the arm. Always > 0.
    pub sample_size: usize,
    /// Number of records with a true outcome. Always <= `sample_size`.
    pub successes: usize,
    /// `successes / sample_size`, in [0, 1].
    pub conversion_rate: f64,
}

/// Wald confidence interval for one arm's conversion rate.
///
/// The bounds come from the normal approximation to the binomial proportion
/// and are deliberately not clamped: with small samples or extreme rates the
/// interval can extend below 0 or above 1. An arm whose rate is exactly 0 or
/// 1 has a standard error of zero and therefore a zero-width interval at the
/// point estimate — a known limitation of the Wald interval, kept as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Arm label.
    pub group: String,
    /// Number of records in the arm.
    pub sample_size: usize,
    /// Number of records with a true outcome.
    pub successes: usize,
    /// Point estimate of the conversion rate.
    pub conversion_rate: f64,
    /// Lower bound of the interval (may be below 0).
    pub lower_bound: f64,
    /// Upper bound of the interval (may exceed 1).
    pub upper_bound: f64,
}

impl ConfidenceInterval {
    /// Width of the interval (`upper_bound - lower_bound`).
    pub fn width(&self) -> f64 {
        self.upper_bound - self.lower_bound
    }
}

/// Outcome of Welch's two-sample t-test between two arms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// Welch t statistic. Positive when the first arm's rate is higher.
    pub statistic: f64,
    /// Welch–Satterthwaite effective degrees of freedom.
    pub degrees_of_freedom: f64,
    /// Two-tailed p-value, in [0, 1].
    pub p_value: f64,
    /// Whether `p_value < alpha` for the alpha the test was run with.
    pub is_significant: bool,
}

/// Bundle of all three analyses over one record set.
///
/// Produced by [`StatsEngine::analyze`](crate::StatsEngine::analyze) with the
/// default confidence level and significance threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Per-arm conversion summaries, in first-seen order.
    pub summaries: Vec<GroupSummary>,
    /// Per-arm confidence intervals, in first-seen order.
    pub intervals: Vec<ConfidenceInterval>,
    /// Hypothesis test between the two requested arms.
    pub test: TestResult,
}
