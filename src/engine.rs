//! The statistical engine: conversion rates, confidence intervals, and the
//! two-sample hypothesis test over one record snapshot.

use std::collections::HashMap;

use crate::constants::{DEFAULT_ALPHA, DEFAULT_CONFIDENCE};
use crate::error::AnalysisError;
use crate::result::{AnalysisReport, ConfidenceInterval, GroupSummary, TestResult};
use crate::statistics::{
    inverse_standard_normal_cdf, mean, sample_variance, student_t_cdf, wald_interval,
    welch_statistic,
};
use crate::types::RecordSet;

/// Per-group aggregation state used while partitioning records.
struct GroupAccumulator {
    group: String,
    sample_size: usize,
    successes: usize,
}

/// Statistical engine over an immutable [`RecordSet`] snapshot.
///
/// Every operation is a pure function of the snapshot plus its own
/// parameters: no caching, no mutation, no I/O. The engine is `Send + Sync`,
/// so one instance can serve concurrent callers.
///
/// Groups appear in output sequences in first-seen order, i.e. the order in
/// which their labels first occur in the record set.
#[derive(Debug, Clone)]
pub struct StatsEngine {
    records: RecordSet,
}

impl StatsEngine {
    /// Create an engine over the given record snapshot.
    pub fn new(records: RecordSet) -> Self {
        StatsEngine { records }
    }

    /// The underlying record snapshot.
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// Aggregate the records into one [`GroupSummary`] per distinct group.
    ///
    /// Groups are returned in first-seen order. The sum of the returned
    /// sample sizes always equals the total record count.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::EmptyGroup`] if a partition has zero records. This
    /// cannot occur for partitions built here (a group exists only because a
    /// record carries its label) but is guarded rather than assumed.
    pub fn conversion_rates(&self) -> Result<Vec<GroupSummary>, AnalysisError> {
        self.partition()?
            .into_iter()
            .map(|acc| {
                Ok(GroupSummary {
                    conversion_rate: acc.successes as f64 / acc.sample_size as f64,
                    group: acc.group,
                    sample_size: acc.sample_size,
                    successes: acc.successes,
                })
            })
            .collect()
    }

    /// Compute a Wald confidence interval for each group's conversion rate.
    ///
    /// Groups are returned in first-seen order. The bounds use the normal
    /// approximation to the binomial and are not clamped to [0, 1]; with
    /// small samples the interval can extend past either end. A group whose
    /// rate is exactly 0 or 1 gets a zero-width interval at the point
    /// estimate. Both are known limitations of the Wald interval, kept
    /// deliberately (a Wilson score interval would behave better but would
    /// change reported numbers).
    ///
    /// # Arguments
    ///
    /// * `confidence` - Confidence level in (0, 1), conventionally
    ///   [`DEFAULT_CONFIDENCE`]
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::InvalidParameter`] if `confidence` is outside (0, 1)
    /// - [`AnalysisError::EmptyGroup`] if a partition has zero records
    pub fn confidence_intervals(
        &self,
        confidence: f64,
    ) -> Result<Vec<ConfidenceInterval>, AnalysisError> {
        if !(confidence > 0.0 && confidence < 1.0) {
            return Err(AnalysisError::InvalidParameter {
                name: "confidence",
                value: confidence,
            });
        }

        let z = inverse_standard_normal_cdf((1.0 + confidence) / 2.0);

        self.partition()?
            .into_iter()
            .map(|acc| {
                let wald = wald_interval(acc.successes, acc.sample_size, z);
                Ok(ConfidenceInterval {
                    group: acc.group,
                    sample_size: acc.sample_size,
                    successes: acc.successes,
                    conversion_rate: wald.proportion,
                    lower_bound: wald.lower_bound,
                    upper_bound: wald.upper_bound,
                })
            })
            .collect()
    }

    /// Run Welch's two-sample t-test between the arms `label_a` and
    /// `label_b`.
    ///
    /// The statistic is positive when `label_a`'s conversion rate is higher;
    /// swapping the labels negates it and leaves the p-value unchanged. The
    /// p-value is two-tailed. Arms other than the two named are ignored.
    ///
    /// # Arguments
    ///
    /// * `label_a`, `label_b` - The two arms to compare
    /// * `alpha` - Significance threshold in (0, 1), conventionally
    ///   [`DEFAULT_ALPHA`]
    ///
    /// # Errors
    ///
    /// - [`AnalysisError::InvalidParameter`] if `alpha` is outside (0, 1)
    /// - [`AnalysisError::UnknownGroup`] if either label has no records
    /// - [`AnalysisError::InsufficientSample`] if either arm has fewer than
    ///   two records (sample variance undefined)
    /// - [`AnalysisError::DegenerateInput`] if both arms have zero variance,
    ///   leaving the statistic undefined
    pub fn hypothesis_test(
        &self,
        label_a: &str,
        label_b: &str,
        alpha: f64,
    ) -> Result<TestResult, AnalysisError> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(AnalysisError::InvalidParameter {
                name: "alpha",
                value: alpha,
            });
        }

        let outcomes_a = self.outcome_vector(label_a)?;
        let outcomes_b = self.outcome_vector(label_b)?;

        for (label, outcomes) in [(label_a, &outcomes_a), (label_b, &outcomes_b)] {
            if outcomes.len() < 2 {
                return Err(AnalysisError::InsufficientSample {
                    group: label.to_string(),
                    samples: outcomes.len(),
                });
            }
        }

        let var_a = sample_variance(&outcomes_a);
        let var_b = sample_variance(&outcomes_b);
        if var_a == 0.0 && var_b == 0.0 {
            return Err(AnalysisError::DegenerateInput);
        }

        let mean_a = mean(&outcomes_a);
        let mean_b = mean(&outcomes_b);

        let (statistic, degrees_of_freedom) = welch_statistic(
            mean_a,
            var_a,
            outcomes_a.len(),
            mean_b,
            var_b,
            outcomes_b.len(),
        );

        let p_value =
            (2.0 * (1.0 - student_t_cdf(statistic.abs(), degrees_of_freedom))).clamp(0.0, 1.0);

        Ok(TestResult {
            statistic,
            degrees_of_freedom,
            p_value,
            is_significant: p_value < alpha,
        })
    }

    /// Run all three analyses with the default confidence level and
    /// significance threshold, bundled into one [`AnalysisReport`].
    ///
    /// # Errors
    ///
    /// Propagates the first error from any of the underlying operations.
    pub fn analyze(&self, label_a: &str, label_b: &str) -> Result<AnalysisReport, AnalysisError> {
        Ok(AnalysisReport {
            summaries: self.conversion_rates()?,
            intervals: self.confidence_intervals(DEFAULT_CONFIDENCE)?,
            test: self.hypothesis_test(label_a, label_b, DEFAULT_ALPHA)?,
        })
    }

    /// Partition records by group label, preserving first-seen order.
    fn partition(&self) -> Result<Vec<GroupAccumulator>, AnalysisError> {
        let mut order: Vec<GroupAccumulator> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for record in self.records.records() {
            let idx = match index.get(record.group.as_str()) {
                Some(&idx) => idx,
                None => {
                    index.insert(record.group.as_str(), order.len());
                    order.push(GroupAccumulator {
                        group: record.group.clone(),
                        sample_size: 0,
                        successes: 0,
                    });
                    order.len() - 1
                }
            };
            order[idx].sample_size += 1;
            if record.outcome {
                order[idx].successes += 1;
            }
        }

        for acc in &order {
            if acc.sample_size == 0 {
                return Err(AnalysisError::EmptyGroup {
                    group: acc.group.clone(),
                });
            }
        }

        Ok(order)
    }

    /// Collect one arm's outcomes as a 0/1 vector.
    fn outcome_vector(&self, label: &str) -> Result<Vec<f64>, AnalysisError> {
        let outcomes: Vec<f64> = self
            .records
            .records()
            .iter()
            .filter(|r| r.group == label)
            .map(|r| if r.outcome { 1.0 } else { 0.0 })
            .collect();

        if outcomes.is_empty() {
            return Err(AnalysisError::UnknownGroup {
                group: label.to_string(),
            });
        }
        Ok(outcomes)
    }
}
