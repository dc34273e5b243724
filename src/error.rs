//! Error types for the statistical engine.
//!
//! Every variant is a locally detected precondition violation. Errors are
//! raised at the point of detection and surfaced to the caller unmodified:
//! no silent defaulting, no NaN propagation, no retries.

use thiserror::Error;

/// Error returned by [`RecordSet`](crate::RecordSet) ingestion and
/// [`StatsEngine`](crate::StatsEngine) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    /// A record could not be coerced into the expected schema.
    ///
    /// Raised at ingestion when an outcome value is not exactly 0 or 1,
    /// or when a group label is empty.
    #[error("schema violation: {detail}")]
    Schema {
        /// Description of the offending value.
        detail: String,
    },

    /// A group has zero observations where a rate or interval was requested.
    #[error("group {group:?} has no observations")]
    EmptyGroup {
        /// The empty group's label.
        group: String,
    },

    /// A requested group label is not present in the data.
    #[error("group {group:?} is not present in the data")]
    UnknownGroup {
        /// The missing label.
        group: String,
    },

    /// A group is too small for a variance-based computation.
    ///
    /// Sample variance needs at least two observations per group.
    #[error("group {group:?} has {samples} observation(s); at least 2 required")]
    InsufficientSample {
        /// The undersized group's label.
        group: String,
        /// Number of observations found.
        samples: usize,
    },

    /// The test statistic is undefined because the pooled standard error
    /// is zero (both groups have zero variance).
    #[error("pooled standard error is zero; test statistic undefined")]
    DegenerateInput,

    /// A caller-supplied parameter is outside its valid range.
    #[error("{name} must lie in (0, 1), got {value}")]
    InvalidParameter {
        /// Parameter name (`"confidence"` or `"alpha"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
