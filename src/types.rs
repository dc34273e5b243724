//! Input data model: per-subject records and the record set.
//!
//! The engine works on a strongly typed snapshot: each record carries an arm
//! label and a boolean outcome. Coercion from loosely typed tabular sources
//! (numeric 0/1 columns) happens once, at ingestion, via
//! [`RecordSet::from_numeric`] — not at each statistical call.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// One observed subject: an experiment-arm label and a binary outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Experiment arm this subject was assigned to.
    pub group: String,
    /// Whether the tracked event (conversion) occurred.
    pub outcome: bool,
}

impl Record {
    /// Create a record from a label and outcome.
    pub fn new(group: impl Into<String>, outcome: bool) -> Self {
        Record {
            group: group.into(),
            outcome,
        }
    }
}

/// An ordered, immutable collection of [`Record`]s.
///
/// Record order is preserved and determines the first-seen ordering of
/// groups in engine output. The set is never mutated after construction;
/// derived statistics are recomputed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    /// Create a record set from already-typed records.
    pub fn new(records: Vec<Record>) -> Self {
        RecordSet { records }
    }

    /// Create a record set from `(label, outcome)` pairs.
    ///
    /// Infallible: the outcomes are already boolean.
    pub fn from_labeled<S, I>(pairs: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, bool)>,
    {
        RecordSet {
            records: pairs
                .into_iter()
                .map(|(group, outcome)| Record::new(group, outcome))
                .collect(),
        }
    }

    /// Create a record set from `(label, value)` pairs with numeric outcomes.
    ///
    /// This is the coercion boundary for tabular sources where the outcome
    /// column is numeric. A value must be exactly `0.0` or `1.0`; anything
    /// else (including NaN) fails with [`AnalysisError::Schema`]. An empty
    /// group label also fails with `Schema`.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::Schema`] on the first non-conforming pair.
    pub fn from_numeric<S, I>(pairs: I) -> Result<Self, AnalysisError>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        let mut records = Vec::new();
        for (group, value) in pairs {
            let group = group.into();
            if group.is_empty() {
                return Err(AnalysisError::Schema {
                    detail: "empty group label".to_string(),
                });
            }
            let outcome = if value == 0.0 {
                false
            } else if value == 1.0 {
                true
            } else {
                return Err(AnalysisError::Schema {
                    detail: format!("outcome value {value} is not binary (expected 0 or 1)"),
                });
            };
            records.push(Record { group, outcome });
        }
        Ok(RecordSet { records })
    }

    /// Number of records in the set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set contains no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }
}
