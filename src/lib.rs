//! # ab-oracle
//!
//! Statistical engine for two-arm A/B conversion experiments.
//!
//! This crate answers one question: is the observed difference in a binary
//! outcome (conversion) between two experiment arms statistically significant?
//! It exposes three operations over a set of per-subject records:
//!
//! - Per-group conversion rate aggregation
//! - Wald (normal-approximation) confidence intervals for each group's
//!   conversion rate
//! - Welch's two-sample t-test comparing two arms, with a two-tailed p-value
//!
//! All operations are pure functions of an immutable record snapshot; the
//! engine never mutates its input, performs no I/O, and does no logging.
//! Loading data, rendering reports, and plotting are caller concerns.
//!
//! ## Quick Start
//!
//! ```
//! use ab_oracle::{RecordSet, StatsEngine};
//!
//! let records = RecordSet::from_labeled([
//!     ("control", true), ("control", false), ("control", false),
//!     ("variant", true), ("variant", true), ("variant", false),
//! ]);
//! let engine = StatsEngine::new(records);
//!
//! for summary in engine.conversion_rates().unwrap() {
//!     println!("{}: {:.1}%", summary.group, summary.conversion_rate * 100.0);
//! }
//! ```
//!
//! ## Numerical notes
//!
//! The confidence intervals use the Wald approximation deliberately: bounds
//! can fall outside [0, 1], and a group with a rate of exactly 0 or 1 gets a
//! zero-width interval. Both behaviors are documented rather than corrected
//! (see [`StatsEngine::confidence_intervals`]).
//!
//! The normal quantile and Student-t CDF are implemented in-crate as small,
//! independently tested kernels (see the [`statistics`] module), so the crate
//! has no heavyweight numeric dependencies.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod constants;
mod engine;
mod error;
mod result;
mod types;

// Numeric kernels
pub mod statistics;

// Re-exports for public API
pub use constants::{DEFAULT_ALPHA, DEFAULT_CONFIDENCE};
pub use engine::StatsEngine;
pub use error::AnalysisError;
pub use result::{AnalysisReport, ConfidenceInterval, GroupSummary, TestResult};
pub use types::{Record, RecordSet};
