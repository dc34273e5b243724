//! Default analysis parameters.

/// Default confidence level for interval estimation.
///
/// A 95% interval is the conventional choice for reporting conversion-rate
/// uncertainty; callers can pass any value in (0, 1).
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Default significance threshold for the hypothesis test.
///
/// A p-value below this value is reported as significant.
pub const DEFAULT_ALPHA: f64 = 0.05;
