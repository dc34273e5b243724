//! Numeric kernels for the statistical engine.
//!
//! This module provides the special functions and closed-form estimators the
//! engine is built on, as standalone pure functions:
//! - Inverse standard normal CDF (Acklam's rational approximation)
//! - Student-t CDF via the regularized incomplete beta function
//! - Welch's t statistic and Welch–Satterthwaite degrees of freedom
//! - Wald interval for a binomial proportion
//!
//! Kernels assert their preconditions; range/emptiness validation with typed
//! errors happens in the engine before they are called.

mod normal;
mod proportion;
mod student_t;
mod welch;

pub use normal::inverse_standard_normal_cdf;
pub use proportion::{wald_interval, WaldInterval};
pub use student_t::{ln_gamma, regularized_incomplete_beta, student_t_cdf};
pub use welch::{mean, sample_variance, welch_statistic};
