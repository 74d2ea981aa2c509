//! Error type shared by the generators and the estimators.
//!
//! Numerical trouble that the algorithms can absorb (a negative radicand in the incremental
//! fBM construction, a zero-variance segment in R/S analysis, too few lags for the Hurst
//! regression) never reaches the caller; it is logged through `tracing` instead. Everything
//! here is what a caller has to react to.

use num_traits::ToPrimitive;
use thiserror::Error;

/// Errors raised while generating or summarizing a path.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
  /// A parameter is outside the domain the algorithm is defined on.
  #[error("Invalid parameter: {name} = {value}, expected {constraint}")]
  InvalidParameter {
    /// Parameter name
    name: &'static str,
    /// Offending value, as given
    value: String,
    /// Valid range or constraint description
    constraint: &'static str,
  },

  /// The computation cannot produce a usable result for these inputs.
  #[error("Numeric degeneracy: {reason}")]
  NumericDegeneracy {
    /// What broke down
    reason: String,
  },

  /// A non-finite value was produced or received.
  #[error("Non-finite value at index {index}")]
  NonFinite {
    /// Position of the first non-finite value
    index: usize,
  },

  /// Not enough observations for the requested statistic.
  #[error("Insufficient data: need at least {required} points, got {actual}")]
  InsufficientData {
    /// Minimum required data points
    required: usize,
    /// Actual number of data points provided
    actual: usize,
  },
}

pub type Result<T> = std::result::Result<T, Error>;

/// Every path needs a start and an end point.
pub(crate) fn validate_steps(n: usize) -> Result<()> {
  if n < 2 {
    return Err(Error::InvalidParameter {
      name: "steps",
      value: n.to_string(),
      constraint: "at least 2",
    });
  }

  Ok(())
}

/// The fBM kernel is a covariance only for `0 < H < 1`.
pub(crate) fn validate_hurst<T: ToPrimitive>(hurst: T) -> Result<f64> {
  let h = hurst.to_f64().unwrap_or(f64::NAN);
  if !(h > 0.0 && h < 1.0) {
    return Err(Error::InvalidParameter {
      name: "hurst",
      value: h.to_string(),
      constraint: "a value in the open interval (0, 1)",
    });
  }

  Ok(h)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn steps_below_two_are_rejected() {
    assert!(validate_steps(0).is_err());
    assert!(validate_steps(1).is_err());
    assert!(validate_steps(2).is_ok());
  }

  #[test]
  fn hurst_bounds_are_open() {
    assert!(validate_hurst(0.0_f64).is_err());
    assert!(validate_hurst(1.0_f64).is_err());
    assert!(validate_hurst(f64::NAN).is_err());
    assert_eq!(validate_hurst(0.25_f32).unwrap(), 0.25);
  }

  #[test]
  fn messages_name_the_parameter() {
    let err = validate_hurst(1.5_f64).unwrap_err();
    assert_eq!(
      err.to_string(),
      "Invalid parameter: hurst = 1.5, expected a value in the open interval (0, 1)"
    );
  }
}
