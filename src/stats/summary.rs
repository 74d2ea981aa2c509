//! # Summary
//!
//! $$
//! \bar x=\frac1n\sum_i x_i,\qquad \hat\sigma^2=\frac1n\sum_i (x_i-\bar x)^2
//! $$
//!
use std::fmt;

use ndarray::ArrayView1;
use tracing::warn;

use crate::error::Error;
use crate::error::Result;
use crate::stats::rs::estimate_hurst;

/// Snapshot statistics of one path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Statistics {
  pub mean: f64,
  /// Population variance (denominator `n`).
  pub variance: f64,
  /// Rescaled-range Hurst estimate, always within `[0.1, 0.9]`.
  pub hurst: f64,
}

impl fmt::Display for Statistics {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "mean = {:.3}, variance = {:.3}, hurst = {:.3}",
      self.mean, self.variance, self.hurst
    )
  }
}

pub fn summarize(x: ArrayView1<f64>) -> Result<Statistics> {
  if x.is_empty() {
    return Err(Error::InsufficientData {
      required: 1,
      actual: 0,
    });
  }
  if let Some(index) = x.iter().position(|v| !v.is_finite()) {
    return Err(Error::NonFinite { index });
  }

  // Moments are taken on x / max|x| so that intermediate sums stay in range.
  let scale = x.fold(0.0_f64, |acc, v| acc.max(v.abs()));
  let (mean, variance) = if scale > 0.0 {
    let unit = x.mapv(|v| v / scale);
    (
      unit.sum() / x.len() as f64 * scale,
      unit.var(0.0) * scale * scale,
    )
  } else {
    (0.0, 0.0)
  };

  if !variance.is_finite() {
    warn!(n = x.len(), scale, "path variance exceeds the f64 range");
    return Err(Error::NumericDegeneracy {
      reason: format!("variance of a path with max |x| = {scale:e} overflows f64"),
    });
  }

  Ok(Statistics {
    mean,
    variance,
    hurst: estimate_hurst(x),
  })
}
