//! # Rescaled Range
//!
//! $$
//! \hat H=\operatorname{slope}\Big(\log \ell,\ \log \tfrac1k\textstyle\sum_{s=1}^{k} R_s/S_s\Big)
//! $$
//!
use linreg::linear_regression;
use ndarray::Array1;
use ndarray::ArrayView1;
use ndarray_stats::QuantileExt;
use tracing::debug;
use tracing::warn;

/// Smallest window length used by [`estimate_hurst`].
pub const MIN_LAG: usize = 10;
/// Increment between consecutive window lengths.
pub const LAG_STEP: usize = 5;
/// Largest window length, further capped at a quarter of the sample.
pub const MAX_LAG: usize = 50;
/// Estimate returned when fewer than two windows yield a usable R/S value.
pub const DEFAULT_HURST: f64 = 0.5;
/// The estimate is clamped into this range.
pub const HURST_RANGE: (f64, f64) = (0.1, 0.9);

/// Average rescaled range over the `k = floor(n / lag)` consecutive windows of length `lag`.
///
/// Trailing observations that do not fill a window are ignored. A window with zero standard
/// deviation adds nothing to the sum but still counts in `k`, which biases the statistic
/// towards zero for piecewise-constant data.
pub fn rescaled_range(x: ArrayView1<f64>, lag: usize) -> f64 {
  if lag == 0 {
    return 0.0;
  }
  let k = x.len() / lag;
  if k == 0 {
    return 0.0;
  }

  let mut rs_sum = 0.0;
  let mut cumsum = Array1::<f64>::zeros(lag + 1);
  for segment in x.exact_chunks(lag) {
    let mean = segment.sum() / lag as f64;

    let mut acc = 0.0;
    for (i, v) in segment.iter().enumerate() {
      acc += v - mean;
      cumsum[i + 1] = acc;
    }
    let range = match (cumsum.max(), cumsum.min()) {
      (Ok(max), Ok(min)) => max - min,
      _ => continue,
    };

    let s = (segment.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / lag as f64).sqrt();
    if s > 0.0 {
      rs_sum += range / s;
    }
  }

  rs_sum / k as f64
}

/// Least-squares slope of `y` on `x`, `None` if the fit is undefined.
pub fn ols_slope(x: &[f64], y: &[f64]) -> Option<f64> {
  if x.len() != y.len() || x.len() < 2 {
    return None;
  }
  let fit: Result<(f64, f64), _> = linear_regression(x, y);
  fit.ok().map(|(slope, _)| slope).filter(|slope| slope.is_finite())
}

/// Hurst exponent from the log-log regression of R/S on the window length.
pub fn estimate_hurst(x: ArrayView1<f64>) -> f64 {
  let max_lag = (x.len() / 4).min(MAX_LAG);
  let mut log_lags = Vec::new();
  let mut log_rs = Vec::new();

  for lag in (MIN_LAG..=max_lag).step_by(LAG_STEP) {
    let rs = rescaled_range(x, lag);
    if rs > 0.0 {
      log_lags.push((lag as f64).ln());
      log_rs.push(rs.ln());
    } else {
      debug!(lag, "skipping window length without a positive R/S value");
    }
  }

  if log_lags.len() < 2 {
    warn!(
      n = x.len(),
      windows = log_lags.len(),
      "not enough windows for R/S regression, using H = {DEFAULT_HURST}"
    );
    return DEFAULT_HURST;
  }

  match ols_slope(&log_lags, &log_rs) {
    Some(slope) => slope.clamp(HURST_RANGE.0, HURST_RANGE.1),
    None => {
      warn!("R/S regression is undefined, using H = {DEFAULT_HURST}");
      DEFAULT_HURST
    }
  }
}
