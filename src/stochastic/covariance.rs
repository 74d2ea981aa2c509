//! # fBM Covariance
//!
//! $$
//! C_{ij}=\tfrac12\left(t_i^{2H}+t_j^{2H}-|t_i-t_j|^{2H}\right),\qquad t_i=\frac{i}{n-1}
//! $$
//!
use ndarray::Array1;
use ndarray::Array2;

use crate::error::validate_hurst;
use crate::error::validate_steps;
use crate::error::Result;
use crate::traits::FloatExt;

/// Covariance matrix of fractional Brownian motion sampled at `n` equidistant points of `[0, 1]`.
///
/// Only the lower triangle is evaluated and mirrored, so the result is exactly symmetric and
/// the diagonal is exactly `t_i^{2H}`. Positive semi-definiteness is not checked.
pub fn fbm_covariance<T: FloatExt>(n: usize, hurst: T) -> Result<Array2<T>> {
  validate_steps(n)?;
  validate_hurst(hurst)?;

  let two_h = hurst + hurst;
  let half = T::from_f64_fast(0.5);
  let last = T::from_usize_(n - 1);
  let t = Array1::from_shape_fn(n, |i| T::from_usize_(i) / last);
  let t_pow = t.mapv(|ti| ti.powf(two_h));

  let mut cov = Array2::<T>::zeros((n, n));
  for i in 0..n {
    for j in 0..=i {
      let c = half * (t_pow[i] + t_pow[j] - (t[i] - t[j]).abs().powf(two_h));
      cov[[i, j]] = c;
      cov[[j, i]] = c;
    }
  }

  Ok(cov)
}
