//! # fBM
//!
//! $$
//! \mathbb E[B_t^H B_s^H]=\tfrac12\left(t^{2H}+s^{2H}-|t-s|^{2H}\right)
//! $$
//!
use nalgebra::DMatrix;
use nalgebra::DVector;
use ndarray::Array1;
use ndarray_rand::RandomExt;
use rand::Rng;
use tracing::debug;
use tracing::warn;

use crate::distributions::standard_normal;
use crate::distributions::BoxMuller;
use crate::error::validate_hurst;
use crate::error::validate_steps;
use crate::error::Error;
use crate::error::Result;
use crate::stochastic::covariance::fbm_covariance;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

/// How the correlated path is drawn from the covariance matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FbmMethod {
  /// Row-by-row construction `x_i = s_i + Z_i sqrt(C_ii - s_i^2)` with `s_i = sum_{j<i} C_ij x_j`.
  ///
  /// This is not a Cholesky factorization: values grow quickly with `n` and the radicand is
  /// usually negative, in which case it is clamped to zero. Paths that overflow are rejected
  /// with [`Error::NonFinite`].
  #[default]
  Incremental,
  /// Exact lower Cholesky factor of the covariance of `x_1..x_{n-1}` (`x_0 = 0`).
  Cholesky,
}

pub struct FBM<T: FloatExt> {
  /// Hurst parameter (`0 < H < 1`) controlling roughness and memory.
  pub hurst: T,
  /// Number of discrete time points in the generated path.
  pub n: usize,
  /// Total simulation horizon (defaults to `1` if `None`).
  pub t: Option<T>,
  pub method: FbmMethod,
}

impl<T: FloatExt> FBM<T> {
  pub fn new(hurst: T, n: usize, t: Option<T>) -> Self {
    Self {
      hurst,
      n,
      t,
      method: FbmMethod::default(),
    }
  }

  #[must_use]
  pub fn with_method(mut self, method: FbmMethod) -> Self {
    self.method = method;
    self
  }

  /// Self-similarity factor `t^H` mapping the unit-horizon path to horizon `t`.
  fn scale(&self) -> T {
    self.t.map_or(T::one(), |t| t.powf(self.hurst))
  }

  fn sample_incremental<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Array1<T>> {
    let cov = fbm_covariance(self.n, self.hurst)?;
    let z = Array1::<T>::random_using(self.n, BoxMuller, rng);
    let mut fbm = Array1::<T>::zeros(self.n);
    let mut clamped = 0usize;

    for i in 0..self.n {
      let sum = cov
        .row(i)
        .iter()
        .zip(fbm.iter())
        .take(i)
        .fold(T::zero(), |acc, (&c, &x)| acc + c * x);

      let mut radicand = cov[[i, i]] - sum * sum;
      if radicand < T::zero() {
        radicand = T::zero();
        clamped += 1;
      }

      let x = sum + z[i] * radicand.sqrt();
      if !x.is_finite() {
        warn!(index = i, n = self.n, "incremental fBM construction overflowed");
        return Err(Error::NonFinite { index: i });
      }
      fbm[i] = x;
    }

    if clamped > 0 {
      debug!(clamped, n = self.n, "clamped negative radicands to zero");
    }

    Ok(fbm)
  }

  fn sample_cholesky<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Array1<T>> {
    let hurst = validate_hurst(self.hurst)?;
    let cov = fbm_covariance(self.n, hurst)?;

    // Row and column 0 are identically zero, which no Cholesky factor accepts.
    let m = self.n - 1;
    let inner = DMatrix::<f64>::from_fn(m, m, |i, j| cov[[i + 1, j + 1]]);
    let chol = inner.cholesky().ok_or_else(|| Error::NumericDegeneracy {
      reason: format!("fBM covariance with n = {} and H = {hurst} is not positive definite", self.n),
    })?;

    let z = DVector::<f64>::from_fn(m, |_, _| standard_normal(rng));
    let path = chol.l() * z;

    let mut fbm = Array1::<T>::zeros(self.n);
    for (i, &x) in path.iter().enumerate() {
      fbm[i + 1] = T::from_f64_fast(x);
    }

    Ok(fbm)
  }
}

impl<T: FloatExt> ProcessExt<T> for FBM<T> {
  type Output = Array1<T>;

  fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self::Output> {
    validate_steps(self.n)?;
    validate_hurst(self.hurst)?;

    let fbm = match self.method {
      FbmMethod::Incremental => self.sample_incremental(rng)?,
      FbmMethod::Cholesky => self.sample_cholesky(rng)?,
    };

    let scale = self.scale();
    let fbm = if scale == T::one() { fbm } else { fbm * scale };
    if let Some(index) = fbm.iter().position(|x| !x.is_finite()) {
      return Err(Error::NonFinite { index });
    }

    Ok(fbm)
  }
}
