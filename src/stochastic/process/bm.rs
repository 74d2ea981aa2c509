use ndarray::Array1;
use ndarray_rand::RandomExt;
use rand::Rng;

use crate::distributions::BoxMuller;
use crate::error::validate_steps;
use crate::error::Result;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

/// Standard Brownian motion as a Gaussian random walk started at zero.
pub struct BM<T: FloatExt> {
  /// Number of discrete time points in the generated path.
  pub n: usize,
  /// Total simulation horizon (defaults to `1` if `None`).
  pub t: Option<T>,
}

impl<T: FloatExt> BM<T> {
  pub fn new(n: usize, t: Option<T>) -> Self {
    Self { n, t }
  }

  /// Step size `t / n`; the walk has per-step variance `dt`.
  pub fn dt(&self) -> T {
    self.t.unwrap_or(T::one()) / T::from_usize_(self.n)
  }
}

impl<T: FloatExt> ProcessExt<T> for BM<T> {
  type Output = Array1<T>;

  fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self::Output> {
    validate_steps(self.n)?;

    let sqrt_dt = self.dt().sqrt();
    let z = Array1::<T>::random_using(self.n - 1, BoxMuller, rng);
    let mut bm = Array1::<T>::zeros(self.n);

    for i in 1..self.n {
      bm[i] = bm[i - 1] + z[i - 1] * sqrt_dt;
    }

    Ok(bm)
  }
}
