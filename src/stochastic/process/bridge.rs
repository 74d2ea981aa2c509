//! # Brownian Bridge
//!
//! $$
//! X_{t_i}=B_{t_i}-\frac{i}{n-1}B_{t_{n-1}}
//! $$
//!
use ndarray::Array1;
use rand::Rng;

use crate::error::Result;
use crate::stochastic::process::bm::BM;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

/// Brownian motion pinned to zero at both ends.
pub struct BrownianBridge<T: FloatExt> {
  pub n: usize,
  pub t: Option<T>,
}

impl<T: FloatExt> BrownianBridge<T> {
  pub fn new(n: usize, t: Option<T>) -> Self {
    Self { n, t }
  }
}

impl<T: FloatExt> ProcessExt<T> for BrownianBridge<T> {
  type Output = Array1<T>;

  fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self::Output> {
    // Built from the current fields on every call.
    let bm = BM::new(self.n, self.t).sample_with(rng)?;
    let last = bm[self.n - 1];
    let span = T::from_usize_(self.n - 1);

    // i / (n - 1) is exactly one at the last index, so the endpoint is exactly zero.
    let bridge = Array1::from_shape_fn(self.n, |i| bm[i] - T::from_usize_(i) / span * last);

    Ok(bridge)
  }
}
