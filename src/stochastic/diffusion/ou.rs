use impl_new_derive::ImplNew;
use ndarray::Array1;
use ndarray_rand::RandomExt;
use rand::Rng;

use crate::distributions::BoxMuller;
use crate::error::validate_steps;
use crate::error::Result;
use crate::traits::FloatExt;
use crate::traits::ProcessExt;

/// Ornstein–Uhlenbeck process, Euler–Maruyama discretization with `dt = t / n`.
#[derive(ImplNew)]
pub struct OU<T> {
  /// Mean-reversion speed.
  pub theta: T,
  /// Long-run mean.
  pub mu: T,
  pub sigma: T,
  pub n: usize,
  pub x0: Option<T>,
  pub t: Option<T>,
}

impl<T: FloatExt> OU<T> {
  /// `theta = 1`, `mu = 0`, `sigma = 1`, started at zero on the unit horizon.
  pub fn standard(n: usize) -> Self {
    Self::new(T::one(), T::zero(), T::one(), n, None, None)
  }

  pub fn dt(&self) -> T {
    self.t.unwrap_or(T::one()) / T::from_usize_(self.n)
  }
}

impl<T: FloatExt> ProcessExt<T> for OU<T> {
  type Output = Array1<T>;

  fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self::Output> {
    validate_steps(self.n)?;

    let dt = self.dt();
    let sqrt_dt = dt.sqrt();
    let z = Array1::<T>::random_using(self.n - 1, BoxMuller, rng);

    let mut ou = Array1::<T>::zeros(self.n);
    ou[0] = self.x0.unwrap_or(T::zero());

    for i in 1..self.n {
      ou[i] = ou[i - 1] + self.theta * (self.mu - ou[i - 1]) * dt + self.sigma * sqrt_dt * z[i - 1];
    }

    Ok(ou)
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  use super::OU;
  use crate::stochastic::N;
  use crate::traits::ProcessExt;

  #[test]
  fn ou_length_equals_n() {
    let ou = OU::<f64>::standard(N);

    assert_eq!(ou.sample().unwrap().len(), N);
  }

  #[test]
  fn ou_starts_with_x0() {
    let ou = OU::new(2.0, 1.0, 0.8, N, Some(0.5), Some(1.0));

    assert_eq!(ou.sample().unwrap()[0], 0.5);
  }

  #[test]
  fn ou_without_noise_decays_geometrically() {
    let n = 100;
    let ou = OU::new(1.0, 0.0, 0.0, n, Some(1.0), None);
    let path = ou.sample_with(&mut StdRng::seed_from_u64(0)).unwrap();
    let dt = 1.0 / n as f64;

    for i in 0..n {
      assert_abs_diff_eq!(path[i], (1.0 - dt).powi(i as i32), epsilon = 1e-12);
    }
  }

  #[test]
  fn ou_reverts_towards_mu() {
    // Long horizon, fast reversion: the path forgets x0 and hovers around mu.
    let n = 4000;
    let ou = OU::new(5.0, 3.0, 0.5, n, Some(-10.0), Some(20.0));
    let path = ou.sample_with(&mut StdRng::seed_from_u64(9)).unwrap();
    let tail = path.slice(ndarray::s![n / 2..]);
    let mean = tail.sum() / tail.len() as f64;

    assert!((mean - 3.0).abs() < 0.2, "tail mean too far from mu: {mean}");
  }

  #[test]
  fn ou_rejects_single_point() {
    assert!(OU::<f64>::standard(1).sample().is_err());
  }
}
