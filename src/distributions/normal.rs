//! # Normal
//!
//! $$
//! f(x)=\frac{1}{\sqrt{2\pi}}\exp\!\left(-\frac{x^2}{2}\right)
//! $$
//!
use std::f64::consts::TAU;

use rand::Rng;
use rand_distr::Distribution;

use crate::traits::FloatExt;

/// Standard normal distribution sampled with the Box–Muller transform.
///
/// Only the cosine branch of the transform is used, so every sample consumes two uniforms.
/// The first uniform is redrawn while it is exactly zero, which keeps the logarithm finite.
#[derive(Clone, Copy, Debug, Default)]
pub struct BoxMuller;

impl<T: FloatExt> Distribution<T> for BoxMuller {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
    let u1 = loop {
      let u: f64 = rng.gen();
      if u > 0.0 {
        break u;
      }
    };
    let u2: f64 = rng.gen();

    T::from_f64_fast((-2.0 * u1.ln()).sqrt() * (TAU * u2).cos())
  }
}

/// One standard normal draw.
#[inline]
pub fn standard_normal<T: FloatExt, R: Rng + ?Sized>(rng: &mut R) -> T {
  BoxMuller.sample(rng)
}

pub fn fill_standard_normal<T: FloatExt, R: Rng + ?Sized>(rng: &mut R, out: &mut [T]) {
  for x in out.iter_mut() {
    *x = BoxMuller.sample(rng);
  }
}

#[cfg(test)]
mod tests {
  use rand::rngs::mock::StepRng;
  use rand::rngs::StdRng;
  use rand::SeedableRng;
  use statrs::distribution::ContinuousCDF;
  use statrs::distribution::Normal;

  use super::*;

  #[test]
  fn moments_match_standard_normal() {
    let mut rng = StdRng::seed_from_u64(7);
    let m = 200_000;
    let xs: Vec<f64> = (0..m).map(|_| standard_normal(&mut rng)).collect();

    let mean = xs.iter().sum::<f64>() / m as f64;
    let var = xs.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / m as f64;

    assert!(mean.abs() < 0.01, "mean too far from 0: {mean}");
    assert!((var - 1.0).abs() < 0.02, "variance too far from 1: {var}");
  }

  #[test]
  fn ks_distance_to_normal_cdf_is_small() {
    let mut rng = StdRng::seed_from_u64(11);
    let m = 20_000;
    let mut xs = vec![0.0_f64; m];
    fill_standard_normal(&mut rng, &mut xs);
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());

    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut ks = 0.0_f64;
    for (i, x) in xs.iter().enumerate() {
      let f = normal.cdf(*x);
      let e1 = ((i + 1) as f64 / m as f64 - f).abs();
      let e2 = (i as f64 / m as f64 - f).abs();
      ks = ks.max(e1.max(e2));
    }

    assert!(ks < 0.02, "KS distance too large: {ks}");
  }

  #[test]
  fn zero_uniform_is_redrawn() {
    // The first word is 0, so the first uniform is exactly 0.
    let mut rng = StepRng::new(0, 1 << 40);
    let x: f64 = standard_normal(&mut rng);
    assert!(x.is_finite());
  }

  #[test]
  fn f32_samples_are_finite() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut xs = vec![0.0_f32; 1024];
    fill_standard_normal(&mut rng, &mut xs);
    assert!(xs.iter().all(|x| x.is_finite()));
  }
}
