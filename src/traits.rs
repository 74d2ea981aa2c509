//! # Traits
//!
//! $$
//! \text{Trait contracts: }\mathcal{A}:(\text{parameters},\ \text{rng})\to\text{samples}
//! $$
//!
use std::fmt::Debug;
use std::iter::Sum;
use std::ops::AddAssign;
use std::ops::SubAssign;

use ndarray::ScalarOperand;
use rand::Rng;
use rayon::prelude::*;

use crate::error::Result;

pub trait FloatExt:
  num_traits::Float
  + num_traits::FromPrimitive
  + num_traits::FloatConst
  + Sum
  + Default
  + Debug
  + Send
  + Sync
  + ScalarOperand
  + AddAssign
  + SubAssign
  + 'static
{
  fn from_usize_(n: usize) -> Self;
  fn from_f64_fast(v: f64) -> Self;
}

pub trait ProcessExt<T: FloatExt>: Send + Sync {
  type Output: Send;

  /// Draw one path using `rng` as the only source of randomness.
  fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Self::Output>;

  fn sample(&self) -> Result<Self::Output> {
    self.sample_with(&mut rand::thread_rng())
  }

  /// `m` independent paths, drawn in parallel. Each worker uses its own thread-local rng.
  fn sample_par(&self, m: usize) -> Result<Vec<Self::Output>> {
    (0..m).into_par_iter().map(|_| self.sample()).collect()
  }
}
