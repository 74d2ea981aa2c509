//! # Gaussian Process Simulation
//!
//! `stochastic` generates discretized Gaussian paths on the unit horizon.
//!
//! ## Modules
//!
//! | Module          | Description                                                              |
//! |-----------------|--------------------------------------------------------------------------|
//! | [`covariance`]  | Covariance kernel of fractional Brownian motion.                         |
//! | [`diffusion`]   | Mean-reverting diffusions (Ornstein–Uhlenbeck).                          |
//! | [`process`]     | Brownian motion, fractional Brownian motion and the Brownian bridge.     |
//!
//! ## Parallelism
//!
//! All `sample_par()` methods use `rayon` for parallel execution over samples.
//!
//! ## Example Usage
//!
//! ```rust
//! use gaussian_cookbook::stochastic::process::bm::BM;
//! use gaussian_cookbook::traits::ProcessExt;
//!
//! let bm = BM::<f64>::new(1000, None);
//! let path = bm.sample()?;
//! ```

pub mod covariance;
pub mod diffusion;
pub mod process;

use ndarray::Array1;
use rand::Rng;

use crate::config::ProcessKind;
use crate::config::ProcessParams;
use crate::error::Result;
use crate::stochastic::diffusion::ou::OU;
use crate::stochastic::process::bm::BM;
use crate::stochastic::process::bridge::BrownianBridge;
use crate::stochastic::process::fbm::FBM;
use crate::traits::FloatExt;
pub use crate::traits::ProcessExt;

/// Default number of time steps
pub const N: usize = 500;
/// Default Hurst exponent
pub const HURST: f64 = 0.5;

impl FloatExt for f64 {
  fn from_usize_(n: usize) -> Self {
    n as f64
  }

  fn from_f64_fast(v: f64) -> Self {
    v
  }
}

impl FloatExt for f32 {
  fn from_usize_(n: usize) -> Self {
    n as f32
  }

  fn from_f64_fast(v: f64) -> Self {
    v as f32
  }
}

/// Generate one path for `params` with the thread-local rng.
pub fn generate_process(params: &ProcessParams) -> Result<Array1<f64>> {
  generate_process_with(params, &mut rand::thread_rng())
}

/// Generate one path for `params`, drawing all randomness from `rng`.
///
/// The Ornstein–Uhlenbeck variant runs with `theta = 1`, `mu = 0`, `sigma = 1`; use
/// [`OU`] directly for other coefficients.
pub fn generate_process_with<R: Rng + ?Sized>(
  params: &ProcessParams,
  rng: &mut R,
) -> Result<Array1<f64>> {
  params.validate()?;

  let steps = params.steps;
  match params.variant {
    ProcessKind::StandardBrownian => BM::<f64>::new(steps, None).sample_with(rng),
    ProcessKind::FractionalBrownian => FBM::new(params.hurst, steps, None).sample_with(rng),
    ProcessKind::Bridge => BrownianBridge::<f64>::new(steps, None).sample_with(rng),
    ProcessKind::OrnsteinUhlenbeck => OU::<f64>::standard(steps).sample_with(rng),
  }
}

#[cfg(test)]
mod tests {
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  use super::*;
  use crate::error::Error;

  #[test]
  fn every_variant_has_requested_length() {
    let mut rng = StdRng::seed_from_u64(1);
    for kind in ProcessKind::ALL {
      for steps in [2, 3, 40, 257] {
        let params = ProcessParams::new(kind, 0.7, steps);
        let path = generate_process_with(&params, &mut rng).unwrap();
        assert_eq!(path.len(), steps, "{kind} with {steps} steps");
        assert!(path.iter().all(|x| x.is_finite()), "{kind} produced a non-finite value");
      }
    }
  }

  #[test]
  fn same_seed_gives_same_path() {
    let params = ProcessParams::new(ProcessKind::FractionalBrownian, 0.3, 64);
    let a = generate_process_with(&params, &mut StdRng::seed_from_u64(99)).unwrap();
    let b = generate_process_with(&params, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(a, b);
  }

  #[test]
  fn invalid_params_yield_no_path() {
    let short = ProcessParams::new(ProcessKind::Bridge, 0.5, 1);
    assert!(matches!(
      generate_process(&short),
      Err(Error::InvalidParameter { name: "steps", .. })
    ));

    let bad_hurst = ProcessParams::new(ProcessKind::FractionalBrownian, 1.0, 100);
    assert!(matches!(
      generate_process(&bad_hurst),
      Err(Error::InvalidParameter { name: "hurst", .. })
    ));
  }

  #[test]
  fn hurst_is_ignored_outside_fractional_variant() {
    let params = ProcessParams::new(ProcessKind::OrnsteinUhlenbeck, 7.0, 100);
    assert_eq!(generate_process(&params).unwrap().len(), 100);
  }
}
