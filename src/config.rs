//! # Config
//!
//! Parameters of a single generation request.
//!
use std::fmt;
use std::str::FromStr;

use impl_new_derive::ImplNew;

use crate::error::validate_hurst;
use crate::error::validate_steps;
use crate::error::Error;
use crate::error::Result;
use crate::stochastic::HURST;
use crate::stochastic::N;

/// Process families available through [`crate::generate_process`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ProcessKind {
  #[default]
  StandardBrownian,
  FractionalBrownian,
  Bridge,
  OrnsteinUhlenbeck,
}

impl ProcessKind {
  pub const ALL: [ProcessKind; 4] = [
    ProcessKind::StandardBrownian,
    ProcessKind::FractionalBrownian,
    ProcessKind::Bridge,
    ProcessKind::OrnsteinUhlenbeck,
  ];

  /// Short identifier, also accepted by [`FromStr`].
  pub fn name(&self) -> &'static str {
    match self {
      ProcessKind::StandardBrownian => "brownian",
      ProcessKind::FractionalBrownian => "fractional",
      ProcessKind::Bridge => "bridge",
      ProcessKind::OrnsteinUhlenbeck => "ornstein",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      ProcessKind::StandardBrownian => "Brownian motion",
      ProcessKind::FractionalBrownian => "Fractional Brownian motion",
      ProcessKind::Bridge => "Brownian bridge",
      ProcessKind::OrnsteinUhlenbeck => "Ornstein-Uhlenbeck",
    }
  }

  /// Whether the Hurst exponent influences the generated path.
  pub fn uses_hurst(&self) -> bool {
    matches!(self, ProcessKind::FractionalBrownian)
  }
}

impl fmt::Display for ProcessKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

impl FromStr for ProcessKind {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "brownian" | "standard-brownian" | "bm" => Ok(ProcessKind::StandardBrownian),
      "fractional" | "fractional-brownian" | "fbm" => Ok(ProcessKind::FractionalBrownian),
      "bridge" | "brownian-bridge" => Ok(ProcessKind::Bridge),
      "ornstein" | "ornstein-uhlenbeck" | "ou" => Ok(ProcessKind::OrnsteinUhlenbeck),
      _ => Err(Error::InvalidParameter {
        name: "process",
        value: s.to_string(),
        constraint: "one of brownian, fractional, bridge, ornstein",
      }),
    }
  }
}

/// Immutable description of what to generate.
///
/// `hurst` only matters for [`ProcessKind::FractionalBrownian`] and is not validated for the
/// other variants.
#[derive(ImplNew, Clone, Copy, Debug, PartialEq)]
pub struct ProcessParams {
  pub variant: ProcessKind,
  pub hurst: f64,
  pub steps: usize,
}

impl Default for ProcessParams {
  fn default() -> Self {
    Self::new(ProcessKind::default(), HURST, N)
  }
}

impl ProcessParams {
  pub fn validate(&self) -> Result<()> {
    validate_steps(self.steps)?;
    if self.variant.uses_hurst() {
      validate_hurst(self.hurst)?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_round_trip() {
    for kind in ProcessKind::ALL {
      assert_eq!(kind.to_string().parse::<ProcessKind>().unwrap(), kind);
    }
  }

  #[test]
  fn long_names_are_accepted() {
    assert_eq!(
      "Ornstein-Uhlenbeck".parse::<ProcessKind>().unwrap(),
      ProcessKind::OrnsteinUhlenbeck
    );
    assert_eq!(
      "fractional-brownian".parse::<ProcessKind>().unwrap(),
      ProcessKind::FractionalBrownian
    );
  }

  #[test]
  fn unknown_name_is_rejected() {
    let err = "levy".parse::<ProcessKind>().unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { name: "process", .. }));
  }

  #[test]
  fn defaults_match_the_initial_simulation() {
    let params = ProcessParams::default();
    assert_eq!(params.variant, ProcessKind::StandardBrownian);
    assert_eq!(params.hurst, 0.5);
    assert_eq!(params.steps, 500);
    assert!(params.validate().is_ok());
  }

  #[test]
  fn hurst_is_checked_only_for_fractional() {
    assert!(ProcessParams::new(ProcessKind::Bridge, 0.0, 10).validate().is_ok());
    assert!(ProcessParams::new(ProcessKind::FractionalBrownian, 0.0, 10)
      .validate()
      .is_err());
    assert!(ProcessParams::new(ProcessKind::FractionalBrownian, 0.999, 10)
      .validate()
      .is_ok());
  }
}
