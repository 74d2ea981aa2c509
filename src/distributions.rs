//! # Distributions
//!
//! $$
//! Z=\sqrt{-2\ln U_1}\,\cos(2\pi U_2),\qquad U_1,U_2\sim\mathcal U[0,1)
//! $$
//!
pub mod normal;

pub use normal::fill_standard_normal;
pub use normal::standard_normal;
pub use normal::BoxMuller;
