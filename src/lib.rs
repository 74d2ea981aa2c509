//! # Gaussian Cookbook
//!
//! $$
//! \mathbb E[B_t^H B_s^H]=\tfrac12\left(t^{2H}+s^{2H}-|t-s|^{2H}\right)
//! $$
//!
//! Simulation of Gaussian processes and rescaled-range analysis of the generated paths.
//!
//! ## Modules
//!
//! | Module            | Description                                                                 |
//! |-------------------|-----------------------------------------------------------------------------|
//! | [`config`]        | Process selection and the parameter record consumed by [`generate_process`]. |
//! | [`distributions`] | Box–Muller standard normal source used by every generator.                   |
//! | [`stochastic`]    | Brownian motion, fractional Brownian motion, Brownian bridge and OU paths.   |
//! | [`stats`]         | Mean, population variance and the R/S Hurst estimator.                       |
//! | [`traits`]        | Float and process abstractions shared by the generators.                     |
//!
//! ## Example Usage
//!
//! ```rust
//! use gaussian_cookbook::config::{ProcessKind, ProcessParams};
//! use gaussian_cookbook::{generate_process, summarize};
//!
//! let params = ProcessParams::new(ProcessKind::FractionalBrownian, 0.8, 500);
//! let path = generate_process(&params)?;
//! let stats = summarize(path.view())?;
//! println!("{stats}");
//! ```

pub mod config;
pub mod distributions;
pub mod error;
pub mod stats;
pub mod stochastic;
pub mod traits;

pub use error::Error;
pub use error::Result;
pub use stats::summary::summarize;
pub use stats::summary::Statistics;
pub use stochastic::generate_process;
pub use stochastic::generate_process_with;
