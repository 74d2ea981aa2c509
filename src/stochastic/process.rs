//! # Process
//!
//! $$
//! B_{t_i}=\sum_{k<i}\Delta W_k,\qquad \Delta W_k\sim\mathcal N(0,\Delta t)
//! $$
//!
pub mod bm;
pub mod bridge;
pub mod fbm;
