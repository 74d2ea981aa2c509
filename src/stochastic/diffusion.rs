//! # Diffusion
//!
//! $$
//! dX_t=\theta(\mu-X_t)\,dt+\sigma\,dW_t
//! $$
//!
pub mod ou;
