//! # Stats
//!
//! $$
//! \mathbb E\!\left[R/S\right]_\ell\sim c\,\ell^{H}
//! $$
//!
pub mod rs;
pub mod summary;
