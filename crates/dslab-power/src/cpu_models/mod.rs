//! A collection of CPU power models.

pub mod asymptotic;
pub mod constant;
pub mod cubic;
pub mod empirical;
pub mod linear;
pub mod mse;
pub mod sqrt;
pub mod square;
