//! Discrete Poisson solver over an irregular pixel domain.

mod ordering;
mod poisson;
mod strategy;

pub use ordering::*;
pub use poisson::*;
pub use strategy::*;
