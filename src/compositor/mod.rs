//! Seamless cloning built on the Poisson solver.
//!
//! Every mode pins the solution to the destination just outside the
//! domain and differs only in the guidance field handed to the solver.
//! Channels are solved independently against one factorization.

mod channel;
mod clone;
mod guidance;

pub use channel::*;
pub use clone::*;
pub use guidance::*;
