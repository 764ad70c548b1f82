//! Gradient domain image compositing (seamless cloning).
//!
//! A source patch is pasted into a destination over an arbitrary set of
//! pixels by solving a discrete Poisson equation: the result matches the
//! destination just outside the domain while following a guidance field
//! built from the source (and optionally destination) gradients inside.

pub mod build_info;
pub mod cli;
pub mod compositor;
pub mod domain;
pub mod edges;
pub mod error;
pub mod solver;
pub mod util;

pub use compositor::{seamless_clone, CloneMode};
pub use domain::{Domain, DomainMask, Point};
pub use error::{Error, Result};
pub use solver::PoissonSolver;
