//! This module has things for describing the solve domain,
//! the set of pixels whose values are unknown.
//! A `Domain` gives the canonical enumeration of those pixels,
//! and a `DomainMask` maps image coordinates back into that enumeration.
//! The two must always be built together, any change to a domain
//! means building a new mask.

mod mask;
mod point;
mod set;

pub use mask::*;
pub use point::*;
pub use set::*;
