//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod stats;

pub use stats::*;
