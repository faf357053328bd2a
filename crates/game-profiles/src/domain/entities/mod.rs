//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Profile: Game player profile with embedded Stats

mod profile;

pub use profile::*;
