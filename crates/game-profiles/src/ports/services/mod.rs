//! Service Ports
//!
//! Abstract interfaces for external services.

mod broadcaster;
mod profile_source;

pub use broadcaster::*;
pub use profile_source::*;
