//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod profile_repository;

pub use profile_repository::*;
