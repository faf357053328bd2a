//! Game Profiles API Data Models
//!
//! - Profile: request/response bodies for profiles, stats and imports
//! - Service: index, health and real-time client configuration

mod profile;
mod service;

pub use profile::*;
pub use service::*;
