//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod import_service;
mod profile_service;
mod stats_service;

pub use import_service::ImportService;
pub use profile_service::ProfileService;
pub use stats_service::StatsService;
