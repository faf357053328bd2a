//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod broadcast;
pub mod postgres;
pub mod steam;

// Re-exports
pub use broadcast::build_broadcaster;
pub use postgres::PgProfileRepository;
pub use steam::SteamHttpClient;
