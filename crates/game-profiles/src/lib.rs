//! Game Profiles Domain Library
//!
//! Core domain types and interfaces for the game profile service.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Profile)
//!   - `value_objects/`: Immutable value types (Stats, StatsFields)
//!   - `services/`: Input validation and sanitization
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces (profile source, broadcaster)
//!
//! # Usage
//!
//! ```rust,ignore
//! use game_profiles::domain::{Profile, Stats};
//! use game_profiles::ports::{Broadcaster, ProfileRepository};
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{validation, DomainError, Profile, Stats, StatsFields};
pub use ports::{
    Broadcaster, ExternalProfile, ProfileRepository, ProfileSource, PROFILES_CHANNEL,
    STATS_UPDATED_EVENT,
};
