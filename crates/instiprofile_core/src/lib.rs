//! Core profile records for the institute identity subsystem.
//! This crate is the single source of truth for record invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::address::InstituteAddress;
pub use model::choices::{Degree, Department, Hostel};
pub use model::contact::ContactNumber;
pub use model::email::{is_valid_email, SecondaryEmail};
pub use model::message::SentMessage;
pub use model::program::Program;
pub use model::validation::RecordValidationError;
pub use model::year::{
    validate_graduation_year, validate_join_year, OutOfRangeError, OutOfRangeKind, YearField,
    FOUNDING_YEAR, MAX_PROGRAM_SPAN_YEARS,
};
pub use model::{AccountId, ApplicationId, RecordId};
pub use repo::account_repo::{AccountRepository, SqliteAccountRepository};
pub use repo::address_repo::InstituteAddressRepository;
pub use repo::contact_repo::ContactNumberRepository;
pub use repo::email_repo::SecondaryEmailRepository;
pub use repo::message_repo::{SentMessageQuery, SentMessageRepository, SqliteSentMessageRepository};
pub use repo::profile_repo::{ProfileRepository, SqliteProfileRepository};
pub use repo::program_repo::ProgramRepository;
pub use repo::{RepoError, RepoResult};
pub use service::message_service::MessageLogService;
pub use service::profile_service::{AddressInput, ProfileService, ProgramInput, UserProfile};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
