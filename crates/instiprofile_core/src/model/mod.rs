//! Profile record model for the institute identity subsystem.
//!
//! # Responsibility
//! - Define the five owned record kinds and the closed code sets they use.
//! - Own every field-level rule a record must pass before persistence.
//!
//! # Invariants
//! - Every record is identified by a non-nil `RecordId`.
//! - Every record belongs to exactly one account.
//! - Program years are checked against a caller-supplied current year.

use uuid::Uuid;

pub mod address;
pub mod choices;
pub mod contact;
pub mod email;
pub mod message;
pub mod program;
pub mod validation;
pub mod year;

/// Identifier of a stored profile record.
pub type RecordId = Uuid;

/// Identifier of the external account owning a record.
pub type AccountId = Uuid;

/// Identifier of the external application that sends messages.
pub type ApplicationId = Uuid;
