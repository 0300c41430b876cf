//! SQLite store for the per-account profile records.
//!
//! # Responsibility
//! - Hold the connection shared by address, program, contact and email
//!   persistence.
//! - Verify the schema those record kinds need before first use.
//!
//! The record-specific trait implementations live next to their traits in
//! `address_repo`, `program_repo`, `contact_repo` and `email_repo`.

use super::address_repo::InstituteAddressRepository;
use super::contact_repo::ContactNumberRepository;
use super::email_repo::SecondaryEmailRepository;
use super::program_repo::ProgramRepository;
use super::{ensure_connection_ready, RepoResult, TableRequirement};
use rusqlite::Connection;

const REQUIRED_TABLES: &[TableRequirement] = &[
    TableRequirement {
        table: "institute_addresses",
        columns: &["id", "account_id", "room", "hostel", "updated_at"],
    },
    TableRequirement {
        table: "programs",
        columns: &[
            "id",
            "account_id",
            "department",
            "join_year",
            "graduation_year",
            "degree",
            "updated_at",
        ],
    },
    TableRequirement {
        table: "contact_numbers",
        columns: &["id", "account_id", "number", "created_at"],
    },
    TableRequirement {
        table: "secondary_emails",
        columns: &["id", "account_id", "email", "created_at"],
    },
];

/// Every profile record contract, as consumed by `ProfileService`.
pub trait ProfileRepository:
    InstituteAddressRepository + ProgramRepository + ContactNumberRepository + SecondaryEmailRepository
{
}

impl<T> ProfileRepository for T where
    T: InstituteAddressRepository
        + ProgramRepository
        + ContactNumberRepository
        + SecondaryEmailRepository
{
}

/// SQLite-backed profile record store.
pub struct SqliteProfileRepository<'conn> {
    pub(super) conn: &'conn Connection,
}

impl<'conn> SqliteProfileRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, REQUIRED_TABLES)?;
        Ok(Self { conn })
    }
}
