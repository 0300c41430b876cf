//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define per-record data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes run record validation before any SQL mutation.
//! - Read paths reject rows whose codes or identifiers cannot be decoded.
//! - Constraint violations surface as semantic errors (`AlreadyExists`,
//!   `MissingOwner`) instead of raw SQLite failures.

use crate::db::migrations::{current_version, latest_version};
use crate::db::DbError;
use crate::model::validation::RecordValidationError;
use crate::model::AccountId;
use rusqlite::{ffi, Connection, ErrorCode};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod account_repo;
pub mod address_repo;
pub mod contact_repo;
pub mod email_repo;
pub mod message_repo;
pub mod profile_repo;
pub mod program_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Error for profile persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(RecordValidationError),
    Db(DbError),
    NotFound {
        entity: &'static str,
        id: Uuid,
    },
    /// A one-to-one record already exists for this account.
    AlreadyExists {
        entity: &'static str,
        account_id: AccountId,
    },
    /// A record with this primary key is already stored.
    DuplicateId {
        entity: &'static str,
        id: Uuid,
    },
    /// The referenced account or application is not registered.
    MissingOwner(&'static str),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::AlreadyExists { entity, account_id } => {
                write!(f, "{entity} already exists for account {account_id}")
            }
            Self::DuplicateId { entity, id } => write!(f, "{entity} id already in use: {id}"),
            Self::MissingOwner(entity) => {
                write!(f, "{entity} references an unregistered account or application")
            }
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version is {actual_version}; expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "required table `{table}` is missing"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Table shape a repository depends on.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TableRequirement {
    pub table: &'static str,
    pub columns: &'static [&'static str],
}

/// Verifies that `conn` is migrated and exposes every required table/column.
pub(crate) fn ensure_connection_ready(
    conn: &Connection,
    requirements: &[TableRequirement],
) -> RepoResult<()> {
    let actual_version = current_version(conn)?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for requirement in requirements {
        let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
        let columns = stmt
            .query_map([requirement.table], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;

        if columns.is_empty() {
            return Err(RepoError::MissingRequiredTable(requirement.table));
        }
        if let Some(column) = requirement
            .columns
            .iter()
            .copied()
            .find(|column| !columns.iter().any(|name| name == column))
        {
            return Err(RepoError::MissingRequiredColumn {
                table: requirement.table,
                column,
            });
        }
    }

    Ok(())
}

/// Maps constraint failures of an owned-record insert to semantic errors.
///
/// `UNIQUE` failures are reported as `AlreadyExists` because the only unique
/// non-key column on owned tables is the one-to-one `account_id`. Primary-key
/// clashes on `id` are reported as `DuplicateId`.
pub(crate) fn map_insert_error(
    err: rusqlite::Error,
    entity: &'static str,
    id: Uuid,
    account_id: AccountId,
) -> RepoError {
    if let rusqlite::Error::SqliteFailure(failure, _) = &err {
        if failure.code == ErrorCode::ConstraintViolation {
            match failure.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE => {
                    return RepoError::AlreadyExists { entity, account_id };
                }
                ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                    return RepoError::DuplicateId { entity, id };
                }
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => return RepoError::MissingOwner(entity),
                _ => {}
            }
        }
    }
    err.into()
}

pub(crate) fn parse_uuid(value: &str, column: &str) -> RepoResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{value}` in {column}")))
}

pub(crate) fn parse_code<T>(
    value: &str,
    column: &str,
    decode: impl FnOnce(&str) -> Option<T>,
) -> RepoResult<T> {
    decode(value)
        .ok_or_else(|| RepoError::InvalidData(format!("unknown code `{value}` in {column}")))
}

pub(crate) fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
