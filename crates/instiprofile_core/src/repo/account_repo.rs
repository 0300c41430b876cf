//! Owner registry for accounts and sending applications.
//!
//! # Responsibility
//! - Mirror external identities so owned records can reference them.
//! - Delete accounts, cascading to every record they own.
//!
//! # Invariants
//! - Account usernames are unique.
//! - Deleting an account removes its address, program, contacts, emails and
//!   received messages in the same statement.

use super::{
    ensure_connection_ready, map_insert_error, RepoError, RepoResult, TableRequirement,
};
use crate::model::validation::{ensure_not_nil, ensure_required};
use crate::model::{AccountId, ApplicationId};
use log::info;
use rusqlite::{params, Connection};

const USERNAME_MAX_CHARS: usize = 150;
const APPLICATION_NAME_MAX_CHARS: usize = 255;

const REQUIRED_TABLES: &[TableRequirement] = &[
    TableRequirement {
        table: "accounts",
        columns: &["id", "username"],
    },
    TableRequirement {
        table: "applications",
        columns: &["id", "name"],
    },
];

/// Registry of the external identities profile records belong to.
pub trait AccountRepository {
    fn create_account(&self, id: AccountId, username: &str) -> RepoResult<AccountId>;
    fn create_application(&self, id: ApplicationId, name: &str) -> RepoResult<ApplicationId>;
    fn account_exists(&self, id: AccountId) -> RepoResult<bool>;
    /// Deletes the account and everything it owns.
    fn delete_account(&self, id: AccountId) -> RepoResult<()>;
}

/// SQLite-backed owner registry.
pub struct SqliteAccountRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAccountRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, REQUIRED_TABLES)?;
        Ok(Self { conn })
    }
}

impl AccountRepository for SqliteAccountRepository<'_> {
    fn create_account(&self, id: AccountId, username: &str) -> RepoResult<AccountId> {
        ensure_not_nil("account_id", id)?;
        ensure_required("username", username, USERNAME_MAX_CHARS)?;

        self.conn
            .execute(
                "INSERT INTO accounts (id, username) VALUES (?1, ?2);",
                params![id.to_string(), username],
            )
            .map_err(|err| map_insert_error(err, "account", id, id))?;

        Ok(id)
    }

    fn create_application(&self, id: ApplicationId, name: &str) -> RepoResult<ApplicationId> {
        ensure_not_nil("application_id", id)?;
        ensure_required("name", name, APPLICATION_NAME_MAX_CHARS)?;

        self.conn
            .execute(
                "INSERT INTO applications (id, name) VALUES (?1, ?2);",
                params![id.to_string(), name],
            )
            .map_err(|err| map_insert_error(err, "application", id, id))?;

        Ok(id)
    }

    fn account_exists(&self, id: AccountId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE id = ?1);",
            [id.to_string()],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn delete_account(&self, id: AccountId) -> RepoResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM accounts WHERE id = ?1;", [id.to_string()])?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "account",
                id,
            });
        }

        info!("event=account_delete module=repo status=ok account_id={id}");
        Ok(())
    }
}
