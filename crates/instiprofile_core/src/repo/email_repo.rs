//! Secondary email persistence.
//!
//! The same address may be stored for several accounts, or twice for one.

use super::profile_repo::SqliteProfileRepository;
use super::{map_insert_error, parse_uuid, RepoResult};
use crate::model::email::SecondaryEmail;
use crate::model::{AccountId, RecordId};
use rusqlite::{params, Row};

/// Repository interface for an account's secondary emails.
pub trait SecondaryEmailRepository {
    fn add_secondary_email(&self, email: &SecondaryEmail) -> RepoResult<RecordId>;
    /// Lists emails in insertion order.
    fn list_secondary_emails(&self, account_id: AccountId) -> RepoResult<Vec<SecondaryEmail>>;
}

impl SecondaryEmailRepository for SqliteProfileRepository<'_> {
    fn add_secondary_email(&self, email: &SecondaryEmail) -> RepoResult<RecordId> {
        email.validate()?;

        self.conn
            .execute(
                "INSERT INTO secondary_emails (id, account_id, email) VALUES (?1, ?2, ?3);",
                params![
                    email.id.to_string(),
                    email.account_id.to_string(),
                    email.email.as_str(),
                ],
            )
            .map_err(|err| {
                map_insert_error(err, "secondary email", email.id, email.account_id)
            })?;

        Ok(email.id)
    }

    fn list_secondary_emails(&self, account_id: AccountId) -> RepoResult<Vec<SecondaryEmail>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, account_id, email
             FROM secondary_emails
             WHERE account_id = ?1
             ORDER BY created_at ASC, rowid ASC;",
        )?;

        let mut rows = stmt.query([account_id.to_string()])?;
        let mut emails = Vec::new();
        while let Some(row) = rows.next()? {
            emails.push(parse_email_row(row)?);
        }

        Ok(emails)
    }
}

fn parse_email_row(row: &Row<'_>) -> RepoResult<SecondaryEmail> {
    let id: String = row.get("id")?;
    let account_id: String = row.get("account_id")?;

    Ok(SecondaryEmail {
        id: parse_uuid(&id, "secondary_emails.id")?,
        account_id: parse_uuid(&account_id, "secondary_emails.account_id")?,
        email: row.get("email")?,
    })
}
