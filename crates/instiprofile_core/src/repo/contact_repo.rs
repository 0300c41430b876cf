//! Contact number persistence. Numbers are appended, never edited in place.

use super::profile_repo::SqliteProfileRepository;
use super::{map_insert_error, parse_uuid, RepoResult};
use crate::model::contact::ContactNumber;
use crate::model::{AccountId, RecordId};
use rusqlite::{params, Row};

/// Repository interface for an account's contact numbers.
pub trait ContactNumberRepository {
    fn add_contact(&self, contact: &ContactNumber) -> RepoResult<RecordId>;
    /// Lists contacts in insertion order.
    fn list_contacts(&self, account_id: AccountId) -> RepoResult<Vec<ContactNumber>>;
}

impl ContactNumberRepository for SqliteProfileRepository<'_> {
    fn add_contact(&self, contact: &ContactNumber) -> RepoResult<RecordId> {
        contact.validate()?;

        self.conn
            .execute(
                "INSERT INTO contact_numbers (id, account_id, number) VALUES (?1, ?2, ?3);",
                params![
                    contact.id.to_string(),
                    contact.account_id.to_string(),
                    contact.number.as_str(),
                ],
            )
            .map_err(|err| {
                map_insert_error(err, "contact number", contact.id, contact.account_id)
            })?;

        Ok(contact.id)
    }

    fn list_contacts(&self, account_id: AccountId) -> RepoResult<Vec<ContactNumber>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, account_id, number
             FROM contact_numbers
             WHERE account_id = ?1
             ORDER BY created_at ASC, rowid ASC;",
        )?;

        let mut rows = stmt.query([account_id.to_string()])?;
        let mut contacts = Vec::new();
        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }

        Ok(contacts)
    }
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<ContactNumber> {
    let id: String = row.get("id")?;
    let account_id: String = row.get("account_id")?;

    Ok(ContactNumber {
        id: parse_uuid(&id, "contact_numbers.id")?,
        account_id: parse_uuid(&account_id, "contact_numbers.account_id")?,
        number: row.get("number")?,
    })
}
