//! Institute address persistence.
//!
//! # Invariants
//! - One address per account; a second create fails with `AlreadyExists`.
//! - Updates are keyed by record id and may not move an address to another
//!   account.

use super::profile_repo::SqliteProfileRepository;
use super::{map_insert_error, parse_code, parse_uuid, RepoError, RepoResult};
use crate::model::address::InstituteAddress;
use crate::model::choices::Hostel;
use crate::model::{AccountId, RecordId};
use rusqlite::{params, Row};

const ADDRESS_SELECT_SQL: &str = "SELECT id, account_id, room, hostel FROM institute_addresses";

/// Repository interface for the one-to-one institute address.
pub trait InstituteAddressRepository {
    fn create_address(&self, address: &InstituteAddress) -> RepoResult<RecordId>;
    /// Replaces room and hostel of an existing address.
    fn update_address(&self, address: &InstituteAddress) -> RepoResult<()>;
    fn get_address_for_account(&self, account_id: AccountId)
        -> RepoResult<Option<InstituteAddress>>;
}

impl InstituteAddressRepository for SqliteProfileRepository<'_> {
    fn create_address(&self, address: &InstituteAddress) -> RepoResult<RecordId> {
        address.validate()?;

        self.conn
            .execute(
                "INSERT INTO institute_addresses (id, account_id, room, hostel)
                 VALUES (?1, ?2, ?3, ?4);",
                params![
                    address.id.to_string(),
                    address.account_id.to_string(),
                    address.room.as_deref(),
                    address.hostel.map(Hostel::code),
                ],
            )
            .map_err(|err| {
                map_insert_error(err, "institute address", address.id, address.account_id)
            })?;

        Ok(address.id)
    }

    fn update_address(&self, address: &InstituteAddress) -> RepoResult<()> {
        address.validate()?;

        let changed = self.conn.execute(
            "UPDATE institute_addresses
             SET
                room = ?1,
                hostel = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?3
               AND account_id = ?4;",
            params![
                address.room.as_deref(),
                address.hostel.map(Hostel::code),
                address.id.to_string(),
                address.account_id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "institute address",
                id: address.id,
            });
        }

        Ok(())
    }

    fn get_address_for_account(
        &self,
        account_id: AccountId,
    ) -> RepoResult<Option<InstituteAddress>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ADDRESS_SELECT_SQL} WHERE account_id = ?1;"))?;

        let mut rows = stmt.query([account_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_address_row(row)?));
        }

        Ok(None)
    }
}

fn parse_address_row(row: &Row<'_>) -> RepoResult<InstituteAddress> {
    let id: String = row.get("id")?;
    let account_id: String = row.get("account_id")?;
    let hostel = match row.get::<_, Option<String>>("hostel")? {
        Some(code) => Some(parse_code(
            &code,
            "institute_addresses.hostel",
            Hostel::from_code,
        )?),
        None => None,
    };

    Ok(InstituteAddress {
        id: parse_uuid(&id, "institute_addresses.id")?,
        account_id: parse_uuid(&account_id, "institute_addresses.account_id")?,
        room: row.get("room")?,
        hostel,
    })
}
