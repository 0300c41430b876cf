//! Sent message log contracts and SQLite implementation.
//!
//! # Responsibility
//! - Append delivery attempts and query them by recipient or sender.
//!
//! # Invariants
//! - The log is append-only: there is no update path, and the table rejects
//!   `UPDATE` statements outright.
//! - Listings are newest first with a stable tie-break on id.

use super::{
    bool_to_int, ensure_connection_ready, map_insert_error, parse_uuid, RepoError, RepoResult,
    TableRequirement,
};
use crate::model::message::SentMessage;
use crate::model::{AccountId, ApplicationId, RecordId};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, Row};

const MESSAGE_SELECT_SQL: &str = "SELECT
    id,
    message_id,
    sender_id,
    account_id,
    status,
    error_message,
    created_at
FROM sent_messages";

const REQUIRED_TABLES: &[TableRequirement] = &[TableRequirement {
    table: "sent_messages",
    columns: &[
        "id",
        "message_id",
        "sender_id",
        "account_id",
        "status",
        "error_message",
        "created_at",
    ],
}];

/// Query options for listing sent messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentMessageQuery {
    pub account_id: Option<AccountId>,
    pub sender_id: Option<ApplicationId>,
    /// Restrict to successful (`Some(true)`) or failed (`Some(false)`) attempts.
    pub status: Option<bool>,
    pub limit: Option<u32>,
    pub offset: u32,
}

/// Repository interface for the append-only message log.
pub trait SentMessageRepository {
    fn record_message(&self, message: &SentMessage) -> RepoResult<RecordId>;
    fn get_message(&self, id: RecordId) -> RepoResult<Option<SentMessage>>;
    fn list_messages(&self, query: &SentMessageQuery) -> RepoResult<Vec<SentMessage>>;
}

/// SQLite-backed message log.
pub struct SqliteSentMessageRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSentMessageRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, REQUIRED_TABLES)?;
        Ok(Self { conn })
    }
}

impl SentMessageRepository for SqliteSentMessageRepository<'_> {
    fn record_message(&self, message: &SentMessage) -> RepoResult<RecordId> {
        message.validate()?;

        self.conn
            .execute(
                "INSERT INTO sent_messages (
                    id,
                    message_id,
                    sender_id,
                    account_id,
                    status,
                    error_message,
                    created_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7);",
                params![
                    message.id.to_string(),
                    message.message_id.as_str(),
                    message.sender_id.to_string(),
                    message.account_id.to_string(),
                    bool_to_int(message.status),
                    message.error_message.as_deref(),
                    message.created_at,
                ],
            )
            .map_err(|err| {
                map_insert_error(err, "sent message", message.id, message.account_id)
            })?;

        Ok(message.id)
    }

    fn get_message(&self, id: RecordId) -> RepoResult<Option<SentMessage>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MESSAGE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_message_row(row)?));
        }

        Ok(None)
    }

    fn list_messages(&self, query: &SentMessageQuery) -> RepoResult<Vec<SentMessage>> {
        let mut sql = format!("{MESSAGE_SELECT_SQL} WHERE 1 = 1");
        let mut bind_values: Vec<Value> = Vec::new();

        if let Some(account_id) = query.account_id {
            sql.push_str(" AND account_id = ?");
            bind_values.push(Value::Text(account_id.to_string()));
        }

        if let Some(sender_id) = query.sender_id {
            sql.push_str(" AND sender_id = ?");
            bind_values.push(Value::Text(sender_id.to_string()));
        }

        if let Some(status) = query.status {
            sql.push_str(" AND status = ?");
            bind_values.push(Value::Integer(bool_to_int(status)));
        }

        sql.push_str(" ORDER BY created_at DESC, id ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut messages = Vec::new();

        while let Some(row) = rows.next()? {
            messages.push(parse_message_row(row)?);
        }

        Ok(messages)
    }
}

fn parse_message_row(row: &Row<'_>) -> RepoResult<SentMessage> {
    let id: String = row.get("id")?;
    let sender_id: String = row.get("sender_id")?;
    let account_id: String = row.get("account_id")?;

    let status = match row.get::<_, i64>("status")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid status value `{other}` in sent_messages.status"
            )));
        }
    };

    let message = SentMessage {
        id: parse_uuid(&id, "sent_messages.id")?,
        message_id: row.get("message_id")?,
        sender_id: parse_uuid(&sender_id, "sent_messages.sender_id")?,
        account_id: parse_uuid(&account_id, "sent_messages.account_id")?,
        status,
        error_message: row.get("error_message")?,
        created_at: row.get("created_at")?,
    };
    message.validate()?;
    Ok(message)
}
