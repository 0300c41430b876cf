//! Sent message log entry.
//!
//! # Invariants
//! - Entries are append-only; `created_at` is fixed when the entry is built.
//! - `message_id` is non-empty and at most [`MESSAGE_ID_MAX_CHARS`] characters.

use super::validation::{ensure_not_nil, ensure_required, RecordValidationError};
use super::{AccountId, ApplicationId, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub const MESSAGE_ID_MAX_CHARS: usize = 256;

/// One outbound message attempt by an application to an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentMessage {
    pub id: RecordId,
    /// Identifier assigned by the sending channel.
    pub message_id: String,
    pub sender_id: ApplicationId,
    pub account_id: AccountId,
    /// `true` when delivery succeeded.
    pub status: bool,
    pub error_message: Option<String>,
    /// Unix epoch milliseconds.
    pub created_at: i64,
}

impl SentMessage {
    /// Builds a successful delivery entry stamped with `created_at`.
    pub fn new(
        sender_id: ApplicationId,
        account_id: AccountId,
        message_id: impl Into<String>,
        created_at: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            message_id: message_id.into(),
            sender_id,
            account_id,
            status: true,
            error_message: None,
            created_at,
        }
    }

    /// Marks this entry as a failed attempt with the channel's error text.
    pub fn failed(mut self, error_message: impl Into<String>) -> Self {
        self.status = false;
        self.error_message = Some(error_message.into());
        self
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        ensure_not_nil("id", self.id)?;
        ensure_not_nil("sender_id", self.sender_id)?;
        ensure_not_nil("account_id", self.account_id)?;
        ensure_required("message_id", &self.message_id, MESSAGE_ID_MAX_CHARS)
    }
}

impl Display for SentMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message_id)
    }
}
