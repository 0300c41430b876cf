//! Message log use-case service.
//!
//! # Responsibility
//! - Record one entry per outbound delivery attempt, stamped by the clock.
//! - Expose recipient/sender views over the log.
//!
//! # Invariants
//! - `created_at` is taken from the injected clock exactly once, when the
//!   entry is recorded.

use crate::model::message::SentMessage;
use crate::model::{AccountId, ApplicationId, RecordId};
use crate::repo::message_repo::{SentMessageQuery, SentMessageRepository};
use crate::repo::RepoResult;
use log::{info, warn};
use mockable::Clock;
use std::sync::Arc;

/// Use-case service wrapper for the sent message log.
pub struct MessageLogService<R: SentMessageRepository> {
    repo: R,
    clock: Arc<dyn Clock>,
}

impl<R: SentMessageRepository> MessageLogService<R> {
    pub fn new(repo: R, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Records the outcome of one delivery attempt.
    ///
    /// `outcome` is `Ok(())` for a delivered message or `Err(error_message)`
    /// with the channel's failure text.
    pub fn record_delivery(
        &self,
        sender_id: ApplicationId,
        account_id: AccountId,
        message_id: impl Into<String>,
        outcome: Result<(), String>,
    ) -> RepoResult<SentMessage> {
        let created_at = self.clock.utc().timestamp_millis();
        let mut message = SentMessage::new(sender_id, account_id, message_id, created_at);
        if let Err(error_message) = outcome {
            message = message.failed(error_message);
        }

        match self.repo.record_message(&message) {
            Ok(_) => {
                info!(
                    "event=message_record module=service status=ok sender_id={sender_id} account_id={account_id} delivered={}",
                    message.status
                );
                Ok(message)
            }
            Err(err) => {
                warn!(
                    "event=message_record module=service status=error sender_id={sender_id} account_id={account_id} error={err}"
                );
                Err(err)
            }
        }
    }

    pub fn get_message(&self, id: RecordId) -> RepoResult<Option<SentMessage>> {
        self.repo.get_message(id)
    }

    /// Messages received by `account_id`, newest first.
    pub fn messages_for_account(
        &self,
        account_id: AccountId,
        limit: Option<u32>,
        offset: u32,
    ) -> RepoResult<Vec<SentMessage>> {
        self.repo.list_messages(&SentMessageQuery {
            account_id: Some(account_id),
            limit,
            offset,
            ..SentMessageQuery::default()
        })
    }

    /// Failed attempts by `sender_id`, newest first.
    pub fn failures_for_sender(&self, sender_id: ApplicationId) -> RepoResult<Vec<SentMessage>> {
        self.repo.list_messages(&SentMessageQuery {
            sender_id: Some(sender_id),
            status: Some(false),
            ..SentMessageQuery::default()
        })
    }
}
