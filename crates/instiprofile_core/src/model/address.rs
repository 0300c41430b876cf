//! Institute address record.
//!
//! # Invariants
//! - At most one address exists per account (enforced by storage).
//! - `room` is at most [`ROOM_MAX_CHARS`] characters.

use super::choices::Hostel;
use super::validation::{ensure_max_chars, ensure_not_nil, RecordValidationError};
use super::{AccountId, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub const ROOM_MAX_CHARS: usize = 8;

/// Where on campus an account holder lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstituteAddress {
    pub id: RecordId,
    pub account_id: AccountId,
    /// Free-form room label, e.g. `A-214`.
    pub room: Option<String>,
    pub hostel: Option<Hostel>,
}

impl InstituteAddress {
    /// Creates an empty address for `account_id` with a generated ID.
    pub fn new(account_id: AccountId) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            room: None,
            hostel: None,
        }
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        ensure_not_nil("id", self.id)?;
        ensure_not_nil("account_id", self.account_id)?;
        if let Some(room) = self.room.as_deref() {
            ensure_max_chars("room", room, ROOM_MAX_CHARS)?;
        }
        Ok(())
    }
}

impl Display for InstituteAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match (self.hostel, self.room.as_deref()) {
            (Some(hostel), Some(room)) if !room.is_empty() => write!(f, "{hostel}-{room}"),
            (Some(hostel), _) => write!(f, "{hostel}"),
            (None, _) => Ok(()),
        }
    }
}
