//! Contact number record.

use super::validation::{ensure_not_nil, ensure_required, RecordValidationError};
use super::{AccountId, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub const NUMBER_MAX_CHARS: usize = 16;

/// Phone number attached to an account. Free text, not normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactNumber {
    pub id: RecordId,
    pub account_id: AccountId,
    pub number: String,
}

impl ContactNumber {
    pub fn new(account_id: AccountId, number: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            number: number.into(),
        }
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        ensure_not_nil("id", self.id)?;
        ensure_not_nil("account_id", self.account_id)?;
        ensure_required("number", &self.number, NUMBER_MAX_CHARS)
    }
}

impl Display for ContactNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.number)
    }
}
