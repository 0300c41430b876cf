//! Academic program record.
//!
//! # Invariants
//! - At most one program exists per account (enforced by storage).
//! - `join_year` and `graduation_year`, when set, each pass their year guard
//!   for the current year at every write.

use super::choices::{Degree, Department};
use super::validation::{ensure_not_nil, RecordValidationError};
use super::year::{validate_graduation_year, validate_join_year};
use super::{AccountId, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Degree, department and years an account holder is enrolled with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: RecordId,
    pub account_id: AccountId,
    pub department: Option<Department>,
    pub join_year: Option<u16>,
    pub graduation_year: Option<u16>,
    pub degree: Degree,
}

impl Program {
    /// Creates a program with only the required degree set.
    pub fn new(account_id: AccountId, degree: Degree) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            department: None,
            join_year: None,
            graduation_year: None,
            degree,
        }
    }

    /// Checks identifiers and both years against `current_year`.
    ///
    /// The two years are checked independently; no ordering between them is
    /// required.
    pub fn validate(&self, current_year: i32) -> Result<(), RecordValidationError> {
        ensure_not_nil("id", self.id)?;
        ensure_not_nil("account_id", self.account_id)?;
        if let Some(year) = self.join_year {
            validate_join_year(i32::from(year), current_year)?;
        }
        if let Some(year) = self.graduation_year {
            validate_graduation_year(i32::from(year), current_year)?;
        }
        Ok(())
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.department {
            Some(department) => write!(f, "{}, {}", self.degree, department),
            None => write!(f, "{}", self.degree),
        }
    }
}
