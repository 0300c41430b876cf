//! Field-level validation shared by all record kinds.

use super::year::OutOfRangeError;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Rejection of a record before it reaches storage.
///
/// Variants never carry the rejected text itself, so the error can be logged
/// without leaking what a user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    NilId(&'static str),
    EmptyField(&'static str),
    FieldTooLong {
        field: &'static str,
        max_chars: usize,
        actual_chars: usize,
    },
    InvalidEmail,
    OutOfRange(OutOfRangeError),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId(field) => write!(f, "{field} must not be nil"),
            Self::EmptyField(field) => write!(f, "{field} must not be empty"),
            Self::FieldTooLong {
                field,
                max_chars,
                actual_chars,
            } => write!(
                f,
                "{field} is {actual_chars} characters long; at most {max_chars} allowed"
            ),
            Self::InvalidEmail => write!(f, "email is not a valid address"),
            Self::OutOfRange(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RecordValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::OutOfRange(err) => Some(err),
            _ => None,
        }
    }
}

impl From<OutOfRangeError> for RecordValidationError {
    fn from(value: OutOfRangeError) -> Self {
        Self::OutOfRange(value)
    }
}

pub(crate) fn ensure_not_nil(field: &'static str, id: Uuid) -> Result<(), RecordValidationError> {
    if id.is_nil() {
        return Err(RecordValidationError::NilId(field));
    }
    Ok(())
}

pub(crate) fn ensure_max_chars(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), RecordValidationError> {
    let actual_chars = value.chars().count();
    if actual_chars > max_chars {
        return Err(RecordValidationError::FieldTooLong {
            field,
            max_chars,
            actual_chars,
        });
    }
    Ok(())
}

pub(crate) fn ensure_required(
    field: &'static str,
    value: &str,
    max_chars: usize,
) -> Result<(), RecordValidationError> {
    if value.trim().is_empty() {
        return Err(RecordValidationError::EmptyField(field));
    }
    ensure_max_chars(field, value, max_chars)
}
