//! Admission and graduation year guards.
//!
//! # Responsibility
//! - Reject implausible program years before a record reaches storage.
//!
//! # Invariants
//! - Both guards are pure: the current year is always passed in by the caller.
//! - No year earlier than [`FOUNDING_YEAR`] is ever accepted.
//! - A join year never lies after the current year.
//! - A graduation year never lies more than [`MAX_PROGRAM_SPAN_YEARS`] after
//!   the current year.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Year the institute was founded. Nothing earlier can be a program year.
pub const FOUNDING_YEAR: i32 = 1958;

/// Longest plausible program duration, used as the graduation horizon.
pub const MAX_PROGRAM_SPAN_YEARS: i32 = 6;

/// Which program year a guard was checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearField {
    JoinYear,
    GraduationYear,
}

impl YearField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::JoinYear => "join_year",
            Self::GraduationYear => "graduation_year",
        }
    }
}

/// Bound that a rejected year crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangeKind {
    /// Year precedes the founding of the institute.
    BeforeFounding,
    /// Admission year lies in the future.
    FutureAdmission,
    /// Graduation year lies beyond the longest program duration.
    BeyondGraduationHorizon,
}

/// Rejection produced by the year guards.
///
/// Carries the offending value and the bound it crossed, plus a reason that
/// can be shown to an end user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutOfRangeError {
    pub field: YearField,
    pub kind: OutOfRangeKind,
    pub value: i32,
    /// Inclusive bound that `value` violated.
    pub limit: i32,
}

impl OutOfRangeError {
    /// Human-readable explanation for the rejection.
    pub fn reason(&self) -> String {
        match self.kind {
            OutOfRangeKind::BeforeFounding => format!(
                "{}: the institute did not exist yet, it was founded in {}",
                self.value, self.limit
            ),
            OutOfRangeKind::FutureAdmission => format!(
                "{}: admission year cannot lie in the future (latest allowed is {})",
                self.value, self.limit
            ),
            OutOfRangeKind::BeyondGraduationHorizon => format!(
                "{}: please enter your expected graduation year (latest allowed is {})",
                self.value, self.limit
            ),
        }
    }
}

impl Display for OutOfRangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} out of range: {}", self.field.as_str(), self.reason())
    }
}

impl Error for OutOfRangeError {}

/// Checks an admission year against the founding year and the current year.
///
/// # Errors
/// - `BeforeFounding` when `year < 1958`.
/// - `FutureAdmission` when `year > current_year`.
pub fn validate_join_year(year: i32, current_year: i32) -> Result<(), OutOfRangeError> {
    check_founding(YearField::JoinYear, year)?;
    if year > current_year {
        return Err(OutOfRangeError {
            field: YearField::JoinYear,
            kind: OutOfRangeKind::FutureAdmission,
            value: year,
            limit: current_year,
        });
    }
    Ok(())
}

/// Checks a graduation year against the founding year and the graduation
/// horizon (`current_year + 6`).
///
/// # Errors
/// - `BeforeFounding` when `year < 1958`.
/// - `BeyondGraduationHorizon` when `year > current_year + 6`.
pub fn validate_graduation_year(year: i32, current_year: i32) -> Result<(), OutOfRangeError> {
    check_founding(YearField::GraduationYear, year)?;
    let horizon = current_year.saturating_add(MAX_PROGRAM_SPAN_YEARS);
    if year > horizon {
        return Err(OutOfRangeError {
            field: YearField::GraduationYear,
            kind: OutOfRangeKind::BeyondGraduationHorizon,
            value: year,
            limit: horizon,
        });
    }
    Ok(())
}

fn check_founding(field: YearField, year: i32) -> Result<(), OutOfRangeError> {
    if year < FOUNDING_YEAR {
        return Err(OutOfRangeError {
            field,
            kind: OutOfRangeKind::BeforeFounding,
            value: year,
            limit: FOUNDING_YEAR,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        validate_graduation_year, validate_join_year, OutOfRangeKind, YearField, FOUNDING_YEAR,
    };

    #[test]
    fn founding_year_is_inclusive() {
        assert!(validate_join_year(FOUNDING_YEAR, 2024).is_ok());
        assert!(validate_graduation_year(FOUNDING_YEAR, 2024).is_ok());
    }

    #[test]
    fn founding_check_runs_before_upper_bound() {
        // A current year before founding still reports the founding bound first.
        let err = validate_join_year(1900, 1800).unwrap_err();
        assert_eq!(err.kind, OutOfRangeKind::BeforeFounding);
    }

    #[test]
    fn graduation_horizon_does_not_overflow() {
        assert!(validate_graduation_year(i32::MAX, i32::MAX).is_ok());
    }

    #[test]
    fn display_names_the_field() {
        let err = validate_graduation_year(2031, 2024).unwrap_err();
        assert_eq!(err.field, YearField::GraduationYear);
        assert!(err.to_string().starts_with("graduation_year out of range"));
    }
}
