//! Academic program persistence.
//!
//! # Invariants
//! - One program per account; a second create fails with `AlreadyExists`.
//! - Join and graduation years are re-checked against `current_year` on
//!   every create and every update, not only the first write.

use super::profile_repo::SqliteProfileRepository;
use super::{map_insert_error, parse_code, parse_uuid, RepoError, RepoResult};
use crate::model::choices::{Degree, Department};
use crate::model::program::Program;
use crate::model::{AccountId, RecordId};
use rusqlite::{params, Row};

const PROGRAM_SELECT_SQL: &str = "SELECT
    id,
    account_id,
    department,
    join_year,
    graduation_year,
    degree
FROM programs";

/// Repository interface for the one-to-one academic program.
///
/// `current_year` comes from the caller's clock so that the year guards stay
/// deterministic.
pub trait ProgramRepository {
    fn create_program(&self, program: &Program, current_year: i32) -> RepoResult<RecordId>;
    fn update_program(&self, program: &Program, current_year: i32) -> RepoResult<()>;
    fn get_program_for_account(&self, account_id: AccountId) -> RepoResult<Option<Program>>;
}

impl ProgramRepository for SqliteProfileRepository<'_> {
    fn create_program(&self, program: &Program, current_year: i32) -> RepoResult<RecordId> {
        program.validate(current_year)?;

        self.conn
            .execute(
                "INSERT INTO programs (
                    id,
                    account_id,
                    department,
                    join_year,
                    graduation_year,
                    degree
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
                params![
                    program.id.to_string(),
                    program.account_id.to_string(),
                    program.department.map(Department::code),
                    program.join_year,
                    program.graduation_year,
                    program.degree.code(),
                ],
            )
            .map_err(|err| {
                map_insert_error(err, "program", program.id, program.account_id)
            })?;

        Ok(program.id)
    }

    fn update_program(&self, program: &Program, current_year: i32) -> RepoResult<()> {
        program.validate(current_year)?;

        let changed = self.conn.execute(
            "UPDATE programs
             SET
                department = ?1,
                join_year = ?2,
                graduation_year = ?3,
                degree = ?4,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE id = ?5
               AND account_id = ?6;",
            params![
                program.department.map(Department::code),
                program.join_year,
                program.graduation_year,
                program.degree.code(),
                program.id.to_string(),
                program.account_id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound {
                entity: "program",
                id: program.id,
            });
        }

        Ok(())
    }

    fn get_program_for_account(&self, account_id: AccountId) -> RepoResult<Option<Program>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROGRAM_SELECT_SQL} WHERE account_id = ?1;"))?;

        let mut rows = stmt.query([account_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_program_row(row)?));
        }

        Ok(None)
    }
}

// Stored years are not re-validated on read: the guards only get more
// permissive as the current year advances.
fn parse_program_row(row: &Row<'_>) -> RepoResult<Program> {
    let id: String = row.get("id")?;
    let account_id: String = row.get("account_id")?;
    let department = match row.get::<_, Option<String>>("department")? {
        Some(code) => Some(parse_code(
            &code,
            "programs.department",
            Department::from_code,
        )?),
        None => None,
    };
    let degree_code: String = row.get("degree")?;

    Ok(Program {
        id: parse_uuid(&id, "programs.id")?,
        account_id: parse_uuid(&account_id, "programs.account_id")?,
        department,
        join_year: row.get("join_year")?,
        graduation_year: row.get("graduation_year")?,
        degree: parse_code(&degree_code, "programs.degree", Degree::from_code)?,
    })
}
