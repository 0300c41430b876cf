//! Profile-editing use-case service.
//!
//! # Responsibility
//! - Save the one-to-one address and program as create-or-update.
//! - Append contact numbers and secondary emails.
//! - Assemble the per-account `UserProfile` read model.
//!
//! # Invariants
//! - The current year always comes from the injected clock, never from
//!   ambient process state.
//! - Service APIs never bypass repository validation.
//! - Concurrent saves of the same one-to-one record resolve as last writer
//!   wins.

use crate::model::address::InstituteAddress;
use crate::model::choices::{Degree, Department, Hostel};
use crate::model::contact::ContactNumber;
use crate::model::email::SecondaryEmail;
use crate::model::program::Program;
use crate::model::AccountId;
use crate::repo::profile_repo::ProfileRepository;
use crate::repo::{RepoError, RepoResult};
use chrono::Datelike;
use log::{info, warn};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Editable fields of an institute address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressInput {
    pub room: Option<String>,
    pub hostel: Option<Hostel>,
}

/// Editable fields of a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramInput {
    pub department: Option<Department>,
    pub join_year: Option<u16>,
    pub graduation_year: Option<u16>,
    pub degree: Degree,
}

/// Everything stored about one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub account_id: AccountId,
    pub address: Option<InstituteAddress>,
    pub program: Option<Program>,
    pub contacts: Vec<ContactNumber>,
    pub secondary_emails: Vec<SecondaryEmail>,
}

/// Use-case service for profile records.
pub struct ProfileService<R: ProfileRepository> {
    repo: R,
    clock: Arc<dyn Clock>,
}

impl<R: ProfileRepository> ProfileService<R> {
    pub fn new(repo: R, clock: Arc<dyn Clock>) -> Self {
        Self { repo, clock }
    }

    /// Calendar year (UTC) reported by the clock.
    pub fn current_year(&self) -> i32 {
        self.clock.utc().year()
    }

    /// Creates the account's address or replaces its fields in place.
    pub fn save_address(
        &self,
        account_id: AccountId,
        input: AddressInput,
    ) -> RepoResult<InstituteAddress> {
        let result = self.write_address(account_id, &input);
        log_save("institute_address", account_id, &result);
        result
    }

    /// Creates the account's program or replaces its fields in place.
    ///
    /// Years are checked against the clock's current year on every save.
    pub fn save_program(&self, account_id: AccountId, input: ProgramInput) -> RepoResult<Program> {
        let current_year = self.current_year();
        let result = self.write_program(account_id, &input, current_year);
        log_save("program", account_id, &result);
        result
    }

    pub fn add_contact(
        &self,
        account_id: AccountId,
        number: impl Into<String>,
    ) -> RepoResult<ContactNumber> {
        let contact = ContactNumber::new(account_id, number);
        let result = self.repo.add_contact(&contact).map(|_| contact);
        log_save("contact_number", account_id, &result);
        result
    }

    pub fn add_secondary_email(
        &self,
        account_id: AccountId,
        email: impl Into<String>,
    ) -> RepoResult<SecondaryEmail> {
        let email = SecondaryEmail::new(account_id, email);
        let result = self.repo.add_secondary_email(&email).map(|_| email);
        log_save("secondary_email", account_id, &result);
        result
    }

    /// Loads every record the account owns. Missing records are `None`/empty.
    pub fn get_profile(&self, account_id: AccountId) -> RepoResult<UserProfile> {
        Ok(UserProfile {
            account_id,
            address: self.repo.get_address_for_account(account_id)?,
            program: self.repo.get_program_for_account(account_id)?,
            contacts: self.repo.list_contacts(account_id)?,
            secondary_emails: self.repo.list_secondary_emails(account_id)?,
        })
    }

    fn write_address(
        &self,
        account_id: AccountId,
        input: &AddressInput,
    ) -> RepoResult<InstituteAddress> {
        if let Some(existing) = self.repo.get_address_for_account(account_id)? {
            return self.replace_address(existing, input);
        }

        let mut address = InstituteAddress::new(account_id);
        address.room = input.room.clone();
        address.hostel = input.hostel;
        match self.repo.create_address(&address) {
            Ok(_) => Ok(address),
            // Lost a create race: overwrite whatever the other writer stored.
            Err(RepoError::AlreadyExists { .. }) => {
                match self.repo.get_address_for_account(account_id)? {
                    Some(existing) => self.replace_address(existing, input),
                    None => Err(RepoError::InvalidData(format!(
                        "institute address for account {account_id} vanished during save"
                    ))),
                }
            }
            Err(err) => Err(err),
        }
    }

    fn replace_address(
        &self,
        mut address: InstituteAddress,
        input: &AddressInput,
    ) -> RepoResult<InstituteAddress> {
        address.room = input.room.clone();
        address.hostel = input.hostel;
        self.repo.update_address(&address)?;
        Ok(address)
    }

    fn write_program(
        &self,
        account_id: AccountId,
        input: &ProgramInput,
        current_year: i32,
    ) -> RepoResult<Program> {
        if let Some(existing) = self.repo.get_program_for_account(account_id)? {
            return self.replace_program(existing, input, current_year);
        }

        let mut program = Program::new(account_id, input.degree);
        apply_program_input(&mut program, input);
        match self.repo.create_program(&program, current_year) {
            Ok(_) => Ok(program),
            Err(RepoError::AlreadyExists { .. }) => {
                match self.repo.get_program_for_account(account_id)? {
                    Some(existing) => self.replace_program(existing, input, current_year),
                    None => Err(RepoError::InvalidData(format!(
                        "program for account {account_id} vanished during save"
                    ))),
                }
            }
            Err(err) => Err(err),
        }
    }

    fn replace_program(
        &self,
        mut program: Program,
        input: &ProgramInput,
        current_year: i32,
    ) -> RepoResult<Program> {
        apply_program_input(&mut program, input);
        self.repo.update_program(&program, current_year)?;
        Ok(program)
    }
}

fn apply_program_input(program: &mut Program, input: &ProgramInput) {
    program.department = input.department;
    program.join_year = input.join_year;
    program.graduation_year = input.graduation_year;
    program.degree = input.degree;
}

fn log_save<T>(entity: &str, account_id: AccountId, result: &RepoResult<T>) {
    match result {
        Ok(_) => info!(
            "event=profile_save module=service status=ok entity={entity} account_id={account_id}"
        ),
        Err(RepoError::Validation(err)) => warn!(
            "event=profile_save module=service status=rejected entity={entity} account_id={account_id} error={err}"
        ),
        Err(err) => warn!(
            "event=profile_save module=service status=error entity={entity} account_id={account_id} error={err}"
        ),
    }
}
