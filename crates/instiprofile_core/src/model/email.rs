//! Secondary email record and address syntax check.

use super::validation::{ensure_not_nil, ensure_required, RecordValidationError};
use super::{AccountId, RecordId};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::net::IpAddr;
use uuid::Uuid;

pub const EMAIL_MAX_CHARS: usize = 254;

static LOCAL_PART_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r#"|"(?:[\x01-\x08\x0b\x0c\x0e-\x21#-\[\]-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")$"#,
    ))
    .expect("valid local part regex")
});

static DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?i)(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+",
        r"(?:[a-z]{2,63}|xn--[a-z0-9]{1,59})$",
    ))
    .expect("valid domain regex")
});

/// Returns whether `value` is a syntactically valid email address.
///
/// The local part is either a dot-atom or a quoted string. The domain is
/// `localhost`, a dotted name ending in an alphabetic or `xn--` label, or a
/// bracketed IPv4/IPv6 literal.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.rsplit_once('@') else {
        return false;
    };
    LOCAL_PART_RE.is_match(local) && is_valid_domain(domain)
}

fn is_valid_domain(domain: &str) -> bool {
    if domain == "localhost" {
        return true;
    }
    if let Some(literal) = domain
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
    {
        return literal.parse::<IpAddr>().is_ok();
    }
    DOMAIN_RE.is_match(domain)
}

/// Additional address an account holder can be reached at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryEmail {
    pub id: RecordId,
    pub account_id: AccountId,
    pub email: String,
}

impl SecondaryEmail {
    pub fn new(account_id: AccountId, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            email: email.into(),
        }
    }

    pub fn validate(&self) -> Result<(), RecordValidationError> {
        ensure_not_nil("id", self.id)?;
        ensure_not_nil("account_id", self.account_id)?;
        ensure_required("email", &self.email, EMAIL_MAX_CHARS)?;
        if !is_valid_email(&self.email) {
            return Err(RecordValidationError::InvalidEmail);
        }
        Ok(())
    }
}

impl Display for SecondaryEmail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::is_valid_email;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email("student@iitb.ac.in"));
        assert!(is_valid_email("first.last+tag@example.com"));
        assert!(is_valid_email("admin@localhost"));
        assert!(is_valid_email("user@[192.168.0.1]"));
        assert!(is_valid_email("user@[2001:db8::1]"));
        assert!(is_valid_email("\"john doe\"@example.com"));
        assert!(is_valid_email("\"a@b\"@example.com"));
        assert!(is_valid_email("user@example.xn--p1ai"));
        assert!(is_valid_email("User@Example.COM"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("no-at-sign.example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("dot.@example.com"));
        assert!(!is_valid_email("user@-bad.example.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email(" user@example.com"));
        assert!(!is_valid_email("user@[999.1.1.1]"));
        assert!(!is_valid_email("\"unterminated@example.com"));
        assert!(!is_valid_email("user@example.xn--"));
    }
}
