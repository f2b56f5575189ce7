use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::ValidateEmail;

/// A syntactically valid email address.
///
/// Addresses are kept exactly as given. Two addresses are equal only when
/// their text is equal.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parse and validate an email address
    pub fn parse(address: &str) -> Result<Self, EmailError> {
        let address = address.trim().to_owned();
        if !address.validate_email() {
            return Err(EmailError::InvalidEmail(address));
        }

        Ok(Email(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets address maps be queried with a plain `&str`.
impl Borrow<str> for Email {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Email::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum EmailError {
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}
