use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum IdentityError {
    #[error("please enter an email")]
    EmptyEmail,
}

/// Locally fabricated sign-in identity. Nothing here is verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    email: String,
    name: String,
    signed_in_at: DateTime<Utc>,
}

impl UserIdentity {
    /// Build an identity from an email, deriving the display name from the
    /// local part (`jane.doe@x` becomes `jane doe`).
    ///
    /// # Errors
    ///
    /// Returns `IdentityError::EmptyEmail` if the email is blank.
    pub fn from_email(email: &str, signed_in_at: DateTime<Utc>) -> Result<Self, IdentityError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(IdentityError::EmptyEmail);
        }

        let local = email.split('@').next().unwrap_or(email);
        let name = local
            .chars()
            .map(|ch| if matches!(ch, '.' | '_' | '-') { ' ' } else { ch })
            .collect::<String>()
            .trim()
            .to_owned();

        Ok(Self {
            email: email.to_owned(),
            name,
            signed_in_at,
        })
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn signed_in_at(&self) -> DateTime<Utc> {
        self.signed_in_at
    }

    /// Name shown in the badge; falls back to the email when the name is empty.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.email
        } else {
            &self.name
        }
    }

    /// Up to two uppercase initials of the display name.
    #[must_use]
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}
