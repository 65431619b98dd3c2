//! Contact record model: a named contact and its phone numbers.

use crate::domain::{is_valid_phone, ContactName, PhoneNumber, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A contact in the directory.
///
/// The name is fixed at construction. Phones keep their insertion order and
/// duplicates are allowed. Every stored phone has passed validation, both
/// when it was added and when it was last edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: ContactName,

    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

impl ContactRecord {
    /// Create a record with no phone numbers.
    pub fn new(name: impl Into<ContactName>) -> Self {
        Self {
            name: name.into(),
            phones: Vec::new(),
        }
    }

    /// Create a record and add each phone in order.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` for the first malformed phone.
    pub fn with_phones<I, S>(
        name: impl Into<ContactName>,
        phones: I,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut record = Self::new(name);
        for phone in phones {
            record.add_phone(phone)?;
        }
        Ok(record)
    }

    /// The record's name.
    pub fn name(&self) -> &ContactName {
        &self.name
    }

    /// Validate `phone` and append it to the record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        let phone = PhoneNumber::new(phone)?;
        debug!(contact = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Find the first phone whose value equals `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Replace the value of the phone matching `original` with `updated`.
    ///
    /// The phone keeps its position in the list. If no phone matches
    /// `original` nothing changes and no error is returned.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `updated` is malformed; the
    /// record is left untouched.
    pub fn edit_phone(&mut self, original: &str, updated: &str) -> Result<(), ValidationError> {
        if !is_valid_phone(updated) {
            return Err(ValidationError::InvalidPhone(updated.to_string()));
        }

        match self.phones.iter_mut().find(|p| p.as_str() == original) {
            Some(phone) => {
                phone.set_value(updated);
                debug!(contact = %self.name, from = original, to = updated, "Phone edited");
            }
            None => {
                debug!(contact = %self.name, phone = original, "Phone to edit not found");
            }
        }

        Ok(())
    }

    /// Read-only view of the phones in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(PhoneNumber::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
