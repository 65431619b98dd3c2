//! ContactName value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The name a contact record is filed under.
///
/// Any string is accepted. Two names are equal when their strings are
/// equal; a name never compares equal to a phone number.
///
/// # Example
///
/// ```
/// use contact_directory::domain::ContactName;
///
/// let name = ContactName::new("John");
/// assert_eq!(name.as_str(), "John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactName(String);

impl ContactName {
    /// Create a new ContactName.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl From<&str> for ContactName {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ContactName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for ContactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
