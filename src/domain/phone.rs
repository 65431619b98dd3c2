//! PhoneNumber value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ten digits, optionally as `(XXX)`, with optional hyphens between groups.
///
/// `\d` is Unicode-aware, so any decimal digit script counts. Anchored at the
/// start only: anything after the tenth digit is ignored.
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\d{3}\)?-?\d{3}-?\d{4}").expect("Failed to compile phone regex")
});

/// Check whether `candidate` starts with a 10-digit phone number.
///
/// Accepted shapes:
///
/// ```text
/// XXXXXXXXXX
/// XXX-XXX-XXXX
/// (XXX)XXX-XXXX
/// (XXX)-XXX-XXXX
/// ```
///
/// # Example
///
/// ```
/// use contact_directory::domain::is_valid_phone;
///
/// assert!(is_valid_phone("(123)456-7890"));
/// assert!(!is_valid_phone("12345"));
/// ```
pub fn is_valid_phone(candidate: &str) -> bool {
    PHONE_REGEX.is_match(candidate)
}

/// A type-safe wrapper for phone numbers.
///
/// Phone numbers are validated at construction time, so a `PhoneNumber`
/// held by a record always has the 10-digit shape.
///
/// # Example
///
/// ```
/// use contact_directory::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("123-456-7890").unwrap();
/// assert_eq!(phone.as_str(), "123-456-7890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !is_valid_phone(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Replace the stored value wholesale.
    ///
    /// No validation happens here; callers check the new value first.
    pub(crate) fn set_value(&mut self, phone: impl Into<String>) {
        self.0 = phone.into();
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the ten digits of the number with formatting removed.
    ///
    /// Trailing text after the number is not included.
    pub fn digits_only(&self) -> String {
        let number = PHONE_REGEX
            .find(&self.0)
            .map(|m| m.as_str())
            .unwrap_or(&self.0);

        number
            .chars()
            .filter(|c| !matches!(c, '(' | ')' | '-'))
            .collect()
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
