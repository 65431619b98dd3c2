//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number does not have the 10-digit shape.
    ///
    /// Carries the rejected input so callers can report it.
    InvalidPhone(String),
}

impl ValidationError {
    /// The input that failed validation.
    pub fn rejected_value(&self) -> &str {
        match self {
            Self::InvalidPhone(phone) => phone,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(_) => {
                write!(f, "Invalid phone number. It must be a 10-digit number.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}
