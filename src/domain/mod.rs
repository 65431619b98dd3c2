//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for contact names and phone
//! numbers. Phone numbers are validated at construction time, which keeps
//! malformed numbers out of every record.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::{is_valid_phone, PhoneNumber};
