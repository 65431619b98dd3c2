//! Contact Directory - an in-memory address book with validated phone numbers.
//!
//! Records hold a name and an ordered list of phone numbers. Every phone is
//! checked against a 10-digit shape when added and when edited, so a record
//! can never hold a malformed number.
//!
//! # Architecture
//!
//! - **domain**: Value objects for contact names and phone numbers
//! - **models**: The contact record
//! - **directory**: Insertion-ordered name → record map
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **demo**: The walk-through printed by the binary

pub mod config;
pub mod demo;
pub mod directory;
pub mod domain;
pub mod error;
pub mod models;

pub use config::Config;
pub use directory::Directory;
pub use domain::{is_valid_phone, ContactName, PhoneNumber, ValidationError};
pub use error::{ConfigError, DirectoryError, DirectoryResult};
pub use models::ContactRecord;
