//! Data models for the contact directory.

pub mod record;

pub use record::ContactRecord;
