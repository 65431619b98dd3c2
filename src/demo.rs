//! The demonstration walk-through printed by the binary.

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::ContactRecord;
use crate::Directory;
use std::io::Write;
use tracing::info;

/// Errors from running the demo.
#[derive(thiserror::Error, Debug)]
pub enum DemoError {
    /// A directory operation failed
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Writing output failed
    #[error("Failed to write demo output: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the two sample records, edit, look up, delete, and print each step
/// to `out`.
///
/// Returns the directory as it stands at the end (John only).
pub fn run_demo<W: Write>(out: &mut W) -> Result<Directory, DemoError> {
    let mut directory = sample_directory()?;

    write!(out, "{}", directory)?;

    let john = directory
        .find_mut("John")
        .ok_or_else(|| DirectoryError::KeyNotFound("John".to_string()))?;
    john.edit_phone("1234567890", "1112223333")
        .map_err(DirectoryError::from)?;
    writeln!(out, "{}", john)?;

    if let Some(phone) = john.find_phone("5555555555") {
        writeln!(out, "{}: {}", john.name(), phone)?;
    }

    directory.delete("Jane")?;
    write!(out, "{}", directory)?;

    info!(remaining = directory.len(), "Demo finished");
    Ok(directory)
}

/// John with two phones and Jane with one, in that order.
pub fn sample_directory() -> DirectoryResult<Directory> {
    let mut directory = Directory::new();
    directory.add_record(ContactRecord::with_phones(
        "John",
        ["1234567890", "5555555555"],
    )?);
    directory.add_record(ContactRecord::with_phones("Jane", ["9876543210"])?);
    Ok(directory)
}
