//! Insertion-ordered directory of contact records.

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::ContactRecord;
use indexmap::IndexMap;
use std::fmt;
use tracing::{debug, info};

/// A directory mapping contact names to their records.
///
/// Records are keyed by the string value of their name. Adding a record under
/// a name that is already present replaces the old record but keeps the
/// name's original position, so iteration always follows first-insertion
/// order.
///
/// # Example
///
/// ```
/// use contact_directory::{ContactRecord, Directory};
///
/// let mut directory = Directory::new();
/// directory.add_record(ContactRecord::with_phones("John", ["1234567890"]).unwrap());
///
/// assert!(directory.find("John").is_some());
/// assert!(directory.find("Jane").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directory {
    records: IndexMap<String, ContactRecord>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// File `record` under its name, returning the record it replaced.
    pub fn add_record(&mut self, record: ContactRecord) -> Option<ContactRecord> {
        let name = record.name().as_str().to_string();
        let replaced = self.records.insert(name.clone(), record);

        if replaced.is_some() {
            info!(contact = %name, "Replaced existing contact record");
        } else {
            debug!(contact = %name, total = self.records.len(), "Contact record added");
        }

        replaced
    }

    /// Look up the record filed under `name`.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.get(name)
    }

    /// Look up the record filed under `name` for editing.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.get_mut(name)
    }

    /// Remove and return the record filed under `name`.
    ///
    /// The remaining records keep their relative order.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::KeyNotFound` if no record has that name.
    pub fn delete(&mut self, name: &str) -> DirectoryResult<ContactRecord> {
        match self.records.shift_remove(name) {
            Some(record) => {
                debug!(contact = %name, remaining = self.records.len(), "Contact record deleted");
                Ok(record)
            }
            None => Err(DirectoryError::KeyNotFound(name.to_string())),
        }
    }

    /// Whether a record is filed under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.records.iter(),
        }
    }

    /// Iterate records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.records.values()
    }
}

/// Iterator over a directory's `(name, record)` pairs.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: indexmap::map::Iter<'a, String, ContactRecord>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a ContactRecord);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, record)| (name.as_str(), record))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Directory {
    type Item = (&'a str, &'a ContactRecord);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<ContactRecord> for Directory {
    fn extend<T: IntoIterator<Item = ContactRecord>>(&mut self, iter: T) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<ContactRecord> for Directory {
    fn from_iter<T: IntoIterator<Item = ContactRecord>>(iter: T) -> Self {
        let mut directory = Self::new();
        directory.extend(iter);
        directory
    }
}

// One record per line, in insertion order
impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in self.records.values() {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
