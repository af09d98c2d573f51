//! Template catalog loading and validation
//!
//! The catalog is read from a delimited tabular source exactly once at
//! startup and is immutable for the process lifetime.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::error::{Error, Result};
use crate::template::TemplateEntry;

/// Immutable ordered sequence of catalog templates.
///
/// Entry identity is the ordinal row position. Any change to the catalog
/// requires reloading and rebuilding the index that wraps it.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<TemplateEntry>,
}

impl Catalog {
    /// Validate and wrap an already-parsed sequence of entries.
    ///
    /// Rejects an empty sequence and any row with an empty `EventTemplate`.
    pub fn new(entries: Vec<TemplateEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::Config("catalog is empty".to_string()));
        }
        for (ordinal, entry) in entries.iter().enumerate() {
            if entry.event_template.is_empty() {
                return Err(Error::Config(format!(
                    "catalog row {} has an empty EventTemplate",
                    ordinal
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Parse a catalog from a delimited tabular reader.
    ///
    /// Required columns: `EventTemplate`, `Level`, `Component`, `type`.
    /// Extra columns (such as a leading unnamed index) are ignored.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut entries = Vec::new();
        for (row, record) in csv_reader.deserialize::<TemplateEntry>().enumerate() {
            let entry = record
                .map_err(|e| Error::Config(format!("malformed catalog row {}: {}", row, e)))?;
            entries.push(entry);
        }

        let catalog = Self::new(entries)?;
        info!(templates = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Load a catalog file. The file handle is released before returning.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_csv_reader(file)
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn get(&self, ordinal: usize) -> Option<&TemplateEntry> {
        self.entries.get(ordinal)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TemplateEntry> {
        self.entries.iter()
    }
}
