//! Verify that a document loads and re-renders unchanged

use crate::domain::Document;
use crate::error::Result;
use crate::infrastructure::JournalStore;
use std::path::{Path, PathBuf};

/// Shape of a loaded document and whether it is in canonical form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    pub path: PathBuf,
    pub years: usize,
    pub weeks: usize,
    pub days: usize,
    pub events: usize,
    /// True when re-rendering reproduces the file byte for byte
    pub canonical: bool,
}

pub struct CheckService<S: JournalStore> {
    store: S,
}

impl<S: JournalStore> CheckService<S> {
    pub fn new(store: S) -> Self {
        CheckService { store }
    }

    pub fn execute(&self, path: &Path) -> Result<CheckReport> {
        let text = self.store.read_document(path)?;
        let document = Document::load(&text)?;

        Ok(CheckReport {
            path: path.to_path_buf(),
            years: document.year_count(),
            weeks: document.week_count(),
            days: document.day_count(),
            events: document.event_count(),
            canonical: document.render() == text,
        })
    }
}
