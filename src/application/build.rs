//! Create a document from input records

use super::ingest_inputs;
use crate::domain::Document;
use crate::error::Result;
use crate::infrastructure::JournalStore;
use log::info;
use std::path::{Path, PathBuf};

/// Outcome of a build or append run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub output: PathBuf,
    /// Records ingested from input files
    pub records: usize,
    /// Events in the written document
    pub events: usize,
}

/// Service for building a new document from records
pub struct BuildService<S: JournalStore> {
    store: S,
}

impl<S: JournalStore> BuildService<S> {
    pub fn new(store: S) -> Self {
        BuildService { store }
    }

    /// Ingest every input file into an empty document and write it to
    /// `output`. Nothing is written if any record fails.
    pub fn execute(&self, inputs: &[PathBuf], output: &Path) -> Result<BuildReport> {
        let mut document = Document::new();
        let records = ingest_inputs(&self.store, &mut document, inputs)?;

        self.store.write_document(output, &document.render())?;
        info!(
            "event=build module=application status=ok records={} output={}",
            records,
            output.display()
        );

        Ok(BuildReport {
            output: output.to_path_buf(),
            records,
            events: document.event_count(),
        })
    }
}
