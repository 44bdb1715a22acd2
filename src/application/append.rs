//! Merge new records into an existing document

use super::{ingest_inputs, BuildReport};
use crate::domain::Document;
use crate::error::Result;
use crate::infrastructure::JournalStore;
use log::info;
use std::path::{Path, PathBuf};

/// Service for the append workflow: load, ingest, render
pub struct AppendService<S: JournalStore> {
    store: S,
}

impl<S: JournalStore> AppendService<S> {
    pub fn new(store: S) -> Self {
        AppendService { store }
    }

    /// Load `existing`, add every record from `inputs` and write the merged
    /// document to `output` (which may be `existing` itself).
    pub fn execute(&self, existing: &Path, inputs: &[PathBuf], output: &Path) -> Result<BuildReport> {
        let text = self.store.read_document(existing)?;
        let mut document = Document::load(&text)?;
        let loaded = document.event_count();

        let records = ingest_inputs(&self.store, &mut document, inputs)?;

        self.store.write_document(output, &document.render())?;
        info!(
            "event=append module=application status=ok loaded={} records={} output={}",
            loaded,
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
