//! Application layer - Use cases and orchestration

pub mod append;
pub mod build;
pub mod check;
pub mod init;

pub use append::AppendService;
pub use build::{BuildReport, BuildService};
pub use check::{CheckReport, CheckService};

use crate::domain::Document;
use crate::error::{OrgcalError, Result};
use crate::infrastructure::JournalStore;
use log::info;
use std::path::PathBuf;

/// Feed every record of every input file into the document, in order.
/// Returns the number of records ingested.
fn ingest_inputs<S: JournalStore>(
    store: &S,
    document: &mut Document,
    inputs: &[PathBuf],
) -> Result<usize> {
    let mut total = 0;
    for input in store.read_inputs(inputs)? {
        let count = document.ingest_all(&input.contents).map_err(|e| match e {
            OrgcalError::MalformedRecord(msg) => {
                OrgcalError::MalformedRecord(format!("{}: {}", input.path.display(), msg))
            }
            other => other,
        })?;
        info!(
            "event=ingest_file module=application records={} path={}",
            count,
            input.path.display()
        );
        total += count;
    }
    Ok(total)
}
