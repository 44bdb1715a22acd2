//! File system access for input records and rendered documents

use crate::error::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One input file and its contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Abstract storage for documents and record files
pub trait JournalStore {
    /// Read a rendered document
    fn read_document(&self, path: &Path) -> Result<String>;

    /// Write a rendered document, replacing any existing file
    fn write_document(&self, path: &Path, contents: &str) -> Result<()>;

    /// Read record files in processing order
    fn read_inputs(&self, paths: &[PathBuf]) -> Result<Vec<InputFile>>;
}

/// File system implementation of JournalStore.
///
/// Relative paths are resolved against `root`.
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
}

impl FileSystemStore {
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore { root }
    }

    /// Store rooted at the current working directory
    pub fn current() -> Result<Self> {
        Ok(FileSystemStore::new(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Expand directories into the `.json` files below them, sorted by path.
    /// Plain file arguments are kept in the order given. An entry that
    /// cannot be read while walking is an error.
    pub fn expand_inputs(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for path in paths {
            let resolved = self.resolve(path);
            if resolved.is_dir() {
                let mut found = Vec::new();
                for entry in WalkDir::new(&resolved) {
                    let entry = entry.map_err(io::Error::from)?;
                    let extension = entry.path().extension().and_then(|e| e.to_str());
                    if entry.file_type().is_file() && extension == Some("json") {
                        found.push(entry.into_path());
                    }
                }
                found.sort();
                files.extend(found);
            } else {
                files.push(resolved);
            }
        }
        Ok(files)
    }
}

impl JournalStore for FileSystemStore {
    fn read_document(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(self.resolve(path))?)
    }

    fn write_document(&self, path: &Path, contents: &str) -> Result<()> {
        let path = self.resolve(path);
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&path, contents)?;
        Ok(())
    }

    fn read_inputs(&self, paths: &[PathBuf]) -> Result<Vec<InputFile>> {
        self.expand_inputs(paths)?
            .into_iter()
            .map(|path| {
                let contents = fs::read_to_string(&path)?;
                Ok(InputFile { path, contents })
            })
            .collect()
    }
}
