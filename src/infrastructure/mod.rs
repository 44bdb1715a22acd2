//! Infrastructure layer - External I/O and configuration

pub mod config;
pub mod logging;
pub mod store;

pub use config::Config;
pub use logging::init_logging;
pub use store::{FileSystemStore, InputFile, JournalStore};
