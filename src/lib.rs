//! orgcal - Calendar events to Org outline
//!
//! Turns calendar event records (JSON) into an Org document organised by
//! year, ISO week, day and event, and reads such documents back so that new
//! events can be merged into an existing file.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::Document;
pub use error::OrgcalError;
