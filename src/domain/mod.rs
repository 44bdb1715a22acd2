//! Domain layer - Calendar outline model, rendering and parsing

pub mod calendar;
pub mod day;
pub mod document;
pub mod event;
pub mod line;
pub mod record;
pub mod week;
pub mod year;

pub use calendar::{ClockTime, IsoCoordinate, WeekKey};
pub use day::Day;
pub use document::Document;
pub use event::Event;
pub use record::EventRecord;
pub use week::Week;
pub use year::Year;
