//! Calendar event, the leaf of the document tree

use super::calendar::{self, format_duration, parse_clock_digits, weekday_abbrev, ClockTime};
use super::line::{
    Drawer, OrgLine, TaggedLine, ATTENDEES_KEY, BODY_INDENT, CLOCK_KEY, DRAWER_END,
    LOGBOOK_DRAWER, PROPERTIES_DRAWER, TODO_KEYWORD,
};
use super::record::EventRecord;
use crate::error::{OrgcalError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Matches a bracketed timestamp such as `[2024-01-15 Mo. 09:00]`
fn clock_stamp_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[[^\]]*?(\d{2}:\d{2})\]").unwrap())
}

/// A single calendar event
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Event {
    pub title: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// Monday-origin weekday index
    pub weekday: u32,
    pub start: ClockTime,
    pub end: ClockTime,
    pub attendees: Vec<String>,
    pub comments: Vec<String>,
    pub todos: Vec<String>,
}

/// Where the event body parser currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodySection {
    /// Before or between the drawers
    Drawers,
    Properties,
    Logbook,
    /// Free text after the logbook
    Comments,
}

impl Event {
    /// Create an event from a heading's date and title; the weekday is
    /// derived from the date.
    pub fn with_heading(date: &str, title: &str) -> Result<Self> {
        let coord = calendar::iso_calendar(date)?;
        Ok(Event {
            title: title.to_string(),
            date: date.to_string(),
            weekday: coord.weekday_index(),
            ..Default::default()
        })
    }

    /// Build an event from a decoded input record
    pub fn from_record(record: &EventRecord) -> Result<Self> {
        let mut event = Self::with_heading(&record.date, &record.title)?;
        event.start = parse_clock_digits(&record.time_start)?;
        event.end = parse_clock_digits(&record.time_end)?;
        event.attendees = record.attendees.clone();
        event.comments = record.comments.clone();
        event.todos = record.todos.clone();
        Ok(event)
    }

    /// Elapsed time between start and end as `HH:MM`
    pub fn duration(&self) -> String {
        format_duration(self.end.minutes_since_midnight() - self.start.minutes_since_midnight())
    }

    fn timestamp(&self, time: ClockTime) -> String {
        format!("{} {}. {}", self.date, weekday_abbrev(self.weekday), time)
    }

    /// Render the event heading and body
    pub fn render(&self) -> Vec<String> {
        let start = self.timestamp(self.start);
        let end = self.timestamp(self.end);

        let mut lines = vec![
            format!("**** <{}> {}", start, self.title),
            format!("{}{}", BODY_INDENT, PROPERTIES_DRAWER),
            format!("{}{} {}", BODY_INDENT, ATTENDEES_KEY, self.attendees.join(", ")),
            format!("{}{}", BODY_INDENT, DRAWER_END),
            format!("{}{}", BODY_INDENT, LOGBOOK_DRAWER),
            format!(
                "{}{} [{}]--[{}] =>  {}",
                BODY_INDENT,
                CLOCK_KEY,
                start,
                end,
                self.duration()
            ),
            format!("{}{}", BODY_INDENT, DRAWER_END),
        ];
        lines.extend(
            self.comments
                .iter()
                .map(|comment| format!("{}{}", BODY_INDENT, comment)),
        );
        lines.extend(
            self.todos
                .iter()
                .map(|todo| format!("***** {} {}", TODO_KEYWORD, todo)),
        );
        lines
    }

    /// Fill attendees, clock times, comments and to-dos from the lines that
    /// follow the event heading.
    pub fn parse(&mut self, body: &[TaggedLine<'_>]) -> Result<()> {
        let mut section = BodySection::Drawers;
        let mut clocked = false;

        for tagged in body {
            match (&tagged.line, section) {
                (OrgLine::Blank, _) => {}
                (OrgLine::TodoLine(text), _) => {
                    self.todos.push(text.to_string());
                    section = BodySection::Comments;
                }
                (line, _) if line.depth() > 0 => return Err(tagged.unexpected()),
                (_, BodySection::Comments) => self.comments.push(tagged.body_text().to_string()),
                (OrgLine::DrawerLine(Drawer::Properties), BodySection::Drawers) => {
                    section = BodySection::Properties;
                }
                (OrgLine::DrawerLine(Drawer::Logbook), BodySection::Drawers) => {
                    section = BodySection::Logbook;
                }
                (OrgLine::PropertyLine { value, .. }, BodySection::Properties) => {
                    self.attendees = value.split(", ").map(str::to_string).collect();
                }
                (OrgLine::DrawerLine(Drawer::End), BodySection::Properties) => {
                    section = BodySection::Drawers;
                }
                (OrgLine::ClockLine(text), BodySection::Logbook) => {
                    let (start, end) = parse_clock_line(text)?;
                    self.start = start;
                    self.end = end;
                    clocked = true;
                }
                (OrgLine::DrawerLine(Drawer::End), BodySection::Logbook) => {
                    section = BodySection::Comments;
                }
                // Unknown drawer content is dropped.
                (_, BodySection::Properties | BodySection::Logbook) => {}
                (_, BodySection::Drawers) => {
                    self.comments.push(tagged.body_text().to_string());
                    section = BodySection::Comments;
                }
            }
        }

        if !clocked {
            return Err(OrgcalError::MalformedClockLine(format!(
                "event '{}' on {} has no CLOCK line",
                self.title, self.date
            )));
        }
        Ok(())
    }
}

/// Extract the start and end times from a `CLOCK:` line
fn parse_clock_line(text: &str) -> Result<(ClockTime, ClockTime)> {
    let mut stamps = clock_stamp_regex()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().parse::<ClockTime>());

    match (stamps.next(), stamps.next()) {
        (Some(Ok(start)), Some(Ok(end))) => Ok((start, end)),
        _ => Err(OrgcalError::MalformedClockLine(text.to_string())),
    }
}
