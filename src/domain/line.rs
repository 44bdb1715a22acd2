//! Line-level grammar of a rendered calendar document
//!
//! Every line of a rendered document falls into exactly one [`OrgLine`]
//! class. Headings are told apart by the number of leading `*` markers and
//! must match the content pattern of their depth; body lines are indented
//! by [`BODY_INDENT`].

use crate::error::{OrgcalError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Indent prefixed to every line of an event body
pub const BODY_INDENT: &str = "     ";

pub const PROPERTIES_DRAWER: &str = ":PROPERTIES:";
pub const LOGBOOK_DRAWER: &str = ":LOGBOOK:";
pub const DRAWER_END: &str = ":END:";
pub const ATTENDEES_KEY: &str = "Attendees:";
pub const CLOCK_KEY: &str = "CLOCK:";
pub const TODO_KEYWORD: &str = "TODO";

fn year_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\* (\d+)$").unwrap())
}

fn week_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\*\* (\d+)-W(\d{2})$").unwrap())
}

fn day_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\*\*\* (\d{4}-\d{2}-\d{2}) [A-Za-z]+$").unwrap())
}

fn event_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^\*\*\*\* <(\d{4}-\d{2}-\d{2}) [A-Za-z]{2}\. \d+:\d{2}>(?: (.*))?$").unwrap()
    })
}

fn todo_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\*\*\*\*\* TODO(?: (.*))?$").unwrap())
}

/// Drawer delimiters inside an event body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drawer {
    Properties,
    Logbook,
    End,
}

/// A classified document line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgLine<'a> {
    /// `* 2024`
    YearHeading(i32),
    /// `** 2024-W03`
    WeekHeading { year: i32, week: u32 },
    /// `*** 2024-01-15 Monday`
    DayHeading { date: &'a str },
    /// `**** <2024-01-15 Mo. 09:00> Title`
    EventHeading { date: &'a str, title: &'a str },
    /// `     :PROPERTIES:`, `     :LOGBOOK:` or `     :END:`
    DrawerLine(Drawer),
    /// `     Attendees: a, b`
    PropertyLine { key: &'a str, value: &'a str },
    /// `     CLOCK: [...]--[...] =>  01:30`
    ClockLine(&'a str),
    /// `***** TODO text`
    TodoLine(&'a str),
    /// Any other indented line, with the indent stripped
    PlainLine(&'a str),
    /// An empty line
    Blank,
}

/// A classified line together with its source text and 1-based position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedLine<'a> {
    pub line_no: usize,
    pub raw: &'a str,
    pub line: OrgLine<'a>,
}

impl<'a> TaggedLine<'a> {
    /// The line text with the body indent removed
    pub fn body_text(&self) -> &'a str {
        self.raw.strip_prefix(BODY_INDENT).unwrap_or(self.raw)
    }

    pub fn is_blank(&self) -> bool {
        self.line == OrgLine::Blank
    }

    pub fn unexpected(&self) -> OrgcalError {
        OrgcalError::UnexpectedHeadingDepth {
            line: self.line_no,
            text: self.raw.to_string(),
        }
    }
}

impl<'a> OrgLine<'a> {
    /// Heading depth of this line (0 for non-heading lines)
    pub fn depth(&self) -> usize {
        match self {
            OrgLine::YearHeading(_) => 1,
            OrgLine::WeekHeading { .. } => 2,
            OrgLine::DayHeading { .. } => 3,
            OrgLine::EventHeading { .. } => 4,
            OrgLine::TodoLine(_) => 5,
            _ => 0,
        }
    }
}

/// Count the leading heading markers of a line (`*` runs followed by a space)
fn marker_count(line: &str) -> usize {
    let stars = line.bytes().take_while(|b| *b == b'*').count();
    if stars > 0 && line.as_bytes().get(stars) == Some(&b' ') {
        stars
    } else {
        0
    }
}

/// Classify one line. `line_no` is 1-based and only used for error reports.
pub fn classify(line: &str, line_no: usize) -> Result<OrgLine<'_>> {
    if line.is_empty() {
        return Ok(OrgLine::Blank);
    }

    let unexpected = || OrgcalError::UnexpectedHeadingDepth {
        line: line_no,
        text: line.to_string(),
    };

    match marker_count(line) {
        0 => {}
        1 => {
            let caps = year_regex().captures(line).ok_or_else(unexpected)?;
            let year = caps[1].parse().map_err(|_| unexpected())?;
            return Ok(OrgLine::YearHeading(year));
        }
        2 => {
            let caps = week_regex().captures(line).ok_or_else(unexpected)?;
            let year = caps[1].parse().map_err(|_| unexpected())?;
            let week = caps[2].parse().map_err(|_| unexpected())?;
            return Ok(OrgLine::WeekHeading { year, week });
        }
        3 => {
            let caps = day_regex().captures(line).ok_or_else(unexpected)?;
            let date = caps.get(1).map_or("", |m| m.as_str());
            return Ok(OrgLine::DayHeading { date });
        }
        4 => {
            let caps = event_regex().captures(line).ok_or_else(unexpected)?;
            let date = caps.get(1).map_or("", |m| m.as_str());
            let title = caps.get(2).map_or("", |m| m.as_str());
            return Ok(OrgLine::EventHeading { date, title });
        }
        5 => {
            let caps = todo_regex().captures(line).ok_or_else(unexpected)?;
            return Ok(OrgLine::TodoLine(caps.get(1).map_or("", |m| m.as_str())));
        }
        _ => return Err(unexpected()),
    }

    let Some(body) = line.strip_prefix(BODY_INDENT) else {
        return Err(unexpected());
    };

    Ok(match body {
        PROPERTIES_DRAWER => OrgLine::DrawerLine(Drawer::Properties),
        LOGBOOK_DRAWER => OrgLine::DrawerLine(Drawer::Logbook),
        DRAWER_END => OrgLine::DrawerLine(Drawer::End),
        _ if body.starts_with(CLOCK_KEY) => OrgLine::ClockLine(body),
        _ if body.starts_with(ATTENDEES_KEY) => {
            let value = &body[ATTENDEES_KEY.len()..];
            OrgLine::PropertyLine {
                key: "Attendees",
                value: value.strip_prefix(' ').unwrap_or(value),
            }
        }
        _ => OrgLine::PlainLine(body),
    })
}

/// Classify every line of a document
pub fn classify_all(text: &str) -> Result<Vec<TaggedLine<'_>>> {
    text.lines()
        .enumerate()
        .map(|(idx, raw)| {
            Ok(TaggedLine {
                line_no: idx + 1,
                raw,
                line: classify(raw, idx + 1)?,
            })
        })
        .collect()
}
