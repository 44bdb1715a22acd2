//! A calendar day and its events

use super::calendar::{self, weekday_name};
use super::event::Event;
use super::line::{OrgLine, TaggedLine};
use crate::error::{OrgcalError, Result};

/// Events occurring on one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    weekday: u32,
    events: Vec<Event>,
}

impl Day {
    pub fn new(weekday: u32) -> Self {
        Day {
            weekday,
            events: Vec::new(),
        }
    }

    /// Monday-origin weekday index
    pub fn weekday(&self) -> u32 {
        self.weekday
    }

    /// Events in insertion order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Append an event. Events are never deduplicated.
    pub fn add(&mut self, event: Event) -> Result<()> {
        if event.weekday != self.weekday {
            return Err(OrgcalError::MalformedRecord(format!(
                "event '{}' on {} falls on {}, not {}",
                event.title,
                event.date,
                weekday_name(event.weekday),
                weekday_name(self.weekday)
            )));
        }
        self.events.push(event);
        Ok(())
    }

    /// Render each event, ordered by start time, under its own day heading
    pub fn render(&self) -> Vec<String> {
        let mut sorted: Vec<&Event> = self.events.iter().collect();
        sorted.sort_by_key(|event| event.start);

        let mut lines = Vec::new();
        for event in sorted {
            lines.push(format!("*** {} {}", event.date, weekday_name(self.weekday)));
            lines.extend(event.render());
        }
        lines
    }

    /// Rebuild a day from its lines. The first line must be a day heading;
    /// every day heading opens a new event range.
    pub fn parse(lines: &[TaggedLine<'_>]) -> Result<Self> {
        let first = lines.first().ok_or_else(|| {
            OrgcalError::UnexpectedHeadingDepth {
                line: 0,
                text: "empty day block".to_string(),
            }
        })?;
        let OrgLine::DayHeading { date } = first.line else {
            return Err(first.unexpected());
        };
        let mut day = Day::new(calendar::iso_calendar(date)?.weekday_index());

        let starts: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, tagged)| matches!(tagged.line, OrgLine::DayHeading { .. }))
            .map(|(idx, _)| idx)
            .collect();

        for (n, &start) in starts.iter().enumerate() {
            let end = starts.get(n + 1).copied().unwrap_or(lines.len());
            if let Some(event) = parse_event_range(&lines[start + 1..end], day.weekday)? {
                day.add(event)?;
            }
        }

        Ok(day)
    }
}

/// Parse the lines between two day headings: one event heading plus body.
/// The event date must fall on the same weekday as the enclosing day.
fn parse_event_range(lines: &[TaggedLine<'_>], weekday: u32) -> Result<Option<Event>> {
    let Some(pos) = lines.iter().position(|tagged| !tagged.is_blank()) else {
        return Ok(None);
    };
    let heading = &lines[pos];
    let OrgLine::EventHeading { date, title } = heading.line else {
        return Err(heading.unexpected());
    };

    let mut event = Event::with_heading(date, title)?;
    if event.weekday != weekday {
        return Err(heading.unexpected());
    }
    event.parse(&lines[pos + 1..])?;
    Ok(Some(event))
}
