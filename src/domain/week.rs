//! An ISO week and its days

use super::calendar::IsoCoordinate;
use super::day::Day;
use super::event::Event;
use super::line::{OrgLine, TaggedLine};
use crate::error::Result;
use log::warn;
use std::collections::BTreeMap;

/// Days of one ISO week, keyed by Monday-origin weekday index
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Week {
    days: BTreeMap<u32, Day>,
}

impl Week {
    pub fn new() -> Self {
        Week::default()
    }

    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.days.values()
    }

    pub fn day(&self, weekday: u32) -> Option<&Day> {
        self.days.get(&weekday)
    }

    /// The day at `weekday`, created empty if absent
    pub fn find_or_insert(&mut self, weekday: u32) -> &mut Day {
        self.days
            .entry(weekday)
            .or_insert_with(|| Day::new(weekday))
    }

    pub fn add(&mut self, coord: IsoCoordinate, event: Event) -> Result<()> {
        self.find_or_insert(coord.weekday_index()).add(event)
    }

    /// Render days in weekday order
    pub fn render(&self) -> Vec<String> {
        self.days.values().flat_map(Day::render).collect()
    }

    /// Rebuild a week from the lines following its heading.
    ///
    /// Consecutive day headings with the same date belong to one day. If a
    /// weekday shows up again after another day, the later block replaces
    /// the earlier one.
    pub fn parse(lines: &[TaggedLine<'_>]) -> Result<Self> {
        let mut week = Week::new();

        let mut runs: Vec<(usize, &str)> = Vec::new();
        for (idx, tagged) in lines.iter().enumerate() {
            match tagged.line {
                OrgLine::DayHeading { date } => {
                    if runs.last().map(|(_, d)| *d) != Some(date) {
                        runs.push((idx, date));
                    }
                }
                OrgLine::Blank => {}
                _ if runs.is_empty() => return Err(tagged.unexpected()),
                _ => {}
            }
        }

        for (n, &(start, date)) in runs.iter().enumerate() {
            let end = runs.get(n + 1).map_or(lines.len(), |(idx, _)| *idx);
            let day = Day::parse(&lines[start..end])?;
            if week.days.insert(day.weekday(), day).is_some() {
                warn!(
                    "event=replace_day module=week status=data_loss date={}",
                    date
                );
            }
        }

        Ok(week)
    }
}
