//! A calendar year and its ISO weeks

use super::calendar::{IsoCoordinate, WeekKey};
use super::event::Event;
use super::line::{OrgLine, TaggedLine};
use super::week::Week;
use crate::error::Result;
use log::warn;
use std::collections::BTreeMap;

/// Weeks of one calendar year.
///
/// Weeks are keyed by ISO week-year and number: the first days of January
/// may belong to week 52/53 of the previous ISO year and the last days of
/// December to week 1 of the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Year {
    year: i32,
    weeks: BTreeMap<WeekKey, Week>,
}

impl Year {
    pub fn new(year: i32) -> Self {
        Year {
            year,
            weeks: BTreeMap::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn weeks(&self) -> impl Iterator<Item = (&WeekKey, &Week)> {
        self.weeks.iter()
    }

    pub fn week(&self, key: WeekKey) -> Option<&Week> {
        self.weeks.get(&key)
    }

    pub fn find_or_insert(&mut self, key: WeekKey) -> &mut Week {
        self.weeks.entry(key).or_default()
    }

    pub fn add(&mut self, coord: IsoCoordinate, event: Event) -> Result<()> {
        self.find_or_insert(coord.week_key()).add(coord, event)
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (key, week) in &self.weeks {
            lines.push(format!("** {}", key));
            lines.extend(week.render());
        }
        lines
    }

    /// Rebuild a year from the lines following its heading
    pub fn parse(year: i32, lines: &[TaggedLine<'_>]) -> Result<Self> {
        let mut parsed = Year::new(year);

        let mut sections: Vec<(usize, WeekKey)> = Vec::new();
        for (idx, tagged) in lines.iter().enumerate() {
            match tagged.line {
                OrgLine::WeekHeading { year, week } => {
                    sections.push((idx, WeekKey { year, week }));
                }
                OrgLine::Blank => {}
                _ if sections.is_empty() => return Err(tagged.unexpected()),
                _ => {}
            }
        }

        for (n, &(start, key)) in sections.iter().enumerate() {
            let end = sections.get(n + 1).map_or(lines.len(), |(idx, _)| *idx);
            let week = Week::parse(&lines[start + 1..end])?;
            if parsed.weeks.insert(key, week).is_some() {
                warn!(
                    "event=replace_week module=year status=data_loss week={}",
                    key
                );
            }
        }

        Ok(parsed)
    }
}
