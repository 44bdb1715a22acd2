//! Document aggregate root
//!
//! A [`Document`] owns every year of a calendar outline. It is built either
//! from input records via [`Document::ingest`] or from previously rendered
//! text via [`Document::load`], and turned back into text by
//! [`Document::render`]. Loading and then ingesting more records is the
//! append workflow.

use super::calendar::{self, IsoCoordinate};
use super::event::Event;
use super::line::{classify_all, OrgLine};
use super::record::EventRecord;
use super::year::Year;
use crate::error::Result;
use chrono::Datelike;
use log::{debug, warn};
use serde_json::Value;
use std::collections::BTreeMap;

/// Calendar outline keyed by calendar year
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    years: BTreeMap<i32, Year>,
}

impl Document {
    pub fn new() -> Self {
        Document::default()
    }

    pub fn years(&self) -> impl Iterator<Item = &Year> {
        self.years.values()
    }

    pub fn year(&self, year: i32) -> Option<&Year> {
        self.years.get(&year)
    }

    pub fn find_or_insert(&mut self, year: i32) -> &mut Year {
        self.years.entry(year).or_insert_with(|| Year::new(year))
    }

    /// Add one event from a JSON record object
    pub fn ingest(&mut self, json: &str) -> Result<()> {
        self.ingest_record(&EventRecord::from_json(json)?)
    }

    /// Add every record in a JSON text holding either one record object or
    /// an array of them. Returns the number of records added.
    ///
    /// Records are validated as they are added; on error the records before
    /// the failing one stay in the document.
    pub fn ingest_all(&mut self, json: &str) -> Result<usize> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Array(items) => {
                for item in &items {
                    self.ingest_record(&EventRecord::from_value(item)?)?;
                }
                Ok(items.len())
            }
            other => {
                self.ingest_record(&EventRecord::from_value(&other)?)?;
                Ok(1)
            }
        }
    }

    pub fn ingest_record(&mut self, record: &EventRecord) -> Result<()> {
        let event = Event::from_record(record)?;
        let coord: IsoCoordinate = calendar::iso_calendar(&record.date)?;
        let year = calendar::parse_date(&record.date)?.year();

        debug!(
            "event=ingest module=document date={} week={} weekday={}",
            record.date,
            coord.week_key(),
            coord.weekday_index()
        );
        self.find_or_insert(year).add(coord, event)
    }

    /// Render the whole document. Non-empty output ends with a newline.
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        for (year, block) in &self.years {
            lines.push(format!("* {}", year));
            lines.extend(block.render());
        }

        if lines.is_empty() {
            return String::new();
        }
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    /// Rebuild a document from text produced by [`Document::render`]
    pub fn load(text: &str) -> Result<Self> {
        let tagged = classify_all(text)?;
        let mut document = Document::new();

        let mut sections: Vec<(usize, i32)> = Vec::new();
        for (idx, line) in tagged.iter().enumerate() {
            match line.line {
                OrgLine::YearHeading(year) => sections.push((idx, year)),
                OrgLine::Blank => {}
                _ if sections.is_empty() => return Err(line.unexpected()),
                _ => {}
            }
        }

        for (n, &(start, year)) in sections.iter().enumerate() {
            let end = sections.get(n + 1).map_or(tagged.len(), |(idx, _)| *idx);
            let block = Year::parse(year, &tagged[start + 1..end])?;
            if document.years.insert(year, block).is_some() {
                warn!(
                    "event=replace_year module=document status=data_loss year={}",
                    year
                );
            }
        }

        debug!(
            "event=load module=document status=ok lines={} events={}",
            tagged.len(),
            document.event_count()
        );
        Ok(document)
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn year_count(&self) -> usize {
        self.years.len()
    }

    pub fn week_count(&self) -> usize {
        self.years().map(|y| y.weeks().count()).sum()
    }

    pub fn day_count(&self) -> usize {
        self.years()
            .flat_map(|y| y.weeks())
            .map(|(_, w)| w.days().count())
            .sum()
    }

    pub fn event_count(&self) -> usize {
        self.years()
            .flat_map(|y| y.weeks())
            .flat_map(|(_, w)| w.days())
            .map(|d| d.events().len())
            .sum()
    }
}
