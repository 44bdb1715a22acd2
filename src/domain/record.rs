//! Decoding of input event records
//!
//! A record is a flat JSON object. Singular fields carry a `0` suffix
//! (`date0`, `title0`, ...); repeatable fields are numbered `comment0`,
//! `comment1`, ... and are read until the first missing index.

use crate::error::{OrgcalError, Result};
use serde_json::{Map, Value};

/// One decoded input record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub date: String,
    pub title: String,
    pub time_start: String,
    pub time_end: String,
    pub attendees: Vec<String>,
    pub comments: Vec<String>,
    pub todos: Vec<String>,
}

impl EventRecord {
    /// Decode a record from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(&value)
    }

    /// Decode a record from an already parsed JSON value
    pub fn from_value(value: &Value) -> Result<Self> {
        let object = value.as_object().ok_or_else(|| {
            OrgcalError::MalformedRecord(format!("expected a JSON object, got {}", kind(value)))
        })?;
        Self::from_object(object)
    }

    pub fn from_object(object: &Map<String, Value>) -> Result<Self> {
        Ok(EventRecord {
            date: required(object, "date0")?,
            title: required(object, "title0")?,
            time_start: required(object, "time0")?,
            time_end: required(object, "time1")?,
            attendees: required(object, "attendees0")?
                .split(", ")
                .map(str::to_string)
                .collect(),
            comments: fetch_incrementing(object, "comment")?,
            todos: fetch_incrementing(object, "todo")?,
        })
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match object.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.contains(['\n', '\r']) => Err(OrgcalError::MalformedRecord(
            format!("field '{}' must be a single line", key),
        )),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(OrgcalError::MalformedRecord(format!(
            "field '{}' must be a string, got {}",
            key,
            kind(other)
        ))),
    }
}

fn required(object: &Map<String, Value>, key: &str) -> Result<String> {
    string_field(object, key)?
        .ok_or_else(|| OrgcalError::MalformedRecord(format!("missing field '{}'", key)))
}

/// Collect `{prefix}0`, `{prefix}1`, ... stopping at the first missing index
pub fn fetch_incrementing(object: &Map<String, Value>, prefix: &str) -> Result<Vec<String>> {
    let mut values = Vec::new();
    while let Some(value) = string_field(object, &format!("{}{}", prefix, values.len()))? {
        values.push(value);
    }
    Ok(values)
}
