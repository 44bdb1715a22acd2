//! Library-level round-trip and grouping tests

use orgcal::domain::calendar::iso_calendar;
use orgcal::Document;

mod common;
use common::record_json;

fn records() -> Vec<String> {
    vec![
        record_json("2024-01-15", "Lunch", "1200", "1300", &["Table booked"], &[]),
        record_json("2024-01-15", "Standup", "0900", "0915", &[], &["Update board"]),
        record_json("2024-01-21", "Hike", "0800", "1200", &["Bring water", ""], &[]),
        record_json("2023-01-01", "Hangover", "1100", "1130", &[], &[]),
        record_json("2024-12-30", "Wrap-up", "1500", "1630", &[], &["Archive", "Plan 2025"]),
        record_json("2024-02-29", "Leap day", "0000", "2359", &[], &[]),
        record_json("2024-01-15", "Standup", "0900", "0915", &[], &[]),
    ]
}

fn build() -> Document {
    let mut document = Document::new();
    for record in records() {
        document.ingest(&record).unwrap();
    }
    document
}

#[test]
fn test_render_load_render_is_identical() {
    let document = build();
    let text = document.render();
    let loaded = Document::load(&text).unwrap();
    assert_eq!(loaded.render(), text);
    assert_eq!(loaded.event_count(), document.event_count());
    assert_eq!(Document::load(&loaded.render()).unwrap(), loaded);
}

#[test]
fn test_grouping_matches_iso_calendar() {
    let document = build();
    for year in document.years() {
        for (key, week) in year.weeks() {
            for day in week.days() {
                for event in day.events() {
                    let coord = iso_calendar(&event.date).unwrap();
                    assert_eq!(coord.week_key(), *key, "week of {}", event.date);
                    assert_eq!(coord.weekday_index(), day.weekday(), "day of {}", event.date);
                    assert_eq!(&event.date[..4], year.year().to_string());
                }
            }
        }
    }
}

#[test]
fn test_days_sorted_by_start_time_in_output() {
    let text = build().render();
    let monday_starts: Vec<&str> = text
        .lines()
        .filter(|l| l.starts_with("**** <2024-01-15"))
        .map(|l| &l[21..26])
        .collect();
    assert_eq!(monday_starts, vec!["09:00", "09:00", "12:00"]);
}

#[test]
fn test_loaded_document_accepts_more_records() {
    let mut loaded = Document::load(&build().render()).unwrap();
    loaded
        .ingest(&record_json("2024-01-16", "Tuesday", "1000", "1100", &[], &[]))
        .unwrap();

    let mut expected = build();
    expected
        .ingest(&record_json("2024-01-16", "Tuesday", "1000", "1100", &[], &[]))
        .unwrap();
    assert_eq!(loaded.render(), expected.render());
}

#[test]
fn test_duration_survives_round_trip() {
    let text = build().render();
    assert!(text.contains("=>  23:59"));
    assert!(text.contains("=>  04:00"));
    let loaded = Document::load(&text).unwrap();
    assert!(loaded.render().contains("=>  23:59"));
}
