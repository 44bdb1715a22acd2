#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn orgcal_cmd() -> Command {
    let mut cmd = Command::cargo_bin("orgcal").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

/// JSON for one record with the given comments and to-dos
pub fn record_json(
    date: &str,
    title: &str,
    start: &str,
    end: &str,
    comments: &[&str],
    todos: &[&str],
) -> String {
    let mut fields = vec![
        format!("\"date0\": \"{}\"", date),
        format!("\"title0\": \"{}\"", title),
        format!("\"time0\": \"{}\"", start),
        format!("\"time1\": \"{}\"", end),
        "\"attendees0\": \"Ann, Bob\"".to_string(),
    ];
    for (i, comment) in comments.iter().enumerate() {
        fields.push(format!("\"comment{}\": \"{}\"", i, comment));
    }
    for (i, todo) in todos.iter().enumerate() {
        fields.push(format!("\"todo{}\": \"{}\"", i, todo));
    }
    format!("{{{}}}", fields.join(", "))
}

pub fn write_file(dir: &Path, name: &str, contents: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}
