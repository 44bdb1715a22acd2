//! Output formatting utilities

use crate::application::{BuildReport, CheckReport};

/// Summary line for a build or append run
pub fn format_build_report(report: &BuildReport) -> String {
    format!(
        "Wrote {} ({} {} ingested, {} {} total)",
        report.output.display(),
        report.records,
        plural(report.records, "record", "records"),
        report.events,
        plural(report.events, "event", "events"),
    )
}

/// Summary block for a check run
pub fn format_check_report(report: &CheckReport) -> String {
    let mut output = format!("{}\n", report.path.display());
    output.push_str(&format!("  years:  {}\n", report.years));
    output.push_str(&format!("  weeks:  {}\n", report.weeks));
    output.push_str(&format!("  days:   {}\n", report.days));
    output.push_str(&format!("  events: {}\n", report.events));
    if report.canonical {
        output.push_str("  status: ok\n");
    } else {
        output.push_str("  status: differs from canonical rendering\n");
    }
    output
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 {
        one
    } else {
        many
    }
}
