//! Text rendering of an upload report.

use std::fmt::Write;

use crate::format::{format_interval, weekday_name};
use crate::UploadReport;

const SEPARATOR: &str = "────────────────────────────────────────────────────────────";

/// Renders the report as the human-readable summary printed by the CLI.
#[must_use]
pub fn render_report(report: &UploadReport) -> String {
    let mut out = String::new();
    write_report(&mut out, report).expect("writing to a String is infallible");
    out
}

fn write_report(out: &mut String, report: &UploadReport) -> std::fmt::Result {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "Upload Summary")?;
    writeln!(out, "{SEPARATOR}")?;

    writeln!(out, "  Total uploads:       {}", report.total_uploads)?;
    writeln!(out, "  Active days:         {}", report.unique_days_active)?;
    writeln!(out, "  Inactive days:       {}", report.inactive_days_count)?;
    writeln!(out, "  Longest streak:      {} day(s)", report.longest_upload_streak_days)?;

    if let Some(day) = report.most_active_day {
        writeln!(
            out,
            "  Most active day:     {day} ({} uploads)",
            report.most_active_day_uploads
        )?;
    }
    if let Some(week) = report.busiest_week {
        writeln!(out, "  Busiest ISO week:    {week}")?;
    }

    writeln!(
        out,
        "  Avg interval:        {} / {:.2} h",
        format_interval(report.average_upload_interval_minutes),
        report.average_upload_interval_hours
    )?;
    writeln!(
        out,
        "  Peak 3-hour window:  {} ({} uploads)",
        report.peak_3_hour_window.label, report.peak_3_hour_window.window.uploads
    )?;
    writeln!(
        out,
        "  Peak 3-day window:   {} ({} uploads)",
        report.peak_3_day_window.label, report.peak_3_day_window.window.uploads
    )?;

    if !report.uploads_by_hour.is_empty() {
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out, "Uploads by hour")?;
        for (hour, count) in &report.uploads_by_hour {
            writeln!(out, "  {hour:>2}:00  {count}")?;
        }
    }

    if !report.uploads_by_weekday.is_empty() {
        writeln!(out, "{SEPARATOR}")?;
        writeln!(out, "Uploads by weekday")?;
        for (day, count) in &report.uploads_by_weekday {
            writeln!(out, "  {:<10} {count}", weekday_name(*day))?;
        }
    }

    writeln!(out, "{SEPARATOR}")
}

/// Prints the text summary to stdout.
pub fn print_report(report: &UploadReport) {
    print!("{}", render_report(report));
}
