//! Upload statistics: the analyzer and the report it produces.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Serialize, Serializer};

use crate::config::AnalysisConfig;
use crate::event::UploadEvent;
use crate::format::{hour_range_label, round2, weekday_name, weekday_range_label};
use crate::window::{PeakWindow, peak_window};

/// Width of the rolling hour window.
pub const HOUR_WINDOW: usize = 3;
/// Width of the rolling weekday window.
pub const WEEKDAY_WINDOW: usize = 3;

/// A peak window together with its display label.
///
/// Serializes as the bare label, e.g. `"14:00 to 16:00"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledWindow {
    pub window: PeakWindow,
    pub label: String,
}

impl Serialize for LabeledWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label)
    }
}

/// Descriptive statistics over one user's uploads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadReport {
    /// Mean gap between consecutive uploads, rounded to two decimals.
    pub average_upload_interval_minutes: f64,
    /// Same gap in hours, derived from the unrounded minutes.
    pub average_upload_interval_hours: f64,
    pub total_uploads: u64,
    pub unique_days_active: u32,
    /// Busiest date; the earliest one wins ties.
    pub most_active_day: Option<NaiveDate>,
    pub most_active_day_uploads: u64,
    /// ISO week number with most uploads; the first-seen week wins ties.
    pub busiest_week: Option<u32>,
    /// `(hour, uploads)` sorted by uploads descending.
    pub uploads_by_hour: Vec<(u32, u64)>,
    /// `(weekday, uploads)` sorted by uploads descending.
    #[serde(serialize_with = "serialize_weekday_counts")]
    pub uploads_by_weekday: Vec<(Weekday, u64)>,
    pub peak_3_hour_window: LabeledWindow,
    pub peak_3_day_window: LabeledWindow,
    pub longest_upload_streak_days: u32,
    pub inactive_days_count: u32,
}

#[allow(clippy::ptr_arg)]
fn serialize_weekday_counts<S: Serializer>(
    counts: &Vec<(Weekday, u64)>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(counts.iter().map(|(day, n)| (weekday_name(*day), *n)))
}

/// Counter that remembers the order in which keys were first seen.
///
/// Small key spaces only (hours, weekdays, ISO weeks).
#[derive(Debug)]
struct Tally<K> {
    entries: Vec<(K, u64)>,
}

impl<K: Copy + PartialEq> Tally<K> {
    const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    fn add(&mut self, key: K) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key, 1)),
        }
    }

    /// Highest count; the first-seen key wins ties.
    fn most_common(&self) -> Option<(K, u64)> {
        self.entries.iter().fold(None, |best, &(key, count)| match best {
            Some((_, top)) if top >= count => best,
            _ => Some((key, count)),
        })
    }

    /// Entries by count descending; ties keep first-seen order.
    fn into_sorted(mut self) -> Vec<(K, u64)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
    }
}

/// Accumulates upload statistics in a single forward pass.
///
/// Timestamps must be recorded in chronological order; streaks and
/// intervals are computed against the previously recorded upload.
pub struct UploadStatsBuilder {
    span_days: u32,
    total_uploads: u64,
    daily: BTreeMap<NaiveDate, u64>,
    weekly: Tally<u32>,
    hourly: Tally<u32>,
    by_weekday: Tally<Weekday>,
    first_timestamp: Option<NaiveDateTime>,
    last_timestamp: Option<NaiveDateTime>,
    gap_count: u64,
    current_streak: u32,
    longest_streak: u32,
}

impl UploadStatsBuilder {
    /// Creates an empty builder for a span of `span_days` days.
    #[must_use]
    pub const fn new(span_days: u32) -> Self {
        Self {
            span_days,
            total_uploads: 0,
            daily: BTreeMap::new(),
            weekly: Tally::new(),
            hourly: Tally::new(),
            by_weekday: Tally::new(),
            first_timestamp: None,
            last_timestamp: None,
            gap_count: 0,
            current_streak: 0,
            longest_streak: 0,
        }
    }

    /// Records one upload.
    ///
    /// Debug builds panic if `timestamp` is earlier than the previous one.
    pub fn record(&mut self, timestamp: NaiveDateTime) {
        debug_assert!(
            self.last_timestamp.is_none_or(|prev| prev <= timestamp),
            "uploads must be recorded in chronological order"
        );

        let day = timestamp.date();
        let hour = timestamp.hour();
        let weekday = timestamp.weekday();

        self.total_uploads += 1;
        *self.daily.entry(day).or_insert(0) += 1;
        self.weekly.add(timestamp.iso_week().week());
        self.hourly.add(hour);
        self.by_weekday.add(weekday);

        match self.last_timestamp {
            None => {
                self.current_streak = 1;
                self.first_timestamp = Some(timestamp);
            }
            Some(prev) => {
                let prev_day = prev.date();
                if prev_day.succ_opt() == Some(day) {
                    self.current_streak += 1;
                } else if prev_day != day {
                    self.longest_streak = self.longest_streak.max(self.current_streak);
                    self.current_streak = 1;
                }
                self.gap_count += 1;
            }
        }
        self.last_timestamp = Some(timestamp);
    }

    /// Mean gap between consecutive uploads in minutes, 0 with fewer than two uploads.
    #[allow(clippy::cast_precision_loss)]
    fn average_interval_minutes(&self) -> f64 {
        let (Some(first), Some(last)) = (self.first_timestamp, self.last_timestamp) else {
            return 0.0;
        };
        if self.gap_count == 0 {
            return 0.0;
        }
        // Consecutive gaps sum to the whole span.
        let span = last - first;
        let span_secs = span
            .num_microseconds()
            .map_or_else(|| span.num_milliseconds() as f64 / 1e3, |us| us as f64 / 1e6);
        span_secs / self.gap_count as f64 / 60.0
    }

    /// Per-hour and per-weekday (Monday first) count arrays for window search.
    fn bucket_counts(&self) -> ([u64; 24], [u64; 7]) {
        let mut hours = [0; 24];
        for &(hour, count) in &self.hourly.entries {
            hours[hour as usize] = count;
        }
        let mut weekdays = [0; 7];
        for &(day, count) in &self.by_weekday.entries {
            weekdays[day.num_days_from_monday() as usize] = count;
        }
        (hours, weekdays)
    }

    /// Builds the final report.
    #[must_use]
    pub fn build(self) -> UploadReport {
        let minutes = self.average_interval_minutes();
        let longest_upload_streak_days = self.longest_streak.max(self.current_streak);
        let unique_days_active = u32::try_from(self.daily.len()).unwrap_or(u32::MAX);

        // BTreeMap iterates chronologically, so the first maximum is the earliest date.
        let busiest_day = self.daily.iter().fold(None, |best, (&day, &count)| match best {
            Some((_, top)) if top >= count => best,
            _ => Some((day, count)),
        });

        let (hour_counts, weekday_counts) = self.bucket_counts();
        let hour_peak = peak_window(&hour_counts, HOUR_WINDOW);
        let mut day_peak = peak_window(&weekday_counts, WEEKDAY_WINDOW);
        day_peak.end = day_peak.end.min(6);

        UploadReport {
            average_upload_interval_minutes: round2(minutes),
            average_upload_interval_hours: round2(minutes / 60.0),
            total_uploads: self.total_uploads,
            unique_days_active,
            most_active_day: busiest_day.map(|(day, _)| day),
            most_active_day_uploads: busiest_day.map_or(0, |(_, count)| count),
            busiest_week: self.weekly.most_common().map(|(week, _)| week),
            uploads_by_hour: self.hourly.into_sorted(),
            uploads_by_weekday: self.by_weekday.into_sorted(),
            peak_3_hour_window: LabeledWindow {
                label: hour_range_label(hour_peak.start, hour_peak.end),
                window: hour_peak,
            },
            peak_3_day_window: LabeledWindow {
                label: weekday_range_label(day_peak.start, day_peak.end),
                window: day_peak,
            },
            longest_upload_streak_days,
            inactive_days_count: self.span_days.saturating_sub(unique_days_active),
        }
    }
}

/// Analyzes the uploads of `config.user_id` found in `events`.
///
/// Events are sorted by time before the single accumulation pass; events of
/// other users are ignored. Empty input produces a zeroed report.
#[must_use]
pub fn analyze_uploads(events: &[UploadEvent], config: &AnalysisConfig) -> UploadReport {
    let mut timestamps: Vec<NaiveDateTime> = events
        .iter()
        .filter(|e| e.user_id == config.user_id)
        .map(|e| e.timestamp)
        .collect();
    timestamps.sort_unstable();

    log::debug!(
        "Analyzing {} of {} uploads for user {}",
        timestamps.len(),
        events.len(),
        config.user_id
    );

    let mut builder = UploadStatsBuilder::new(config.span_days);
    for ts in timestamps {
        builder.record(ts);
    }
    builder.build()
}
