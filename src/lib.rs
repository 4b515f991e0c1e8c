//! upload-insights - descriptive statistics over upload timestamps.
//!
//! The library turns a list of upload events into an [`UploadReport`]:
//! daily/weekly/hourly/weekday frequencies, rolling-window peaks, streaks,
//! inactivity and the average gap between uploads. A seedable
//! [`MockGenerator`] provides synthetic events.
//!
//! # Example
//!
//! ```
//! use upload_insights::{AnalysisConfig, GeneratorConfig, MockGenerator, analyze_uploads};
//!
//! let mut generator = MockGenerator::new(GeneratorConfig::new().with_seed(7));
//! let events = generator.generate();
//!
//! let report = analyze_uploads(&events, &AnalysisConfig::default());
//! assert_eq!(report.total_uploads as usize, events.len());
//! println!("Longest streak: {} days", report.longest_upload_streak_days);
//! ```

#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod format;
pub mod generator;
pub mod stats;
pub mod window;

// Re-export main types for convenience
pub use config::{AnalysisConfig, AppConfig, GeneratorConfig};
pub use error::{Error, Result};
pub use event::{UploadEvent, events_from_json, events_to_json};
pub use generator::MockGenerator;
pub use stats::{LabeledWindow, UploadReport, UploadStatsBuilder, analyze_uploads};
pub use window::{PeakWindow, peak_window};
