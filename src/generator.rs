//! Mock upload generator used to feed the analyzer with synthetic data.

use chrono::{Local, NaiveDateTime, TimeDelta};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GeneratorConfig;
use crate::event::{UploadEvent, events_to_json};

/// Produces random per-day uploads over a trailing span of days.
pub struct MockGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl MockGenerator {
    /// Creates a generator, seeding from the config or from the OS.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self { config, rng }
    }

    /// Generates events for the span ending now.
    pub fn generate(&mut self) -> Vec<UploadEvent> {
        let now = Local::now().naive_local();
        self.generate_until(now)
    }

    /// Generates events for the `days` days preceding `anchor`.
    ///
    /// Day `d` starts at `anchor - days + d` and each upload lands a random
    /// hour/minute/second after that, so late offsets can spill into the
    /// following calendar date.
    pub fn generate_until(&mut self, anchor: NaiveDateTime) -> Vec<UploadEvent> {
        let days = i64::from(self.config.days);
        let start = anchor - TimeDelta::days(days);
        let (min, max) = (self.config.min_per_day, self.config.max_per_day.max(self.config.min_per_day));

        let mut events = Vec::new();
        for day in 0..days {
            let day_start = start + TimeDelta::days(day);
            let count = self.rng.random_range(min..=max);
            for _ in 0..count {
                let offset = TimeDelta::hours(self.rng.random_range(0..24))
                    + TimeDelta::minutes(self.rng.random_range(0..60))
                    + TimeDelta::seconds(self.rng.random_range(0..60));
                events.push(UploadEvent::new(self.config.user_id, day_start + offset));
            }
        }

        log::info!(
            "Generated {} uploads over {} days for user {}",
            events.len(),
            days,
            self.config.user_id
        );
        events
    }

    /// Generates events for the span ending now and serializes them to JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn generate_json(&mut self) -> crate::Result<String> {
        let events = self.generate();
        events_to_json(&events)
    }
}
