//! Configuration for mock generation and upload analysis.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Settings for the upload analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Only events from this user are analyzed.
    pub user_id: u64,
    /// Length of the observed span in days, used for inactivity.
    pub span_days: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            user_id: 1,
            span_days: 30,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the analyzed user.
    #[must_use]
    pub const fn with_user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the observed span length.
    #[must_use]
    pub const fn with_span_days(mut self, days: u32) -> Self {
        self.span_days = days;
        self
    }
}

/// Settings for the mock event generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of days to generate, ending today.
    pub days: u32,
    /// Minimum uploads per day (inclusive).
    pub min_per_day: u32,
    /// Maximum uploads per day (inclusive).
    pub max_per_day: u32,
    /// User id stamped on every generated event.
    pub user_id: u64,
    /// Fixed RNG seed; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: 30,
            min_per_day: 1,
            max_per_day: 20,
            user_id: 1,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of generated days.
    #[must_use]
    pub const fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Sets the inclusive per-day upload range.
    #[must_use]
    pub const fn with_per_day(mut self, min: u32, max: u32) -> Self {
        self.min_per_day = min;
        self.max_per_day = max;
        self
    }

    /// Sets the user id of generated events.
    #[must_use]
    pub const fn with_user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets a fixed RNG seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub generator: GeneratorConfig,
}

impl AppConfig {
    /// Creates a new config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location (`$XDG_CONFIG_HOME/upload-insights/config.toml`).
    #[must_use]
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("upload-insights")
            .join("config.toml")
    }

    /// Parses and validates a TOML config document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or holds invalid values.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`.
    ///
    /// With no explicit path the default location is tried, and a missing
    /// default file yields defaults. An explicit path must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, required) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (Self::default_path(), false),
        };

        if !required && !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config = Self::from_toml(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Checks value ranges that the type system cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] describing the first offending value.
    pub fn validate(&self) -> Result<()> {
        let generator = &self.generator;
        if generator.days == 0 {
            return Err(Error::InvalidConfig("generator.days must be at least 1".into()));
        }
        if generator.min_per_day > generator.max_per_day {
            return Err(Error::InvalidConfig(format!(
                "generator.min_per_day ({}) exceeds generator.max_per_day ({})",
                generator.min_per_day, generator.max_per_day
            )));
        }
        if self.analysis.span_days == 0 {
            return Err(Error::InvalidConfig("analysis.span_days must be at least 1".into()));
        }
        Ok(())
    }
}
