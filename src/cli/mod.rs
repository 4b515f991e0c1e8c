//! CLI mode: generate mock uploads, analyze them and print the report.

mod report;

use std::path::PathBuf;

use crate::{AppConfig, Error, MockGenerator, Result, analyze_uploads, events_from_json};

pub use report::{print_report, render_report};

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Print JSON instead of the text summary.
    pub json: bool,
    /// Overrides the generator seed from the config file.
    pub seed: Option<u64>,
    /// Explicit config file path.
    pub config_path: Option<PathBuf>,
    /// Show usage and exit.
    pub help: bool,
}

/// Usage text for the `uploads` binary.
pub const USAGE: &str = "\
Usage: uploads [OPTIONS]

Generates 30 days of mock uploads and prints upload statistics.

Options:
  --json              Print the report as JSON
  --seed <N>          Seed the mock generator for reproducible output
  --config <PATH>     Read settings from a TOML file
                      (default: $XDG_CONFIG_HOME/upload-insights/config.toml)
  -h, --help          Show this help

Set RUST_LOG=debug for diagnostic logging.";

/// Parses arguments (without the program name).
///
/// # Errors
///
/// Returns [`Error::Usage`] for unknown options, missing or invalid values.
pub fn parse_args<I>(args: I) -> Result<CliOptions>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--seed" => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::Usage("--seed requires a value".into()))?;
                let seed = value
                    .parse()
                    .map_err(|_| Error::Usage(format!("invalid seed: {value}")))?;
                options.seed = Some(seed);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::Usage("--config requires a path".into()))?;
                options.config_path = Some(PathBuf::from(value));
            }
            "-h" | "--help" => options.help = true,
            other => return Err(Error::Usage(format!("Unknown option: {other}"))),
        }
    }

    Ok(options)
}

/// Runs the generate-analyze-print pipeline.
///
/// # Errors
///
/// Returns an error if configuration loading fails or the event payload
/// cannot be serialized or parsed.
pub fn run(options: &CliOptions) -> Result<()> {
    let mut config = AppConfig::load(options.config_path.as_deref())?;
    if let Some(seed) = options.seed {
        config.generator.seed = Some(seed);
    }

    let mut generator = MockGenerator::new(config.generator.clone());
    let payload = generator.generate_json()?;
    let events = events_from_json(&payload)?;

    let report = analyze_uploads(&events, &config.analysis);
    log::info!(
        "Analyzed {} uploads across {} active days",
        report.total_uploads,
        report.unique_days_active
    );

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse_args(Vec::new()).unwrap(), CliOptions::default());
    }

    #[test]
    fn parses_all_options() {
        let options = parse_args(args(&["--json", "--seed", "7", "--config", "/tmp/c.toml"])).unwrap();
        assert!(options.json);
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.config_path, Some(PathBuf::from("/tmp/c.toml")));
        assert!(!options.help);
    }

    #[test]
    fn help_flags() {
        assert!(parse_args(args(&["-h"])).unwrap().help);
        assert!(parse_args(args(&["--help"])).unwrap().help);
    }

    #[test]
    fn rejects_unknown_option() {
        let err = parse_args(args(&["--verbose"])).unwrap_err();
        assert!(matches!(err, Error::Usage(msg) if msg.contains("--verbose")));
    }

    #[test]
    fn rejects_missing_and_invalid_seed() {
        assert!(matches!(parse_args(args(&["--seed"])), Err(Error::Usage(_))));
        assert!(matches!(parse_args(args(&["--seed", "abc"])), Err(Error::Usage(_))));
        assert!(matches!(parse_args(args(&["--config"])), Err(Error::Usage(_))));
    }

    #[test]
    fn run_with_explicit_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[generator]\ndays = 5\nseed = 4\n").unwrap();

        let options = CliOptions {
            json: true,
            config_path: Some(path),
            ..CliOptions::default()
        };
        assert!(run(&options).is_ok());
    }

    #[test]
    fn run_fails_on_invalid_config() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[generator]\nmin_per_day = 9\nmax_per_day = 1\n").unwrap();

        let options = CliOptions {
            config_path: Some(path),
            ..CliOptions::default()
        };
        assert!(matches!(run(&options), Err(Error::InvalidConfig(_))));
    }
}
