//! Command-line interface parsing for MonkeyFinder
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! a `StartupConfig` for the application.

use clap::Parser;
use thiserror::Error;

use crate::data::MONKEYS_URL;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The --near value is not a valid "LAT,LON" pair
    #[error("Invalid coordinates: '{0}'. Expected LAT,LON with latitude in -90..=90 and longitude in -180..=180")]
    InvalidCoordinates(String),
}

/// MonkeyFinder - Browse monkeys and rate them
#[derive(Parser, Debug)]
#[command(name = "monkeyfinder")]
#[command(about = "Browse monkey species and give them star ratings")]
#[command(version)]
pub struct Cli {
    /// URL of the monkey catalog (a JSON array of monkeys)
    #[arg(long, value_name = "URL", default_value = MONKEYS_URL)]
    pub url: String,

    /// Print to stdout instead of starting the interactive view
    #[arg(long)]
    pub plain: bool,

    /// Show the details of a single monkey
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Find the monkey closest to a location
    ///
    /// Example:
    ///   monkeyfinder --plain --near 49.28,-123.12
    #[arg(long, value_name = "LAT,LON", allow_hyphen_values = true)]
    pub near: Option<String>,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone, PartialEq)]
pub struct StartupConfig {
    /// Catalog endpoint
    pub url: String,
    /// Whether to print instead of running the interactive view
    pub plain: bool,
    /// Monkey to show first, if any
    pub initial_monkey: Option<String>,
    /// Location to find the closest monkey to
    pub near: Option<(f64, f64)>,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            url: MONKEYS_URL.to_string(),
            plain: false,
            initial_monkey: None,
            near: None,
        }
    }
}

/// Parses a "LAT,LON" argument into a coordinate pair.
///
/// # Returns
/// * `Ok((lat, lon))` if both parts parse and are in range
/// * `Err(CliError::InvalidCoordinates)` otherwise
pub fn parse_coordinates(s: &str) -> Result<(f64, f64), CliError> {
    let invalid = || CliError::InvalidCoordinates(s.to_string());

    let (lat, lon) = s.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(invalid());
    }

    Ok((lat, lon))
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(StartupConfig)` with appropriate settings
    /// * `Err(CliError)` if --near was malformed
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let near = cli.near.as_deref().map(parse_coordinates).transpose()?;

        Ok(StartupConfig {
            url: cli.url.clone(),
            plain: cli.plain,
            initial_monkey: cli.name.clone(),
            near,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates_valid() {
        assert_eq!(parse_coordinates("49.28,-123.12").unwrap(), (49.28, -123.12));
        assert_eq!(parse_coordinates(" -8.5 , 34 ").unwrap(), (-8.5, 34.0));
    }

    #[test]
    fn test_parse_coordinates_bounds() {
        assert!(parse_coordinates("90,180").is_ok());
        assert!(parse_coordinates("-90,-180").is_ok());
        assert!(parse_coordinates("91,0").is_err());
        assert!(parse_coordinates("0,-181").is_err());
    }

    #[test]
    fn test_parse_coordinates_invalid() {
        for input in ["", "49.28", "abc,def", "1,2,3", "NaN,0"] {
            let err = parse_coordinates(input).unwrap_err();
            assert!(
                err.to_string().contains("Invalid coordinates"),
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert_eq!(config.url, MONKEYS_URL);
        assert!(!config.plain);
        assert!(config.initial_monkey.is_none());
        assert!(config.near.is_none());
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["monkeyfinder"]);
        assert_eq!(cli.url, MONKEYS_URL);
        assert!(!cli.plain);
        assert!(cli.name.is_none());
        assert!(cli.near.is_none());
    }

    #[test]
    fn test_startup_config_from_cli_no_args_is_default() {
        let cli = Cli::parse_from(["monkeyfinder"]);
        let config = StartupConfig::from_cli(&cli).unwrap();
        assert_eq!(config, StartupConfig::default());
    }

    #[test]
    fn test_startup_config_from_cli_all_flags() {
        let cli = Cli::parse_from([
            "monkeyfinder",
            "--url",
            "http://localhost:9000/monkeys.json",
            "--plain",
            "--name",
            "Proboscis Monkey",
            "--near",
            "-8.78,34.5",
        ]);
        let config = StartupConfig::from_cli(&cli).unwrap();

        assert_eq!(config.url, "http://localhost:9000/monkeys.json");
        assert!(config.plain);
        assert_eq!(config.initial_monkey.as_deref(), Some("Proboscis Monkey"));
        assert_eq!(config.near, Some((-8.78, 34.5)));
    }

    #[test]
    fn test_startup_config_from_cli_invalid_near() {
        let cli = Cli::parse_from(["monkeyfinder", "--near", "north"]);
        assert!(StartupConfig::from_cli(&cli).is_err());
    }
}
