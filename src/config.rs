// File: ./src/config.rs
// Handles configuration loading from a TOML file or the environment.
use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

fn default_location() -> String {
    String::new()
}

/// Immutable run configuration, built once and handed to each component.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Page listing the league's upcoming fixtures.
    pub fixtures_url: String,
    /// Team whose fixtures are exported. Matched exactly, case-sensitive.
    pub team: String,
    /// Directory under which `MyCalendar/MyCalendar.ics` is written.
    pub export_dir: PathBuf,
    /// Venue text copied onto every event.
    #[serde(default = "default_location")]
    pub location: String,
}

impl Config {
    /// Load the configuration from a TOML file.
    /// Returns a contextualized error if reading or parsing fails.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;
        Ok(config)
    }

    /// Build the configuration from environment variables:
    /// `URL`, `TEAM`, `EXPORT_PATH` (required) and `LOCATION` (optional).
    pub fn from_env() -> Result<Self> {
        let fixtures_url =
            env::var("URL").context("URL environment variable not set")?;
        let team = env::var("TEAM").context("TEAM environment variable not set")?;
        let export_dir = env::var("EXPORT_PATH")
            .context("EXPORT_PATH environment variable not set")?;
        let location = env::var("LOCATION").unwrap_or_default();

        Ok(Self {
            fixtures_url,
            team,
            export_dir: PathBuf::from(export_dir),
            location,
        })
    }
}
