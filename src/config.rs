use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

use iseries_date::{CalendarDate, DateOrdinalConverter, DateStyle, MonthBase};

use crate::cli::{Cli, OutputFormat};

/// Top-level configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConverterConfig {
    /// Alternative epoch date; 1899-11-29 when absent.
    #[serde(default)]
    pub epoch: Option<CalendarDate>,

    /// How dates are rendered.
    #[serde(default)]
    pub date_style: DateStyle,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Month numbering of `year month day` triples typed in interactive mode.
    #[serde(default)]
    pub month_base: MonthBase,
}

impl ConverterConfig {
    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse config TOML: {}", path.display()))?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

/// Resolved settings handed to the subcommands.
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    pub converter:  DateOrdinalConverter,
    pub date_style: DateStyle,
    pub format:     OutputFormat,
    pub month_base: MonthBase,
}

impl Settings {
    /// Merges the optional config file with command-line overrides.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = match &cli.config {
            Some(path) => ConverterConfig::load(path)?,
            None => ConverterConfig::default(),
        };
        Self::from_parts(config, cli)
    }

    fn from_parts(config: ConverterConfig, cli: &Cli) -> Result<Self> {
        let epoch = match &cli.epoch {
            Some(raw) => Some(
                raw.parse::<CalendarDate>()
                    .with_context(|| format!("invalid --epoch value: {raw:?}"))?,
            ),
            None => config.epoch,
        };
        let converter = epoch.map_or_else(DateOrdinalConverter::default, DateOrdinalConverter::new);
        let date_style = if cli.us { DateStyle::Us } else { config.date_style };

        let settings = Self {
            converter,
            date_style,
            format: cli.format.unwrap_or(config.format),
            month_base: config.month_base,
        };
        debug!(?settings, "resolved settings");
        Ok(settings)
    }
}
