//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report rendering configuration.
    #[serde(default)]
    pub report: ReportConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output format for report views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// Aligned text table.
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            other => Err(format!("unknown output format '{other}', expected json or table")),
        }
    }
}

/// Report rendering configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Format used when a command gets no `--format`.
    #[serde(default)]
    pub default_format: OutputFormat,
    /// Rows per page in table views.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Decimal places for monetary columns in exports.
    #[serde(default = "default_export_decimal_places")]
    pub export_decimal_places: u32,
}

fn default_page_size() -> u32 {
    10
}

fn default_export_decimal_places() -> u32 {
    2
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::default(),
            page_size: default_page_size(),
            export_decimal_places: default_export_decimal_places(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "fundline=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, later ones winning: `config/default.toml`,
    /// `config/{RUN_MODE}.toml`, then `FUNDLINE__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("FUNDLINE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        let config = temp_env::with_vars_unset(
            [
                "FUNDLINE__REPORT__PAGE_SIZE",
                "FUNDLINE__REPORT__DEFAULT_FORMAT",
                "FUNDLINE__LOGGING__JSON",
            ],
            AppConfig::load,
        )
        .unwrap();

        assert_eq!(config.report.default_format, OutputFormat::Json);
        assert_eq!(config.report.page_size, 10);
        assert_eq!(config.report.export_decimal_places, 2);
        assert_eq!(config.logging.filter, "fundline=info");
        assert!(!config.logging.json);
    }

    #[test]
    fn test_environment_overrides() {
        let config = temp_env::with_vars(
            [
                ("FUNDLINE__REPORT__PAGE_SIZE", Some("25")),
                ("FUNDLINE__REPORT__DEFAULT_FORMAT", Some("table")),
                ("FUNDLINE__LOGGING__JSON", Some("true")),
            ],
            AppConfig::load,
        )
        .unwrap();

        assert_eq!(config.report.page_size, 25);
        assert_eq!(config.report.default_format, OutputFormat::Table);
        assert!(config.logging.json);
    }

    #[test]
    fn test_malformed_override_is_a_config_error() {
        let err = temp_env::with_var("FUNDLINE__REPORT__PAGE_SIZE", Some("lots"), AppConfig::load)
            .map_err(crate::AppError::from)
            .unwrap_err();

        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_output_format_parses_case_insensitively() {
        assert_eq!("TABLE".parse::<OutputFormat>(), Ok(OutputFormat::Table));
        assert_eq!(" json ".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
