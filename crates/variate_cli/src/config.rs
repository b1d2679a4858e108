//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! CLI arguments. Defaults reproduce the reference demonstration parameters.

use serde::de::value::StrDeserializer;
use serde::de::IntoDeserializer;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::level_filters::LevelFilter;

/// Environment variable overriding the log level.
pub const LOG_LEVEL_ENV: &str = "VARIATE_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

/// Log levels accepted in the config file, environment and CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    /// Case-insensitive match on the config file names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let name: StrDeserializer<'_, serde::de::value::Error> = lower.as_str().into_deserializer();
        LogLevel::deserialize(name).map_err(|_| ConfigError::InvalidLogLevel(s.to_string()))
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::TRACE,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Error => LevelFilter::ERROR,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&LevelFilter::from(*self), f)
    }
}

/// Linear congruential generator parameters for `uniform` and `normal`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LcgSection {
    pub seed: u64,
    pub multiplier: u64,
    pub increment: u64,
    pub modulus: u64,
    /// Added to `seed` for the angular generator of the `normal` command.
    pub second_seed_offset: u64,
    /// Number of values (or normal pairs) to emit.
    pub count: usize,
}

impl Default for LcgSection {
    fn default() -> Self {
        Self {
            seed: 1,
            multiplier: 43,
            increment: 0,
            modulus: 2048,
            second_seed_offset: 12,
            count: 100_000,
        }
    }
}

/// Beta target and acceptance-rejection parameters for `density` and `sample`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplerSection {
    pub alpha: f64,
    pub beta: f64,
    pub trials: usize,
    pub grid_size: usize,
    /// Fixed seed; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SamplerSection {
    fn default() -> Self {
        Self {
            alpha: 2.0,
            beta: 5.0,
            trials: 5_000,
            grid_size: 1_000,
            seed: None,
        }
    }
}

/// Noisy sine stream parameters for `online`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OnlineSection {
    pub window: usize,
    pub steps: usize,
    pub period: f64,
    pub amplitude: f64,
    /// Fixed noise seed; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for OnlineSection {
    fn default() -> Self {
        Self {
            window: 100,
            steps: 1_000,
            period: 200.0,
            amplitude: 10.0,
            seed: None,
        }
    }
}

/// Full CLI configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VariateConfig {
    pub log_level: LogLevel,
    pub lcg: LcgSection,
    pub sampler: SamplerSection,
    pub online: OnlineSection,
}

impl VariateConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Apply environment variable overrides
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(count) = cli.count {
            self.lcg.count = count;
        }
        if let Some(trials) = cli.trials {
            self.sampler.trials = trials;
        }
        if let Some(grid_size) = cli.grid_size {
            self.sampler.grid_size = grid_size;
        }
        if let Some(steps) = cli.steps {
            self.online.steps = steps;
        }
        if let Some(window) = cli.window {
            self.online.window = window;
        }
        if let Some(seed) = cli.seed {
            self.sampler.seed = Some(seed);
            self.online.seed = Some(seed);
        }
        Ok(())
    }

    /// Validate values that the core constructors do not cover
    ///
    /// Generator bounds, shape parameters, trial counts and window capacity
    /// are checked by the core types when the commands build them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lcg.seed.checked_add(self.lcg.second_seed_offset).is_none() {
            return Err(ConfigError::InvalidValue {
                name: "lcg.second_seed_offset",
                reason: "seed + offset overflows".to_string(),
            });
        }
        if !(self.online.period.is_finite() && self.online.period > 0.0) {
            return Err(ConfigError::InvalidValue {
                name: "online.period",
                reason: format!("{} must be finite and positive", self.online.period),
            });
        }
        if !self.online.amplitude.is_finite() {
            return Err(ConfigError::InvalidValue {
                name: "online.amplitude",
                reason: format!("{} must be finite", self.online.amplitude),
            });
        }
        Ok(())
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// LCG output count override
    pub count: Option<usize>,
    /// Sampler trial count override
    pub trials: Option<usize>,
    /// Envelope grid size override
    pub grid_size: Option<usize>,
    /// Online stream length override
    pub steps: Option<usize>,
    /// Online window capacity override
    pub window: Option<usize>,
    /// Seed override for the entropy-seeded commands
    pub seed: Option<u64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<VariateConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => VariateConfig::from_file(path)?,
        None => VariateConfig::default(),
    };

    config.apply_env()?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = VariateConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.lcg.seed, 1);
        assert_eq!(config.lcg.multiplier, 43);
        assert_eq!(config.lcg.increment, 0);
        assert_eq!(config.lcg.modulus, 2048);
        assert_eq!(config.lcg.second_seed_offset, 12);
        assert_eq!(config.sampler.trials, 5_000);
        assert_eq!(config.sampler.grid_size, 1_000);
        assert_eq!(config.online.window, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("verbose").is_err());
    }

    #[test]
    fn test_log_level_maps_to_filter() {
        assert_eq!(LevelFilter::from(LogLevel::Trace), LevelFilter::TRACE);
        assert_eq!(LevelFilter::from(LogLevel::Error), LevelFilter::ERROR);
        assert_eq!(LevelFilter::from(LogLevel::default()), LevelFilter::INFO);
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::from_str(&LogLevel::Debug.to_string()).unwrap(), LogLevel::Debug);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = VariateConfig::from_toml_str(
            r#"
            log_level = "debug"

            [lcg]
            seed = 15
            modulus = 4096

            [online]
            window = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.lcg.seed, 15);
        assert_eq!(config.lcg.modulus, 4096);
        assert_eq!(config.lcg.multiplier, 43);
        assert_eq!(config.online.window, 25);
        assert_eq!(config.sampler, SamplerSection::default());
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(VariateConfig::from_toml_str("[lcg]\nsed = 3\n").is_err());
        assert!(VariateConfig::from_toml_str("log_level = \"loud\"\n").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sampler]\nalpha = 3.0\nseed = 7").unwrap();

        let config = VariateConfig::from_file(file.path()).unwrap();
        assert_eq!(config.sampler.alpha, 3.0);
        assert_eq!(config.sampler.seed, Some(7));

        let missing = VariateConfig::from_file(Path::new("/nonexistent/variate.toml"));
        assert!(matches!(missing, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sampler]\ntrials = 10\n[online]\nsteps = 3").unwrap();

        let cli = CliArgs {
            config_file: Some(file.path().to_path_buf()),
            trials: Some(20),
            seed: Some(99),
            ..Default::default()
        };
        let config = build_config(&cli).unwrap();
        assert_eq!(config.sampler.trials, 20);
        assert_eq!(config.online.steps, 3);
        assert_eq!(config.sampler.seed, Some(99));
        assert_eq!(config.online.seed, Some(99));
    }

    #[test]
    fn test_validate_rejects_bad_period() {
        let mut config = VariateConfig::default();
        config.online.period = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                name: "online.period",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_seed_overflow() {
        let mut config = VariateConfig::default();
        config.lcg.seed = u64::MAX;
        assert!(config.validate().is_err());
    }
}
