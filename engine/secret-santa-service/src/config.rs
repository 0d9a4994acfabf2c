//! Service configuration management
//!
//! Layers, lowest precedence first: defaults, TOML file, `SANTA_*` environment
//! variables, command line flags.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use santa_draw::DrawConfig;
use santa_notifier::{NotifierConfig, TransportKind};

/// Main service configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Participant list and draw settings
    pub draw: DrawConfig,

    /// Notification settings
    pub notifier: NotifierConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (pretty, compact, json)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), format: "pretty".to_string() }
    }
}

/// Load configuration from an optional TOML file, then the environment
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig> {
    let mut config = match path {
        Some(path) => {
            tracing::debug!("Loading configuration from file: {:?}", path);
            load_from_file(path)?
        }
        None => ServiceConfig::default(),
    };

    load_from_env(&mut config)?;
    Ok(config)
}

/// Load configuration from a TOML file
pub fn load_from_file(path: &Path) -> Result<ServiceConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {path:?}"))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse configuration file: {path:?}"))
}

/// Save configuration to a TOML file
pub fn save_config(config: &ServiceConfig, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config).context("Failed to serialize configuration")?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write configuration file: {path:?}"))
}

/// Override configuration with environment variables
pub fn load_from_env(config: &mut ServiceConfig) -> Result<()> {
    apply_env(config, |key| std::env::var(key).ok())
}

/// Override configuration with variables from the given lookup
pub fn apply_env<F>(config: &mut ServiceConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(domain) = lookup("SANTA_DOMAIN") {
        config.draw.loader.domain = domain;
    }

    if let Some(participants) = lookup("SANTA_PARTICIPANTS") {
        config.draw.participants_file = PathBuf::from(participants);
    }

    if let Some(seed) = lookup("SANTA_SEED") {
        let seed = seed.parse().with_context(|| format!("Invalid SANTA_SEED: {seed}"))?;
        config.draw.seed = Some(seed);
    }

    if let Some(outbox) = lookup("SANTA_OUTBOX") {
        config.notifier.transport = TransportKind::Outbox;
        config.notifier.outbox_dir = PathBuf::from(outbox);
    }

    if let Some(sender) = lookup("SANTA_SENDER") {
        config.notifier.sender = sender;
    }

    if let Some(host) = lookup("SANTA_SMTP_HOST") {
        config.notifier.transport = TransportKind::Smtp;
        config.notifier.smtp.host = host;
    }

    if let Some(port) = lookup("SANTA_SMTP_PORT") {
        config.notifier.smtp.port =
            port.parse().with_context(|| format!("Invalid SANTA_SMTP_PORT: {port}"))?;
    }

    if let Some(username) = lookup("SANTA_SMTP_USERNAME") {
        config.notifier.smtp.username = Some(username);
    }

    // The password has no file setting and no default
    if let Some(password) = lookup("SANTA_SMTP_PASSWORD") {
        config.notifier.smtp.password = Some(password);
    }

    if let Some(level) = lookup("SANTA_LOG_LEVEL") {
        config.logging.level = level;
    }

    if let Some(format) = lookup("SANTA_LOG_FORMAT") {
        config.logging.format = format;
    }

    Ok(())
}

/// Validate configuration
pub fn validate_config(config: &ServiceConfig) -> Result<()> {
    config.draw.validate().context("Invalid draw configuration")?;
    config.notifier.validate().context("Invalid notifier configuration")?;

    match config.logging.level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.logging.level)),
    }

    match config.logging.format.as_str() {
        "json" | "pretty" | "compact" => {}
        _ => return Err(anyhow!("Invalid log format: {}", config.logging.format)),
    }

    Ok(())
}
