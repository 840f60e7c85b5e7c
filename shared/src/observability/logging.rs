//! Structured logging setup for both units

use std::str::FromStr;

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use super::{ObservabilityError, ObservabilityResult};

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable format
    Pretty,
    /// JSON format for log aggregation
    Json,
    /// Compact format
    Compact,
}

impl FromStr for LogFormat {
    type Err = ObservabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            "compact" => Ok(LogFormat::Compact),
            other => Err(ObservabilityError::UnknownFormat(other.to_string())),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub service_name: String,
    pub include_line_numbers: bool,
    pub include_thread_ids: bool,
    /// Lambda's log sink stamps ingestion time itself.
    pub include_timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Pretty,
            service_name: "s3-file-manager".to_string(),
            include_line_numbers: true,
            include_thread_ids: false,
            include_timestamps: true,
        }
    }
}

impl LogConfig {
    /// Overrides the format from `LOG_FORMAT` when it is set.
    pub fn with_env_format(mut self) -> ObservabilityResult<Self> {
        if let Ok(raw) = std::env::var("LOG_FORMAT") {
            self.format = raw.parse()?;
        }
        Ok(self)
    }
}

fn fmt_layer(config: &LogConfig) -> Box<dyn Layer<Registry> + Send + Sync> {
    let layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(config.include_thread_ids)
        .with_line_number(config.include_line_numbers);

    match (config.format, config.include_timestamps) {
        (LogFormat::Pretty, true) => layer.pretty().boxed(),
        (LogFormat::Pretty, false) => layer.pretty().without_time().boxed(),
        (LogFormat::Json, true) => layer.json().with_current_span(true).boxed(),
        (LogFormat::Json, false) => layer
            .json()
            .with_current_span(true)
            .without_time()
            .boxed(),
        (LogFormat::Compact, true) => layer.compact().boxed(),
        (LogFormat::Compact, false) => layer.compact().without_time().boxed(),
    }
}

/// Initialize logging for the unit
pub fn init_logging(config: LogConfig) -> ObservabilityResult<()> {
    // Create filter from environment or config
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    tracing_subscriber::registry()
        .with(fmt_layer(&config))
        .with(env_filter)
        .try_init()
        .map_err(|e| ObservabilityError::Logging(e.to_string()))?;

    tracing::info!(
        service = %config.service_name,
        level = %config.level.as_str(),
        format = ?config.format,
        "Logging initialized"
    );

    Ok(())
}

/// Quick setup with sensible defaults
pub fn init_default_logging(service_name: &str) -> ObservabilityResult<()> {
    init_logging(
        LogConfig {
            service_name: service_name.to_string(),
            ..Default::default()
        }
        .with_env_format()?,
    )
}

/// JSON logging without timestamps, for code running inside Lambda
pub fn init_lambda_logging(service_name: &str) -> ObservabilityResult<()> {
    init_logging(
        LogConfig {
            service_name: service_name.to_string(),
            format: LogFormat::Json,
            level: LogLevel::Info,
            include_line_numbers: false,
            include_thread_ids: false,
            include_timestamps: false,
        }
        .with_env_format()?,
    )
}
