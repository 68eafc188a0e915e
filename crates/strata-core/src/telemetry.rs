//! Logging initialisation.

use crate::StrataResult;
use serde::{Deserialize, Serialize};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = crate::StrataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(crate::StrataError::configuration(format!(
                "unknown log format '{other}'"
            ))),
        }
    }
}

/// Default filter directive applied when `RUST_LOG` is unset.
///
/// `level` covers the workspace crates and everything else; sqlx query
/// logging is capped at `warn`.
#[must_use]
pub fn default_directive(level: &str) -> String {
    format!("{level},sqlx=warn")
}

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `level`.
///
/// # Errors
///
/// Returns an internal error if a global subscriber is already installed.
#[cfg(feature = "logging")]
pub fn init_logging(level: &str, format: LogFormat) -> StrataResult<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let registry = tracing_subscriber::registry().with(filter);
    let result = match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
    };

    result.map_err(|e| crate::StrataError::internal(format!("Failed to install logger: {e}")))
}

/// Placeholder for when the logging feature is disabled.
#[cfg(not(feature = "logging"))]
pub fn init_logging(_level: &str, _format: LogFormat) -> StrataResult<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_format() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("PRETTY".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[cfg(feature = "logging")]
    #[test]
    fn test_configured_level_bounds_workspace_logs() {
        use tracing_subscriber::filter::LevelFilter;
        use tracing_subscriber::EnvFilter;

        let warn = EnvFilter::new(default_directive("warn"));
        assert_eq!(warn.max_level_hint(), Some(LevelFilter::WARN));

        let debug = EnvFilter::new(default_directive("debug"));
        assert_eq!(debug.max_level_hint(), Some(LevelFilter::DEBUG));
    }
}
