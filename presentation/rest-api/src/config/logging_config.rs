use tracing_subscriber::EnvFilter;

use super::env::{EnvSource, string_or};

#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Json,
    Text,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Environment variables:
    /// - LOG_LEVEL: default filter when RUST_LOG is unset (default: "info")
    /// - LOG_FORMAT: "json" for structured output, anything else for text
    pub fn from_source(source: EnvSource) -> Self {
        let format = match string_or(source, "LOG_FORMAT", "text")
            .to_ascii_lowercase()
            .as_str()
        {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Self {
            level: string_or(source, "LOG_LEVEL", "info").to_ascii_lowercase(),
            format,
        }
    }

    /// Installs the global tracing subscriber. RUST_LOG wins over LOG_LEVEL.
    pub fn init_tracing(&self) {
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = tracing_subscriber::fmt().with_env_filter(env_filter);
        match self.format {
            LogFormat::Json => builder.json().init(),
            LogFormat::Text => builder.init(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::map_source;

    #[test]
    fn should_select_json_format() {
        let config = LoggingConfig::from_source(&map_source(&[
            ("LOG_FORMAT", "JSON"),
            ("LOG_LEVEL", "DEBUG"),
        ]));

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "debug");
    }

    #[test]
    fn should_default_to_text_at_info() {
        let config = LoggingConfig::from_source(&map_source(&[]));

        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.level, "info");
    }

    #[test]
    fn should_fall_back_to_text() {
        let config = LoggingConfig::from_source(&map_source(&[("LOG_FORMAT", "pretty")]));

        assert_eq!(config.format, LogFormat::Text);
    }
}
