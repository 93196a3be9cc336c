use super::cors_config::CorsConfig;
use super::database_config::DatabaseSettings;
use super::env::{EnvSource, bool_or, process_env, string_or};
use super::firebase_config::FirebaseConfig;
use super::hautai_config::hautai_settings;
use super::rate_limit_config::RateLimitConfig;
use super::server_config::ServerConfig;
use hautai::client::HautAISettings;

/// Identity of the running service, reported on `/health` and in the OpenAPI document.
#[derive(Debug, Clone)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
    pub environment: String,
    pub debug: bool,
    pub api_prefix: String,
}

impl AppInfo {
    pub fn from_source(source: EnvSource) -> anyhow::Result<Self> {
        let mut api_prefix = string_or(source, "API_V1_PREFIX", "/api/v1");
        if !api_prefix.starts_with('/') {
            api_prefix.insert(0, '/');
        }

        Ok(Self {
            name: string_or(source, "APP_NAME", "BloomSkin API"),
            version: string_or(source, "APP_VERSION", env!("CARGO_PKG_VERSION")),
            environment: string_or(source, "APP_ENV", "development"),
            debug: bool_or(source, "DEBUG", true)?,
            api_prefix: api_prefix.trim_end_matches('/').to_string(),
        })
    }
}

pub struct AppConfig {
    pub info: AppInfo,
    pub server: ServerConfig,
    pub cors: CorsConfig,
    pub rate_limit: RateLimitConfig,
    pub firebase: FirebaseConfig,
    pub hautai: HautAISettings,
    pub database: DatabaseSettings,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_source(&process_env)
    }

    pub fn from_source(source: EnvSource) -> anyhow::Result<Self> {
        Ok(Self {
            info: AppInfo::from_source(source)?,
            server: ServerConfig::from_source(source)?,
            cors: CorsConfig::from_source(source),
            rate_limit: RateLimitConfig::from_source(source)?,
            firebase: FirebaseConfig::from_source(source),
            hautai: hautai_settings(source),
            database: DatabaseSettings::from_source(source)?,
        })
    }
}
