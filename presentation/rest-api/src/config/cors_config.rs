use poem::middleware::Cors;

use super::env::{EnvSource, string_or};

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:8000";

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub origins: Vec<String>,
}

impl CorsConfig {
    /// Environment variables:
    /// - BACKEND_CORS_ORIGINS: Comma-separated list of allowed origins
    ///   (default: "http://localhost:3000,http://localhost:8000")
    pub fn from_source(source: EnvSource) -> Self {
        let origins = string_or(source, "BACKEND_CORS_ORIGINS", DEFAULT_ORIGINS)
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Self { origins }
    }

    /// Builds the CORS middleware: configured origins, any method and header, credentials allowed.
    pub fn middleware(&self) -> Cors {
        Cors::new()
            .allow_origins(self.origins.iter().map(String::as_str))
            .allow_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
            .allow_headers(vec!["content-type", "authorization", "x-requested-with"])
            .allow_credentials(true)
    }
}
