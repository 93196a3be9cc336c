use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use crate::api::tags::ApiTags;
use crate::config::app_config::AppInfo;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// "healthy" while the process is serving requests
    pub status: String,
    pub app: String,
    pub version: String,
    pub environment: String,
    /// Current server timestamp (RFC 3339)
    pub timestamp: String,
    pub database: String,
    /// Firebase Storage bucket
    pub storage: String,
    pub auth: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct WelcomeResponse {
    pub message: String,
    pub version: String,
    pub docs: String,
    pub health: String,
}

/// Health API for Cloud Run probes and uptime monitors.
pub struct Api {
    info: AppInfo,
    storage_bucket: String,
}

impl Api {
    pub fn new(info: AppInfo, storage_bucket: String) -> Self {
        Self {
            info,
            storage_bucket,
        }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Public. Returns 200 with `status = "healthy"` while the process is alive.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            app: self.info.name.clone(),
            version: self.info.version.clone(),
            environment: self.info.environment.clone(),
            timestamp: Utc::now().to_rfc3339(),
            database: "PostgreSQL".to_string(),
            storage: self.storage_bucket.clone(),
            auth: "Firebase Authentication".to_string(),
        })
    }

    /// Service welcome
    #[oai(path = "/", method = "get", tag = "ApiTags::Health")]
    async fn root(&self) -> Json<WelcomeResponse> {
        Json(WelcomeResponse {
            message: format!("Welcome to {} API", self.info.name),
            version: self.info.version.clone(),
            docs: "/docs".to_string(),
            health: "/health".to_string(),
        })
    }
}
