pub mod app_config;
pub mod cors_config;
pub mod database_config;
pub mod env;
pub mod firebase_config;
pub mod hautai_config;
pub mod logging_config;
pub mod rate_limit_config;
pub mod server_config;
