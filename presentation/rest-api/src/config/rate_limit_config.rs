use std::num::NonZeroU32;

use super::env::{EnvSource, bool_or, parse_or};

#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub enabled: bool,
    pub per_minute: NonZeroU32,
}

impl RateLimitConfig {
    /// Environment variables:
    /// - RATE_LIMIT_ENABLED (default: true)
    /// - RATE_LIMIT_PER_MINUTE: requests per client IP (default: 60, must be > 0)
    pub fn from_source(source: EnvSource) -> anyhow::Result<Self> {
        Ok(Self {
            enabled: bool_or(source, "RATE_LIMIT_ENABLED", true)?,
            per_minute: parse_or(source, "RATE_LIMIT_PER_MINUTE", NonZeroU32::MIN.saturating_add(59))?,
        })
    }
}
