use super::env::{EnvSource, parse_or, string_or};

/// Server configuration for HTTP listener
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Environment variables:
    /// - HOST: address to bind (default: "0.0.0.0")
    /// - PORT: port to bind (default: 8000; Cloud Run injects 8080)
    pub fn from_source(source: EnvSource) -> anyhow::Result<Self> {
        Ok(Self {
            host: string_or(source, "HOST", "0.0.0.0"),
            port: parse_or(source, "PORT", 8000)?,
        })
    }

    /// Get the bind address as "host:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::env::map_source;

    #[test]
    fn should_create_bind_address_from_host_and_port() {
        // Arrange
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };

        // Act
        let address = config.bind_address();

        // Assert
        assert_eq!(address, "127.0.0.1:8080");
    }

    #[test]
    fn should_default_to_all_interfaces_on_port_8000() {
        let config = ServerConfig::from_source(&map_source(&[])).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn should_read_cloud_run_port() {
        let config = ServerConfig::from_source(&map_source(&[("PORT", "8080")])).unwrap();

        assert_eq!(config.port, 8080);
    }
}
