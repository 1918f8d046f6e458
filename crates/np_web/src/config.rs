use std::net::SocketAddr;

use np_core::{query, Error, Result};

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Page size used when a request does not name one
    pub default_limit: usize,
    /// Upper bound applied to any requested page size
    pub max_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            default_limit: query::DEFAULT_LIMIT,
            max_limit: query::MAX_LIMIT,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            return Err(Error::Config("default limit must be positive".to_string()));
        }
        if self.default_limit > self.max_limit {
            return Err(Error::Config(format!(
                "default limit {} exceeds max limit {}",
                self.default_limit, self.max_limit
            )));
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| Error::Config(format!("invalid bind address {}:{}: {}", self.host, self.port, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        config.validate().unwrap();
        assert_eq!(config.socket_addr().unwrap().port(), 8000);
    }

    #[test]
    fn test_rejects_inconsistent_limits() {
        let config = ServerConfig { default_limit: 50, max_limit: 20, ..Default::default() };
        assert!(matches!(config.validate(), Err(Error::Config(_))));

        let config = ServerConfig { default_limit: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_host() {
        let config = ServerConfig { host: "not a host".to_string(), ..Default::default() };
        assert!(matches!(config.socket_addr(), Err(Error::Config(_))));
    }
}
