//! Server address.

use std::fmt;

use super::{API_PREFIX, DEFAULT_HOST, DEFAULT_PORT};

/// Where a coderlm server listens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerAddress {
    /// Host name or IP address.
    pub host: String,
    /// TCP port.
    pub port: u16,
}

impl ServerAddress {
    /// Create a server address.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Base URL of the versioned API, without a trailing slash.
    pub fn base_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, API_PREFIX)
    }
}

impl Default for ServerAddress {
    fn default() -> Self {
        Self::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost_3000() {
        let addr = ServerAddress::default();
        assert_eq!(addr.base_url(), "http://127.0.0.1:3000/api/v1");
    }

    #[test]
    fn base_url_uses_host_and_port() {
        let addr = ServerAddress::new("indexer.local", 8080);
        assert_eq!(addr.base_url(), "http://indexer.local:8080/api/v1");
    }

    #[test]
    fn displays_host_and_port() {
        assert_eq!(ServerAddress::new("h", 1).to_string(), "h:1");
    }
}
