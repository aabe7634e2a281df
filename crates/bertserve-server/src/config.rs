//! Server configuration

use bertserve_classifiers::ClassifierConfig;
use bertserve_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port (0 picks an ephemeral port)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Runtime worker threads and maximum in-flight calls
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Prometheus exporter configuration
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Built-in classifier used by the binary
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

impl ServerConfig {
    /// Load configuration from a YAML file, falling back to defaults when it does not exist
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        let config_path = config_path.as_ref();
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        workers: Option<usize>,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(workers) = workers {
            self.workers = workers;
        }
        self
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::config("workers must be at least 1"));
        }
        if self.host.trim().is_empty() {
            return Err(Error::config("host must not be empty"));
        }
        Ok(())
    }

    /// Resolve the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        (self.host.as_str(), self.port)
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| {
                Error::config(format!(
                    "listen address {}:{} did not resolve",
                    self.host, self.port
                ))
            })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
            metrics: MetricsConfig::default(),
            classifier: ClassifierConfig::default(),
        }
    }
}

/// Prometheus exporter configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Install the exporter
    #[serde(default)]
    pub enabled: bool,

    /// Address the exporter's HTTP listener binds to
    #[serde(default = "default_metrics_listen")]
    pub listen: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            listen: default_metrics_listen(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3233
}

fn default_workers() -> usize {
    10
}

fn default_metrics_listen() -> String {
    "127.0.0.1:9233".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.workers, 10);
        assert!(!config.metrics.enabled);
        assert_eq!(config.classifier.kind(), "sentiment");

        let addr = config.socket_addr().unwrap();
        assert!(addr.ip().is_loopback());
        assert_eq!(addr.port(), 3233);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: ServerConfig = serde_yaml::from_str("port: 4000\n").unwrap();
        assert_eq!(config.port, 4000);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.workers, 10);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
host: localhost
port: 5000
workers: 4
metrics:
  enabled: true
classifier:
  kind: lookup
  entries:
    good product: positive
"#
        )
        .unwrap();

        let config = ServerConfig::load(file.path()).unwrap();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 5000);
        assert_eq!(config.workers, 4);
        assert!(config.metrics.enabled);
        assert_eq!(config.metrics.listen, "127.0.0.1:9233");
        assert_eq!(config.classifier.kind(), "lookup");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = ServerConfig::load("/nonexistent/bertserve.yaml").unwrap();
        assert_eq!(config.port, 3233);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "workers: many").unwrap();

        let err = ServerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::default().with_overrides(None, Some(0), Some(2));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 0);
        assert_eq!(config.workers, 2);
    }

    #[test]
    fn test_validate_rejects_zero_workers() {
        let config = ServerConfig::default().with_overrides(None, None, Some(0));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
