use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use serde::Deserialize;
use thiserror::Error;

// ============================================================================
// Config (root)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Config {
    /// Load configuration from a YAML file, then overlay the environment.
    ///
    /// A missing file is not an error; the defaults (plus whatever the
    /// environment provides) are enough to boot.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = match fs::read_to_string(path).await {
            Ok(contents) => serde_yaml::from_str::<Self>(&contents)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        config.upstream.overlay_env(|name| std::env::var(name).ok());
        Ok(config)
    }
}

// ============================================================================
// Environment Overrides
// ============================================================================

/// Environment variable overriding `upstream.base_url`.
pub const ENV_API_BASE_URL: &str = "API_BASE_URL";
/// Environment variable overriding `upstream.api_key`.
pub const ENV_API_KEY: &str = "API_KEY";

// ============================================================================
// Private Helpers (Serde Defaults)
// ============================================================================

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    300
}

// ============================================================================
// ServerConfig
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Per-request timeout applied to the `/api` routes.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

// ============================================================================
// UpstreamConfig
// ============================================================================

/// Upstream storefront API credentials.
///
/// Both halves are optional at load time: the server boots without them and
/// reports the gap per-request instead of refusing to start. The key never
/// leaves the server process.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub api_key: Option<String>,
}

impl UpstreamConfig {
    #[must_use]
    pub fn has_base_url(&self) -> bool {
        self.base_url.as_deref().is_some_and(|v| !v.trim().is_empty())
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|v| !v.trim().is_empty())
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }

    /// Both credential halves, present and non-blank, or nothing.
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let base_url = self.base_url.as_deref().filter(|v| !v.trim().is_empty())?;
        let api_key = self.api_key.as_deref().filter(|v| !v.trim().is_empty())?;
        Some((base_url, api_key))
    }

    /// Fold environment values over the file values.
    ///
    /// `lookup` abstracts `std::env::var` so tests never mutate process
    /// state. Blank values count as unset.
    pub fn overlay_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(base_url) = lookup(ENV_API_BASE_URL).filter(|v| !v.trim().is_empty()) {
            self.base_url = Some(base_url);
        }
        if let Some(api_key) = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
            self.api_key = Some(api_key);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.request_timeout_seconds, 300);
        assert!(config.upstream.base_url.is_none());
        assert!(config.upstream.api_key.is_none());
        assert!(!config.upstream.is_configured());
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_defaults() {
        let tmp_dir = TempDir::new().unwrap();
        let missing_path = tmp_dir.path().join("missing-config.yaml");
        let config = Config::load(missing_path.to_str().unwrap()).await.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
    }

    #[tokio::test]
    async fn test_load_valid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
server:
  host: "127.0.0.1"
  port: 3000
  request_timeout_seconds: 60
"#
        )
        .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.request_timeout_seconds, 60);
    }

    #[tokio::test]
    async fn test_load_partial_yaml_uses_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
server:
  port: 9000
"#
        )
        .unwrap();

        let config = Config::load(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(config.server.host, "0.0.0.0"); // default
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.request_timeout_seconds, 300); // default
    }

    #[tokio::test]
    async fn test_load_invalid_yaml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "server: [unclosed").unwrap();

        let result = Config::load(file.path().to_str().unwrap()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_config_error_display() {
        let io_error = ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "test",
        ));
        assert!(io_error.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_parse_upstream_section() {
        let yaml = r#"
upstream:
  base_url: "https://api.example.org/v1"
  api_key: "secret"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.upstream.credentials(),
            Some(("https://api.example.org/v1", "secret"))
        );
        assert!(config.upstream.is_configured());
    }

    #[test]
    fn test_overlay_env_sets_upstream() {
        let mut upstream = UpstreamConfig::default();
        upstream.overlay_env(|name| match name {
            ENV_API_BASE_URL => Some("https://api.example.org".to_string()),
            ENV_API_KEY => Some("from-env".to_string()),
            _ => None,
        });

        assert_eq!(
            upstream.credentials(),
            Some(("https://api.example.org", "from-env"))
        );
    }

    #[test]
    fn test_overlay_env_wins_over_file_values() {
        let mut upstream = UpstreamConfig {
            base_url: Some("https://from-file.example.org".to_string()),
            api_key: Some("file-key".to_string()),
        };
        upstream.overlay_env(|name| match name {
            ENV_API_KEY => Some("env-key".to_string()),
            _ => None,
        });

        assert_eq!(
            upstream.credentials(),
            Some(("https://from-file.example.org", "env-key"))
        );
    }

    #[test]
    fn test_overlay_env_ignores_blank_values() {
        let mut upstream = UpstreamConfig {
            base_url: Some("https://from-file.example.org".to_string()),
            api_key: Some("file-key".to_string()),
        };
        upstream.overlay_env(|name| match name {
            ENV_API_BASE_URL => Some(String::new()),
            ENV_API_KEY => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(
            upstream.credentials(),
            Some(("https://from-file.example.org", "file-key"))
        );
    }

    #[test]
    fn test_overlay_env_missing_keeps_file_values() {
        let mut upstream = UpstreamConfig {
            base_url: Some("https://from-file.example.org".to_string()),
            api_key: None,
        };
        upstream.overlay_env(|_| None);

        assert_eq!(
            upstream.base_url.as_deref(),
            Some("https://from-file.example.org")
        );
        assert!(upstream.api_key.is_none());
    }

    #[test]
    fn test_credentials_require_both_halves() {
        let upstream = UpstreamConfig {
            base_url: Some("https://api.example.org".to_string()),
            api_key: None,
        };
        assert_eq!(upstream.credentials(), None);
        assert!(upstream.has_base_url());
        assert!(!upstream.has_api_key());

        let upstream = UpstreamConfig {
            base_url: Some("https://api.example.org".to_string()),
            api_key: Some("  ".to_string()),
        };
        assert_eq!(upstream.credentials(), None);
        assert!(!upstream.is_configured());
    }
}
