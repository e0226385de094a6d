//! Configuration for the paste service client.
//!
//! # Environment Variables
//!
//! - `PASTEBURN_URL` - Service base URL (default `http://127.0.0.1:8000`)
//! - `PASTEBURN_TIMEOUT_SECS` - Request timeout in seconds
//! - `PASTEBURN_ALERT_MS` - How long alerts stay visible, in milliseconds

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::{Host, Url};

/// Base URL of a service running on the local machine.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default alert lifetime.
pub const DEFAULT_ALERT_MS: u64 = 7000;

/// Connection settings for a paste service and session behaviour.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service base URL (e.g., "http://127.0.0.1:8000").
    pub base_url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// How long an alert stays visible, in milliseconds.
    #[serde(default = "default_alert_ms")]
    pub alert_duration_ms: u64,
}

fn default_timeout() -> u64 {
    30
}

fn default_alert_ms() -> u64 {
    DEFAULT_ALERT_MS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::local()
    }
}

impl ServiceConfig {
    /// Create a new configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout(),
            alert_duration_ms: default_alert_ms(),
        }
    }

    /// Service running on the local machine at the default port.
    pub fn local() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }

    /// Load configuration from `PASTEBURN_*` environment variables.
    ///
    /// Unset or unparsable values fall back to defaults.
    pub fn from_env() -> Self {
        let mut config = match std::env::var("PASTEBURN_URL") {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::local(),
        };

        if let Some(secs) = env_u64("PASTEBURN_TIMEOUT_SECS") {
            config.timeout_secs = secs;
        }
        if let Some(ms) = env_u64("PASTEBURN_ALERT_MS") {
            config.alert_duration_ms = ms;
        }

        config
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the alert lifetime.
    pub fn with_alert_duration(mut self, ms: u64) -> Self {
        self.alert_duration_ms = ms;
        self
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Alert lifetime as a `Duration`.
    pub fn alert_duration(&self) -> Duration {
        Duration::from_millis(self.alert_duration_ms)
    }

    /// Whether keys sent to this service are protected by the transport.
    ///
    /// Plain `http` is only accepted silently for loopback hosts.
    pub fn is_transport_protected(&self) -> bool {
        let Ok(url) = Url::parse(self.base_url.trim()) else {
            return false;
        };
        match url.scheme() {
            "https" => true,
            "http" => match url.host() {
                Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
                Some(Host::Ipv4(addr)) => addr.is_loopback(),
                Some(Host::Ipv6(addr)) => addr.is_loopback(),
                None => false,
            },
            _ => false,
        }
    }
}

fn env_u64(name: &str) -> Option<u64> {
    std::env::var(name).ok()?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_defaults() {
        let config = ServiceConfig::local();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.alert_duration(), Duration::from_millis(7000));
    }

    #[test]
    fn test_builder() {
        let config = ServiceConfig::new("https://paste.example.org")
            .with_timeout(5)
            .with_alert_duration(250);

        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.alert_duration_ms, 250);
    }

    #[test]
    fn test_serde_defaults() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:9000"}"#).unwrap();
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.alert_duration_ms, 7000);
    }

    #[test]
    fn test_transport_protection() {
        assert!(ServiceConfig::new("https://paste.example.org").is_transport_protected());
        assert!(ServiceConfig::local().is_transport_protected());
        assert!(ServiceConfig::new("http://localhost:8000/").is_transport_protected());
        assert!(ServiceConfig::new("http://[::1]:8000").is_transport_protected());
        assert!(!ServiceConfig::new("http://paste.example.org").is_transport_protected());
        assert!(!ServiceConfig::new("http://10.0.0.7:8000").is_transport_protected());
        assert!(ServiceConfig::new("http://127.0.0.2:8000").is_transport_protected());
        assert!(ServiceConfig::new("http://LOCALHOST:8000").is_transport_protected());
    }

    #[test]
    fn test_transport_protection_reads_host_not_userinfo() {
        let config = ServiceConfig::new("http://127.0.0.1:x@paste.example.org/");
        assert!(!config.is_transport_protected());

        let config = ServiceConfig::new("http://localhost@paste.example.org:8000");
        assert!(!config.is_transport_protected());

        assert!(!ServiceConfig::new("not a url").is_transport_protected());
    }
}
