use matcher::{MatchConfig, DEFAULT_MIN_SCORE};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Bot reply when no corpus line scores above the threshold
pub const DEFAULT_FALLBACK_REPLY: &str = "Sorry, I can't assist with that.";

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server bind address
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum request body size in KB
    #[serde(default = "default_max_body_size_kb")]
    pub max_body_size_kb: usize,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Metrics endpoint enabled
    #[serde(default = "default_true")]
    pub metrics_enabled: bool,

    /// Reference corpus, re-read on every question
    #[serde(default = "default_corpus_path")]
    pub corpus_path: PathBuf,

    /// Best-score threshold a corpus line must exceed to be used as an answer
    #[serde(default = "default_min_score")]
    pub min_score: f64,

    /// Bot reply when no corpus line matches
    #[serde(default = "default_fallback_reply")]
    pub fallback_reply: String,

    /// Chat snapshot loaded at startup and written on shutdown
    #[serde(default)]
    pub snapshot_path: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            port: default_port(),
            timeout_secs: default_timeout_secs(),
            max_body_size_kb: default_max_body_size_kb(),
            enable_cors: default_true(),
            log_level: default_log_level(),
            metrics_enabled: default_true(),
            corpus_path: default_corpus_path(),
            min_score: default_min_score(),
            fallback_reply: default_fallback_reply(),
            snapshot_path: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config files
    ///
    /// Sources, later ones winning: an optional `server.{toml,yaml,json,...}`
    /// file, `LINEQA_SERVER__*` variables, and finally a bare `PORT`.
    pub fn load() -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("server").required(false))
            .add_source(config::Environment::with_prefix("LINEQA_SERVER").separator("__"));

        let mut config: ServerConfig = builder.build()?.try_deserialize()?;

        if let Ok(port) = std::env::var("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|err| anyhow::anyhow!("invalid PORT {port:?}: {err}"))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings the server cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.port == 0 {
            anyhow::bail!("port must be greater than zero");
        }
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        self.match_config().validate()?;
        Ok(())
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr_str = format!("{}:{}", self.bind_addr, self.port);
        Ok(addr_str.parse()?)
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Get max body size in bytes
    pub fn max_body_size(&self) -> usize {
        self.max_body_size_kb * 1024
    }

    /// Matcher settings derived from this config
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig::with_min_score(self.min_score)
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_body_size_kb() -> usize {
    64
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_corpus_path() -> PathBuf {
    PathBuf::from("data.md")
}

fn default_min_score() -> f64 {
    DEFAULT_MIN_SCORE
}

fn default_fallback_reply() -> String {
    DEFAULT_FALLBACK_REPLY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.max_body_size(), 64 * 1024);
        assert_eq!(cfg.corpus_path, PathBuf::from("data.md"));
        assert_eq!(cfg.min_score, 0.1);
        assert_eq!(cfg.fallback_reply, "Sorry, I can't assist with that.");
        assert!(cfg.snapshot_path.is_none());
        assert!(cfg.enable_cors);
        assert!(cfg.metrics_enabled);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = ServerConfig::default();
        let addr = cfg.socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let cfg = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = ServerConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = ServerConfig {
            min_score: 1.2,
            ..Default::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("min_score"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: ServerConfig =
            serde_json::from_str(r#"{"port": 9090, "corpus_path": "corpus/faq.md"}"#).unwrap();
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.corpus_path, PathBuf::from("corpus/faq.md"));
        assert_eq!(cfg.timeout_secs, 30);
        assert_eq!(cfg.match_config(), MatchConfig::default());
    }
}
