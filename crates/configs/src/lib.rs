use std::path::Path;

use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4) }
    }
}

/// Behaviour switches for the HTTP surface.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Answer missing people/colors with 404 instead of 200.
    #[serde(default = "default_true")]
    pub strict_not_found: bool,
    /// Start the people store with the two example records.
    #[serde(default = "default_true")]
    pub seed_people: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { strict_not_found: true, seed_people: true }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    #[serde(default)]
    pub filter: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".into()
}

fn default_port() -> u16 {
    8080
}

fn default_true() -> bool {
    true
}

pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Load `CONFIG_PATH`; a missing file falls back to defaults plus
    /// `SERVER_HOST` / `SERVER_PORT`. A file that exists but does not parse
    /// or validate is an error.
    pub fn load_or_default() -> Result<Self> {
        let path = config_path();
        if Path::new(&path).exists() {
            return Self::load_and_validate();
        }
        let mut cfg = AppConfig::default();
        cfg.server.apply_env();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()
    }
}

impl ServerConfig {
    fn apply_env(&mut self) {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            self.port = port;
        }
    }

    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(w) if w > 0 => {}
            _ => self.worker_threads = Some(4),
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() -> Result<()> {
        let mut cfg = load_from_str("")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert!(cfg.api.strict_not_found);
        assert!(cfg.api.seed_people);
        assert_eq!(cfg.log.format, LogFormat::Compact);
        assert_eq!(cfg.log.filter, None);
        Ok(())
    }

    #[test]
    fn sections_override_defaults() -> Result<()> {
        let mut cfg = load_from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            worker_threads = 0

            [api]
            strict_not_found = false
            seed_people = false

            [log]
            format = "json"
            filter = "warn,service=trace"
            "#,
        )?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.bind_addr(), "0.0.0.0:9000");
        assert_eq!(cfg.server.worker_threads, Some(4));
        assert!(!cfg.api.strict_not_found);
        assert!(!cfg.api.seed_people);
        assert_eq!(cfg.log.format, LogFormat::Json);
        assert_eq!(cfg.log.filter.as_deref(), Some("warn,service=trace"));
        Ok(())
    }

    #[test]
    fn port_zero_is_rejected() {
        let mut cfg = load_from_str("[server]\nport = 0\n").expect("parse");
        assert!(cfg.normalize_and_validate().is_err());
    }

    #[test]
    fn unknown_log_format_fails_to_parse() {
        assert!(load_from_str("[log]\nformat = \"xml\"\n").is_err());
    }

    #[test]
    fn blank_host_falls_back_to_loopback() -> Result<()> {
        let mut cfg = load_from_str("[server]\nhost = \"  \"\n")?;
        cfg.normalize_and_validate()?;
        assert_eq!(cfg.server.host, "127.0.0.1");
        Ok(())
    }
}
