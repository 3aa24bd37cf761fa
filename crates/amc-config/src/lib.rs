//! Configuration for the active mode controller.
//!
//! Layered loading (defaults, TOML file, `AMC_` environment), validation,
//! and translation into `amc_core::ReconcilerConfig` and
//! `amc_api::TransportConfig`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use amc_api::{TlsMode, TransportConfig};
use amc_core::{GeneratorConfig, ReconcilerConfig};

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Reconciliation timing.
    #[serde(default)]
    pub controller: ControllerSection,

    /// Downstream service endpoints.
    #[serde(default)]
    pub services: ServicesSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ControllerSection {
    /// A CBSD not seen for this many seconds is inactive.
    #[serde(default = "default_inactivity_timeout")]
    pub inactivity_timeout_secs: u64,

    #[serde(default = "default_polling_interval")]
    pub polling_interval_secs: u64,

    /// Upper bound on one action delivery.
    #[serde(default = "default_send_timeout")]
    pub send_timeout_secs: u64,
}

impl Default for ControllerSection {
    fn default() -> Self {
        Self {
            inactivity_timeout_secs: default_inactivity_timeout(),
            polling_interval_secs: default_polling_interval(),
            send_timeout_secs: default_send_timeout(),
        }
    }
}

fn default_inactivity_timeout() -> u64 {
    4 * 60 * 60
}
fn default_polling_interval() -> u64 {
    10
}
fn default_send_timeout() -> u64 {
    30
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServicesSection {
    /// Base URL of the radio controller (SAS request sink).
    #[serde(default = "default_radio_controller_url")]
    pub radio_controller_url: String,

    /// Base URL of the active mode service (state source, device registry).
    #[serde(default = "default_active_mode_url")]
    pub active_mode_url: String,

    /// Accept invalid TLS certificates.
    #[serde(default)]
    pub insecure: bool,

    /// Path to a custom CA certificate (PEM).
    pub ca_cert: Option<PathBuf>,

    /// HTTP client timeout.
    #[serde(default = "default_http_timeout")]
    pub timeout_secs: u64,
}

impl Default for ServicesSection {
    fn default() -> Self {
        Self {
            radio_controller_url: default_radio_controller_url(),
            active_mode_url: default_active_mode_url(),
            insecure: false,
            ca_cert: None,
            timeout_secs: default_http_timeout(),
        }
    }
}

fn default_radio_controller_url() -> String {
    "http://127.0.0.1:50053".into()
}
fn default_active_mode_url() -> String {
    "http://127.0.0.1:50052".into()
}
fn default_http_timeout() -> u64 {
    30
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "cbrs", "amc").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("amc");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load and validate the config from defaults, the TOML file at `path`
/// (or [`config_path`]) and `AMC_`-prefixed environment variables.
///
/// Nested keys use a double underscore: `AMC_CONTROLLER__POLLING_INTERVAL_SECS`.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);

    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(&path))
        .merge(Env::prefixed("AMC_").split("__"));

    let config: Config = figment.extract()?;
    config.validate()?;
    Ok(config)
}

/// Load config, returning the defaults if loading fails.
pub fn load_config_or_default(path: Option<&Path>) -> Config {
    load_config(path).unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write it to `path` (or [`config_path`]).
pub fn save_config(cfg: &Config, path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    let path = path.map_or_else(config_path, Path::to_path_buf);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(&path, toml_str)?;
    Ok(path)
}

// ── Validation and translation ──────────────────────────────────────

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let c = &self.controller;
        require_positive("controller.inactivity_timeout_secs", c.inactivity_timeout_secs)?;
        require_positive("controller.polling_interval_secs", c.polling_interval_secs)?;
        require_positive("controller.send_timeout_secs", c.send_timeout_secs)?;

        let s = &self.services;
        require_url("services.radio_controller_url", &s.radio_controller_url)?;
        require_url("services.active_mode_url", &s.active_mode_url)?;
        require_positive("services.timeout_secs", s.timeout_secs)?;
        Ok(())
    }

    /// Engine settings for `amc_core::Reconciler`.
    pub fn to_reconciler_config(&self) -> ReconcilerConfig {
        let c = &self.controller;
        ReconcilerConfig {
            generator: GeneratorConfig {
                inactivity_timeout: Duration::from_secs(c.inactivity_timeout_secs),
            },
            polling_interval: Duration::from_secs(c.polling_interval_secs),
            send_timeout: Duration::from_secs(c.send_timeout_secs),
        }
    }

    /// HTTP transport settings shared by both service clients.
    pub fn to_transport(&self) -> TransportConfig {
        let s = &self.services;
        let tls = if s.insecure {
            TlsMode::DangerAcceptInvalid
        } else if let Some(ref ca_path) = s.ca_cert {
            TlsMode::CustomCa(ca_path.clone())
        } else {
            TlsMode::System
        };

        TransportConfig {
            tls,
            timeout: Duration::from_secs(s.timeout_secs),
        }
    }
}

fn require_positive(field: &str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::Validation {
            field: field.into(),
            reason: "must be greater than zero".into(),
        });
    }
    Ok(())
}

fn require_url(field: &str, raw: &str) -> Result<(), ConfigError> {
    let url: url::Url = raw.parse().map_err(|e| ConfigError::Validation {
        field: field.into(),
        reason: format!("invalid URL '{raw}': {e}"),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: field.into(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::time::Duration;

    use figment::Jail;
    use pretty_assertions::assert_eq;

    use super::{Config, ConfigError, load_config, save_config};
    use amc_api::TlsMode;

    #[test]
    fn defaults_when_file_missing() {
        Jail::expect_with(|_jail| {
            let config = load_config(Some(Path::new("missing.toml"))).map_err(|e| e.to_string())?;
            assert_eq!(config, Config::default());
            assert_eq!(config.controller.inactivity_timeout_secs, 14_400);
            Ok(())
        });
    }

    #[test]
    fn file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "amc.toml",
                r#"
                [controller]
                polling_interval_secs = 60

                [services]
                active_mode_url = "https://dp.example.net/amc"
                "#,
            )?;
            jail.set_env("AMC_CONTROLLER__POLLING_INTERVAL_SECS", "5");
            jail.set_env("AMC_SERVICES__INSECURE", "true");

            let config = load_config(Some(Path::new("amc.toml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.controller.polling_interval_secs, 5);
            assert_eq!(config.controller.send_timeout_secs, 30);
            assert_eq!(config.services.active_mode_url, "https://dp.example.net/amc");
            assert!(config.services.insecure);
            Ok(())
        });
    }

    #[test]
    fn zero_interval_is_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file("amc.toml", "[controller]\npolling_interval_secs = 0\n")?;
            let err = load_config(Some(Path::new("amc.toml"))).expect_err("validation error");
            assert!(matches!(
                err,
                ConfigError::Validation { ref field, .. } if field == "controller.polling_interval_secs"
            ));
            Ok(())
        });
    }

    #[test]
    fn bad_url_names_the_field() {
        Jail::expect_with(|jail| {
            jail.create_file("amc.toml", "[services]\nradio_controller_url = \"not a url\"\n")?;
            let err = load_config(Some(Path::new("amc.toml"))).expect_err("validation error");
            assert!(err.to_string().contains("services.radio_controller_url"));
            Ok(())
        });
    }

    #[test]
    fn translates_to_engine_and_transport() {
        let mut config = Config::default();
        config.controller.inactivity_timeout_secs = 100;
        config.services.ca_cert = Some("/etc/amc/ca.pem".into());

        let reconciler = config.to_reconciler_config();
        assert_eq!(reconciler.generator.inactivity_timeout, Duration::from_secs(100));
        assert_eq!(reconciler.polling_interval, Duration::from_secs(10));

        let transport = config.to_transport();
        assert_eq!(transport.tls, TlsMode::CustomCa("/etc/amc/ca.pem".into()));

        config.services.insecure = true;
        assert_eq!(config.to_transport().tls, TlsMode::DangerAcceptInvalid);
    }

    #[test]
    fn save_then_load_preserves_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.controller.send_timeout_secs = 12;
        let written = save_config(&config, Some(&path)).expect("save");
        assert_eq!(written, path);

        let loaded = load_config(Some(&path)).expect("load");
        assert_eq!(loaded, config);
    }
}
