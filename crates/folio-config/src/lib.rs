//! Shared configuration for the folio CLI.
//!
//! TOML profiles layered with environment variables, and translation to
//! `folio_core::PortfolioConfig`. The CLI adds `GlobalOpts`-aware wrappers
//! on top.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use folio_api::RetryPolicy;
use folio_core::{PortfolioConfig, SearchPolicy};

/// API origin used when no profile or flag names one.
pub const DEFAULT_API_URL: &str = folio_api::DEFAULT_BASE_URL;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found in config")]
    UnknownProfile { name: String },

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
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Response cache lifetime, e.g. `"5m"` or `"90s"`.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl: String,

    /// Retries for failed reads. 0 disables retrying.
    #[serde(default)]
    pub retries: u32,

    /// `compose` or `override`.
    #[serde(default = "default_search_policy")]
    pub search_policy: String,

    /// Blog posts per page.
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
            cache_ttl: default_cache_ttl(),
            retries: 0,
            search_policy: default_search_policy(),
            per_page: default_per_page(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_cache_ttl() -> String {
    "5m".into()
}
fn default_search_policy() -> String {
    SearchPolicy::default().to_string()
}
fn default_per_page() -> usize {
    folio_core::DEFAULT_PER_PAGE
}

/// A named backend profile. Unset fields fall back to `[defaults]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// API origin (e.g. "https://portfolio.example.com/api").
    pub api_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_ttl: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_policy: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<usize>,
}

impl Profile {
    /// Profile with only an origin set.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            timeout: None,
            cache_ttl: None,
            retries: None,
            search_policy: None,
            per_page: None,
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("dev", "folio", "folio").map_or_else(
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
    p.push("folio");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from a specific file + environment. A missing file yields the
/// defaults.
///
/// Environment variables use a double underscore for nesting, e.g.
/// `FOLIO_DEFAULT_PROFILE=prod` or `FOLIO_DEFAULTS__TIMEOUT=10`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("FOLIO_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Value parsing ───────────────────────────────────────────────────

/// Parse a humantime duration such as `"5m"` or `"1h 30m"`.
pub fn parse_ttl(raw: &str) -> Result<Duration, ConfigError> {
    humantime::parse_duration(raw.trim()).map_err(|e| ConfigError::Validation {
        field: "cache_ttl".into(),
        reason: format!("'{raw}': {e}"),
    })
}

pub fn parse_search_policy(raw: &str) -> Result<SearchPolicy, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "search_policy".into(),
            reason: format!("expected 'compose' or 'override', got '{raw}'"),
        })
}

pub fn parse_api_url(raw: &str) -> Result<url::Url, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Validation {
        field: "api_url".into(),
        reason: format!("invalid URL: {raw}"),
    })
}

/// Request timeout in whole seconds; zero would fail every request.
pub fn parse_timeout(secs: u64) -> Result<Duration, ConfigError> {
    if secs == 0 {
        return Err(ConfigError::Validation {
            field: "timeout".into(),
            reason: "must be at least 1 second".into(),
        });
    }
    Ok(Duration::from_secs(secs))
}

/// Retry count for reads, `0` disables retrying.
pub fn parse_retries(retries: u32) -> Result<RetryPolicy, ConfigError> {
    match retries {
        0 => Ok(RetryPolicy::none()),
        n if n <= RetryPolicy::MAX_RETRIES => Ok(RetryPolicy::with_retries(n)),
        n => Err(ConfigError::Validation {
            field: "retries".into(),
            reason: format!("{n} exceeds the maximum of {}", RetryPolicy::MAX_RETRIES),
        }),
    }
}

// ── Translation ─────────────────────────────────────────────────────

/// Build a `PortfolioConfig` from a profile, falling back to `defaults`
/// for anything the profile leaves unset. No CLI flag overrides.
pub fn profile_to_portfolio_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<PortfolioConfig, ConfigError> {
    let base_url = parse_api_url(&profile.api_url)?;
    let cache_ttl = parse_ttl(profile.cache_ttl.as_deref().unwrap_or(&defaults.cache_ttl))?;
    let search_policy = parse_search_policy(
        profile
            .search_policy
            .as_deref()
            .unwrap_or(&defaults.search_policy),
    )?;

    Ok(PortfolioConfig {
        base_url,
        timeout: parse_timeout(profile.timeout.unwrap_or(defaults.timeout))?,
        cache_ttl,
        retry: parse_retries(profile.retries.unwrap_or(defaults.retries))?,
        search_policy,
        per_page: profile.per_page.unwrap_or(defaults.per_page).max(1),
    })
}

/// Build a `PortfolioConfig` for an origin with no profile behind it.
pub fn defaults_to_portfolio_config(
    api_url: &str,
    defaults: &Defaults,
) -> Result<PortfolioConfig, ConfigError> {
    profile_to_portfolio_config(&Profile::new(api_url), defaults)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn write(dir: &tempfile::TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert_eq!(cfg.defaults.cache_ttl, "5m");
        assert_eq!(cfg.defaults.search_policy, "compose");
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            r#"
default_profile = "prod"

[defaults]
output = "json"
cache_ttl = "90s"

[profiles.prod]
api_url = "https://portfolio.example.com/api"
retries = 2
search_policy = "override"
"#,
        );

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("prod"));
        assert_eq!(cfg.defaults.output, "json");
        assert_eq!(cfg.defaults.timeout, 30);

        let prod = cfg.profile("prod").unwrap();
        let pc = profile_to_portfolio_config(prod, &cfg.defaults).unwrap();
        assert_eq!(pc.base_url.as_str(), "https://portfolio.example.com/api");
        assert_eq!(pc.cache_ttl, Duration::from_secs(90));
        assert_eq!(pc.retry.max_retries, 2);
        assert_eq!(pc.search_policy, SearchPolicy::Override);
        assert_eq!(pc.per_page, 9);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        let mut profile = Profile::new("http://localhost:5000/api");
        profile.cache_ttl = Some("10m".into());
        cfg.profiles.insert("default".into(), profile);

        save_config_to(&cfg, &path).unwrap();
        assert_eq!(load_config_from(&path).unwrap(), cfg);
    }

    #[test]
    fn invalid_ttl_is_a_validation_error() {
        let err = parse_ttl("five minutes").unwrap_err();
        assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "cache_ttl"));
    }

    #[test]
    fn invalid_policy_is_rejected() {
        let profile = Profile {
            search_policy: Some("sometimes".into()),
            ..Profile::new("http://localhost:5000/api")
        };
        let err = profile_to_portfolio_config(&profile, &Defaults::default()).unwrap_err();
        assert!(err.to_string().contains("search_policy"));
    }

    #[test]
    fn invalid_url_is_rejected() {
        let err = defaults_to_portfolio_config("not a url", &Defaults::default()).unwrap_err();
        assert!(err.to_string().contains("api_url"));
    }

    #[test]
    fn zero_retries_means_no_retry() {
        let pc = defaults_to_portfolio_config(DEFAULT_API_URL, &Defaults::default()).unwrap();
        assert_eq!(pc.retry, RetryPolicy::none());
        assert_eq!(pc.timeout, Duration::from_secs(30));
        assert_eq!(pc.cache_ttl, Duration::from_secs(300));
    }

    #[test]
    fn zero_timeout_and_excess_retries_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            r#"
[profiles.default]
api_url = "http://localhost:5000/api"
timeout = 0
"#,
        );
        let cfg = load_config_from(&path).unwrap();
        let profile = cfg.profile("default").unwrap();
        let err = profile_to_portfolio_config(profile, &cfg.defaults).unwrap_err();
        assert!(err.to_string().contains("timeout"), "got: {err}");

        assert!(parse_retries(RetryPolicy::MAX_RETRIES).is_ok());
        assert!(parse_retries(RetryPolicy::MAX_RETRIES + 1).is_err());
        assert_eq!(parse_timeout(5).unwrap(), Duration::from_secs(5));
    }
}
