//! Application configuration
//!
//! Configuration loaded from `.zilla.toml` / `config.toml`, with `ZILLA_*`
//! environment variables as the secondary source.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Shortest accepted spinner interval; smaller values busy-loop the UI
pub const MIN_SPINNER_INTERVAL_MS: u64 = 16;

/// Environment variable names for the fallback configuration source
pub mod env_keys {
    pub const USERNAME: &str = "ZILLA_JIRA_USERNAME";
    pub const APIKEY: &str = "ZILLA_JIRA_APIKEY";
    pub const ORGNAME: &str = "ZILLA_JIRA_ORGNAME";
    pub const CUSTOM_DOMAIN: &str = "ZILLA_JIRA_CUSTOM_DOMAIN";
    pub const ACCESS_TOKEN: &str = "ZILLA_JIRA_ACCESS_TOKEN";
    pub const CACHE_TTL_SECS: &str = "ZILLA_CACHE_TTL_SECS";
    pub const CACHE_MODE: &str = "ZILLA_CACHE_MODE";
}

/// Application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Jira connection settings
    #[serde(default)]
    pub jira: JiraConfig,

    /// Assigned-issues cache settings
    #[serde(default)]
    pub cache: CacheConfig,

    /// Interval between loading spinner frames
    #[serde(default = "default_spinner_interval_ms")]
    pub spinner_interval_ms: u64,
}

/// Jira connection settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct JiraConfig {
    #[serde(default)]
    pub username: String,

    /// API key, used together with `username` for basic auth
    #[serde(default)]
    pub apikey: String,

    /// Atlassian cloud org, resolves to `https://{orgname}.atlassian.net`
    #[serde(default)]
    pub orgname: String,

    /// Full base URL for self-hosted instances; wins over `orgname`
    #[serde(default, alias = "customDomain")]
    pub custom_domain: String,

    /// OAuth/personal access token, used when no API key is set
    #[serde(default, alias = "accessToken")]
    pub access_token: String,
}

/// Assigned-issues cache settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,

    /// Maximum age of a cached response before it is refetched
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,

    /// Whether the cache is read, written, or both
    #[serde(default)]
    pub mode: CachePolicy,
}

/// How the issue cache is used when it is enabled
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CachePolicy {
    /// Serve fresh entries and store every successful fetch
    #[default]
    ReadWrite,

    /// Always fetch, but keep the cache up to date
    WriteOnly,

    /// Serve fresh entries, never update the cache file
    ReadOnly,
}

impl FromStr for CachePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "read_write" => Ok(Self::ReadWrite),
            "write_only" => Ok(Self::WriteOnly),
            "read_only" => Ok(Self::ReadOnly),
            other => Err(format!("unknown cache mode '{}'", other)),
        }
    }
}

fn default_spinner_interval_ms() -> u64 {
    100
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_ttl_secs() -> u64 {
    300
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            ttl_secs: default_cache_ttl_secs(),
            mode: CachePolicy::default(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            jira: JiraConfig::default(),
            cache: CacheConfig::default(),
            spinner_interval_ms: default_spinner_interval_ms(),
        }
    }
}

impl JiraConfig {
    /// Base URL of the Jira instance, if one is configured
    pub fn base_url(&self) -> Option<String> {
        let custom = self.custom_domain.trim();
        if !custom.is_empty() {
            return Some(custom.trim_end_matches('/').to_string());
        }

        let org = self.orgname.trim();
        if !org.is_empty() {
            return Some(format!("https://{}.atlassian.net", org));
        }

        None
    }

    /// Whether any form of credentials is configured
    pub fn has_credentials(&self) -> bool {
        !self.apikey.is_empty() || !self.access_token.is_empty()
    }

    /// Fill empty fields from the given variable lookup
    fn fill_from_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) {
        let fields = [
            (&mut self.username, env_keys::USERNAME),
            (&mut self.apikey, env_keys::APIKEY),
            (&mut self.orgname, env_keys::ORGNAME),
            (&mut self.custom_domain, env_keys::CUSTOM_DOMAIN),
            (&mut self.access_token, env_keys::ACCESS_TOKEN),
        ];

        for (field, key) in fields {
            if field.is_empty() {
                if let Some(value) = lookup(key).filter(|v| !v.is_empty()) {
                    log::debug!("Using {} from environment", key);
                    *field = value;
                }
            }
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then the config directory, then environment
    pub fn load() -> Self {
        let file = crate::load_config_file().map(|(_, content)| content);
        Self::from_sources(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Build the config from optional file content plus an environment lookup
    ///
    /// Unparseable file content is logged and treated as absent.
    /// Environment values only fill fields the file left empty.
    pub fn from_sources(file: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = match file.map(toml::from_str::<AppConfig>) {
            Some(Ok(config)) => {
                log::info!("Loaded app config from file");
                config
            }
            Some(Err(e)) => {
                log::warn!("Failed to parse config file, falling back to environment: {}", e);
                Self::default()
            }
            None => {
                log::debug!("No config file found, using environment");
                Self::default()
            }
        };

        config.jira.fill_from_env(&lookup);

        if file.is_none() {
            if let Some(ttl) = lookup(env_keys::CACHE_TTL_SECS).and_then(|v| v.parse().ok()) {
                config.cache.ttl_secs = ttl;
            }
            if let Some(mode) = lookup(env_keys::CACHE_MODE) {
                match mode.parse() {
                    Ok(mode) => config.cache.mode = mode,
                    Err(e) => log::warn!("Ignoring {}: {}", env_keys::CACHE_MODE, e),
                }
            }
        }

        if config.spinner_interval_ms < MIN_SPINNER_INTERVAL_MS {
            log::warn!(
                "spinner_interval_ms = {} is too small, using {}",
                config.spinner_interval_ms,
                MIN_SPINNER_INTERVAL_MS
            );
            config.spinner_interval_ms = MIN_SPINNER_INTERVAL_MS;
        }

        if config.jira.base_url().is_none() {
            log::warn!("No Jira org or custom domain configured; fetches will fail");
        }

        config
    }
}
