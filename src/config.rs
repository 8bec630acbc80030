//! Configuration for endpoints, counts and throttling.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (INSPIRE_SOCIAL_GROUP, INSPIRE_USER_AGENT, INSPIRE_OUTPUT)
//! 2. Config file (explicit path, else .inspire/config.yaml, else <config_dir>/inspire/config.yaml)
//! 3. Defaults
//!
//! Config file discovery:
//! - Searches current directory and parents for .inspire/config.yaml
//! - Falls back to the platform config directory
//!
//! The resolved configuration is returned by value and passed explicitly.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::DEFAULT_BUNDLE_FILE;

pub const DEFAULT_QUOTES_URL: &str = "http://quotes.toscrape.com/";
pub const DEFAULT_JOKES_URL: &str = "https://official-joke-api.appspot.com/random_joke";
pub const DEFAULT_FACTS_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/random/summary";
pub const DEFAULT_SOCIAL_BASE_URL: &str = "https://www.reddit.com";
pub const DEFAULT_SOCIAL_LINK_PREFIX: &str = "https://reddit.com";
pub const DEFAULT_SOCIAL_GROUP: &str = "todayilearned";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                                      (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub endpoints: EndpointsConfig,
    #[serde(default)]
    pub counts: CountsConfig,
    #[serde(default)]
    pub throttle: ThrottleConfig,
    #[serde(default)]
    pub social: SocialConfig,
    pub user_agent: Option<String>,
    /// Default bundle file
    pub output: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointsConfig {
    pub quotes: Option<String>,
    pub jokes: Option<String>,
    pub facts: Option<String>,
    pub social_base: Option<String>,
    pub social_link_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountsConfig {
    pub quotes: Option<usize>,
    pub jokes: Option<usize>,
    pub facts: Option<usize>,
    pub social_posts: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThrottleConfig {
    pub request_delay_ms: Option<u64>,
    pub category_delay_ms: Option<u64>,
    pub request_timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialConfig {
    pub group: Option<String>,
}

/// Endpoint URLs for every category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub quotes: String,
    pub jokes: String,
    pub facts: String,
    /// Host serving `/r/<group>/hot.json`
    pub social_base: String,
    /// Prepended to each post's permalink
    pub social_link_prefix: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            quotes: DEFAULT_QUOTES_URL.to_string(),
            jokes: DEFAULT_JOKES_URL.to_string(),
            facts: DEFAULT_FACTS_URL.to_string(),
            social_base: DEFAULT_SOCIAL_BASE_URL.to_string(),
            social_link_prefix: DEFAULT_SOCIAL_LINK_PREFIX.to_string(),
        }
    }
}

impl Endpoints {
    /// Point every endpoint at one base URL (mock servers, mirrors)
    pub fn rooted_at(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            quotes: format!("{}/", base),
            jokes: format!("{}/random_joke", base),
            facts: format!("{}/page/random/summary", base),
            social_base: base.to_string(),
            social_link_prefix: DEFAULT_SOCIAL_LINK_PREFIX.to_string(),
        }
    }
}

/// How many records to request per category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub quotes: usize,
    pub jokes: usize,
    pub facts: usize,
    pub social_posts: usize,
}

impl Default for Counts {
    fn default() -> Self {
        Self {
            quotes: 5,
            jokes: 3,
            facts: 5,
            social_posts: 5,
        }
    }
}

/// Politeness pauses and request timeout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThrottleSettings {
    /// Pause between sequential requests inside one fetcher
    pub request_delay: Duration,
    /// Pause between categories during an aggregation run
    pub category_delay: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for ThrottleSettings {
    fn default() -> Self {
        Self {
            request_delay: Duration::from_millis(500),
            category_delay: Duration::from_millis(1000),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl ThrottleSettings {
    /// No pauses, short timeout (tests, local mirrors)
    pub fn immediate() -> Self {
        Self {
            request_delay: Duration::ZERO,
            category_delay: Duration::ZERO,
            request_timeout: Duration::from_secs(2),
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoints: Endpoints,
    pub counts: Counts,
    pub throttle: ThrottleSettings,
    /// Group whose hot listing is fetched
    pub social_group: String,
    pub user_agent: String,
    /// Default bundle file
    pub output: PathBuf,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            counts: Counts::default(),
            throttle: ThrottleSettings::default(),
            social_group: DEFAULT_SOCIAL_GROUP.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            output: PathBuf::from(DEFAULT_BUNDLE_FILE),
            config_file: None,
        }
    }
}

impl ResolvedConfig {
    /// Merge a parsed config file over the defaults
    pub fn from_file(file: ConfigFile) -> Self {
        let defaults = Self::default();
        let endpoints = Endpoints {
            quotes: file.endpoints.quotes.unwrap_or(defaults.endpoints.quotes),
            jokes: file.endpoints.jokes.unwrap_or(defaults.endpoints.jokes),
            facts: file.endpoints.facts.unwrap_or(defaults.endpoints.facts),
            social_base: file
                .endpoints
                .social_base
                .unwrap_or(defaults.endpoints.social_base),
            social_link_prefix: file
                .endpoints
                .social_link_prefix
                .unwrap_or(defaults.endpoints.social_link_prefix),
        };

        let counts = Counts {
            quotes: file.counts.quotes.unwrap_or(defaults.counts.quotes),
            jokes: file.counts.jokes.unwrap_or(defaults.counts.jokes),
            facts: file.counts.facts.unwrap_or(defaults.counts.facts),
            social_posts: file
                .counts
                .social_posts
                .unwrap_or(defaults.counts.social_posts),
        };

        let throttle = ThrottleSettings {
            request_delay: file
                .throttle
                .request_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.throttle.request_delay),
            category_delay: file
                .throttle
                .category_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.throttle.category_delay),
            request_timeout: file
                .throttle
                .request_timeout_seconds
                .map(Duration::from_secs)
                .unwrap_or(defaults.throttle.request_timeout),
        };

        Self {
            endpoints,
            counts,
            throttle,
            social_group: file.social.group.unwrap_or(defaults.social_group),
            user_agent: file.user_agent.unwrap_or(defaults.user_agent),
            output: file.output.map(PathBuf::from).unwrap_or(defaults.output),
            config_file: None,
        }
    }

    /// Apply environment overrides
    fn apply_env(mut self) -> Self {
        if let Ok(group) = std::env::var("INSPIRE_SOCIAL_GROUP") {
            self.social_group = group;
        }
        if let Ok(agent) = std::env::var("INSPIRE_USER_AGENT") {
            self.user_agent = agent;
        }
        if let Ok(output) = std::env::var("INSPIRE_OUTPUT") {
            self.output = PathBuf::from(output);
        }
        self
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".inspire").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    let user_config = dirs::config_dir()?.join("inspire").join("config.yaml");
    user_config.exists().then_some(user_config)
}

/// Load and parse config file
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load configuration from all sources
pub fn load_config(explicit: Option<&Path>) -> Result<ResolvedConfig> {
    let config_file = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(),
    };

    let resolved = if let Some(ref path) = config_file {
        let file = load_config_file(path)?;
        ResolvedConfig {
            config_file: Some(path.clone()),
            ..ResolvedConfig::from_file(file)
        }
    } else {
        ResolvedConfig::default()
    };

    Ok(resolved.apply_env())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ResolvedConfig::default();

        assert_eq!(config.endpoints.quotes, DEFAULT_QUOTES_URL);
        assert_eq!(config.counts, Counts::default());
        assert_eq!(config.throttle.request_delay, Duration::from_millis(500));
        assert_eq!(config.throttle.category_delay, Duration::from_secs(1));
        assert_eq!(config.throttle.request_timeout, Duration::from_secs(10));
        assert_eq!(config.social_group, "todayilearned");
        assert_eq!(config.output, PathBuf::from("scraped_data.json"));
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let config_path = temp.path().join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(
            file,
            r#"
version: "1"
endpoints:
  jokes: http://localhost:9999/joke
counts:
  quotes: 10
throttle:
  request_delay_ms: 0
  request_timeout_seconds: 3
social:
  group: rust
"#
        )
        .unwrap();

        let parsed = load_config_file(&config_path).unwrap();
        assert_eq!(parsed.version.as_deref(), Some("1"));

        let config = ResolvedConfig::from_file(parsed);
        assert_eq!(config.endpoints.jokes, "http://localhost:9999/joke");
        assert_eq!(config.endpoints.quotes, DEFAULT_QUOTES_URL);
        assert_eq!(config.counts.quotes, 10);
        assert_eq!(config.counts.jokes, 3);
        assert_eq!(config.throttle.request_delay, Duration::ZERO);
        assert_eq!(config.throttle.category_delay, Duration::from_secs(1));
        assert_eq!(config.throttle.request_timeout, Duration::from_secs(3));
        assert_eq!(config.social_group, "rust");
    }

    #[test]
    fn test_empty_config_file_uses_defaults() {
        let parsed: ConfigFile = serde_yaml::from_str("{}").unwrap();
        let config = ResolvedConfig::from_file(parsed);

        assert_eq!(config.endpoints, Endpoints::default());
        assert_eq!(config.throttle, ThrottleSettings::default());
    }

    #[test]
    fn test_endpoints_rooted_at() {
        let endpoints = Endpoints::rooted_at("http://127.0.0.1:8080/");

        assert_eq!(endpoints.quotes, "http://127.0.0.1:8080/");
        assert_eq!(endpoints.jokes, "http://127.0.0.1:8080/random_joke");
        assert_eq!(endpoints.facts, "http://127.0.0.1:8080/page/random/summary");
        assert_eq!(endpoints.social_base, "http://127.0.0.1:8080");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = load_config(Some(Path::new("/definitely/not/here.yaml")));
        assert!(result.is_err());
    }
}
