//! Client Configuration
//!
//! Resolved once at startup from `<meta>` tags in the host page, then
//! compile-time environment variables, then defaults.

use std::str::FromStr;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 4000;

const META_API_URL: &str = "catalog-api-url";
const META_ENTRY_POLICY: &str = "catalog-entry-policy";
const META_NOTICE_TIMEOUT: &str = "catalog-notice-timeout";

/// Where edit/view get the record from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryPolicy {
    /// Fetch `GET /peliculas/:id` before opening the dialog
    #[default]
    Refresh,
    /// Use the record already in the loaded list
    Cached,
}

impl FromStr for EntryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "refresh" | "server" => Ok(EntryPolicy::Refresh),
            "cached" | "cache" => Ok(EntryPolicy::Cached),
            other => Err(format!("unknown entry policy: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub api_base_url: String,
    pub entry_policy: EntryPolicy,
    /// Auto-dismiss delay for notices, 0 keeps them until closed
    pub notice_timeout_ms: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            entry_policy: EntryPolicy::default(),
            notice_timeout_ms: DEFAULT_NOTICE_TIMEOUT_MS,
        }
    }
}

impl CatalogConfig {
    /// Build from raw values; anything missing or unparseable keeps the default
    pub fn from_sources(api_url: Option<String>, entry_policy: Option<String>, notice_timeout: Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = api_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(defaults.api_base_url);

        let entry_policy = entry_policy
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(defaults.entry_policy);

        let notice_timeout_ms = notice_timeout
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(defaults.notice_timeout_ms);

        Self { api_base_url, entry_policy, notice_timeout_ms }
    }

    /// Resolve from the current page, falling back to build-time values
    pub fn load() -> Self {
        let pick = |meta: &str, build: Option<&'static str>| read_meta(meta).or_else(|| build.map(str::to_string));

        let config = Self::from_sources(
            pick(META_API_URL, option_env!("CATALOG_API_URL")),
            pick(META_ENTRY_POLICY, option_env!("CATALOG_ENTRY_POLICY")),
            pick(META_NOTICE_TIMEOUT, option_env!("CATALOG_NOTICE_TIMEOUT_MS")),
        );
        web_sys::console::log_1(&format!("[CONFIG] {:?}", config).into());
        config
    }

    /// Absolute URL for an API path such as `/peliculas/3`
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name=\"{}\"]", name))
        .ok()
        .flatten()?;
    element.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = CatalogConfig::from_sources(None, None, None);
        assert_eq!(config, CatalogConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.entry_policy, EntryPolicy::Refresh);
    }

    #[test]
    fn test_values_are_parsed() {
        let config = CatalogConfig::from_sources(
            Some("https://api.example.com/v1/".to_string()),
            Some(" Cached ".to_string()),
            Some("0".to_string()),
        );
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
        assert_eq!(config.entry_policy, EntryPolicy::Cached);
        assert_eq!(config.notice_timeout_ms, 0);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = CatalogConfig::from_sources(
            Some("   ".to_string()),
            Some("sometimes".to_string()),
            Some("soon".to_string()),
        );
        assert_eq!(config, CatalogConfig::default());
    }

    #[test]
    fn test_url_join() {
        let config = CatalogConfig::default();
        assert_eq!(config.url("/peliculas"), "http://localhost:8000/peliculas");
        assert_eq!(config.url("peliculas/5"), "http://localhost:8000/peliculas/5");
    }
}
