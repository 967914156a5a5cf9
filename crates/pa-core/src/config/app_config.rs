/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// API base URL, e.g. `http://localhost:3002/bp` (may be empty)
    pub api_base_url: String,

    /// HTTP request timeout in milliseconds (0 = unset)
    pub request_timeout_ms: u64,

    /// Quiet window for search input in milliseconds (0 = unset)
    pub search_debounce_ms: u64,

    /// Rows per page on first display (0 = unset)
    pub default_page_size: usize,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// **Prohibited**: no validation or default values here. Empty strings
    /// and zeros are valid "facts".
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section = |name: &str, key: &str| toml_value.get(name).and_then(|s| s.get(key));

        Ok(Self {
            api_base_url: section("api", "base_url")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            request_timeout_ms: section("api", "timeout_ms")
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            search_debounce_ms: section("ui", "search_debounce_ms")
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            default_page_size: section("ui", "default_page_size")
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as usize,
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            api_base_url: String::new(),
            request_timeout_ms: 0,
            search_debounce_ms: 0,
            default_page_size: 0,
        }
    }
}
