//! # Runtime Settings / 运行时设置
//!
//! The config DTO only carries facts from the file. This is where the
//! defaults and overrides are decided.
//! 配置 DTO 只承载文件中的内容，默认值与覆盖规则在此处决定。

use std::time::Duration;

use pa_app::SEARCH_DEBOUNCE;
use pa_core::config::AppConfig;
use pa_core::PageSize;
use tracing::warn;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3002/bp";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable that overrides the configured API base URL.
pub const API_URL_ENV: &str = "PRODUCT_ADMIN_API_URL";

/// Effective settings after defaults and overrides
/// 应用默认值与覆盖后的最终设置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub search_debounce: Duration,
    pub page_size: PageSize,
}

impl Settings {
    /// Merge the config file with the overrides.
    ///
    /// Base URL precedence: command line, environment, file, built-in
    /// default. Zero or empty values in the file mean "unset".
    pub fn resolve(config: &AppConfig, cli_api_url: Option<&str>, env_api_url: Option<&str>) -> Self {
        let api_base_url = [cli_api_url, env_api_url, Some(config.api_base_url.as_str())]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();

        let page_size = match config.default_page_size {
            0 => PageSize::default(),
            n => PageSize::try_from(n).unwrap_or_else(|err| {
                warn!(error = %err, "Ignoring configured page size");
                PageSize::default()
            }),
        };

        Self {
            api_base_url,
            request_timeout: non_zero_millis(config.request_timeout_ms).unwrap_or(DEFAULT_REQUEST_TIMEOUT),
            search_debounce: non_zero_millis(config.search_debounce_ms).unwrap_or(SEARCH_DEBOUNCE),
            page_size,
        }
    }
}

fn non_zero_millis(ms: u64) -> Option<Duration> {
    (ms > 0).then(|| Duration::from_millis(ms))
}
