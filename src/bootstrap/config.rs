//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read the TOML configuration file / 读取 TOML 配置文件
//! - ✅ Map it onto the `AppConfig` DTO / 映射为 AppConfig DTO
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No validation or default values / 禁止验证和默认值逻辑**
//! - Those belong to [`Settings::resolve`](super::settings::Settings::resolve)
//! - 这些属于 `Settings::resolve`

use anyhow::Context;
use std::path::{Path, PathBuf};

use pa_core::config::AppConfig;

const CONFIG_DIR: &str = "product-admin";
const CONFIG_FILE: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Missing sections and keys result in empty values; the file content is
/// accepted as-is.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<config dir>/product-admin/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the explicit config file, or the default one when it exists.
///
/// An explicit path must exist. A missing default file yields an empty
/// config.
pub fn load_or_empty(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => match default_config_path() {
            Some(path) if path.is_file() => load_config(&path),
            _ => Ok(AppConfig::empty()),
        },
    }
}
