//! # Dependency Injection / 依赖注入模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Create the HTTP catalog adapter and system clock / 创建 HTTP 目录适配器与系统时钟
//! - ✅ Inject them into `AppDeps` / 将依赖注入到 AppDeps
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No business logic / 禁止包含任何业务逻辑**
//! ❌ **No configuration validation / 禁止做配置验证**
//! - Settings are already resolved in settings.rs
//! - 设置已在 settings.rs 中解析

use std::sync::Arc;

use anyhow::Context;
use pa_app::AppDeps;
use pa_core::ports::{NavigatorPort, NotifierPort};
use pa_infra::{HttpProductRepository, HttpRepositoryConfig, SystemClock};

use super::settings::Settings;

/// Build the view model dependencies on top of the HTTP catalog
/// 基于 HTTP 目录构建视图模型依赖
pub fn wire_dependencies(
    settings: &Settings,
    notifier: Arc<dyn NotifierPort>,
    navigator: Arc<dyn NavigatorPort>,
) -> anyhow::Result<AppDeps> {
    let product_repo = HttpProductRepository::new(HttpRepositoryConfig {
        base_url: settings.api_base_url.clone(),
        timeout: settings.request_timeout,
    })
    .with_context(|| format!("Failed to create catalog client for {}", settings.api_base_url))?;

    Ok(AppDeps {
        product_repo: Arc::new(product_repo),
        notifier,
        navigator,
        clock: Arc::new(SystemClock),
    })
}
