//! Tracing configuration for product-admin
//!
//! Installs a `tracing-subscriber` registry with an env-filter and a single
//! fmt layer on stderr, so stdout stays free for command output.
//!
//! ## Architecture / 架构
//!
//! - **Single sink / 单一输出**: stderr only, stdout is reserved for command output
//! - **Environment-aware / 环境感知**: debug for workspace crates in development, info in production
//! - **Override / 覆盖**: `RUST_LOG` replaces the built-in directives

use std::io;

use tracing_subscriber::{fmt, prelude::*, registry, EnvFilter};

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
/// 构建默认的日志过滤指令
///
/// ## Behavior / 行为
/// - **Development**: debug level for the workspace crates
/// - **Production**: info level
/// - HTTP client internals stay at warn either way
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let workspace = if is_dev { "debug" } else { "info" };
    vec![
        "info".to_string(),
        format!("product_admin={workspace}"),
        format!("pa_app={workspace}"),
        format!("pa_infra={workspace}"),
        "reqwest=warn".to_string(),
        "hyper_util=warn".to_string(),
    ]
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over the built-in directives.
///
/// ## Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    // "2025-01-15 10:30:45.123 INFO [file.rs:42] message"
    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(cfg!(not(test)))
        .with_writer(io::stderr);

    registry().with(env_filter).with(stderr_layer).try_init()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directives_follow_build_profile() {
        let dev = build_filter_directives(true);
        let prod = build_filter_directives(false);

        assert!(dev.contains(&"pa_app=debug".to_string()));
        assert!(prod.contains(&"pa_app=info".to_string()));
        assert!(prod.contains(&"reqwest=warn".to_string()));
    }

    #[test]
    fn test_filter_directives_parse() {
        for is_dev in [true, false] {
            let directives = build_filter_directives(is_dev).join(",");
            assert!(EnvFilter::try_new(&directives).is_ok(), "{directives}");
        }
    }
}
