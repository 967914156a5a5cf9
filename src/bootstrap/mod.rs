//! # Bootstrap / 启动引导
//!
//! Config loading, settings resolution, tracing and dependency wiring.
//! 配置加载、设置解析、日志追踪与依赖装配。

pub mod config;
pub mod settings;
pub mod tracing;
pub mod wiring;

pub use config::{default_config_path, load_config, load_or_empty};
pub use settings::Settings;
pub use wiring::wire_dependencies;
