//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - Define configuration data structures
//! - Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! **No validation logic and no default value calculation.** Defaults are
//! resolved by the binary's bootstrap layer.

mod app_config;

pub use app_config::AppConfig;
