//! # product-admin
//!
//! Terminal host for the products catalog view models: loads the config,
//! wires the HTTP adapter into the view models and exposes them as CLI
//! commands.

pub mod bootstrap;
pub mod cli;
pub mod commands;
pub mod console;
