//! # pa-core
//!
//! Core domain models and business rules for product-admin.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! the product model, list filtering and pagination math, form field rules,
//! the configuration DTO, and the ports implemented by the outer layers.

pub mod catalog;
pub mod config;
pub mod form;
pub mod ids;
pub mod ports;
pub mod product;
pub mod route;

// Re-export commonly used types at the crate root
pub use catalog::{PageSize, Pagination};
pub use config::AppConfig;
pub use form::{FieldError, FormField};
pub use ids::ProductId;
pub use product::{Product, ProductUpdate};
pub use route::Route;
