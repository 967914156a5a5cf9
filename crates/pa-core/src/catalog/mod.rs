//! In-memory catalog views: search filtering and pagination.

pub mod pagination;
pub mod search;

pub use pagination::{InvalidPageSize, PageSize, Pagination};
pub use search::{filter_products, matches_term};
