//! Product domain models.

pub mod date;
pub mod product;

pub use date::{one_year_after, parse_input_date, DATE_FORMAT};
pub use product::{Product, ProductUpdate};
