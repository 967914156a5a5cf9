//! Product form fields and their validation rules.
//!
//! Rules are pure: they read a field value (and, for the revision date, the
//! release date it depends on) plus today's date, and return the first
//! violated rule. The asynchronous id uniqueness check lives in the
//! application layer; only its error variant is defined here.

pub mod field;
pub mod rules;

pub use field::FormField;
pub use rules::{validate_field, FieldError};
