//! product-admin view models
//!
//! This crate holds the UI state of the admin screens. Rendering and routing
//! belong to the host; view models talk to the outside world only through
//! the ports of `pa-core`.

pub mod debounce;
pub mod deps;
pub mod form;
pub mod list;
pub mod prompt;

#[cfg(test)]
pub(crate) mod test_support;

pub use debounce::{Debouncer, DebouncerInput, SEARCH_DEBOUNCE};
pub use deps::AppDeps;
pub use form::{FormViewModel, IdCheck, IdCheckOutcome};
pub use list::{ListViewModel, PendingDeletion};
pub use prompt::{ConfirmationPrompt, PromptSignal};
