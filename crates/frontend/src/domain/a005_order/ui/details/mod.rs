//! Order Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - draft.rs: pure editing state (recompute, validation, serialization)
//! - model.rs: API functions (update)
//! - view_model.rs: ViewModel with commands and state management
//! - view.rs: Leptos component (pure UI)

pub mod draft;
mod model;
mod view;
mod view_model;

pub use view::OrderDetails;
pub use view_model::OrderDetailsViewModel;
