//! Spec Sheet Details UI Module
//!
//! Same MVVM split as the order editor: pure draft, API model, view model,
//! Leptos view. Unlike orders, supply lines must be duplicate-free.

pub mod draft;
mod model;
mod view;
mod view_model;

pub use view::SpecSheetDetails;
pub use view_model::SpecSheetDetailsViewModel;
