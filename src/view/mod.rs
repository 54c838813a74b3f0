//! Render models derived from controller state.
//!
//! Every function here is pure: the same controller state always yields the
//! same view, and nothing is mutated. Renderers (HTML, terminal) only read
//! these models.

pub mod form_view;
pub mod nav_view;

pub use form_view::{FieldView, FormView, SubmitButtonView};
pub use nav_view::{NavLinkView, NavView, ToggleIcon};
