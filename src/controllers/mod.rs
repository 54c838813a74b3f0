//! Controllers for the interactive parts of the site.
//!
//! Controllers receive UI events as method calls, mutate their own state and
//! leave rendering to the derived views in [`crate::view`].

pub mod contact_form;
pub mod navigation;
pub mod scroll_lock;

pub use contact_form::{ContactFormController, FormSnapshot, SubmitOutcome};
pub use navigation::NavController;
pub use scroll_lock::{BodyScrollLock, ScrollGuard, ScrollSuppressor};
