//! UI components for dioxus-alerts.
//!
//! The modal overlay/backdrop primitive and the alert dialog rendered
//! inside it.

mod alert_dialog;
mod modal_overlay;

pub use alert_dialog::{AlertDialog, AlertHost};
pub use modal_overlay::ModalOverlay;
