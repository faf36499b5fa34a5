//! Custom Dioxus hooks for dioxus-alerts components.

use dioxus::prelude::*;

use crate::presenter::PresenterSnapshot;

/// Read the current presenter snapshot from the signal context.
///
/// Components that call this automatically re-render when the snapshot changes.
#[must_use]
pub fn use_snapshot() -> PresenterSnapshot {
    use_context::<Signal<PresenterSnapshot>>().read().clone()
}

/// Get the snapshot signal for writing (e.g., after sending commands).
///
/// Use this in components that need to update the snapshot after sending commands.
#[must_use]
pub fn use_snapshot_signal() -> Signal<PresenterSnapshot> {
    use_context::<Signal<PresenterSnapshot>>()
}
