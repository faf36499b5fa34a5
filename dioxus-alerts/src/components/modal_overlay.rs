//! Reusable modal overlay component.
//!
//! Encapsulates the overlay+backdrop+container pattern: a full-viewport
//! dimmed backdrop with the dialog card centered inside it.

use dioxus::prelude::*;

/// Modal overlay that provides a backdrop and centered container.
///
/// Clicking the backdrop triggers `on_backdrop_click`. Clicks inside the
/// container are stopped from propagating to the backdrop.
///
/// Set `closing` while the exit transition plays to swap the entrance
/// animation for the fade-out.
#[component]
pub fn ModalOverlay(
    class: Option<String>,
    closing: Option<bool>,
    on_backdrop_click: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let container_class = match class {
        Some(class) => format!("alert-content {class}"),
        None => "alert-content".to_string(),
    };
    let overlay_class = if closing.unwrap_or(false) {
        "alert-overlay alert-overlay-closing"
    } else {
        "alert-overlay"
    };

    rsx! {
        div {
            class: "{overlay_class}",
            onmousedown: move |evt| on_backdrop_click.call(evt),

            div {
                class: "{container_class}",
                onmousedown: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}
