//! Alert dialog component.
//!
//! Renders a single alert card (icon, title, message, button row) inside the
//! modal overlay, and the host that stacks every live alert.

use dioxus::prelude::*;

use crate::components::ModalOverlay;
use crate::hooks::{use_snapshot, use_snapshot_signal};
use crate::presenter::{AlertCommand, AlertSnapshot, Severity};
use crate::AppState;

/// Renders every live alert from the snapshot.
///
/// At most one alert accepts input; the rest are playing their exit
/// transition and stay attached until the presenter detaches them.
#[component]
pub fn AlertHost() -> Element {
    let snapshot = use_snapshot();

    if snapshot.alerts.is_empty() {
        return rsx! {};
    }

    rsx! {
        for alert in snapshot.alerts.iter() {
            AlertDialog { key: "{alert.id}", alert: alert.clone() }
        }
    }
}

/// A single alert dialog.
#[component]
pub fn AlertDialog(alert: AlertSnapshot) -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = use_snapshot_signal();

    let confirm_handler = {
        let app_state = app_state.clone();
        let id = alert.id;
        move |_| {
            app_state.send_command(AlertCommand::Confirm(id));
            app_state.process_and_notify(&mut snapshot_signal);
        }
    };

    let cancel_handler = {
        let app_state = app_state.clone();
        let id = alert.id;
        move |_| {
            app_state.send_command(AlertCommand::Cancel(id));
            app_state.process_and_notify(&mut snapshot_signal);
        }
    };

    let primary_class = if alert.severity.is_destructive() {
        "alert-btn alert-btn-danger"
    } else {
        "alert-btn alert-btn-primary"
    };

    let backdrop_dismiss = app_state.backdrop_dismiss;

    rsx! {
        ModalOverlay {
            class: alert.severity.class().to_string(),
            closing: alert.closing,
            on_backdrop_click: {
                let mut cancel = cancel_handler.clone();
                move |evt| {
                    // Backdrop clicks cancel (unless disabled); clicks inside
                    // the card never reach here.
                    if backdrop_dismiss {
                        cancel(evt);
                    }
                }
            },

            div {
                class: "alert-header",
                div {
                    class: "alert-icon",
                    SeverityIcon { severity: alert.severity }
                }
                div {
                    class: "alert-title",
                    "{alert.title}"
                }
            }

            div {
                class: "alert-message",
                "{alert.message}"
            }

            div {
                class: "alert-buttons",

                // Secondary (cancel) button, only when requested
                if alert.show_cancel {
                    button {
                        class: "alert-btn alert-btn-secondary",
                        onmousedown: {
                            let mut cancel = cancel_handler.clone();
                            move |evt: MouseEvent| {
                                evt.stop_propagation();
                                cancel(evt);
                            }
                        },
                        "{alert.cancel_label}"
                    }
                }

                // Primary action
                button {
                    class: "{primary_class}",
                    onmousedown: {
                        let mut confirm = confirm_handler.clone();
                        move |evt: MouseEvent| {
                            evt.stop_propagation();
                            confirm(evt);
                        }
                    },
                    "{alert.confirm_label}"
                }
            }
        }
    }
}

/// Severity icon, drawn inline so no icon font is needed.
#[component]
fn SeverityIcon(severity: Severity) -> Element {
    match severity {
        Severity::Success => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "28",
                height: "28",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                // Check Circle icon
                path { d: "M22 11.08V12a10 10 0 1 1-5.93-9.14" }
                polyline { points: "22 4 12 14.01 9 11.01" }
            }
        },
        Severity::Error => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "28",
                height: "28",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                // X Circle icon
                circle { cx: "12", cy: "12", r: "10" }
                line { x1: "15", y1: "9", x2: "9", y2: "15" }
                line { x1: "9", y1: "9", x2: "15", y2: "15" }
            }
        },
        Severity::Warning => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "28",
                height: "28",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                // Alert Triangle icon
                path { d: "M10.29 3.86 1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z" }
                line { x1: "12", y1: "9", x2: "12", y2: "13" }
                line { x1: "12", y1: "17", x2: "12.01", y2: "17" }
            }
        },
        Severity::Info => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "28",
                height: "28",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                // Info icon
                circle { cx: "12", cy: "12", r: "10" }
                line { x1: "12", y1: "16", x2: "12", y2: "12" }
                line { x1: "12", y1: "8", x2: "12.01", y2: "8" }
            }
        },
        Severity::Confirm => rsx! {
            svg {
                xmlns: "http://www.w3.org/2000/svg",
                width: "28",
                height: "28",
                view_box: "0 0 24 24",
                fill: "none",
                stroke: "currentColor",
                stroke_width: "2",
                stroke_linecap: "round",
                stroke_linejoin: "round",
                // Help Circle icon
                circle { cx: "12", cy: "12", r: "10" }
                path { d: "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3" }
                line { x1: "12", y1: "17", x2: "12.01", y2: "17" }
            }
        },
    }
}
