//! Main application component.
//!
//! Root Dioxus component for the demo: a page of trigger buttons plus the
//! alert host, with app-level keyboard dispatch for the visible alert.

use std::time::Duration;

use dioxus::prelude::*;

use crate::components::AlertHost;
use crate::keybindings::handle_alert_mode;
use crate::presenter::{AlertCommand, AlertRequest, Severity};
use crate::AppState;

/// How often the app checks for finished exit transitions.
const TRANSITION_POLL: Duration = Duration::from_millis(100);

/// Main application component.
#[component]
pub fn App() -> Element {
    let app_state = use_context::<AppState>();

    // Provide the snapshot signal all components render from
    let snapshot_signal = use_context_provider(|| Signal::new(app_state.get_snapshot()));

    // Reap finished exit transitions even when no input arrives
    let app_state_for_timer = app_state.clone();
    use_future(move || {
        let app_state = app_state_for_timer.clone();
        let mut signal = snapshot_signal;
        async move {
            loop {
                tokio::time::sleep(TRANSITION_POLL).await;
                app_state.process_and_notify(&mut signal);
            }
        }
    });

    // Auto-focus the app container on mount so keyboard input works
    use_effect(|| {
        document::eval(
            r#"
            requestAnimationFrame(() => {
                const container = document.querySelector('.app-container');
                if (container) {
                    container.focus();
                }
            });
        "#,
        );
    });

    let app_state_for_keys = app_state.clone();
    let mut key_signal = snapshot_signal;
    let onkeydown = move |evt: KeyboardEvent| {
        let snapshot = app_state_for_keys.get_snapshot();
        let Some(alert) = snapshot.visible_alert() else {
            return;
        };

        let commands = handle_alert_mode(&evt.key(), alert, app_state_for_keys.escape_dismiss);
        if commands.is_empty() {
            return;
        }

        for command in commands {
            app_state_for_keys.send_command(command);
        }
        app_state_for_keys.process_and_notify(&mut key_signal);
        evt.prevent_default();
    };

    rsx! {
        document::Title { "dioxus-alerts demo" }

        div {
            class: "app-container",
            tabindex: 0,
            onkeydown: onkeydown,

            div {
                class: "demo-page",
                h1 { "dioxus-alerts" }
                p { "Modal alert dialogs with severity styling, backdrop and Escape dismissal." }

                div {
                    class: "demo-buttons",
                    for name in ["success", "error", "warning", "info"] {
                        DemoButton { name: name }
                    }
                    ConfirmDemoButton {}
                }
            }

            AlertHost {}
        }
    }
}

/// Button that raises a plain alert of the named severity.
#[component]
fn DemoButton(name: &'static str) -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = crate::hooks::use_snapshot_signal();

    rsx! {
        button {
            class: "demo-btn",
            onclick: move |_| {
                let severity = Severity::from_name(name);
                let request = AlertRequest::new()
                    .with_severity(severity)
                    .with_title(severity.default_title())
                    .with_message(format!("This is a {name} alert."));
                app_state.send_command(AlertCommand::Show(request));
                app_state.process_and_notify(&mut snapshot_signal);
            },
            "{name}"
        }
    }
}

/// Button that raises a yes/no confirmation with logging callbacks.
#[component]
fn ConfirmDemoButton() -> Element {
    let app_state = use_context::<AppState>();
    let mut snapshot_signal = crate::hooks::use_snapshot_signal();

    rsx! {
        button {
            class: "demo-btn",
            onclick: move |_| {
                let request = AlertRequest::confirm("Proceed with the demo action?")
                    .on_confirm(|| tracing::info!("demo confirmation accepted"))
                    .on_cancel(|| tracing::info!("demo confirmation declined"));
                app_state.send_command(AlertCommand::Show(request));
                app_state.process_and_notify(&mut snapshot_signal);
            },
            "confirm"
        }
    }
}
