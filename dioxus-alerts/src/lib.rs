//! dioxus-alerts - Modal alert and confirmation dialogs for Dioxus desktop apps
//!
//! This crate provides a styled modal dialog ("alert/confirm box") with a
//! show/dismiss lifecycle: a full-viewport dimmed backdrop, a centered card
//! keyed to a severity (success, error, warning, info, confirm), and
//! dismissal via the buttons, the backdrop, or Escape.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> anyhow::Result<()> {
//!     let config = dioxus_alerts::AlertsConfig::load_default()?;
//!     dioxus_alerts::launch(config)
//! }
//! ```
//!
//! ## Architecture
//!
//! Alert callbacks are arbitrary `FnOnce` values, so the presenter holding
//! them is not shared with the render layer directly. Instead:
//!
//! 1. [`AlertPresenter`] lives on the main thread and is never shared
//! 2. We create snapshots of presenter state for rendering
//! 3. Commands are sent via channels and processed on the main thread
//! 4. The Dioxus app runs in a single-threaded context
//!
//! There is deliberately no global singleton in the public API: the
//! presenter is constructed once at startup and everything else talks to it
//! through [`AppState`].

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::Result;
use dioxus::prelude::*;

// Public library modules
pub mod components;
pub mod config;
pub mod hooks;
pub mod keybindings;
pub mod presenter;
pub mod tracing;

// Internal modules
mod app;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod test_helpers;

// Convenience re-exports
pub use config::AlertsConfig;
pub use presenter::{
    AlertCommand, AlertId, AlertPresenter, AlertRequest, DismissOutcome, PresenterSnapshot,
    Severity,
};

// Thread-local storage for AlertPresenter to allow synchronous command
// processing from Dioxus components
thread_local! {
    pub(crate) static PRESENTER: RefCell<Option<Rc<RefCell<AlertPresenter>>>> =
        const { RefCell::new(None) };
}

/// Shared stylesheet, injected into the webview head once at startup.
const ALERTS_CSS: &str = include_str!("../assets/alerts.css");

/// Launch the Dioxus desktop application.
///
/// Constructs the presenter, wires the command channel, and starts the
/// event loop. The stylesheet is injected into the document head exactly
/// once, at window construction.
pub fn launch(config: AlertsConfig) -> Result<()> {
    // Create command channel
    let (command_tx, command_rx) = mpsc::channel::<AlertCommand>();

    // The presenter owns all alert state for the lifetime of the app
    let presenter = AlertPresenter::new(&config, command_rx);
    let initial_snapshot = presenter.snapshot();

    // Wrap presenter in Rc<RefCell> for single-threaded access
    let presenter = Rc::new(RefCell::new(presenter));

    // Store in thread-local for synchronous command processing from components
    PRESENTER.with(|slot| {
        *slot.borrow_mut() = Some(presenter.clone());
    });

    let app_state = AppState {
        command_tx,
        snapshot: std::sync::Arc::new(parking_lot::Mutex::new(initial_snapshot)),
        backdrop_dismiss: config.dialog.backdrop_dismiss,
        escape_dismiss: config.dialog.escape_dismiss,
    };

    // Clone for the event-loop closure
    let presenter_clone = presenter.clone();
    let snapshot_ref = app_state.snapshot.clone();

    // Stylesheet plus the timing override derived from the dialog config
    let custom_head = format!("<style>{ALERTS_CSS}</style>{}", config.dialog_css());

    // Launch Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(&config.window.title)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        )),
                )
                .with_custom_head(custom_head)
                .with_custom_event_handler(move |_event, _target| {
                    // Process commands on each event loop iteration
                    if let Ok(mut presenter) = presenter_clone.try_borrow_mut() {
                        presenter.process_commands();
                        presenter.process_transitions(Instant::now());
                        *snapshot_ref.lock() = presenter.snapshot();
                    }
                }),
        )
        .with_context(app_state)
        .launch(app::App);

    Ok(())
}

/// Application state that can be shared with Dioxus.
/// This is Clone + Send + Sync because it only contains thread-safe types.
#[derive(Clone)]
pub struct AppState {
    command_tx: mpsc::Sender<AlertCommand>,
    snapshot: std::sync::Arc<parking_lot::Mutex<PresenterSnapshot>>,
    /// Whether backdrop clicks cancel the visible alert.
    pub backdrop_dismiss: bool,
    /// Whether Escape cancels the visible alert.
    pub escape_dismiss: bool,
}

impl AppState {
    /// Send a command to the presenter.
    pub fn send_command(&self, command: AlertCommand) {
        let _ = self.command_tx.send(command);
    }

    /// Process pending commands and update the snapshot synchronously.
    /// This should be called after sending commands but before triggering
    /// a re-render.
    pub fn process_commands_sync(&self) {
        PRESENTER.with(|slot| {
            if let Some(ref presenter) = *slot.borrow() {
                if let Ok(mut presenter) = presenter.try_borrow_mut() {
                    presenter.process_commands();
                    presenter.process_transitions(Instant::now());
                    *self.snapshot.lock() = presenter.snapshot();
                }
            }
        });
    }

    /// Process pending commands and push the fresh snapshot into the signal
    /// if it changed, triggering a re-render.
    pub fn process_and_notify(&self, signal: &mut Signal<PresenterSnapshot>) {
        self.process_commands_sync();
        let snapshot = self.get_snapshot();
        if *signal.peek() != snapshot {
            signal.set(snapshot);
        }
    }

    /// Get the current snapshot.
    #[must_use]
    pub fn get_snapshot(&self) -> PresenterSnapshot {
        self.snapshot.lock().clone()
    }
}
