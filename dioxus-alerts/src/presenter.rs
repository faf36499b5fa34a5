//! Alert presenter state management.
//!
//! The presenter lives on the main thread and owns every live alert. UI
//! components never touch it directly: they send [`AlertCommand`]s over a
//! channel and render from [`PresenterSnapshot`] values. The snapshot is
//! `Clone + Send + Sync` so it can cross into the Dioxus render layer, while
//! callbacks and timing state stay behind the channel.

use std::fmt;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crate::config::AlertsConfig;

/// Semantic category of an alert, driving icon and accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
    Confirm,
}

impl Severity {
    /// Parse a severity name, falling back to `Info` for anything unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            "warning" => Self::Warning,
            "confirm" => Self::Confirm,
            _ => Self::Info,
        }
    }

    /// CSS modifier class applied to the dialog card.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Warning => "alert-warning",
            Self::Info => "alert-info",
            Self::Confirm => "alert-confirm",
        }
    }

    /// Title used by the convenience constructors.
    #[must_use]
    pub fn default_title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Information",
            Self::Confirm => "Confirm",
        }
    }

    /// Whether the primary button gets the destructive (danger) styling.
    #[must_use]
    pub fn is_destructive(self) -> bool {
        matches!(self, Self::Error | Self::Confirm)
    }
}

/// Callback invoked when an alert is confirmed or cancelled.
///
/// `Send` so a request can travel over the command channel; it always runs
/// on the main thread where the presenter lives.
pub type AlertCallback = Box<dyn FnOnce() + Send + 'static>;

/// Configuration for a single alert, consumed by [`AlertPresenter::show`].
///
/// Every field has a default, so `AlertRequest::new()` alone is a valid
/// request: an "Info" alert titled "Alert" with a single "OK" button.
pub struct AlertRequest {
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub show_cancel: bool,
    on_confirm: Option<AlertCallback>,
    on_cancel: Option<AlertCallback>,
}

impl Default for AlertRequest {
    fn default() -> Self {
        Self {
            severity: Severity::Info,
            title: "Alert".to_string(),
            message: String::new(),
            confirm_label: "OK".to_string(),
            cancel_label: "Cancel".to_string(),
            show_cancel: false,
            on_confirm: None,
            on_cancel: None,
        }
    }
}

impl fmt::Debug for AlertRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertRequest")
            .field("severity", &self.severity)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("confirm_label", &self.confirm_label)
            .field("cancel_label", &self.cancel_label)
            .field("show_cancel", &self.show_cancel)
            .field("on_confirm", &self.on_confirm.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}

impl AlertRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request preset for a yes/no confirmation: severity `Confirm`,
    /// both buttons shown, relabelled to an affirmative/negative pair.
    #[must_use]
    pub fn confirm(message: impl Into<String>) -> Self {
        Self::new()
            .with_severity(Severity::Confirm)
            .with_title(Severity::Confirm.default_title())
            .with_message(message)
            .with_confirm_label("Yes")
            .with_cancel_label("No")
            .with_cancel(true)
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    #[must_use]
    pub fn with_confirm_label(mut self, label: impl Into<String>) -> Self {
        self.confirm_label = label.into();
        self
    }

    #[must_use]
    pub fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.cancel_label = label.into();
        self
    }

    /// Show or hide the secondary (cancel) button.
    #[must_use]
    pub fn with_cancel(mut self, show: bool) -> Self {
        self.show_cancel = show;
        self
    }

    /// Callback fired when the alert is confirmed.
    #[must_use]
    pub fn on_confirm(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_confirm = Some(Box::new(callback));
        self
    }

    /// Callback fired when the alert is cancelled (cancel button, backdrop
    /// click, or Escape).
    #[must_use]
    pub fn on_cancel(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }
}

/// Handle for a displayed alert, returned by [`AlertPresenter::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlertId(u64);

impl fmt::Display for AlertId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Commands that can be sent to the presenter.
#[derive(Debug)]
pub enum AlertCommand {
    /// Display a new alert (replacing any visible one).
    Show(AlertRequest),
    /// Primary button pressed (or Enter/y).
    Confirm(AlertId),
    /// Cancel button, backdrop click, or Escape.
    Cancel(AlertId),
    /// Detach without firing callbacks.
    Remove(AlertId),
    /// Detach every live alert without firing callbacks.
    RemoveAll,
}

/// How a dialog was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissOutcome {
    Confirmed,
    Cancelled,
}

/// Lifecycle phase of a live alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AlertPhase {
    Visible,
    /// Exit transition playing; detached once `deadline` passes.
    Closing { deadline: Instant },
}

struct ActiveAlert {
    id: AlertId,
    severity: Severity,
    title: String,
    message: String,
    confirm_label: String,
    cancel_label: String,
    show_cancel: bool,
    on_confirm: Option<AlertCallback>,
    on_cancel: Option<AlertCallback>,
    phase: AlertPhase,
}

/// A snapshot of the presenter state for rendering.
/// This is `Clone + Send + Sync` so it can be used with Dioxus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PresenterSnapshot {
    pub alerts: Vec<AlertSnapshot>,
}

impl PresenterSnapshot {
    /// The alert currently accepting input, if any. Alerts playing their
    /// exit transition no longer accept input.
    #[must_use]
    pub fn visible_alert(&self) -> Option<AlertId> {
        self.alerts
            .iter()
            .rev()
            .find(|alert| !alert.closing)
            .map(|alert| alert.id)
    }
}

/// Snapshot of a single alert for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertSnapshot {
    pub id: AlertId,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub cancel_label: String,
    pub show_cancel: bool,
    /// Exit transition playing; rendered with the fade-out class.
    pub closing: bool,
}

/// Owns every live alert. Lives on the main thread; the rest of the app
/// reaches it through the command channel.
pub struct AlertPresenter {
    alerts: Vec<ActiveAlert>,
    next_id: u64,
    exit_transition: Duration,
    command_rx: mpsc::Receiver<AlertCommand>,
}

impl AlertPresenter {
    #[must_use]
    pub fn new(config: &AlertsConfig, command_rx: mpsc::Receiver<AlertCommand>) -> Self {
        Self {
            alerts: Vec::new(),
            next_id: 0,
            exit_transition: config.dialog.exit_transition(),
            command_rx,
        }
    }

    /// Display a new alert, replacing any currently visible one.
    ///
    /// Prior alerts begin their exit transition; the new alert is attached
    /// on top and becomes the only one accepting input.
    pub fn show(&mut self, request: AlertRequest) -> AlertId {
        self.remove_all();

        let id = AlertId(self.next_id);
        self.next_id += 1;

        tracing::debug!(alert = %id, severity = ?request.severity, "showing alert");

        self.alerts.push(ActiveAlert {
            id,
            severity: request.severity,
            title: request.title,
            message: request.message,
            confirm_label: request.confirm_label,
            cancel_label: request.cancel_label,
            show_cancel: request.show_cancel,
            on_confirm: request.on_confirm,
            on_cancel: request.on_cancel,
            phase: AlertPhase::Visible,
        });

        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> AlertId {
        self.show_with_severity(Severity::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> AlertId {
        self.show_with_severity(Severity::Error, message)
    }

    pub fn warning(&mut self, message: impl Into<String>) -> AlertId {
        self.show_with_severity(Severity::Warning, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> AlertId {
        self.show_with_severity(Severity::Info, message)
    }

    /// Display a yes/no confirmation (see [`AlertRequest::confirm`]).
    /// Attach callbacks by building the request yourself and calling `show`.
    pub fn confirm(&mut self, message: impl Into<String>) -> AlertId {
        self.show(AlertRequest::confirm(message))
    }

    fn show_with_severity(&mut self, severity: Severity, message: impl Into<String>) -> AlertId {
        self.show(
            AlertRequest::new()
                .with_severity(severity)
                .with_title(severity.default_title())
                .with_message(message),
        )
    }

    /// Resolve a visible alert: fires exactly one callback and begins the
    /// exit transition.
    ///
    /// Alerts already closing ignore this, so no dismissal path can fire a
    /// second callback for the same dialog.
    pub fn dismiss(&mut self, id: AlertId, outcome: DismissOutcome) {
        let Some(alert) = self.alerts.iter_mut().find(|alert| alert.id == id) else {
            return;
        };
        if alert.phase != AlertPhase::Visible {
            return;
        }

        let callback = match outcome {
            DismissOutcome::Confirmed => {
                alert.on_cancel = None;
                alert.on_confirm.take()
            }
            DismissOutcome::Cancelled => {
                alert.on_confirm = None;
                alert.on_cancel.take()
            }
        };
        alert.phase = AlertPhase::Closing {
            deadline: Instant::now() + self.exit_transition,
        };

        tracing::debug!(alert = %id, ?outcome, "alert dismissed");

        if let Some(callback) = callback {
            callback();
        }
    }

    /// Begin the exit transition without firing callbacks.
    ///
    /// Safe to call more than once for the same alert, and for alerts that
    /// have already been detached.
    pub fn remove(&mut self, id: AlertId) {
        if let Some(alert) = self.alerts.iter_mut().find(|alert| alert.id == id) {
            if alert.phase == AlertPhase::Visible {
                alert.phase = AlertPhase::Closing {
                    deadline: Instant::now() + self.exit_transition,
                };
            }
        }
    }

    /// Begin the exit transition for every visible alert. No-op when none
    /// are present. Callbacks do not fire.
    pub fn remove_all(&mut self) {
        let deadline = Instant::now() + self.exit_transition;
        for alert in &mut self.alerts {
            if alert.phase == AlertPhase::Visible {
                alert.phase = AlertPhase::Closing { deadline };
            }
        }
    }

    /// Process pending commands from the channel.
    pub fn process_commands(&mut self) {
        while let Ok(command) = self.command_rx.try_recv() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: AlertCommand) {
        match command {
            AlertCommand::Show(request) => {
                self.show(request);
            }
            AlertCommand::Confirm(id) => self.dismiss(id, DismissOutcome::Confirmed),
            AlertCommand::Cancel(id) => self.dismiss(id, DismissOutcome::Cancelled),
            AlertCommand::Remove(id) => self.remove(id),
            AlertCommand::RemoveAll => self.remove_all(),
        }
    }

    /// Detach alerts whose exit transition finished before `now`.
    pub fn process_transitions(&mut self, now: Instant) {
        self.alerts.retain(|alert| match alert.phase {
            AlertPhase::Visible => true,
            AlertPhase::Closing { deadline } => deadline > now,
        });
    }

    /// The alert currently accepting input, if any.
    #[must_use]
    pub fn visible_alert(&self) -> Option<AlertId> {
        self.alerts
            .iter()
            .rev()
            .find(|alert| alert.phase == AlertPhase::Visible)
            .map(|alert| alert.id)
    }

    /// Create a snapshot of the current presenter state.
    #[must_use]
    pub fn snapshot(&self) -> PresenterSnapshot {
        PresenterSnapshot {
            alerts: self
                .alerts
                .iter()
                .map(|alert| AlertSnapshot {
                    id: alert.id,
                    severity: alert.severity,
                    title: alert.title.clone(),
                    message: alert.message.clone(),
                    confirm_label: alert.confirm_label.clone(),
                    cancel_label: alert.cancel_label.clone(),
                    show_cancel: alert.show_cancel,
                    closing: matches!(alert.phase, AlertPhase::Closing { .. }),
                })
                .collect(),
        }
    }
}
