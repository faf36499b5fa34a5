//! Integration tests for the alert lifecycle.
//!
//! These drive the presenter the same way the UI does: commands over the
//! channel, keyboard input through the keybinding handler, and assertions
//! against the render snapshot.

use std::time::{Duration, Instant};

use dioxus::prelude::Key;

use crate::config::AlertsConfig;
use crate::keybindings::handle_alert_mode;
use crate::presenter::{AlertCommand, AlertRequest, DismissOutcome, Severity};
use crate::test_helpers::{fired, fired_flag, test_presenter, test_presenter_with};

// --- Show / replace ---

#[test]
fn show_replaces_visible_alert() {
    let (mut presenter, _tx) = test_presenter();

    let first = presenter.info("first");
    assert_eq!(presenter.visible_alert(), Some(first));

    let second = presenter.error("second");
    assert_eq!(presenter.visible_alert(), Some(second));

    // The first alert is still attached but plays its exit transition
    let snapshot = presenter.snapshot();
    assert_eq!(snapshot.alerts.len(), 2);
    assert!(snapshot.alerts[0].closing);
    assert!(!snapshot.alerts[1].closing);
}

#[test]
fn at_most_one_alert_accepts_input() {
    let (mut presenter, _tx) = test_presenter();

    presenter.info("a");
    presenter.info("b");
    presenter.info("c");

    let snapshot = presenter.snapshot();
    let visible = snapshot.alerts.iter().filter(|alert| !alert.closing).count();
    assert_eq!(visible, 1);
}

// --- Callback dispatch ---

#[test]
fn confirm_fires_on_confirm_only() {
    let (mut presenter, _tx) = test_presenter();
    let (confirmed, on_confirm) = fired_flag();
    let (cancelled, on_cancel) = fired_flag();

    let id = presenter.show(
        AlertRequest::confirm("Proceed?")
            .on_confirm(on_confirm)
            .on_cancel(on_cancel),
    );

    presenter.dismiss(id, DismissOutcome::Confirmed);

    assert!(fired(&confirmed));
    assert!(!fired(&cancelled));
}

#[test]
fn cancel_fires_on_cancel_only() {
    let (mut presenter, _tx) = test_presenter();
    let (confirmed, on_confirm) = fired_flag();
    let (cancelled, on_cancel) = fired_flag();

    let id = presenter.show(
        AlertRequest::confirm("Proceed?")
            .on_confirm(on_confirm)
            .on_cancel(on_cancel),
    );

    presenter.dismiss(id, DismissOutcome::Cancelled);

    assert!(!fired(&confirmed));
    assert!(fired(&cancelled));
}

#[test]
fn escape_cancels_via_keybinding_and_channel() {
    let (mut presenter, tx) = test_presenter();
    let (confirmed, on_confirm) = fired_flag();
    let (cancelled, on_cancel) = fired_flag();

    let id = presenter.show(
        AlertRequest::confirm("Quit?")
            .on_confirm(on_confirm)
            .on_cancel(on_cancel),
    );

    // Same path the app takes: key -> commands -> channel -> presenter
    for command in handle_alert_mode(&Key::Escape, id, true) {
        tx.send(command).expect("send command");
    }
    presenter.process_commands();

    assert!(!fired(&confirmed));
    assert!(fired(&cancelled));
    assert_eq!(presenter.visible_alert(), None);
}

#[test]
fn enter_confirms_via_keybinding_and_channel() {
    let (mut presenter, tx) = test_presenter();
    let (confirmed, on_confirm) = fired_flag();

    let id = presenter.show(AlertRequest::confirm("Save?").on_confirm(on_confirm));

    for command in handle_alert_mode(&Key::Enter, id, true) {
        tx.send(command).expect("send command");
    }
    presenter.process_commands();

    assert!(fired(&confirmed));
}

#[test]
fn dismissed_alert_ignores_further_escape() {
    let (mut presenter, tx) = test_presenter();
    let (confirmed, on_confirm) = fired_flag();
    let (cancelled, on_cancel) = fired_flag();

    let id = presenter.show(
        AlertRequest::confirm("Proceed?")
            .on_confirm(on_confirm)
            .on_cancel(on_cancel),
    );
    presenter.dismiss(id, DismissOutcome::Confirmed);

    // The alert is closing, so the app would not dispatch keys for it any
    // more; even a stale Cancel command must not fire the other callback.
    assert_eq!(presenter.snapshot().visible_alert(), None);
    tx.send(AlertCommand::Cancel(id)).expect("send command");
    presenter.process_commands();

    assert!(fired(&confirmed));
    assert!(!fired(&cancelled));
}

#[test]
fn exactly_one_callback_per_dialog() {
    let (mut presenter, _tx) = test_presenter();
    let (confirmed, on_confirm) = fired_flag();
    let (cancelled, on_cancel) = fired_flag();

    let id = presenter.show(
        AlertRequest::confirm("Proceed?")
            .on_confirm(on_confirm)
            .on_cancel(on_cancel),
    );

    presenter.dismiss(id, DismissOutcome::Cancelled);
    presenter.dismiss(id, DismissOutcome::Confirmed);
    presenter.dismiss(id, DismissOutcome::Cancelled);

    assert!(!fired(&confirmed));
    assert!(fired(&cancelled));
}

// --- remove / remove_all ---

#[test]
fn remove_all_with_no_alerts_is_noop() {
    let (mut presenter, _tx) = test_presenter();
    presenter.remove_all();
    assert!(presenter.snapshot().alerts.is_empty());
}

#[test]
fn remove_all_with_one_alert() {
    let (mut presenter, _tx) = test_presenter();
    presenter.info("only");

    presenter.remove_all();

    let snapshot = presenter.snapshot();
    assert_eq!(snapshot.alerts.len(), 1);
    assert!(snapshot.alerts[0].closing);
    assert_eq!(snapshot.visible_alert(), None);
}

#[test]
fn remove_all_with_several_alerts() {
    let (mut presenter, _tx) = test_presenter();
    presenter.info("a");
    presenter.warning("b");

    presenter.remove_all();

    let snapshot = presenter.snapshot();
    assert_eq!(snapshot.alerts.len(), 2);
    assert!(snapshot.alerts.iter().all(|alert| alert.closing));
}

#[test]
fn remove_all_does_not_fire_callbacks() {
    let (mut presenter, _tx) = test_presenter();
    let (confirmed, on_confirm) = fired_flag();
    let (cancelled, on_cancel) = fired_flag();

    presenter.show(
        AlertRequest::confirm("Proceed?")
            .on_confirm(on_confirm)
            .on_cancel(on_cancel),
    );
    presenter.remove_all();

    assert!(!fired(&confirmed));
    assert!(!fired(&cancelled));
}

#[test]
fn remove_is_idempotent() {
    let (mut presenter, _tx) = test_presenter();
    let id = presenter.info("hello");

    presenter.remove(id);
    presenter.remove(id);

    let later = Instant::now() + Duration::from_millis(400);
    presenter.process_transitions(later);
    assert!(presenter.snapshot().alerts.is_empty());

    // Removing a detached alert is a no-op too
    presenter.remove(id);
    assert!(presenter.snapshot().alerts.is_empty());
}

// --- Exit transition ---

#[test]
fn closing_alert_detaches_only_after_deadline() {
    let (mut presenter, _tx) = test_presenter();
    let id = presenter.info("bye");
    presenter.remove(id);

    // Deadline not reached: still attached, still closing
    presenter.process_transitions(Instant::now());
    let snapshot = presenter.snapshot();
    assert_eq!(snapshot.alerts.len(), 1);
    assert!(snapshot.alerts[0].closing);

    // Past the 300ms default transition: detached
    presenter.process_transitions(Instant::now() + Duration::from_millis(400));
    assert!(presenter.snapshot().alerts.is_empty());
}

#[test]
fn configured_exit_transition_is_honored() {
    let config = AlertsConfig::default().with_exit_transition_ms(50);
    let (mut presenter, _tx) = test_presenter_with(config);
    let id = presenter.info("quick");
    presenter.remove(id);

    presenter.process_transitions(Instant::now() + Duration::from_millis(100));
    assert!(presenter.snapshot().alerts.is_empty());
}

// --- Defaults and convenience wrappers ---

#[test]
fn show_with_default_request() {
    let (mut presenter, _tx) = test_presenter();
    presenter.show(AlertRequest::new());

    let snapshot = presenter.snapshot();
    assert_eq!(snapshot.alerts.len(), 1);
    let alert = &snapshot.alerts[0];
    assert_eq!(alert.severity, Severity::Info);
    assert_eq!(alert.title, "Alert");
    assert!(alert.message.is_empty());
    assert_eq!(alert.confirm_label, "OK");
    assert!(!alert.show_cancel);
}

#[test]
fn confirm_shows_affirmative_negative_pair() {
    let (mut presenter, _tx) = test_presenter();
    presenter.confirm("Proceed?");

    let snapshot = presenter.snapshot();
    let alert = &snapshot.alerts[0];
    assert_eq!(alert.severity, Severity::Confirm);
    assert_eq!(alert.confirm_label, "Yes");
    assert_eq!(alert.cancel_label, "No");
    assert!(alert.show_cancel);
}

#[test]
fn convenience_wrappers_set_severity_and_title() {
    let (mut presenter, _tx) = test_presenter();

    presenter.success("saved");
    let alert = presenter.snapshot().alerts.last().cloned().expect("alert");
    assert_eq!((alert.severity, alert.title.as_str()), (Severity::Success, "Success"));

    presenter.error("broke");
    let alert = presenter.snapshot().alerts.last().cloned().expect("alert");
    assert_eq!((alert.severity, alert.title.as_str()), (Severity::Error, "Error"));

    presenter.warning("careful");
    let alert = presenter.snapshot().alerts.last().cloned().expect("alert");
    assert_eq!((alert.severity, alert.title.as_str()), (Severity::Warning, "Warning"));

    presenter.info("fyi");
    let alert = presenter.snapshot().alerts.last().cloned().expect("alert");
    assert_eq!((alert.severity, alert.title.as_str()), (Severity::Info, "Information"));
}

// --- Command channel ---

#[test]
fn show_command_flows_through_channel() {
    let (mut presenter, tx) = test_presenter();

    tx.send(AlertCommand::Show(
        AlertRequest::new().with_message("from the channel"),
    ))
    .expect("send command");
    presenter.process_commands();

    let snapshot = presenter.snapshot();
    assert_eq!(snapshot.alerts.len(), 1);
    assert_eq!(snapshot.alerts[0].message, "from the channel");
}

#[test]
fn remove_all_command_flows_through_channel() {
    let (mut presenter, tx) = test_presenter();
    presenter.info("a");

    tx.send(AlertCommand::RemoveAll).expect("send command");
    presenter.process_commands();

    assert_eq!(presenter.visible_alert(), None);
}
