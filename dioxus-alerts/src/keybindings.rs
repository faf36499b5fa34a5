//! Keyboard handling while an alert is visible.
//!
//! Pointer input is handled directly by the dialog components; this module
//! covers the keyboard channel: Enter/y confirm, n cancels, and Escape
//! cancels unless disabled in the dialog config.

use dioxus::prelude::Key;

use crate::presenter::{AlertCommand, AlertId};

/// Handle keyboard input for the visible alert.
///
/// Callers must only invoke this while an alert is in the visible phase;
/// closing alerts no longer accept input.
#[must_use]
pub fn handle_alert_mode(key: &Key, alert: AlertId, escape_dismiss: bool) -> Vec<AlertCommand> {
    match key {
        Key::Enter => vec![AlertCommand::Confirm(alert)],
        Key::Escape if escape_dismiss => vec![AlertCommand::Cancel(alert)],
        Key::Character(ch) if ch.eq_ignore_ascii_case("y") => vec![AlertCommand::Confirm(alert)],
        Key::Character(ch) if ch.eq_ignore_ascii_case("n") => vec![AlertCommand::Cancel(alert)],
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crate::assert_single_command;
    use crate::config::AlertsConfig;
    use crate::presenter::AlertPresenter;

    use super::*;

    fn visible_alert() -> AlertId {
        let (_tx, rx) = mpsc::channel();
        let mut presenter = AlertPresenter::new(&AlertsConfig::default(), rx);
        presenter.info("hello")
    }

    #[test]
    fn enter_confirms() {
        let id = visible_alert();
        let cmds = handle_alert_mode(&Key::Enter, id, true);
        assert_single_command!(cmds, AlertCommand::Confirm(_));
    }

    #[test]
    fn escape_cancels() {
        let id = visible_alert();
        let cmds = handle_alert_mode(&Key::Escape, id, true);
        assert_single_command!(cmds, AlertCommand::Cancel(_));
    }

    #[test]
    fn escape_ignored_when_disabled() {
        let id = visible_alert();
        let cmds = handle_alert_mode(&Key::Escape, id, false);
        assert!(cmds.is_empty());
    }

    #[test]
    fn y_and_n_shortcuts() {
        let id = visible_alert();

        let cmds = handle_alert_mode(&Key::Character("y".to_string()), id, true);
        assert_single_command!(cmds, AlertCommand::Confirm(_));

        let cmds = handle_alert_mode(&Key::Character("N".to_string()), id, true);
        assert_single_command!(cmds, AlertCommand::Cancel(_));
    }

    #[test]
    fn unrelated_keys_produce_nothing() {
        let id = visible_alert();
        let cmds = handle_alert_mode(&Key::Character("x".to_string()), id, true);
        assert!(cmds.is_empty());
    }
}
