//! Test helpers for presenter tests.
//!
//! Provides a channel-backed presenter and callback flags for asserting
//! which dismissal path fired.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use crate::config::AlertsConfig;
use crate::presenter::{AlertCommand, AlertPresenter};

/// Create a presenter with default config, returning the command sender so
/// tests can drive it the same way components do.
pub fn test_presenter() -> (AlertPresenter, mpsc::Sender<AlertCommand>) {
    test_presenter_with(AlertsConfig::default())
}

/// Create a presenter with a specific config.
pub fn test_presenter_with(config: AlertsConfig) -> (AlertPresenter, mpsc::Sender<AlertCommand>) {
    let (tx, rx) = mpsc::channel();
    (AlertPresenter::new(&config, rx), tx)
}

/// A flag plus a callback that sets it, for asserting callback dispatch.
pub fn fired_flag() -> (Arc<AtomicBool>, impl FnOnce() + Send + 'static) {
    let flag = Arc::new(AtomicBool::new(false));
    let setter = {
        let flag = flag.clone();
        move || flag.store(true, Ordering::SeqCst)
    };
    (flag, setter)
}

/// Read a flag produced by [`fired_flag`].
pub fn fired(flag: &Arc<AtomicBool>) -> bool {
    flag.load(Ordering::SeqCst)
}

/// Assert that a command list contains exactly one command matching the pattern.
///
/// Usage: `assert_single_command!(cmds, AlertCommand::Cancel(_));`
#[macro_export]
macro_rules! assert_single_command {
    ($cmds:expr, $pattern:pat) => {{
        assert_eq!(
            $cmds.len(),
            1,
            "expected 1 command, got {}: {:?}",
            $cmds.len(),
            $cmds
        );
        assert!(
            matches!($cmds[0], $pattern),
            "expected {}, got {:?}",
            stringify!($pattern),
            $cmds[0]
        );
    }};
}
