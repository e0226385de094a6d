//! Assertion helpers for session state.

use crate::service::PasteService;
use crate::session::PasteSession;

/// Assert that the session shows exactly `expected`.
///
/// # Panics
/// Panics if no alert is shown or its text differs.
pub fn assert_alert<S: PasteService>(session: &PasteSession<S>, expected: &str) {
    match session.alert() {
        Some(alert) => assert_eq!(
            alert.message(),
            expected,
            "Alert text should be {:?}, got {:?}",
            expected,
            alert.message()
        ),
        None => panic!("Expected alert {:?}, but none is shown", expected),
    }
}

/// Assert that the session shows no alert.
///
/// # Panics
/// Panics if an alert is shown.
pub fn assert_no_alert<S: PasteService>(session: &PasteSession<S>) {
    if let Some(alert) = session.alert() {
        panic!("Expected no alert, got {:?}", alert.message());
    }
}
