//! Transient, auto-expiring alerts.
//!
//! An [`AlertSlot`] holds at most one message. Setting a message replaces the
//! previous one, aborts its expiry timer and arms a new one, so the most
//! recent message is always shown for the full duration.
//!
//! The timer runs on the ambient tokio runtime. Expiry is also checked on
//! read, so a slot used outside a runtime still clears itself on time.

use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// A message with its expiry instant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    message: String,
    expires_at: Instant,
}

impl Alert {
    /// The message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// When the alert stops being shown.
    pub fn expires_at(&self) -> Instant {
        self.expires_at
    }

    /// Whether the expiry instant has passed.
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[derive(Default)]
struct SlotState {
    alert: Option<Alert>,
    // Bumped on every set/clear; a timer only clears the alert it armed.
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl SlotState {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Single-slot alert with a cancellable expiry timer.
pub struct AlertSlot {
    state: Arc<Mutex<SlotState>>,
    duration: Duration,
}

impl AlertSlot {
    /// Create an empty slot whose alerts last `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            state: Arc::new(Mutex::new(SlotState::default())),
            duration,
        }
    }

    /// How long each alert is shown.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Show `message`, replacing any current alert.
    ///
    /// An empty message clears the slot.
    pub fn set(&self, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            self.clear();
            return;
        }

        let mut state = lock(&self.state);
        state.cancel_timer();
        state.generation += 1;
        let generation = state.generation;

        let expires_at = Instant::now() + self.duration;
        tracing::debug!(%message, "alert raised");
        state.alert = Some(Alert {
            message,
            expires_at,
        });
        state.timer = self.arm_timer(generation, expires_at);
    }

    /// Remove the current alert, if any, and cancel its timer.
    pub fn clear(&self) {
        let mut state = lock(&self.state);
        state.cancel_timer();
        state.generation += 1;
        state.alert = None;
    }

    /// True iff an unexpired, non-empty alert is present.
    pub fn is_showing(&self) -> bool {
        self.current().is_some()
    }

    /// The alert currently shown.
    pub fn current(&self) -> Option<Alert> {
        lock(&self.state)
            .alert
            .as_ref()
            .filter(|alert| !alert.is_expired())
            .cloned()
    }

    fn arm_timer(&self, generation: u64, expires_at: Instant) -> Option<JoinHandle<()>> {
        let handle = match Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                tracing::debug!("no tokio runtime, alert expiry checked on read only");
                return None;
            }
        };

        let state = Arc::downgrade(&self.state);
        Some(handle.spawn(expire_at(state, generation, expires_at)))
    }
}

impl Drop for AlertSlot {
    fn drop(&mut self) {
        lock(&self.state).cancel_timer();
    }
}

async fn expire_at(state: Weak<Mutex<SlotState>>, generation: u64, expires_at: Instant) {
    tokio::time::sleep_until(expires_at).await;

    let Some(state) = state.upgrade() else {
        return;
    };
    let mut state = lock(&state);
    if state.generation == generation {
        state.alert = None;
        state.timer = None;
        tracing::debug!("alert expired");
    }
}

// A poisoned slot only ever holds plain data, so keep using it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEVEN_SECONDS: Duration = Duration::from_millis(7000);

    #[tokio::test(start_paused = true)]
    async fn test_set_then_clear() {
        let slot = AlertSlot::new(SEVEN_SECONDS);
        assert!(!slot.is_showing());

        slot.set("Invalid key");
        assert!(slot.is_showing());
        assert_eq!(slot.current().unwrap().message(), "Invalid key");

        slot.clear();
        assert!(!slot.is_showing());
        assert!(slot.current().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expires_after_duration() {
        let slot = AlertSlot::new(SEVEN_SECONDS);
        slot.set("Invalid key");

        tokio::time::sleep(Duration::from_millis(6999)).await;
        assert!(slot.is_showing());

        tokio::time::sleep(Duration::from_millis(1)).await;
        tokio::task::yield_now().await;
        assert!(!slot.is_showing());
        assert!(lock(&slot.state).alert.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_alert_rearms_timer() {
        let slot = AlertSlot::new(SEVEN_SECONDS);
        slot.set("first");

        tokio::time::sleep(Duration::from_millis(5000)).await;
        slot.set("second");

        // Past the first alert's deadline.
        tokio::time::sleep(Duration::from_millis(3000)).await;
        tokio::task::yield_now().await;
        assert_eq!(slot.current().unwrap().message(), "second");

        tokio::time::sleep(Duration::from_millis(4000)).await;
        tokio::task::yield_now().await;
        assert!(!slot.is_showing());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_message_clears() {
        let slot = AlertSlot::new(SEVEN_SECONDS);
        slot.set("something");
        slot.set("");
        assert!(!slot.is_showing());
    }

    #[test]
    fn test_works_without_runtime() {
        let slot = AlertSlot::new(Duration::from_millis(0));
        slot.set("gone at once");
        assert!(!slot.is_showing());

        let slot = AlertSlot::new(SEVEN_SECONDS);
        slot.set("still here");
        assert!(slot.is_showing());
        assert!(lock(&slot.state).timer.is_none());
    }
}
