//! Scripted in-memory paste service.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;

use crate::service::PasteService;
use crate::types::{AccessKey, PasteId, PasteResponse};
use crate::{PasteError, Result};

/// A call received by [`MockPasteService`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordedCall {
    /// A view request
    View {
        /// Key as sent
        key: String,
        /// Id as sent
        id: String,
    },
    /// A create request
    Create {
        /// Key as sent
        key: String,
        /// Body as sent
        body: String,
    },
}

struct Scripted {
    delay: Duration,
    result: Result<PasteResponse>,
}

#[derive(Default)]
struct MockState {
    calls: Vec<RecordedCall>,
    views: VecDeque<Scripted>,
    creates: VecDeque<Scripted>,
}

/// Paste service double that answers from a queue of scripted results.
///
/// Each call pops the next scripted result for its operation. With nothing
/// queued, the call fails with `PasteError::Internal`.
#[derive(Default)]
pub struct MockPasteService {
    state: Mutex<MockState>,
}

impl MockPasteService {
    /// Create a service with nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful view response.
    pub fn respond_to_view(&self, response: PasteResponse) -> &Self {
        self.push_view(Duration::ZERO, Ok(response))
    }

    /// Queue a view response delivered after `delay`.
    pub fn respond_to_view_after(&self, delay: Duration, response: PasteResponse) -> &Self {
        self.push_view(delay, Ok(response))
    }

    /// Queue a failed view.
    pub fn fail_view(&self, err: PasteError) -> &Self {
        self.push_view(Duration::ZERO, Err(err))
    }

    /// Queue a view failure delivered after `delay`.
    pub fn fail_view_after(&self, delay: Duration, err: PasteError) -> &Self {
        self.push_view(delay, Err(err))
    }

    /// Queue a successful create response.
    pub fn respond_to_create(&self, response: PasteResponse) -> &Self {
        self.push_create(Duration::ZERO, Ok(response))
    }

    /// Queue a create response delivered after `delay`.
    pub fn respond_to_create_after(&self, delay: Duration, response: PasteResponse) -> &Self {
        self.push_create(delay, Ok(response))
    }

    /// Queue a failed create.
    pub fn fail_create(&self, err: PasteError) -> &Self {
        self.push_create(Duration::ZERO, Err(err))
    }

    /// Queue a create failure delivered after `delay`.
    pub fn fail_create_after(&self, delay: Duration, err: PasteError) -> &Self {
        self.push_create(delay, Err(err))
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.lock().calls.clone()
    }

    /// Number of calls received so far.
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// View calls received so far.
    pub fn view_calls(&self) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, RecordedCall::View { .. }))
            .collect()
    }

    /// Create calls received so far.
    pub fn create_calls(&self) -> Vec<RecordedCall> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, RecordedCall::Create { .. }))
            .collect()
    }

    fn push_view(&self, delay: Duration, result: Result<PasteResponse>) -> &Self {
        self.lock().views.push_back(Scripted { delay, result });
        self
    }

    fn push_create(&self, delay: Duration, result: Result<PasteResponse>) -> &Self {
        self.lock().creates.push_back(Scripted { delay, result });
        self
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

async fn play(scripted: Option<Scripted>, operation: &str) -> Result<PasteResponse> {
    match scripted {
        Some(Scripted { delay, result }) => {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            result
        }
        None => Err(PasteError::Internal(format!(
            "no scripted {} response",
            operation
        ))),
    }
}

#[async_trait]
impl PasteService for MockPasteService {
    async fn view(&self, key: &AccessKey, id: &PasteId) -> Result<PasteResponse> {
        let scripted = {
            let mut state = self.lock();
            state.calls.push(RecordedCall::View {
                key: key.as_str().to_string(),
                id: id.to_string(),
            });
            state.views.pop_front()
        };
        play(scripted, "view").await
    }

    async fn create(&self, key: &AccessKey, body: &str) -> Result<PasteResponse> {
        let scripted = {
            let mut state = self.lock();
            state.calls.push(RecordedCall::Create {
                key: key.as_str().to_string(),
                body: body.to_string(),
            });
            state.creates.pop_front()
        };
        play(scripted, "create").await
    }
}
