//! Client-side paste session.
//!
//! A [`PasteSession`] owns the key, id and body a user is editing, checks the
//! key and id locally, and drives the view/create exchange with a
//! [`PasteService`]. Every failure ends up as a transient alert as well as an
//! error result.
//!
//! # Overlapping requests
//!
//! Each request takes a ticket from a counter shared by `load` and `save`.
//! A response is applied only if no newer request was issued in the
//! meantime, otherwise it is reported as [`RequestOutcome::Superseded`].
//! Requests started with [`PasteSession::spawn_load`] or
//! [`PasteSession::spawn_save`] keep only a weak reference to the session
//! state; if the session is dropped first the response is discarded.
//!
//! # Example
//!
//! ```rust,ignore
//! use pasteburn_client::{HttpPasteService, PasteSession};
//!
//! let session = PasteSession::new(HttpPasteService::local()?);
//! session.set_key("0123456789abcdef0123456789abcdef");
//! session.set_body("hello");
//! session.save().await?;
//! println!("share this id: {}", session.id());
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::alert::{Alert, AlertSlot};
use crate::config::{ServiceConfig, DEFAULT_ALERT_MS};
use crate::service::PasteService;
use crate::types::{validate_id, AccessKey, PasteId, PasteResponse};
use crate::{PasteError, Result};

/// Alert shown when `load` is attempted with a bad key.
pub const INVALID_KEY_ALERT: &str = "Invalid key";

/// Alert shown when `save` is attempted with a bad key.
pub const KEY_LENGTH_ALERT: &str = "Encryption key must be 32 characters long.";

/// Alert shown when `load` is attempted with a malformed id.
pub const INVALID_ID_ALERT: &str = "Invalid document id";

/// What happened to a request once its response arrived.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The response was merged into the session.
    Applied(PasteResponse),
    /// A newer request was issued first; the session was left untouched.
    Superseded,
    /// The session was dropped before the response arrived.
    Detached,
}

impl RequestOutcome {
    /// Whether the response was merged into the session.
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Snapshot of everything a front-end renders.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Access key as typed
    pub key: String,
    /// Document id as typed or assigned by the service
    pub id: String,
    /// Document text
    pub body: String,
    /// Alert currently shown
    pub alert: Option<String>,
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("key_len", &self.key.chars().count())
            .field("id", &self.id)
            .field("body_len", &self.body.len())
            .field("alert", &self.alert)
            .finish()
    }
}

#[derive(Default)]
struct Fields {
    key: String,
    id: String,
    body: String,
}

struct SessionInner {
    fields: Mutex<Fields>,
    alerts: AlertSlot,
    generation: AtomicU64,
}

impl SessionInner {
    fn fields(&self) -> MutexGuard<'_, Fields> {
        self.fields
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn current_ticket(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn next_ticket(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn reject(&self, err: impl Into<PasteError>, alert: &str) -> PasteError {
        let err = err.into();
        tracing::debug!(%err, "request rejected locally");
        self.alerts.set(alert);
        err
    }

    fn merge_view(&self, fields: &mut Fields, response: &PasteResponse) {
        if let Some(body) = response.body() {
            fields.body = body.to_string();
        }
        if let Some(id) = response.id() {
            fields.id = id.to_string();
        }
        if let Some(key) = response.key() {
            fields.key = key.to_string();
        }
        if let Some(alert) = response.alert() {
            self.alerts.set(alert);
        }
    }

    fn merge_create(&self, fields: &mut Fields, response: &PasteResponse) {
        // The create response may echo the stored ciphertext as `body`; only
        // the assigned id is taken from it.
        if let Some(id) = response.id() {
            fields.id = id.to_string();
        }
        if let Some(alert) = response.alert() {
            self.alerts.set(alert);
        }
    }
}

enum Operation {
    View(PasteId),
    Create,
}

/// Session state plus the operations that act on it.
pub struct PasteSession<S> {
    service: Arc<S>,
    inner: Arc<SessionInner>,
}

impl<S: PasteService> PasteSession<S> {
    /// Create an empty session with the default alert duration.
    pub fn new(service: S) -> Self {
        Self::with_alert_duration(service, Duration::from_millis(DEFAULT_ALERT_MS))
    }

    /// Create an empty session whose alerts last `alert_duration`.
    pub fn with_alert_duration(service: S, alert_duration: Duration) -> Self {
        Self {
            service: Arc::new(service),
            inner: Arc::new(SessionInner {
                fields: Mutex::new(Fields::default()),
                alerts: AlertSlot::new(alert_duration),
                generation: AtomicU64::new(0),
            }),
        }
    }

    /// Create an empty session using the alert settings from `config`.
    pub fn from_config(service: S, config: &ServiceConfig) -> Self {
        Self::with_alert_duration(service, config.alert_duration())
    }

    /// The service this session talks to.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Replace the access key. Checked only when a request is made.
    pub fn set_key(&self, key: impl Into<String>) {
        self.inner.fields().key = key.into();
    }

    /// Replace the document id. Checked only when a request is made.
    pub fn set_id(&self, id: impl Into<String>) {
        self.inner.fields().id = id.into();
    }

    /// Replace the document body.
    pub fn set_body(&self, body: impl Into<String>) {
        self.inner.fields().body = body.into();
    }

    pub fn key(&self) -> String {
        self.inner.fields().key.clone()
    }

    pub fn id(&self) -> String {
        self.inner.fields().id.clone()
    }

    pub fn body(&self) -> String {
        self.inner.fields().body.clone()
    }

    /// Snapshot of the fields and the alert.
    pub fn state(&self) -> SessionState {
        let fields = self.inner.fields();
        SessionState {
            key: fields.key.clone(),
            id: fields.id.clone(),
            body: fields.body.clone(),
            alert: self.alert().map(|alert| alert.message().to_string()),
        }
    }

    /// Show `message` for the alert duration, replacing any current alert.
    pub fn set_alert(&self, message: impl Into<String>) {
        self.inner.alerts.set(message);
    }

    pub fn clear_alert(&self) {
        self.inner.alerts.clear();
    }

    pub fn has_alert(&self) -> bool {
        self.inner.alerts.is_showing()
    }

    /// The alert currently shown, if any.
    pub fn alert(&self) -> Option<Alert> {
        self.inner.alerts.current()
    }

    /// Whether `id` is a well-formed document id (hyphenated UUID v4).
    pub fn validate(id: &str) -> bool {
        validate_id(id)
    }

    /// Fetch the paste named by the current key and id.
    ///
    /// The key must be 32 characters and the id a UUID v4; otherwise an
    /// alert is raised and no request is made.
    pub async fn load(&self) -> Result<RequestOutcome> {
        let (key, id, ticket) = self.prepare_view()?;
        let response = self.service.view(&key, &id).await;
        complete(
            &Arc::downgrade(&self.inner),
            ticket,
            Operation::View(id),
            response,
        )
    }

    /// Store the current body under the current key.
    ///
    /// On success the session id is replaced by the one the service assigned.
    pub async fn save(&self) -> Result<RequestOutcome> {
        let (key, body, ticket) = self.prepare_create()?;
        let response = self.service.create(&key, &body).await;
        complete(&Arc::downgrade(&self.inner), ticket, Operation::Create, response)
    }

    // Tickets are issued under the fields lock, the same lock `complete`
    // holds while it compares tickets and merges.
    fn prepare_view(&self) -> Result<(AccessKey, PasteId, u64)> {
        let fields = self.inner.fields();
        let key = AccessKey::parse(fields.key.clone())
            .map_err(|e| self.inner.reject(e, INVALID_KEY_ALERT))?;
        let id = PasteId::parse(&fields.id).map_err(|e| self.inner.reject(e, INVALID_ID_ALERT))?;
        let ticket = self.inner.next_ticket();
        drop(fields);

        tracing::info!(%id, ticket, "loading paste");
        Ok((key, id, ticket))
    }

    fn prepare_create(&self) -> Result<(AccessKey, String, u64)> {
        let fields = self.inner.fields();
        let key = AccessKey::parse(fields.key.clone())
            .map_err(|e| self.inner.reject(e, KEY_LENGTH_ALERT))?;
        let body = fields.body.clone();
        let ticket = self.inner.next_ticket();
        drop(fields);

        tracing::info!(body_len = body.len(), ticket, "saving paste");
        Ok((key, body, ticket))
    }
}

impl<S: PasteService + 'static> PasteSession<S> {
    /// Start a `load` in the background.
    ///
    /// Validation happens immediately; an invalid key or id is returned as an
    /// error without spawning anything. Must be called within a tokio runtime.
    pub fn spawn_load(&self) -> Result<JoinHandle<Result<RequestOutcome>>> {
        let (key, id, ticket) = self.prepare_view()?;
        let service = Arc::clone(&self.service);
        let inner = Arc::downgrade(&self.inner);

        Ok(tokio::spawn(async move {
            let response = service.view(&key, &id).await;
            complete(&inner, ticket, Operation::View(id), response)
        }))
    }

    /// Start a `save` in the background. See [`spawn_load`](Self::spawn_load).
    pub fn spawn_save(&self) -> Result<JoinHandle<Result<RequestOutcome>>> {
        let (key, body, ticket) = self.prepare_create()?;
        let service = Arc::clone(&self.service);
        let inner = Arc::downgrade(&self.inner);

        Ok(tokio::spawn(async move {
            let response = service.create(&key, &body).await;
            complete(&inner, ticket, Operation::Create, response)
        }))
    }
}

/// Apply a finished request to the session if it is still alive and current.
fn complete(
    inner: &Weak<SessionInner>,
    ticket: u64,
    operation: Operation,
    response: Result<PasteResponse>,
) -> Result<RequestOutcome> {
    let Some(inner) = inner.upgrade() else {
        tracing::debug!(ticket, "session dropped before response arrived");
        return response.map(|_| RequestOutcome::Detached);
    };
    let mut fields = inner.fields();
    let current = inner.current_ticket() == ticket;

    let response = match response {
        Ok(response) => response,
        Err(err) => {
            if current {
                tracing::warn!(%err, ticket, "paste request failed");
                inner.alerts.set(err.alert_message());
            } else {
                tracing::debug!(%err, ticket, "stale paste request failed");
            }
            return Err(err);
        }
    };

    if !current {
        tracing::debug!(ticket, latest = inner.current_ticket(), "discarding stale response");
        return Ok(RequestOutcome::Superseded);
    }

    match operation {
        Operation::View(id) => {
            if response.body().is_none() {
                let err = PasteError::not_found(id.to_string());
                let alert = response
                    .alert()
                    .map(str::to_string)
                    .unwrap_or_else(|| err.alert_message());
                tracing::info!(%id, "paste is gone");
                inner.alerts.set(alert);
                return Err(err);
            }
            inner.merge_view(&mut fields, &response);
        }
        Operation::Create => {
            if response.id().is_none() {
                let err = PasteError::Serialization(
                    "create response is missing the paste id".to_string(),
                );
                tracing::warn!(%err, "paste request failed");
                inner.alerts.set(err.alert_message());
                return Err(err);
            }
            inner.merge_create(&mut fields, &response);
            tracing::info!(id = response.id().unwrap_or_default(), "paste saved");
        }
    }

    Ok(RequestOutcome::Applied(response))
}
