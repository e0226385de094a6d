//! Pasteburn client library.
//!
//! Client half of a "paste once, burn" text-sharing tool. A user supplies a
//! 32-character access key and, to read, a document id; the service stores
//! the document and deletes it on first read.
//!
//! # Features
//!
//! - **Session state machine**: [`PasteSession`] holds key, id and body,
//!   validates them locally and surfaces every failure as a transient alert
//! - **Service abstraction**: [`PasteService`] trait with an HTTP
//!   implementation behind the default `http` feature
//! - **Race safety**: responses are applied only if they belong to the most
//!   recent request of a session that is still alive
//!
//! # Trust boundary
//!
//! The key is sent to the service next to the plaintext body; encryption
//! happens on the service side. Use `https` for anything but a loopback
//! service.
//!
//! # Example
//!
//! ```rust,ignore
//! use pasteburn_client::{HttpPasteService, PasteSession, ServiceConfig};
//!
//! let session = PasteSession::new(HttpPasteService::new(ServiceConfig::from_env())?);
//! session.set_key("0123456789abcdef0123456789abcdef");
//! session.set_id("3fa85f64-5717-4562-b3fc-2c963f66afa6");
//!
//! match session.load().await {
//!     Ok(_) => println!("{}", session.body()),
//!     Err(_) => eprintln!("{}", session.alert().map(|a| a.message().to_string()).unwrap_or_default()),
//! }
//! ```

pub mod alert;
pub mod config;
pub mod errors;
pub mod prelude;
pub mod service;
pub mod session;
pub mod types;

/// Test utilities for session and service testing.
///
/// This module is only available with the `test-utils` feature or in test builds.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use alert::{Alert, AlertSlot};
pub use config::ServiceConfig;
pub use errors::{PasteError, PasteErrorCode, ValidationError};
pub use service::PasteService;
pub use session::{PasteSession, RequestOutcome, SessionState};
pub use types::{validate_id, AccessKey, PasteId, PasteResponse, KEY_LENGTH};

#[cfg(feature = "http")]
pub use service::HttpPasteService;

/// Common result alias for Pasteburn operations.
pub type Result<T> = std::result::Result<T, PasteError>;
