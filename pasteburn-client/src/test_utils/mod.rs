//! Test utilities for Pasteburn.
//!
//! This module provides:
//! - A scripted in-memory [`MockPasteService`] that records every call
//! - Fixtures for keys, ids and canned responses
//! - Assertion helpers for session state
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pasteburn_client::test_utils::{MockPasteService, TestFixtures};
//! use pasteburn_client::PasteSession;
//!
//! let service = MockPasteService::new();
//! service.respond_to_create(TestFixtures::created(TestFixtures::SAMPLE_ID));
//!
//! let session = PasteSession::new(service);
//! session.set_key(TestFixtures::KEY);
//! session.save().await?;
//! assert_eq!(session.service().create_calls().len(), 1);
//! ```

mod assertions;
mod fixtures;
mod mock_service;

pub use assertions::{assert_alert, assert_no_alert};
pub use fixtures::TestFixtures;
pub use mock_service::{MockPasteService, RecordedCall};
