//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use pasteburn_client::prelude::*;
//! ```

// Session
pub use crate::session::{PasteSession, RequestOutcome, SessionState};

// Error handling
pub use crate::errors::{PasteError, PasteErrorCode, ValidationError};
pub use crate::Result;

// Service
pub use crate::config::ServiceConfig;
pub use crate::service::PasteService;

#[cfg(feature = "http")]
pub use crate::service::HttpPasteService;

// Types
pub use crate::types::{AccessKey, PasteId, PasteResponse};
