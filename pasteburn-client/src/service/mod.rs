//! The paste service seam.
//!
//! The storage service is an external collaborator. [`PasteService`] is the
//! contract the session expects from it; [`HttpPasteService`] speaks the HTTP
//! API and the `test_utils` module provides a scripted double.

use async_trait::async_trait;

use crate::types::{AccessKey, PasteId, PasteResponse};
use crate::Result;

#[cfg(feature = "http")]
mod http;

#[cfg(feature = "http")]
pub use http::HttpPasteService;

/// Path of the view endpoint, relative to the service base URL.
pub const VIEW_PATH: &str = "api/text/view";

/// Path of the create endpoint, relative to the service base URL.
pub const CREATE_PATH: &str = "api/text/create";

/// Remote operations a paste service offers.
///
/// Implementations must treat any non-success status or undecodable body as
/// an error rather than returning an empty response.
#[async_trait]
pub trait PasteService: Send + Sync {
    /// Fetch a paste. Services that burn on read delete it as a side effect.
    async fn view(&self, key: &AccessKey, id: &PasteId) -> Result<PasteResponse>;

    /// Store a new paste and return at least its server-assigned id.
    ///
    /// The key travels next to the plaintext body; any encryption happens on
    /// the service side.
    async fn create(&self, key: &AccessKey, body: &str) -> Result<PasteResponse>;
}

#[async_trait]
impl<T: PasteService + ?Sized> PasteService for std::sync::Arc<T> {
    async fn view(&self, key: &AccessKey, id: &PasteId) -> Result<PasteResponse> {
        (**self).view(key, id).await
    }

    async fn create(&self, key: &AccessKey, body: &str) -> Result<PasteResponse> {
        (**self).create(key, body).await
    }
}
