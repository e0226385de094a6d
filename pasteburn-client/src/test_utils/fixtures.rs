//! Test fixtures and canned responses.

use crate::types::PasteResponse;

/// Collection of commonly used test fixtures.
pub struct TestFixtures;

impl TestFixtures {
    /// A valid 32-character key.
    pub const KEY: &'static str = "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    /// A second valid key.
    pub const OTHER_KEY: &'static str = "0123456789abcdef0123456789abcdef";

    /// A well-formed UUID v4.
    pub const SAMPLE_ID: &'static str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

    /// Another well-formed UUID v4.
    pub const OTHER_ID: &'static str = "9b2e4c1d-8f3a-4b6e-a2d7-1c5f0e9b3a84";

    /// Keys of the wrong length.
    pub const BAD_KEYS: &'static [&'static str] = &[
        "",
        "short",
        "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
        "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
    ];

    /// Ids that are not hyphenated UUID v4s.
    pub const BAD_IDS: &'static [&'static str] = &[
        "",
        "42",
        "3fa85f6457174562b3fc2c963f66afa6",
        "a8098c1a-f86e-11da-bd1a-00112444be1e",
    ];

    /// Response to a successful view.
    pub fn viewed(id: &str, body: &str) -> PasteResponse {
        PasteResponse {
            id: Some(id.to_string()),
            body: Some(body.to_string()),
            ..Default::default()
        }
    }

    /// Response to a successful create.
    pub fn created(id: &str) -> PasteResponse {
        PasteResponse {
            id: Some(id.to_string()),
            ..Default::default()
        }
    }

    /// Response to a view of a paste that no longer exists.
    pub fn burned(id: &str) -> PasteResponse {
        PasteResponse {
            id: Some(id.to_string()),
            body: Some(String::new()),
            ..Default::default()
        }
    }
}
