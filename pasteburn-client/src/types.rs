//! Wire and domain types shared by the session and service layers.

use std::fmt;

use rand::{distributions::Alphanumeric, Rng};
use serde::{Deserialize, Serialize};
use uuid::{Uuid, Variant, Version};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::ValidationError;

/// Number of characters an access key must have.
///
/// The service uses the key bytes directly as an AES-256 key.
pub const KEY_LENGTH: usize = 32;

/// A validated 32-character access key.
///
/// The key is a shared secret: `Debug` never prints it and its memory is
/// wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct AccessKey(String);

impl AccessKey {
    /// Validate and wrap a key.
    ///
    /// Length is counted in characters, not bytes.
    pub fn parse(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        let actual = key.chars().count();
        if actual != KEY_LENGTH {
            let mut key = key;
            key.zeroize();
            return Err(ValidationError::KeyLength {
                expected: KEY_LENGTH,
                actual,
            });
        }
        Ok(Self(key))
    }

    /// Generate a random alphanumeric key.
    pub fn generate() -> Self {
        let key: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(KEY_LENGTH)
            .map(char::from)
            .collect();
        Self(key)
    }

    /// Borrow the raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(<redacted>)")
    }
}

/// Check that `id` is a hyphenated UUID v4.
///
/// Accepts either letter case; rejects the simple, braced and URN forms as
/// well as nil and non-RFC 4122 variants.
pub fn validate_id(id: &str) -> bool {
    if id.len() != 36 {
        return false;
    }
    match Uuid::parse_str(id) {
        Ok(uuid) => {
            uuid.get_version() == Some(Version::Random) && uuid.get_variant() == Variant::RFC4122
        }
        Err(_) => false,
    }
}

/// A validated document identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PasteId(Uuid);

impl PasteId {
    /// Validate and wrap a document id.
    pub fn parse(id: &str) -> Result<Self, ValidationError> {
        let trimmed = id.trim();
        if !validate_id(trimmed) {
            return Err(ValidationError::MalformedId(id.to_string()));
        }
        Uuid::parse_str(trimmed)
            .map(Self)
            .map_err(|_| ValidationError::MalformedId(id.to_string()))
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for PasteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Body of a create request.
#[derive(Debug, Serialize)]
pub struct CreatePasteRequest<'a> {
    /// Access key, sent as-is
    pub key: &'a str,
    /// Document text
    pub body: &'a str,
}

/// Fields the service may return from either endpoint.
///
/// Every field is optional; the session decides per operation which ones it
/// applies. The capitalised aliases match services that serialise exported
/// struct fields without renaming.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasteResponse {
    /// Document id
    #[serde(default, alias = "ID", alias = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Document text (plaintext on view, may be ciphertext on create)
    #[serde(default, alias = "Body", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    /// Access key echoed back by the service
    #[serde(default, alias = "Key", skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Message the service wants shown to the user
    #[serde(default, alias = "Alert", skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
}

impl PasteResponse {
    /// Returned id, if present and non-empty.
    pub fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }

    /// Returned body, if present and non-empty.
    pub fn body(&self) -> Option<&str> {
        non_empty(&self.body)
    }

    /// Returned key, if present and non-empty.
    pub fn key(&self) -> Option<&str> {
        non_empty(&self.key)
    }

    /// Returned alert, if present and non-empty.
    pub fn alert(&self) -> Option<&str> {
        non_empty(&self.alert)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
