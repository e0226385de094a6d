//! Property-based tests for local validation.
//!
//! Uses proptest to check that no key of the wrong length ever reaches the
//! service, and that every well-formed v4 id passes validation.

use pasteburn_client::test_utils::{MockPasteService, TestFixtures};
use pasteburn_client::{validate_id, AccessKey, PasteSession, KEY_LENGTH};
use proptest::prelude::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("Failed to build runtime")
}

proptest! {
    /// Keys of any other length make zero calls and raise an alert.
    #[test]
    fn test_wrong_length_key_makes_no_calls(key in "\\PC{0,64}") {
        prop_assume!(key.chars().count() != KEY_LENGTH);

        let rt = runtime();
        let session = PasteSession::new(MockPasteService::new());
        session.set_key(key);
        session.set_id(TestFixtures::SAMPLE_ID);

        rt.block_on(async {
            prop_assert!(session.load().await.is_err());
            prop_assert!(session.has_alert());
            prop_assert!(session.save().await.is_err());
            prop_assert!(session.has_alert());
            Ok(())
        })?;

        prop_assert_eq!(session.service().call_count(), 0);
    }

    /// Any 32-character key is accepted.
    #[test]
    fn test_any_32_char_key_parses(key in "\\PC{32}") {
        prop_assert!(AccessKey::parse(key).is_ok());
    }

    /// Random v4 UUIDs validate in both letter cases.
    #[test]
    fn test_v4_ids_validate(bytes in any::<[u8; 16]>()) {
        let id = uuid::Builder::from_random_bytes(bytes).into_uuid().to_string();
        prop_assert!(validate_id(&id));
        prop_assert!(validate_id(&id.to_uppercase()));
    }

    /// Strings that are not 36 characters never validate.
    #[test]
    fn test_wrong_length_ids_rejected(id in "[0-9a-f-]{0,35}") {
        prop_assert!(!validate_id(&id));
    }
}
