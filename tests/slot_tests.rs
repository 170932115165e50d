use prep_portal::models::{Role, Session};
use prep_portal::slot::{FileSlot, MockSlot, SessionSlot};
use serial_test::serial;
use std::path::PathBuf;
use uuid::Uuid;

fn sample_session() -> Session {
    Session {
        id: Uuid::new_v4(),
        email: "student@example.com".to_string(),
        name: "Test Student".to_string(),
        role: Role::Student,
        referral_code: None,
        is_paid: Some(true),
        referred_by: None,
        phone: None,
        qualification: None,
        expertise: None,
        is_verified: None,
    }
}

/// A unique throwaway slot path per test.
fn scratch_path() -> PathBuf {
    std::env::temp_dir().join(format!("prep-slot-{}.json", Uuid::new_v4()))
}

#[cfg(test)]
mod file_slot_tests {
    use super::*;

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let slot = FileSlot::new(scratch_path());
        let session = sample_session();

        slot.save(&session).await.unwrap();
        let loaded = slot.load().await;
        assert_eq!(loaded, Some(session));

        slot.clear().await.unwrap();
    }

    #[tokio::test]
    async fn load_of_missing_file_is_none() {
        let slot = FileSlot::new(scratch_path());
        assert!(slot.load().await.is_none());
    }

    #[tokio::test]
    async fn malformed_file_is_treated_as_absent() {
        let path = scratch_path();
        tokio::fs::write(&path, "{definitely not a session")
            .await
            .unwrap();

        let slot = FileSlot::new(path);
        assert!(slot.load().await.is_none());

        slot.clear().await.unwrap();
    }

    #[tokio::test]
    async fn clear_of_missing_file_succeeds() {
        let slot = FileSlot::new(scratch_path());
        assert!(slot.clear().await.is_ok());
    }

    #[tokio::test]
    async fn save_replaces_the_previous_record() {
        let slot = FileSlot::new(scratch_path());

        let first = sample_session();
        slot.save(&first).await.unwrap();

        let mut second = sample_session();
        second.email = "replacement@example.com".to_string();
        slot.save(&second).await.unwrap();

        let loaded = slot.load().await.unwrap();
        assert_eq!(loaded.email, "replacement@example.com");

        slot.clear().await.unwrap();
    }
}

// Tests against the fixed default slot path share a single file, so they
// must not interleave.
#[cfg(test)]
mod default_path_tests {
    use super::*;

    fn default_slot() -> FileSlot {
        FileSlot::new(std::env::temp_dir().join("prep-portal-session.json"))
    }

    #[tokio::test]
    #[serial]
    async fn default_path_round_trips() {
        let slot = default_slot();
        let session = sample_session();

        slot.save(&session).await.unwrap();
        assert_eq!(slot.load().await, Some(session));

        slot.clear().await.unwrap();
        assert!(slot.load().await.is_none());
    }

    #[tokio::test]
    #[serial]
    async fn default_path_clear_is_idempotent() {
        let slot = default_slot();
        slot.clear().await.unwrap();
        slot.clear().await.unwrap();
        assert!(slot.load().await.is_none());
    }
}

#[cfg(test)]
mod mock_slot_tests {
    use super::*;

    #[tokio::test]
    async fn mock_stores_the_serialized_record() {
        let slot = MockSlot::new();
        let session = sample_session();

        slot.save(&session).await.unwrap();
        assert_eq!(
            slot.raw().unwrap(),
            serde_json::to_string(&session).unwrap()
        );
        assert_eq!(slot.load().await, Some(session));
    }

    #[tokio::test]
    async fn failing_mock_rejects_writes() {
        let slot = MockSlot::new_failing();
        assert!(slot.save(&sample_session()).await.is_err());
        assert!(slot.clear().await.is_err());
    }
}
