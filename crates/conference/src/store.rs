//! Datastore abstraction for speakers and talks.
//!
//! Callers hold an explicit [`ConferenceStore`] handle instead of reaching for
//! a global connection. [`crate::database::Database`] is the PostgreSQL
//! implementation; [`InMemoryStore`] keeps both tables in process memory.

use std::sync::Mutex;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::{
    errors::AppError,
    models::{NewSpeaker, NewTalk, Speaker, Talk},
};

#[async_trait]
pub trait ConferenceStore: Send + Sync {
    /// Validates and persists a speaker. A missing or blank email yields
    /// [`AppError::Validation`] and nothing is written.
    async fn create_speaker(&self, speaker: NewSpeaker) -> Result<Speaker, AppError>;

    /// Removes every speaker, returning how many were deleted.
    async fn delete_all_speakers(&self) -> Result<u64, AppError>;

    async fn find_speaker(&self, id: Uuid) -> Result<Option<Speaker>, AppError>;

    /// Speakers in creation order.
    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError>;

    async fn count_speakers(&self) -> Result<u64, AppError>;

    /// Persists every talk as given; talks are not validated.
    async fn create_talks(&self, talks: Vec<NewTalk>) -> Result<Vec<Talk>, AppError>;

    /// Removes every talk, returning how many were deleted.
    async fn delete_all_talks(&self) -> Result<u64, AppError>;

    /// Talks in creation order.
    async fn list_talks(&self) -> Result<Vec<Talk>, AppError>;

    async fn count_talks(&self) -> Result<u64, AppError>;

    /// Like [`ConferenceStore::find_speaker`] but absent ids are an error.
    async fn get_speaker(&self, id: Uuid) -> Result<Speaker, AppError> {
        self.find_speaker(id).await?.ok_or(AppError::NotFound)
    }
}

#[async_trait]
impl<S: ConferenceStore + ?Sized> ConferenceStore for &S {
    async fn create_speaker(&self, speaker: NewSpeaker) -> Result<Speaker, AppError> {
        (**self).create_speaker(speaker).await
    }

    async fn delete_all_speakers(&self) -> Result<u64, AppError> {
        (**self).delete_all_speakers().await
    }

    async fn find_speaker(&self, id: Uuid) -> Result<Option<Speaker>, AppError> {
        (**self).find_speaker(id).await
    }

    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError> {
        (**self).list_speakers().await
    }

    async fn count_speakers(&self) -> Result<u64, AppError> {
        (**self).count_speakers().await
    }

    async fn create_talks(&self, talks: Vec<NewTalk>) -> Result<Vec<Talk>, AppError> {
        (**self).create_talks(talks).await
    }

    async fn delete_all_talks(&self) -> Result<u64, AppError> {
        (**self).delete_all_talks().await
    }

    async fn list_talks(&self) -> Result<Vec<Talk>, AppError> {
        (**self).list_talks().await
    }

    async fn count_talks(&self) -> Result<u64, AppError> {
        (**self).count_talks().await
    }
}

#[derive(Debug, Default)]
struct Tables {
    speakers: Vec<Speaker>,
    talks: Vec<Talk>,
}

/// Process-local store. Contents vanish with the value.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> std::sync::MutexGuard<'_, Tables> {
        // A panic while holding the lock leaves plain Vecs behind, still usable
        self.tables
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl ConferenceStore for InMemoryStore {
    async fn create_speaker(&self, speaker: NewSpeaker) -> Result<Speaker, AppError> {
        let email = speaker.validated()?;
        let speaker = Speaker::from_new(speaker, email);

        debug!(id = %speaker.id, "Created speaker");
        self.tables().speakers.push(speaker.clone());
        Ok(speaker)
    }

    async fn delete_all_speakers(&self) -> Result<u64, AppError> {
        let removed = std::mem::take(&mut self.tables().speakers);
        Ok(removed.len() as u64)
    }

    async fn find_speaker(&self, id: Uuid) -> Result<Option<Speaker>, AppError> {
        Ok(self.tables().speakers.iter().find(|s| s.id == id).cloned())
    }

    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError> {
        Ok(self.tables().speakers.clone())
    }

    async fn count_speakers(&self) -> Result<u64, AppError> {
        Ok(self.tables().speakers.len() as u64)
    }

    async fn create_talks(&self, talks: Vec<NewTalk>) -> Result<Vec<Talk>, AppError> {
        let created: Vec<Talk> = talks.into_iter().map(Talk::from_new).collect();
        self.tables().talks.extend(created.iter().cloned());
        Ok(created)
    }

    async fn delete_all_talks(&self) -> Result<u64, AppError> {
        let removed = std::mem::take(&mut self.tables().talks);
        Ok(removed.len() as u64)
    }

    async fn list_talks(&self) -> Result<Vec<Talk>, AppError> {
        Ok(self.tables().talks.clone())
    }

    async fn count_talks(&self) -> Result<u64, AppError> {
        Ok(self.tables().talks.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_speaker_requires_email() {
        let store = InMemoryStore::new();

        let err = store
            .create_speaker(NewSpeaker {
                first: Some("Grace".to_string()),
                last: Some("Hopper".to_string()),
                email: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = store
            .create_speaker(NewSpeaker::with_email(""))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        assert_eq!(store.count_speakers().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_speaker_is_retrievable() {
        let store = InMemoryStore::new();

        let created = store
            .create_speaker(NewSpeaker::with_email("a@b.com"))
            .await
            .unwrap();
        assert_eq!(created.email, "a@b.com");
        assert!(created.first.is_none());

        let found = store.get_speaker(created.id).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_speaker_ids_are_unique() {
        let store = InMemoryStore::new();
        let a = store
            .create_speaker(NewSpeaker::with_email("a@b.com"))
            .await
            .unwrap();
        let b = store
            .create_speaker(NewSpeaker::with_email("a@b.com"))
            .await
            .unwrap();

        // Duplicate emails are allowed
        assert_ne!(a.id, b.id);
        assert_eq!(store.count_speakers().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_get_speaker_missing() {
        let store = InMemoryStore::new();
        let err = store.get_speaker(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_all_speakers_returns_count() {
        let store = InMemoryStore::new();
        for email in ["a@b.com", "c@d.com", "e@f.com"] {
            store
                .create_speaker(NewSpeaker::with_email(email))
                .await
                .unwrap();
        }

        assert_eq!(store.delete_all_speakers().await.unwrap(), 3);
        assert_eq!(store.delete_all_speakers().await.unwrap(), 0);
        assert!(store.list_speakers().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_talks_without_validation() {
        let store = InMemoryStore::new();
        let created = store
            .create_talks(vec![NewTalk::new("", -5), NewTalk::new("Rust at scale", 40)])
            .await
            .unwrap();

        assert_eq!(created.len(), 2);
        assert_eq!(created[0].topic, "");
        assert_eq!(created[0].duration, -5);

        let listed = store.list_talks().await.unwrap();
        assert_eq!(listed, created);
    }

    #[tokio::test]
    async fn test_delete_all_talks_returns_count() {
        let store = InMemoryStore::new();
        store
            .create_talks(vec![NewTalk::new("One", 20), NewTalk::new("Two", 30)])
            .await
            .unwrap();

        assert_eq!(store.delete_all_talks().await.unwrap(), 2);
        assert_eq!(store.count_talks().await.unwrap(), 0);
    }
}
