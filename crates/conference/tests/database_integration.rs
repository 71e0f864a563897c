//! Integration tests for the PostgreSQL store.
//!
//! To run these tests, you need a PostgreSQL database and the `DATABASE_URL`
//! environment variable set. Migrations are applied by the tests themselves.
//!
//! Run with: `DATABASE_URL=postgres://... cargo nextest run -p conference`
//!
//! These tests delete every speaker and talk, so point them at a scratch
//! database rather than a development one.

use conference::{AppError, ConferenceStore, Database, NewSpeaker, NewTalk};
use sqlx::postgres::PgPoolOptions;
use std::env;
use tokio::sync::{Mutex, MutexGuard};

/// Tests in this binary share two tables; run them one at a time.
static TABLES: Mutex<()> = Mutex::const_new(());

/// Get a migrated database, skipping tests if DATABASE_URL is not set.
async fn get_test_db() -> Option<(Database, MutexGuard<'static, ()>)> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    let pool = match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            return None;
        }
    };

    let guard = TABLES.lock().await;
    let db = Database::new(pool);
    db.migrate().await.expect("Failed to apply migrations");
    Some((db, guard))
}

#[tokio::test]
async fn test_create_speaker_with_email_is_retrievable() {
    let Some((db, _guard)) = get_test_db().await else {
        return;
    };
    db.delete_all_speakers().await.unwrap();

    let created = db
        .create_speaker(NewSpeaker::new("Ada", "Lovelace", "a@b.com"))
        .await
        .expect("speaker with email should persist");

    let found = db.find_speaker(created.id).await.unwrap().unwrap();
    assert_eq!(found.email, "a@b.com");
    assert_eq!(found.first.as_deref(), Some("Ada"));
    assert_eq!(found.last.as_deref(), Some("Lovelace"));
    assert_eq!(db.count_speakers().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_speaker_without_email_leaves_table_unchanged() {
    let Some((db, _guard)) = get_test_db().await else {
        return;
    };
    db.delete_all_speakers().await.unwrap();
    db.create_speaker(NewSpeaker::with_email("existing@example.com"))
        .await
        .unwrap();

    for invalid in [
        NewSpeaker::default(),
        NewSpeaker::with_email(""),
        NewSpeaker::with_email("  "),
    ] {
        let err = db.create_speaker(invalid).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    assert_eq!(db.count_speakers().await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_all_reports_removed_rows() {
    let Some((db, _guard)) = get_test_db().await else {
        return;
    };
    db.delete_all_talks().await.unwrap();

    let created = db
        .create_talks(vec![
            NewTalk::new("Leverage agile frameworks", 20),
            NewTalk::new("Bring to the table win-win strategies", 60),
        ])
        .await
        .unwrap();
    assert_eq!(created.len(), 2);
    assert_eq!(db.list_talks().await.unwrap().len(), 2);

    assert_eq!(db.delete_all_talks().await.unwrap(), 2);
    assert_eq!(db.count_talks().await.unwrap(), 0);
}

#[tokio::test]
async fn test_get_speaker_missing_is_not_found() {
    let Some((db, _guard)) = get_test_db().await else {
        return;
    };

    let err = db.get_speaker(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}
