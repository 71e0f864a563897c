use async_trait::async_trait;
use sqlx::{PgPool, postgres::PgPoolOptions};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{NewSpeaker, NewTalk, Speaker, Talk};
use crate::store::ConferenceStore;

/// PostgreSQL-backed [`ConferenceStore`].
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, AppError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        Ok(Self::new(pool))
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), AppError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations applied");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ConferenceStore for Database {
    async fn create_speaker(&self, speaker: NewSpeaker) -> Result<Speaker, AppError> {
        let email = speaker.validated()?;

        let created: Speaker = sqlx::query_as(
            r#"
            INSERT INTO speakers (id, first, last, email, created_at, updated_at)
            VALUES ($1, $2, $3, $4, NOW(), NOW())
            RETURNING id, first, last, email, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&speaker.first)
        .bind(&speaker.last)
        .bind(&email)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = %created.id, "Created speaker");
        Ok(created)
    }

    async fn delete_all_speakers(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM speakers")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn find_speaker(&self, id: Uuid) -> Result<Option<Speaker>, AppError> {
        let speaker = sqlx::query_as(
            r#"
            SELECT id, first, last, email, created_at, updated_at
            FROM speakers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(speaker)
    }

    async fn list_speakers(&self) -> Result<Vec<Speaker>, AppError> {
        let speakers = sqlx::query_as(
            r#"
            SELECT id, first, last, email, created_at, updated_at
            FROM speakers
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(speakers)
    }

    async fn count_speakers(&self) -> Result<u64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM speakers")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }

    async fn create_talks(&self, talks: Vec<NewTalk>) -> Result<Vec<Talk>, AppError> {
        let mut created = Vec::with_capacity(talks.len());

        for talk in talks {
            let row: Talk = sqlx::query_as(
                r#"
                INSERT INTO talks (id, topic, duration, created_at, updated_at)
                VALUES ($1, $2, $3, NOW(), NOW())
                RETURNING id, topic, duration, created_at, updated_at
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(&talk.topic)
            .bind(talk.duration)
            .fetch_one(&self.pool)
            .await?;

            created.push(row);
        }

        debug!("Created {} talks", created.len());
        Ok(created)
    }

    async fn delete_all_talks(&self) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM talks").execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn list_talks(&self) -> Result<Vec<Talk>, AppError> {
        let talks = sqlx::query_as(
            r#"
            SELECT id, topic, duration, created_at, updated_at
            FROM talks
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(talks)
    }

    async fn count_talks(&self) -> Result<u64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM talks")
            .fetch_one(&self.pool)
            .await?;

        Ok(count as u64)
    }
}
