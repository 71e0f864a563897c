use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

use crate::{errors::AppError, fake_data::FakeDataProvider};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Speaker {
    pub id: Uuid,
    pub first: Option<String>,
    pub last: Option<String>,
    pub email: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Speaker {
    /// Sentence count used by [`Speaker::speechify_default`].
    pub const DEFAULT_SPEECH_SENTENCES: i32 = 1;

    /// Builds an unsaved-but-valid speaker record. Stores call this after
    /// validating a [`NewSpeaker`].
    pub(crate) fn from_new(new: NewSpeaker, email: String) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: Uuid::new_v4(),
            first: new.first,
            last: new.last,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// "First Last", skipping whichever parts are missing.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first.as_deref(), self.last.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Generates `sentence_count` sentences of hipster filler for this speaker.
    ///
    /// Zero sentences yields an empty string; negative counts are rejected.
    pub fn speechify(
        &self,
        text: &mut impl FakeDataProvider,
        sentence_count: i32,
    ) -> Result<String, AppError> {
        let count = usize::try_from(sentence_count).map_err(|_| {
            AppError::InvalidInput(format!(
                "sentence count must not be negative, got {sentence_count}"
            ))
        })?;

        Ok(text.hipster_sentences(count))
    }

    pub fn speechify_default(&self, text: &mut impl FakeDataProvider) -> String {
        self.speechify(text, Self::DEFAULT_SPEECH_SENTENCES)
            .unwrap_or_default()
    }
}

/// Fields accepted when creating a speaker. Every field is optional at the
/// type level; `email` is enforced by [`NewSpeaker::validated`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewSpeaker {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
    #[serde(default)]
    #[validate(
        required(message = "Email can't be blank"),
        length(min = 1, message = "Email can't be blank")
    )]
    pub email: Option<String>,
}

impl NewSpeaker {
    pub fn new(
        first: impl Into<String>,
        last: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first: Some(first.into()),
            last: Some(last.into()),
            email: Some(email.into()),
        }
    }

    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }

    /// Checks presence of `email` and returns it. Whitespace-only counts as
    /// blank, but a present email is stored exactly as given.
    pub fn validated(&self) -> Result<String, AppError> {
        let trimmed = Self {
            email: self.email.as_deref().map(str::trim).map(String::from),
            ..Self::default()
        };
        trimmed.validate()?;

        self.email
            .clone()
            .ok_or_else(|| AppError::Validation("Email can't be blank".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Talk {
    pub id: Uuid,
    pub topic: String,
    pub duration: i32,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Talk {
    pub(crate) fn from_new(new: NewTalk) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: Uuid::new_v4(),
            topic: new.topic,
            duration: new.duration,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Fields for a talk. Talks carry no validation; any topic and duration is
/// stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTalk {
    pub topic: String,
    /// Length in minutes.
    pub duration: i32,
}

impl NewTalk {
    pub fn new(topic: impl Into<String>, duration: i32) -> Self {
        Self {
            topic: topic.into(),
            duration,
        }
    }
}
