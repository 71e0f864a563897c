//! Speakers and talks for the conference app.
//!
//! Entities live in [`models`], persistence goes through a
//! [`store::ConferenceStore`] handle ([`database::Database`] for PostgreSQL,
//! [`store::InMemoryStore`] for tests), and placeholder text comes from a
//! [`fake_data::FakeDataProvider`].

pub mod database;
pub mod errors;
pub mod fake_data;
pub mod models;
pub mod store;

pub use database::Database;
pub use errors::AppError;
pub use fake_data::{FakeDataProvider, FakerProvider};
pub use models::{NewSpeaker, NewTalk, Speaker, Talk};
pub use store::{ConferenceStore, InMemoryStore};
