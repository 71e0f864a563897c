//! Database integration for seeding sample data.
//!
//! The [`Seeder`] clears and repopulates the talk and speaker tables through
//! whatever [`conference::ConferenceStore`] it is handed.

mod seeder;

pub use seeder::{SeedError, SeedReport, Seeder};
