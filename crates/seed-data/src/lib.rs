//! Sample data generation for the conference app.
//!
//! This crate replaces the talk and speaker tables with randomly generated
//! records for development and demos.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let db = Database::connect(&database_url, 5).await?;
//! db.migrate().await?;
//!
//! let report = Seeder::new(db)
//!     .run_with_config(&SeedConfig::default().with_seed(12345))
//!     .await?;
//! println!("{report}");
//! ```

pub mod config;
pub mod db;
pub mod generators;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{DatabaseConfig, SAMPLE_DURATIONS, SeedConfig, SpeakerSeedMode};
    pub use crate::db::{SeedError, SeedReport, Seeder};
    pub use crate::generators::{SpeakerGenerator, TalkGenerator};
    pub use conference::{
        ConferenceStore, Database, FakeDataProvider, FakerProvider, InMemoryStore,
    };
}
