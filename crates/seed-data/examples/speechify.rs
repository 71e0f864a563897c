//! Example: Print hipster filler for a generated speaker.
//!
//! Takes an optional sentence count (default 1). Negative counts are rejected.
//! No database is needed; the speaker lives in an in-memory store.
//!
//! Run with:
//! ```
//! cargo run -p seed-data --example speechify -- 3
//! ```

use anyhow::Context;
use conference::{ConferenceStore, FakerProvider, InMemoryStore, Speaker};
use seed_data::generators::SpeakerGenerator;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sentence_count = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<i32>()
            .with_context(|| format!("sentence count must be an integer, got {arg:?}"))?,
        None => Speaker::DEFAULT_SPEECH_SENTENCES,
    };

    let mut text = FakerProvider::from_entropy();
    let store = InMemoryStore::new();
    let speaker = store
        .create_speaker(SpeakerGenerator::new().generate(&mut text))
        .await?;

    let speech = speaker.speechify(&mut text, sentence_count)?;

    tracing::info!(
        "{} <{}> says:",
        speaker.full_name().unwrap_or_default(),
        speaker.email
    );
    tracing::info!("  {speech}");

    Ok(())
}
