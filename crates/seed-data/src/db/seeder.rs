//! Database seeding utilities.

use std::fmt;

use conference::{
    AppError, ConferenceStore, FakeDataProvider, FakerProvider, NewSpeaker, NewTalk, Speaker,
    Talk,
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::{SeedConfig, SpeakerSeedMode};
use crate::generators::{SpeakerGenerator, TalkGenerator};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Store error: {0}")]
    Store(#[from] AppError),
    #[error("At least one talk duration is required")]
    EmptyDurations,
}

/// Counts from a single seeding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub talks_deleted: u64,
    pub talks_created: usize,
    pub speakers_deleted: u64,
    pub speakers_created: usize,
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Seeded {} talks and {} speakers (replaced {} talks and {} speakers)",
            self.talks_created, self.speakers_created, self.talks_deleted, self.speakers_deleted
        )
    }
}

/// Seeder for replacing the talk and speaker tables with generated data.
///
/// Each table is cleared and then refilled, so repeated runs replace rather
/// than accumulate. The delete and the inserts are separate statements; a
/// failure in between leaves the table empty.
pub struct Seeder<S> {
    store: S,
}

impl<S: ConferenceStore> Seeder<S> {
    /// Creates a new seeder writing through the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Runs a full seed with randomness derived from `config.rng_seed`.
    pub async fn run_with_config(&self, config: &SeedConfig) -> Result<SeedReport, SeedError> {
        match config.rng_seed {
            Some(seed) => {
                info!("Using RNG seed {seed}");
                let mut text = FakerProvider::seeded(seed);
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
                self.run(config, &mut text, &mut rng).await
            }
            None => {
                let mut text = FakerProvider::from_entropy();
                let mut rng = StdRng::from_entropy();
                self.run(config, &mut text, &mut rng).await
            }
        }
    }

    /// Replaces all talks and speakers with freshly generated ones.
    ///
    /// Aborts on the first store failure; tables already reseeded stay that way.
    pub async fn run(
        &self,
        config: &SeedConfig,
        text: &mut impl FakeDataProvider,
        rng: &mut impl Rng,
    ) -> Result<SeedReport, SeedError> {
        info!("Seeding database...");

        let talk_gen = TalkGenerator::with_durations(config.talk_durations.clone())
            .ok_or(SeedError::EmptyDurations)?;

        let talks_deleted = self.reset_talks().await?;
        let talks = talk_gen.generate_batch(config.talk_count, text, rng);
        let talks = self.seed_talks(talks).await?;

        let speakers_deleted = self.reset_speakers().await?;
        let speakers = SpeakerGenerator::new().generate_batch(config.speaker_count, text);
        let speakers = self.seed_speakers(speakers, config.speaker_mode).await?;

        let report = SeedReport {
            talks_deleted,
            talks_created: talks.len(),
            speakers_deleted,
            speakers_created: speakers.len(),
        };
        info!("{report}");
        Ok(report)
    }

    /// Deletes every talk.
    pub async fn reset_talks(&self) -> Result<u64, SeedError> {
        let deleted = self.store.delete_all_talks().await?;
        info!("Deleted {deleted} talks");
        Ok(deleted)
    }

    /// Deletes every speaker.
    pub async fn reset_speakers(&self) -> Result<u64, SeedError> {
        let deleted = self.store.delete_all_speakers().await?;
        info!("Deleted {deleted} speakers");
        Ok(deleted)
    }

    /// Seeds talks into the store.
    pub async fn seed_talks(&self, talks: Vec<NewTalk>) -> Result<Vec<Talk>, SeedError> {
        info!("Seeding {} talks...", talks.len());

        let created = self.store.create_talks(talks).await?;

        info!("Seeded {} talks", created.len());
        Ok(created)
    }

    /// Seeds speakers into the store according to `mode`.
    pub async fn seed_speakers(
        &self,
        speakers: Vec<NewSpeaker>,
        mode: SpeakerSeedMode,
    ) -> Result<Vec<Speaker>, SeedError> {
        let speakers = match mode {
            SpeakerSeedMode::All => speakers,
            SpeakerSeedMode::LastOnly => {
                let generated = speakers.len();
                let kept: Vec<NewSpeaker> = speakers.into_iter().last().into_iter().collect();
                if generated > kept.len() {
                    warn!("Keeping only the last of {generated} generated speakers");
                }
                kept
            }
        };

        info!("Seeding {} speakers...", speakers.len());

        let mut created = Vec::with_capacity(speakers.len());
        for speaker in speakers {
            created.push(self.store.create_speaker(speaker).await?);
        }

        info!("Seeded {} speakers", created.len());
        Ok(created)
    }

    /// Returns a reference to the store for advanced usage.
    pub fn store(&self) -> &S {
        &self.store
    }
}
