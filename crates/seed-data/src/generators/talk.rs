//! Talk generation.

use conference::{FakeDataProvider, NewTalk};
use rand::Rng;

use crate::config::SAMPLE_DURATIONS;

/// Generates talks whose topic is a business catch-phrase and whose duration
/// is drawn uniformly from a fixed set.
#[derive(Debug, Clone)]
pub struct TalkGenerator {
    durations: Vec<i32>,
}

impl TalkGenerator {
    /// Creates a generator drawing from [`SAMPLE_DURATIONS`].
    pub fn new() -> Self {
        Self {
            durations: SAMPLE_DURATIONS.to_vec(),
        }
    }

    /// Creates a generator with custom durations. Returns `None` when
    /// `durations` is empty since there would be nothing to draw from.
    pub fn with_durations(durations: Vec<i32>) -> Option<Self> {
        if durations.is_empty() {
            None
        } else {
            Some(Self { durations })
        }
    }

    pub fn durations(&self) -> &[i32] {
        &self.durations
    }

    /// Generates a single talk.
    pub fn generate(&self, text: &mut impl FakeDataProvider, rng: &mut impl Rng) -> NewTalk {
        let topic = text.catch_phrase();
        let duration = self.durations[rng.gen_range(0..self.durations.len())];

        NewTalk { topic, duration }
    }

    /// Generates multiple talks.
    pub fn generate_batch(
        &self,
        count: usize,
        text: &mut impl FakeDataProvider,
        rng: &mut impl Rng,
    ) -> Vec<NewTalk> {
        (0..count).map(|_| self.generate(text, rng)).collect()
    }
}

impl Default for TalkGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conference::FakerProvider;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_generate_batch() {
        let talk_gen = TalkGenerator::new();
        let mut text = FakerProvider::seeded(1);
        let mut rng = StdRng::seed_from_u64(1);

        let talks = talk_gen.generate_batch(10, &mut text, &mut rng);

        assert_eq!(talks.len(), 10);
        for talk in &talks {
            assert!(!talk.topic.is_empty());
            assert!(SAMPLE_DURATIONS.contains(&talk.duration));
        }
    }

    #[test]
    fn test_every_duration_gets_drawn() {
        let talk_gen = TalkGenerator::new();
        let mut text = FakerProvider::seeded(2);
        let mut rng = StdRng::seed_from_u64(2);

        let seen: std::collections::HashSet<i32> = talk_gen
            .generate_batch(200, &mut text, &mut rng)
            .into_iter()
            .map(|t| t.duration)
            .collect();

        assert_eq!(seen.len(), SAMPLE_DURATIONS.len());
    }

    #[test]
    fn test_custom_durations() {
        assert!(TalkGenerator::with_durations(Vec::new()).is_none());

        let talk_gen = TalkGenerator::with_durations(vec![45]).unwrap();
        let mut text = FakerProvider::seeded(3);
        let mut rng = rand::thread_rng();
        assert_eq!(talk_gen.generate(&mut text, &mut rng).duration, 45);
    }
}
