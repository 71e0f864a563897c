//! Speaker generation.

use conference::{FakeDataProvider, NewSpeaker};

/// Generates speakers with independently random first name, last name and
/// email.
#[derive(Debug, Clone, Default)]
pub struct SpeakerGenerator;

impl SpeakerGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates a single speaker.
    pub fn generate(&self, text: &mut impl FakeDataProvider) -> NewSpeaker {
        NewSpeaker {
            first: Some(text.first_name()),
            last: Some(text.last_name()),
            email: Some(text.email()),
        }
    }

    /// Generates multiple speakers.
    pub fn generate_batch(&self, count: usize, text: &mut impl FakeDataProvider) -> Vec<NewSpeaker> {
        (0..count).map(|_| self.generate(text)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conference::FakerProvider;

    #[test]
    fn test_generate_speaker() {
        let speaker_gen = SpeakerGenerator::new();
        let mut text = FakerProvider::from_entropy();
        let speaker = speaker_gen.generate(&mut text);

        assert!(speaker.first.as_deref().is_some_and(|f| !f.is_empty()));
        assert!(speaker.last.as_deref().is_some_and(|l| !l.is_empty()));
        assert!(speaker.email.as_deref().is_some_and(|e| e.contains('@')));
        assert!(speaker.validated().is_ok());
    }

    #[test]
    fn test_generate_batch() {
        let speaker_gen = SpeakerGenerator::new();
        let mut text = FakerProvider::seeded(99);
        let speakers = speaker_gen.generate_batch(10, &mut text);

        assert_eq!(speakers.len(), 10);
    }
}
