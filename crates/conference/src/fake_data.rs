//! Random placeholder data for sample records.
//!
//! [`FakeDataProvider`] is the seam between the entities/seeders and whatever
//! produces the random strings. [`FakerProvider`] is the real implementation,
//! backed by the `fake` crate plus a small hipster vocabulary for prose.

use std::ops::RangeInclusive;

use fake::{
    Fake,
    faker::{
        company::en::CatchPhrase,
        internet::en::SafeEmail,
        name::en::{FirstName, LastName},
    },
};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Words per generated hipster sentence.
const SENTENCE_WORDS: RangeInclusive<usize> = 4..=9;

const HIPSTER_WORDS: &[&str] = &[
    "artisan", "authentic", "banjo", "beard", "bicycle", "bitters", "brooklyn", "brunch",
    "butcher", "cardigan", "chambray", "chillwave", "cliche", "cold-pressed", "craft", "cred",
    "distillery", "dreamcatcher", "ethical", "fanny", "fixie", "flannel", "forage", "freegan",
    "gastropub", "gentrify", "gluten-free", "hashtag", "heirloom", "hoodie", "irony", "jean",
    "kale", "keffiyeh", "kombucha", "letterpress", "lo-fi", "locavore", "lomo", "loko",
    "master", "meditation", "messenger", "microdosing", "mixtape", "mlkshk", "mustache",
    "narwhal", "normcore", "organic", "paleo", "pickled", "pinterest", "polaroid", "pop-up",
    "portland", "poutine", "quinoa", "raw", "readymade", "retro", "salvia", "sartorial",
    "scenester", "seitan", "selfies", "selvage", "semiotics", "shoreditch", "single-origin",
    "skateboard", "slow-carb", "sriracha", "stumptown", "succulents", "sustainable", "synth",
    "tattooed", "taxidermy", "thundercats", "tofu", "tote", "truffaut", "tumblr", "typewriter",
    "ugh", "umami", "vegan", "vinyl", "vinegar", "viral", "wayfarers", "whatever",
    "williamsburg", "yolo", "yuccie",
];

/// Source of random placeholder strings.
///
/// Each call may consume randomness, hence `&mut self`. Tests substitute a
/// scripted implementation to get deterministic output.
pub trait FakeDataProvider {
    fn first_name(&mut self) -> String;

    fn last_name(&mut self) -> String;

    fn email(&mut self) -> String;

    /// A business catch-phrase, e.g. "Synergized holistic paradigm".
    fn catch_phrase(&mut self) -> String;

    /// A single capitalized sentence of hipster filler ending in a period.
    fn hipster_sentence(&mut self) -> String;

    /// `count` hipster sentences joined by single spaces. Zero yields `""`.
    fn hipster_sentences(&mut self, count: usize) -> String {
        (0..count)
            .map(|_| self.hipster_sentence())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<P: FakeDataProvider + ?Sized> FakeDataProvider for &mut P {
    fn first_name(&mut self) -> String {
        (**self).first_name()
    }

    fn last_name(&mut self) -> String {
        (**self).last_name()
    }

    fn email(&mut self) -> String {
        (**self).email()
    }

    fn catch_phrase(&mut self) -> String {
        (**self).catch_phrase()
    }

    fn hipster_sentence(&mut self) -> String {
        (**self).hipster_sentence()
    }

    fn hipster_sentences(&mut self, count: usize) -> String {
        (**self).hipster_sentences(count)
    }
}

/// [`FakeDataProvider`] backed by the `fake` crate.
pub struct FakerProvider<R = StdRng> {
    rng: R,
}

impl FakerProvider<StdRng> {
    /// Provider seeded from OS entropy; output differs between runs.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Provider with a fixed seed; the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> FakerProvider<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Gives back the wrapped RNG.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> FakeDataProvider for FakerProvider<R> {
    fn first_name(&mut self) -> String {
        FirstName().fake_with_rng(&mut self.rng)
    }

    fn last_name(&mut self) -> String {
        LastName().fake_with_rng(&mut self.rng)
    }

    fn email(&mut self) -> String {
        SafeEmail().fake_with_rng(&mut self.rng)
    }

    fn catch_phrase(&mut self) -> String {
        CatchPhrase().fake_with_rng(&mut self.rng)
    }

    fn hipster_sentence(&mut self) -> String {
        let word_count = self.rng.gen_range(SENTENCE_WORDS);
        let words: Vec<&str> = (0..word_count)
            .filter_map(|_| HIPSTER_WORDS.choose(&mut self.rng).copied())
            .collect();
        format!("{}.", capitalize(&words.join(" ")))
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
