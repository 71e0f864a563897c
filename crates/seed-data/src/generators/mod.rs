//! Entity generators for sample data.
//!
//! - [`TalkGenerator`]: talks with catch-phrase topics and sampled durations
//! - [`SpeakerGenerator`]: speakers with random names and emails

pub mod speaker;
pub mod talk;

pub use speaker::SpeakerGenerator;
pub use talk::TalkGenerator;
