//! 두벌식 한글 조합 엔진

pub mod composer;
pub mod jamo;
pub mod state;
pub mod syllable;
pub mod tables;

pub use composer::{transliterate, Composer};
pub use jamo::{lookup, Cho, Jong, Jung, Key};
pub use state::{CompositionState, Transition};
