//! Domain layer: pure analysis logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config
//! loading). Everything here is deterministic given its inputs.

pub mod arena;
pub mod error;
pub mod frequency;
pub mod outline;
pub mod sample;
pub mod text;

pub use arena::{TocNode, TocTree};
pub use error::{DomainError, DomainResult};
pub use frequency::{letter_frequency, ngram_frequency, top_tokens, FrequencyEntry};
pub use outline::parse_outline;
pub use sample::sample_toc;
pub use text::{filter_stopwords, normalize, tokenize, Stopwords};
