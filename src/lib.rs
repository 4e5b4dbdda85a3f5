//! # lexstat
//!
//! Text analytics toolkit: lexical statistics over a plain-text document and
//! structural queries over a table-of-contents tree.
//!
//! The domain layer is pure: normalization, tokenization, stopword
//! filtering, letter/token/n-gram frequency tables with a deterministic
//! ranking rule, and an arena-based TOC tree with depth lookup, height
//! computation and numbered outline rendering. The application layer adds
//! file loading and CSV report writing; the CLI layer wires both to a
//! clap-based command surface.
//!
//! ## Example
//!
//! ```rust
//! use lexstat::domain::{normalize, tokenize, ngram_frequency};
//!
//! let tokens = tokenize(&normalize("Data science, data science is fun."));
//! let bigrams = ngram_frequency(&tokens, 2, 5).unwrap();
//! assert_eq!(bigrams[0].key, "data science");
//! assert_eq!(bigrams[0].count, 2);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use config::Settings;
pub use domain::{FrequencyEntry, TocTree};
