//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

/// Text analytics toolkit: letter/token/n-gram frequencies and table-of-contents tree queries
#[derive(Parser, Debug)]
#[command(name = "lexstat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-d: info, -dd: debug, -ddd: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full pipeline: CSV reports plus TOC outline
    Analyze {
        /// Source text file
        #[arg(value_hint = ValueHint::FilePath)]
        text: PathBuf,

        /// Directory for generated reports (default: from config)
        #[arg(short, long)]
        report_dir: Option<PathBuf>,

        /// Outline file for the TOC (default: built-in sample)
        #[arg(long, value_hint = ValueHint::FilePath)]
        toc: Option<PathBuf>,
    },

    /// Print the a-z letter histogram
    Letters {
        /// Source text file
        text: PathBuf,
    },

    /// Print the top tokens by count
    Tokens {
        /// Source text file
        text: PathBuf,

        /// How many entries to keep (default: from config)
        #[arg(short, long)]
        top_n: Option<usize>,

        /// Keep stopwords instead of filtering them
        #[arg(long)]
        raw: bool,
    },

    /// Print the top n-grams by count
    Ngrams {
        /// Source text file
        text: PathBuf,

        /// N-gram order (2 = bigrams, 3 = trigrams)
        #[arg(short, default_value_t = 2)]
        n: usize,

        /// How many entries to keep (default: from config)
        #[arg(short, long)]
        top_n: Option<usize>,

        /// Keep stopwords instead of filtering them
        #[arg(long)]
        raw: bool,
    },

    /// Query the table-of-contents tree
    Toc {
        #[command(subcommand)]
        command: TocCommands,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Show version and effective configuration
    Info,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum TocCommands {
    /// Print the numbered outline, one line per node
    Outline {
        /// Outline file (default: built-in sample)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print the tree with box-drawing characters
    Tree {
        /// Outline file (default: built-in sample)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Look up the depth of the first node with the given title
    Depth {
        /// Title to search for (exact match, pre-order)
        title: String,

        /// Outline file (default: built-in sample)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print the height of the tree
    Height {
        /// Outline file (default: built-in sample)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show merged config
    Show,

    /// Create config template
    Init,

    /// Show config paths
    Path,
}
