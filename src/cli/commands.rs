use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::{load_text, pipeline};
use crate::cli::args::{Cli, Commands, ConfigCommands, TocCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};
use crate::domain::{
    filter_stopwords, letter_frequency, ngram_frequency, normalize, parse_outline, sample_toc,
    tokenize, top_tokens, FrequencyEntry, Stopwords, TocTree,
};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Analyze {
            text,
            report_dir,
            toc,
        }) => _analyze(text, report_dir.as_deref(), toc.as_deref()),
        Some(Commands::Letters { text }) => _letters(text),
        Some(Commands::Tokens { text, top_n, raw }) => _tokens(text, *top_n, *raw),
        Some(Commands::Ngrams {
            text,
            n,
            top_n,
            raw,
        }) => _ngrams(text, *n, *top_n, *raw),
        Some(Commands::Toc { command }) => match command {
            TocCommands::Outline { file } => _toc_outline(file.as_deref()),
            TocCommands::Tree { file } => _toc_tree(file.as_deref()),
            TocCommands::Depth { title, file } => _toc_depth(title, file.as_deref()),
            TocCommands::Height { file } => _toc_height(file.as_deref()),
        },
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(),
            ConfigCommands::Init => _config_init(),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Info) => _info(),
        Some(Commands::Completion { shell }) => _completion(*shell),
        None => Ok(()),
    }
}

/// TOC source: an outline file when given, the built-in sample otherwise.
fn load_toc(file: Option<&Path>) -> CliResult<TocTree> {
    match file {
        Some(path) => {
            let content = load_text(path)?;
            Ok(parse_outline(&content)?)
        }
        None => Ok(sample_toc()),
    }
}

/// Normalized, optionally stopword-filtered tokens from a text file.
fn load_tokens(text: &Path, raw: bool, settings: &Settings) -> CliResult<Vec<String>> {
    let content = load_text(text)?;
    let tokens = tokenize(&normalize(&content));
    debug!(count = tokens.len(), raw, "loaded tokens");
    if raw {
        Ok(tokens)
    } else {
        let stopwords = Stopwords::with_extras(&settings.extra_stopwords);
        Ok(filter_stopwords(tokens, &stopwords))
    }
}

fn print_table(table: &[FrequencyEntry]) {
    let width = table.iter().map(|e| e.key.len()).max().unwrap_or(0);
    for entry in table {
        output::info(&format!("{:<width$}  {}", entry.key, entry.count));
    }
}

#[instrument]
fn _analyze(text: &Path, report_dir: Option<&Path>, toc: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load()?;
    let report_dir: PathBuf = report_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| settings.report_dir.clone());
    let toc = load_toc(toc)?;

    let summary = pipeline::run(text, &report_dir, &toc, &settings)?;

    output::success("Pipeline complete.");
    output::action("Text input", &text.display());
    output::action("Reports", &summary.report_dir.display());
    for path in &summary.report_paths {
        output::detail(&path.display());
    }
    output::action(
        "Tokens",
        &format!(
            "{} total, {} after stopword filtering",
            summary.total_tokens, summary.kept_tokens
        ),
    );
    output::action("TOC height", &summary.toc_height);
    let depth_label = format!("Depth of {:?}", pipeline::DEPTH_QUERY_TITLE);
    match summary.sample_depth {
        Some(depth) => output::action(&depth_label, &depth),
        None => output::action(&depth_label, &"not found"),
    }
    Ok(())
}

#[instrument]
fn _letters(text: &Path) -> CliResult<()> {
    let content = load_text(text)?;
    print_table(&letter_frequency(&normalize(&content)));
    Ok(())
}

#[instrument]
fn _tokens(text: &Path, top_n: Option<usize>, raw: bool) -> CliResult<()> {
    let settings = Settings::load()?;
    let tokens = load_tokens(text, raw, &settings)?;
    let table = top_tokens(&tokens, top_n.unwrap_or(settings.top_words))?;
    print_table(&table);
    Ok(())
}

#[instrument]
fn _ngrams(text: &Path, n: usize, top_n: Option<usize>, raw: bool) -> CliResult<()> {
    let settings = Settings::load()?;
    let tokens = load_tokens(text, raw, &settings)?;
    let table = ngram_frequency(&tokens, n, top_n.unwrap_or(settings.top_ngrams))?;
    print_table(&table);
    Ok(())
}

#[instrument]
fn _toc_outline(file: Option<&Path>) -> CliResult<()> {
    let toc = load_toc(file)?;
    for line in toc.outline() {
        output::info(&line);
    }
    Ok(())
}

#[instrument]
fn _toc_tree(file: Option<&Path>) -> CliResult<()> {
    let toc = load_toc(file)?;
    if let Some(rendered) = toc.render() {
        output::info(&rendered);
    }
    Ok(())
}

#[instrument]
fn _toc_depth(title: &str, file: Option<&Path>) -> CliResult<()> {
    let toc = load_toc(file)?;
    match toc.depth_of(title) {
        Some(depth) => output::info(&depth),
        None => output::info(&format!("title not found: {title}")),
    }
    Ok(())
}

#[instrument]
fn _toc_height(file: Option<&Path>) -> CliResult<()> {
    let toc = load_toc(file)?;
    output::info(&toc.height());
    Ok(())
}

fn _config_show() -> CliResult<()> {
    let settings = Settings::load()?;
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _config_init() -> CliResult<()> {
    let path = global_config_path()
        .ok_or_else(|| CliError::InvalidArgs("cannot determine config directory".to_string()))?;
    if path.exists() {
        output::action("Config exists", &path.display());
        return Ok(());
    }
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| crate::application::ApplicationError::io(dir, e))?;
    }
    std::fs::write(&path, Settings::template())
        .map_err(|e| crate::application::ApplicationError::io(&path, e))?;
    output::success(&format!("Created {}", path.display()));
    Ok(())
}

fn _config_path() -> CliResult<()> {
    output::header("Config paths");
    match global_config_path() {
        Some(path) => {
            let marker = if path.exists() { "present" } else { "absent" };
            output::detail(&format!("global: {} ({marker})", path.display()));
        }
        None => output::detail("global: <unavailable>"),
    }
    output::detail("env:    LEXSTAT_* variables");
    Ok(())
}

fn _info() -> CliResult<()> {
    if let Some(author) = Cli::command().get_author() {
        output::action("AUTHOR", &author);
    }
    if let Some(version) = Cli::command().get_version() {
        output::action("VERSION", &version);
    }
    let settings = Settings::load()?;
    output::header("Effective configuration");
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
