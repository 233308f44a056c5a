use std::fs::{OpenOptions, create_dir_all};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordsplit_util::{DEFAULT_UNIT_SIZE, Document, Unit, default_log_path, parse_unit_size};

/// Split a document into units of words.
///
/// With only a FILE, opens the interactive unit split view.
#[derive(Debug, Parser)]
#[command(name = "wordsplit", version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    /// Document to open in the TUI ("-" reads stdin)
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the units of a document
    Split {
        /// Document to split ("-" reads stdin)
        file: PathBuf,
        /// Words per unit
        #[arg(short = 'n', long, default_value_t = DEFAULT_UNIT_SIZE, value_parser = parse_unit_size_arg)]
        unit_size: usize,
        /// Print units as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the word count and the resulting number of units
    Count {
        /// Document to count ("-" reads stdin)
        file: PathBuf,
        /// Words per unit
        #[arg(short = 'n', long, default_value_t = DEFAULT_UNIT_SIZE, value_parser = parse_unit_size_arg)]
        unit_size: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        let Some(file) = cli.file.as_deref() else {
            bail!("expected a FILE to open; run `wordsplit --help` for usage");
        };
        init_file_tracing(&default_log_path())?;
        let document = load_document(file)?;
        return wordsplit_tui::run(document).await;
    };

    init_stderr_tracing();
    let mut stdout = io::stdout().lock();
    match command {
        Command::Split { file, unit_size, json } => {
            let document = load_document(&file)?;
            info!(document = %document.name, unit_size, "Splitting document");
            let units = document.units(unit_size);
            if json {
                writeln!(stdout, "{}", units_json(&document, unit_size, &units)?)?;
            } else {
                write!(stdout, "{}", units_text(&units))?;
            }
        }
        Command::Count { file, unit_size } => {
            let document = load_document(&file)?;
            writeln!(stdout, "{}", count_summary(&document, unit_size))?;
        }
    }
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .try_init();
}

/// The TUI owns the terminal, so its logs go to a file instead.
fn init_file_tracing(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn load_document(file: &Path) -> Result<Document> {
    if file == Path::new("-") {
        return Document::from_reader("<stdin>", io::stdin().lock()).context("failed to read document from stdin");
    }
    Ok(Document::load(file)?)
}

fn parse_unit_size_arg(value: &str) -> Result<usize, String> {
    parse_unit_size(value).ok_or_else(|| format!("'{value}' is not a positive number of words"))
}

fn units_text(units: &[Unit]) -> String {
    let mut out = String::new();
    for unit in units {
        let first = unit.first_word + 1;
        let last = unit.first_word + unit.word_count;
        out.push_str(&format!("--- unit {} (words {first}-{last}) ---\n{}\n", unit.index, unit.text));
    }
    out
}

fn units_json(document: &Document, unit_size: usize, units: &[Unit]) -> Result<String> {
    let payload = serde_json::json!({
        "document": document.name,
        "total_words": document.total_words,
        "unit_size": unit_size,
        "unit_count": units.len(),
        "units": units,
    });
    Ok(serde_json::to_string_pretty(&payload)?)
}

fn count_summary(document: &Document, unit_size: usize) -> String {
    format!(
        "{}: {} words, {} units of {} words",
        document.name,
        document.total_words,
        document.unit_count(unit_size),
        unit_size
    )
}
