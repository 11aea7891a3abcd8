//! themegrab - print the HSL color tokens of a stylesheet as a theme literal.
//!
//! ```text
//! themegrab < app/globals.css
//! themegrab app/globals.css --format json
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::{CommandFactory, FromArgMatches, Parser};
use themegrab::{OutputFormat, ThemeSet};
use themegrab_input::{InputChain, PathSource, StdinSource};

/// Extract `:root` and `.dark` HSL color tokens into a light/dark theme literal.
#[derive(Debug, Parser)]
#[command(name = "themegrab", version)]
struct Cli {
    /// Stylesheet to read. Omit, or pass `-`, to read stdin.
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Output format: `literal` or `json`.
    #[arg(long, short = 'f', default_value_t = OutputFormat::Literal)]
    format: OutputFormat,

    /// Log extraction details to stderr.
    #[arg(long, short, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(long, short)]
    quiet: bool,
}

fn main() {
    if let Err(error) = run() {
        eprintln!("themegrab error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());
    init_tracing(cli.quiet, cli.verbose)?;

    let stylesheet = InputChain::<String>::new()
        .try_source(PathSource::new("path"))
        .try_source(StdinSource::new())
        .default(String::new())
        .resolve(&matches)
        .context("failed to read stylesheet")?;

    let themes = ThemeSet::from_stylesheet(&stylesheet);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    themegrab::write_to(&themes, cli.format, &mut out)?;
    out.flush().context("failed to flush output")?;

    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("THEMEGRAB_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
