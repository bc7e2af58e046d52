//! Clap argument definitions for the `cvmatch` CLI.

use std::{env, path::PathBuf, process::exit};

use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};
use cvmatch_config::{StopwordSet, TokenizerKind};

/// Parse a tokenizer kind from a string.
fn parse_tokenizer(s: &str) -> Result<TokenizerKind, String> {
    s.parse()
}

/// Parse a stop-word set from a string.
fn parse_stopwords(s: &str) -> Result<StopwordSet, String> {
    s.parse()
}

/// Parse a phrase bonus, rejecting negative and non-finite values.
fn parse_bonus(s: &str) -> Result<f32, String> {
    let bonus: f32 = s.parse().map_err(|e| format!("invalid number '{s}': {e}"))?;
    if !bonus.is_finite() || bonus < 0.0 {
        return Err(format!("bonus must be a finite, non-negative number, got '{s}'"));
    }
    Ok(bonus)
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "cvmatch")]
#[command(about = "Compare résumé keywords against a job description")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Flags that control how text is turned into terms.
#[derive(Args, Debug, Clone, Default)]
pub struct ExtractionArgs {
    /// Term extraction strategy: auto, simple or lexicon [default: auto]
    #[arg(long, value_parser = parse_tokenizer)]
    pub tokenizer: Option<TokenizerKind>,

    /// Lexicon file with one `form<TAB>lemma<TAB>POS` entry per line
    #[arg(long)]
    pub lexicon: Option<PathBuf>,

    /// Stop-word set for the simple tokenizer: none or english [default: none]
    #[arg(long, value_parser = parse_stopwords)]
    pub stopwords: Option<StopwordSet>,

    /// Ignore terms shorter than N characters [default: 3]
    #[arg(long)]
    pub min_length: Option<usize>,

    /// File of phrases to detect, one per line
    #[arg(long)]
    pub nice: Option<PathBuf>,
}

/// Arguments for `cvmatch match`.
#[derive(Args, Debug, Clone)]
pub struct MatchCommand {
    /// Résumé text file
    #[arg(long)]
    pub cv: PathBuf,

    /// Job description text file
    #[arg(long)]
    pub job: PathBuf,

    #[command(flatten)]
    /// Term extraction overrides.
    pub extraction: ExtractionArgs,

    /// Rows shown in each console table [default: 20]
    #[arg(long)]
    pub top: Option<usize>,

    /// HTML report path [default: report.html]
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Maximum suggested bullets [default: 10]
    #[arg(long)]
    pub bullets: Option<usize>,

    /// Score multiplier for gaps found among job description phrases [default: 1.5]
    #[arg(long, value_parser = parse_bonus)]
    pub bonus: Option<f32>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `cvmatch terms`.
#[derive(Args, Debug, Clone)]
pub struct TermsCommand {
    /// Text file to analyze
    pub file: PathBuf,

    #[command(flatten)]
    /// Term extraction overrides.
    pub extraction: ExtractionArgs,

    /// Maximum terms to display [default: 20]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `cvmatch init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.cvmatch.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `cvmatch` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compare a résumé with a job description and report missing terms
    Match(MatchCommand),

    /// Show the terms and phrases extracted from one file
    Terms(TermsCommand),

    /// Initialize cvmatch configuration in current directory
    Init(InitCommand),

    /// Show configuration files, effective settings and warnings
    Config,
}

/// Parses CLI arguments, printing a compact command list for top-level `--help`.
pub fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            if e.kind() == ErrorKind::DisplayHelp {
                let args: Vec<_> = env::args().collect();
                if args.len() <= 2 {
                    print_command_help();
                    exit(0);
                }
            }
            e.exit();
        }
    }
}

/// Prints the top-level help with one line per subcommand.
fn print_command_help() {
    let cmd = Cli::command();
    let about = cmd.get_about().map(|s| s.to_string()).unwrap_or_default();

    println!("{about}");
    println!();
    println!("Usage: cvmatch <COMMAND>");
    println!();
    println!("Commands:");

    for sub in cmd.get_subcommands() {
        let name = sub.get_name();
        if name == "help" {
            continue;
        }
        let about = sub.get_about().map(|s| s.to_string()).unwrap_or_default();
        println!("  {name:8} {about}");
    }

    println!(
        "  {:<8} Print this message or the help of the given subcommand(s)",
        "help"
    );
    println!();
    println!("Options:");
    println!("  -h, --help  Print help");
}
