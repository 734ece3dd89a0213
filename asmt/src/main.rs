//! Asmt CLI - a command-line front end for the asmlex tokenizer.
//!
//! This is the main entry point for the asmt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{Command, TokenizeArgs, TokenizeCommand, VocabArgs, VocabCommand};
use config::Config;
use error::{AsmtError, Result};

/// Asmt - tokenize x86 instruction text
///
/// Splits assembly instruction lines into classified tokens: prefixes,
/// mnemonics, registers, memory-operand punctuation and so on.
#[derive(Parser, Debug)]
#[command(name = "asmt")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize x86 instruction text", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "ASMT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ASMT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "ASMT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the asmt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize instruction lines
    ///
    /// Lines come from the arguments, from --file, or from stdin, in that
    /// order of preference. Output keeps the input order.
    Tokenize(TokenizeCli),

    /// Print the reserved-word table
    Vocab(VocabCli),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCli {
    /// Instruction lines to tokenize
    lines: Vec<String>,

    /// Read instruction lines from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format (plain, kinds, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Number of parallel jobs
    #[arg(short, long)]
    jobs: Option<u32>,

    /// Give Minus tokens the text "+"
    #[arg(long)]
    legacy_minus: bool,

    /// Include byte spans in the output
    #[arg(long)]
    spans: bool,
}

/// Arguments for the vocab subcommand.
#[derive(Parser, Debug)]
struct VocabCli {
    /// Output format (plain, kinds, json)
    #[arg(short = 'F', long)]
    format: Option<String>,
}

/// Main entry point for the asmt CLI.
///
/// Errors are reported on stderr with a non-zero exit status.
fn main() {
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

/// Parses arguments, loads configuration, initializes logging and runs the
/// selected command.
fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    match cli.config.clone().or_else(Config::find_config_file) {
        Some(path) => tracing::debug!(path = %path.display(), "configuration loaded"),
        None => tracing::debug!("using default configuration"),
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command(cli.command, &config, &mut out)
}

/// Initialize the logging system.
///
/// Logs go to stderr; stdout carries only command output. `RUST_LOG`
/// overrides the level chosen by `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| AsmtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: &Config, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, config, out),
        Commands::Vocab(args) => execute_vocab(args, config, out),
    }
}

/// Execute the tokenize command.
fn execute_tokenize(args: TokenizeCli, config: &Config, out: &mut dyn Write) -> Result<()> {
    let tokenize_args = TokenizeArgs {
        lines: args.lines,
        file: args.file,
        format: args.format,
        jobs: args.jobs,
        legacy_minus: args.legacy_minus,
        spans: args.spans,
    };
    let summary = TokenizeCommand::new(tokenize_args, config).execute(out)?;
    tracing::info!(
        command = TokenizeCommand::name(),
        lines = summary.lines,
        tokens = summary.tokens,
        unknown = summary.unknown,
        "done"
    );
    Ok(())
}

/// Execute the vocab command.
fn execute_vocab(args: VocabCli, config: &Config, out: &mut dyn Write) -> Result<()> {
    let entries = VocabCommand::new(VocabArgs { format: args.format }, config).execute(out)?;
    tracing::info!(command = VocabCommand::name(), entries, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokenize_lines() {
        let cli = Cli::parse_from(["asmt", "tokenize", "push ebp", "mov ebp, esp"]);
        if let Commands::Tokenize(args) = cli.command {
            assert_eq!(args.lines, vec!["push ebp", "mov ebp, esp"]);
            assert!(args.file.is_none());
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_cli_parse_tokenize_without_lines() {
        let cli = Cli::parse_from(["asmt", "tokenize"]);
        if let Commands::Tokenize(args) = cli.command {
            assert!(args.lines.is_empty());
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_cli_parse_tokenize_with_file() {
        let cli = Cli::parse_from(["asmt", "tokenize", "--file", "listing.asm"]);
        if let Commands::Tokenize(args) = cli.command {
            assert_eq!(args.file, Some(PathBuf::from("listing.asm")));
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_cli_parse_tokenize_with_format_and_jobs() {
        let cli = Cli::parse_from(["asmt", "tokenize", "-F", "json", "-j", "3", "nop"]);
        if let Commands::Tokenize(args) = cli.command {
            assert_eq!(args.format, Some("json".to_string()));
            assert_eq!(args.jobs, Some(3));
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_cli_parse_tokenize_flags() {
        let cli = Cli::parse_from(["asmt", "tokenize", "--legacy-minus", "--spans", "nop"]);
        if let Commands::Tokenize(args) = cli.command {
            assert!(args.legacy_minus);
            assert!(args.spans);
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_cli_parse_vocab() {
        let cli = Cli::parse_from(["asmt", "vocab", "--format", "json"]);
        if let Commands::Vocab(args) = cli.command {
            assert_eq!(args.format, Some("json".to_string()));
        } else {
            panic!("Expected Vocab command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "asmt",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/asmt.toml",
            "vocab",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/asmt.toml")));
    }

    #[test]
    fn test_execute_command_writes_to_output() {
        let cli = Cli::parse_from(["asmt", "tokenize", "-F", "kinds", "lock inc ecx"]);
        let mut out = Vec::new();
        execute_command(cli.command, &Config::default(), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Prefix(lock) Mnemonic(inc) Register(ecx)\n"
        );
    }
}
