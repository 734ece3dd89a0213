//! Tokenize command implementation.
//!
//! Reads instruction lines from arguments, a file or stdin, tokenizes them
//! on a worker pool and writes the token streams in input order.

use std::borrow::Cow;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use asmlex_lex::{tokenize_with, LexerOptions, TokenKind, TokenStream};
use rayon::prelude::*;
use serde::Serialize;

use crate::commands::common::{error_messages, OutputFormat};
use crate::commands::traits::Command;
use crate::config::{Config, TokenizeConfig};
use crate::error::{AsmtError, Result};

/// Arguments for the tokenize command.
#[derive(Debug, Clone, Default)]
pub struct TokenizeArgs {
    /// Instruction lines given on the command line.
    pub lines: Vec<String>,
    /// File with one instruction per line.
    pub file: Option<PathBuf>,
    /// Output format name.
    pub format: Option<String>,
    /// Number of worker threads.
    pub jobs: Option<u32>,
    /// Emit `"+"` as the text of `Minus` tokens.
    pub legacy_minus: bool,
    /// Include byte spans in the output.
    pub spans: bool,
}

/// Counts reported after a tokenize run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenizeSummary {
    /// Number of input lines.
    pub lines: usize,
    /// Number of tokens produced.
    pub tokens: usize,
    /// Number of `Unknown` tokens among them.
    pub unknown: usize,
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
    config: TokenizeConfig,
}

/// Effective settings after merging flags over configuration.
#[derive(Debug, Clone, Copy)]
struct Settings {
    format: OutputFormat,
    jobs: usize,
    options: LexerOptions,
    spans: bool,
}

#[derive(Serialize)]
struct LineRecord<'a> {
    line: &'a str,
    tokens: Vec<TokenRecord<'a>>,
}

#[derive(Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    code: u8,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<usize>,
}

impl Command for TokenizeCommand {
    type Args = TokenizeArgs;
    type Output = TokenizeSummary;

    fn new(args: TokenizeArgs, config: &Config) -> Self {
        Self {
            args,
            config: config.tokenize.clone(),
        }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<TokenizeSummary> {
        let start_time = Instant::now();
        let settings = self.settings()?;
        let lines = self.read_lines()?;

        tracing::debug!(
            lines = lines.len(),
            jobs = settings.jobs,
            format = ?settings.format,
            "tokenizing"
        );

        let streams = tokenize_all(&lines, settings)?;
        write_streams(out, &lines, &streams, settings)?;
        out.flush()?;

        let summary = summarize(&streams);
        tracing::debug!(
            tokens = summary.tokens,
            unknown = summary.unknown,
            elapsed_ms = start_time.elapsed().as_millis() as u64,
            "tokenize finished"
        );
        Ok(summary)
    }

    fn name() -> &'static str {
        "tokenize"
    }
}

impl TokenizeCommand {
    /// Merge flags over the configured defaults and validate them.
    fn settings(&self) -> Result<Settings> {
        if !self.args.lines.is_empty() && self.args.file.is_some() {
            return Err(AsmtError::Validation(
                error_messages::CONFLICTING_INPUT.to_string(),
            ));
        }

        let jobs = self.args.jobs.unwrap_or(self.config.jobs);
        if jobs == 0 {
            return Err(AsmtError::Validation(error_messages::ZERO_JOBS.to_string()));
        }

        Ok(Settings {
            format: OutputFormat::resolve(self.args.format.as_deref(), &self.config.format)?,
            jobs: jobs as usize,
            options: LexerOptions {
                legacy_minus_text: self.args.legacy_minus || self.config.legacy_minus_text,
            },
            spans: self.args.spans || self.config.spans,
        })
    }

    /// Collect input lines, in order, without their line terminators.
    fn read_lines(&self) -> Result<Vec<String>> {
        if !self.args.lines.is_empty() {
            return Ok(self.args.lines.clone());
        }

        if let Some(path) = &self.args.file {
            if !path.exists() {
                return Err(AsmtError::Validation(format!(
                    "{} {}",
                    error_messages::INPUT_PATH_NOT_EXIST,
                    path.display()
                )));
            }
            let content = std::fs::read(path)?;
            return Ok(split_lines(&content));
        }

        let mut content = Vec::new();
        io::stdin().lock().read_to_end(&mut content)?;
        Ok(split_lines(&content))
    }
}

/// Split raw input on `\n`, dropping a trailing `\r` from each line.
///
/// Bytes that are not valid UTF-8 become U+FFFD.
fn split_lines(content: &[u8]) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    let content = content.strip_suffix(b"\n").unwrap_or(content);

    content
        .split(|&b| b == b'\n')
        .enumerate()
        .map(|(index, line)| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            match String::from_utf8_lossy(line) {
                Cow::Borrowed(text) => text.to_string(),
                Cow::Owned(text) => {
                    tracing::warn!(line = index + 1, "invalid UTF-8 replaced");
                    text
                }
            }
        })
        .collect()
}

/// Tokenize every line on a pool of `settings.jobs` threads, keeping order.
fn tokenize_all(lines: &[String], settings: Settings) -> Result<Vec<TokenStream>> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(settings.jobs)
        .build()
        .map_err(|e| AsmtError::Config(format!("{} {}", error_messages::THREAD_POOL, e)))?;

    let options = settings.options;
    Ok(pool.install(|| {
        lines
            .par_iter()
            .map(|line| {
                let stream = tokenize_with(line, options);
                tracing::trace!(tokens = stream.len(), line = %line, "line tokenized");
                stream
            })
            .collect()
    }))
}

fn summarize(streams: &[TokenStream]) -> TokenizeSummary {
    streams.iter().fold(
        TokenizeSummary {
            lines: streams.len(),
            ..Default::default()
        },
        |mut summary, stream| {
            summary.tokens += stream.len();
            summary.unknown += stream.kinds().filter(|&k| k == TokenKind::Unknown).count();
            summary
        },
    )
}

fn write_streams(
    out: &mut dyn Write,
    lines: &[String],
    streams: &[TokenStream],
    settings: Settings,
) -> Result<()> {
    match settings.format {
        OutputFormat::Plain => write_plain(out, lines, streams, settings.spans),
        OutputFormat::Kinds => write_kinds(out, streams, settings.spans),
        OutputFormat::Json => write_json(out, lines, streams, settings.spans),
    }
}

/// `type: <code>, data: "<text>"` per token; with several input lines each
/// block is headed by `; <line>`.
fn write_plain(
    out: &mut dyn Write,
    lines: &[String],
    streams: &[TokenStream],
    spans: bool,
) -> Result<()> {
    let headed = lines.len() > 1;
    for (line, stream) in lines.iter().zip(streams) {
        if headed {
            writeln!(out, "; {}", line)?;
        }
        for token in stream {
            write!(out, "type: {}, data: \"{}\"", token.kind.code(), token.text)?;
            if spans {
                write!(out, ", span: {}..{}", token.span.start, token.span.end)?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}

fn write_kinds(out: &mut dyn Write, streams: &[TokenStream], spans: bool) -> Result<()> {
    for stream in streams {
        let rendered: Vec<String> = stream
            .iter()
            .map(|token| {
                if spans {
                    format!("{}@{}..{}", token, token.span.start, token.span.end)
                } else {
                    token.to_string()
                }
            })
            .collect();
        writeln!(out, "{}", rendered.join(" "))?;
    }
    Ok(())
}

fn write_json(
    out: &mut dyn Write,
    lines: &[String],
    streams: &[TokenStream],
    spans: bool,
) -> Result<()> {
    let records: Vec<LineRecord<'_>> = lines
        .iter()
        .zip(streams)
        .map(|(line, stream)| LineRecord {
            line,
            tokens: stream
                .iter()
                .map(|token| TokenRecord {
                    kind: token.kind.name(),
                    code: token.kind.code(),
                    text: token.text(),
                    start: spans.then_some(token.span.start),
                    end: spans.then_some(token.span.end),
                })
                .collect(),
        })
        .collect();

    serde_json::to_writer(&mut *out, &records)?;
    writeln!(out)?;
    Ok(())
}
