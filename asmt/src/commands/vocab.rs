//! Vocab command implementation.
//!
//! Dumps the reserved-word table the lexer classifies against.

use std::io::Write;

use asmlex_lex::{TokenKind, VOCABULARY};
use serde::Serialize;

use crate::commands::common::OutputFormat;
use crate::commands::traits::Command;
use crate::config::Config;
use crate::error::Result;

/// Arguments for the vocab command.
#[derive(Debug, Clone, Default)]
pub struct VocabArgs {
    /// Output format name.
    pub format: Option<String>,
}

/// Vocab command handler.
pub struct VocabCommand {
    args: VocabArgs,
}

#[derive(Serialize)]
struct EntryRecord {
    word: &'static str,
    kind: &'static str,
    code: u8,
}

impl Command for VocabCommand {
    type Args = VocabArgs;
    /// Number of entries written.
    type Output = usize;

    fn new(args: VocabArgs, _config: &Config) -> Self {
        Self { args }
    }

    fn execute(&self, out: &mut dyn Write) -> Result<usize> {
        // The table does not depend on configuration; an absent flag means plain.
        let format = OutputFormat::resolve(self.args.format.as_deref(), "plain")?;
        let entries: Vec<(&'static str, TokenKind)> = VOCABULARY.entries().collect();
        tracing::debug!(entries = entries.len(), format = ?format, "writing vocabulary");

        match format {
            OutputFormat::Plain => {
                for (word, kind) in &entries {
                    writeln!(out, "{}\t{}", word, kind)?;
                }
            }
            OutputFormat::Kinds => {
                for (word, kind) in &entries {
                    writeln!(out, "{}({})", kind, word)?;
                }
            }
            OutputFormat::Json => {
                let records: Vec<EntryRecord> = entries
                    .iter()
                    .map(|&(word, kind)| EntryRecord {
                        word,
                        kind: kind.name(),
                        code: kind.code(),
                    })
                    .collect();
                serde_json::to_writer(&mut *out, &records)?;
                writeln!(out)?;
            }
        }

        out.flush()?;
        Ok(entries.len())
    }

    fn name() -> &'static str {
        "vocab"
    }
}
