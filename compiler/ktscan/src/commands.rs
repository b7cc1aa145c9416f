//! Command execution.
//!
//! Each command renders its report to a `String`; `main` prints it.

use std::fmt::Write as _;
use std::fs;
use std::ops::Range;
use std::path::Path;

use kt_scanner::{scan_str, walk, TokenKind};
use tracing::debug;

use crate::config::{Command, ProbeConfig, WalkConfig};
use crate::error::CliError;

/// Run a parsed command and return its report.
pub fn run(command: &Command) -> Result<String, CliError> {
    match command {
        Command::Kinds => Ok(render_kinds()),
        Command::Probe(config) => {
            let source = read_source(&config.path)?;
            render_probe(&source, config)
        }
        Command::Walk(config) => {
            let source = read_source(&config.path)?;
            Ok(render_walk(&source, config))
        }
    }
}

fn read_source(path: &Path) -> Result<String, CliError> {
    let source = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = source.len(), "read source");
    Ok(source)
}

/// Kind names in symbol order.
pub fn render_kinds() -> String {
    let mut out = String::new();
    for kind in TokenKind::ALL {
        let _ = writeln!(out, "{:>2}  {}", kind.symbol(), kind.name());
    }
    out
}

/// Report for a single scan call.
pub fn render_probe(source: &str, config: &ProbeConfig) -> Result<String, CliError> {
    if !source.is_char_boundary(config.offset) {
        return Err(CliError::OffsetOutOfRange {
            offset: config.offset,
            path: config.path.clone(),
        });
    }

    let mut out = String::new();
    match scan_str(source, config.offset, config.kinds) {
        Some(token) => {
            let _ = writeln!(out, "offset {}: {}", config.offset, token.kind.name());
            let _ = writeln!(out, "  consumed {}", describe(source, &token.span.consumed));
            let _ = writeln!(out, "  token    {}", describe(source, &token.span.token));
        }
        None => {
            let _ = writeln!(out, "offset {}: no token", config.offset);
        }
    }
    Ok(out)
}

/// Report for a whole-file replay.
///
/// Host-consumed characters are listed only with `--all`.
pub fn render_walk(source: &str, config: &WalkConfig) -> String {
    let mut out = String::new();
    let mut produced = 0usize;
    for segment in walk(source, config.kinds) {
        match segment.kind {
            Some(kind) => {
                produced += 1;
                let _ = writeln!(
                    out,
                    "{:<26} {}",
                    kind.name(),
                    describe(source, &segment.token)
                );
            }
            None if config.all => {
                let _ = writeln!(out, "{:<26} {}", "-", describe(source, &segment.token));
            }
            None => {}
        }
    }
    debug!(produced, "walk finished");
    out
}

fn describe(source: &str, range: &Range<usize>) -> String {
    format!("{}..{} {:?}", range.start, range.end, &source[range.clone()])
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
