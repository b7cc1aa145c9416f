//! Driver errors.

use std::io;
use std::path::PathBuf;

/// Everything that stops a `ktscan` command before or while it runs.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("unknown token kind `{0}` (run `ktscan kinds` for the list)")]
    UnknownKind(String),

    #[error("invalid offset `{0}`: expected a byte offset")]
    InvalidOffset(String),

    #[error("offset {offset} is past the end of {} or inside a character", path.display())]
    OffsetOutOfRange { offset: usize, path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
