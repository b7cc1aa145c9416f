//! Command-line configuration.
//!
//! Arguments are parsed by hand into one config struct per command. The
//! requested kinds default to the `KTSCAN_KINDS` environment variable, then
//! to [`DEFAULT_KINDS`].

use std::path::PathBuf;

use kt_scanner::{KindSet, TokenKind};

use crate::error::CliError;

/// Environment variable holding the default requested kinds.
pub const KINDS_ENV: &str = "KTSCAN_KINDS";

/// Requested kinds when neither `--kinds` nor [`KINDS_ENV`] is given.
pub const DEFAULT_KINDS: &str = "semi,block_comment";

/// A parsed `ktscan` invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// List kind names and symbols.
    Kinds,
    /// One scan call at an offset.
    Probe(ProbeConfig),
    /// Replay the scanner over a whole file.
    Walk(WalkConfig),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProbeConfig {
    pub path: PathBuf,
    /// Byte offset of the scan call.
    pub offset: usize,
    pub kinds: KindSet,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkConfig {
    pub path: PathBuf,
    pub kinds: KindSet,
    /// Also print the characters the host consumed.
    pub all: bool,
}

/// Parse a comma-separated kind list. `all` and `none` are accepted too.
pub fn parse_kinds(list: &str) -> Result<KindSet, CliError> {
    match list.trim() {
        "all" => return Ok(KindSet::all()),
        "none" | "" => return Ok(KindSet::empty()),
        _ => {}
    }
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            TokenKind::from_name(name).ok_or_else(|| CliError::UnknownKind(name.to_string()))
        })
        .collect()
}

/// Parse arguments (program name excluded).
///
/// `env_kinds` is the value of [`KINDS_ENV`], if set.
pub fn parse_args(args: &[String], env_kinds: Option<&str>) -> Result<Command, CliError> {
    let Some((command, rest)) = args.split_first() else {
        return Err(CliError::MissingArgument("command"));
    };

    match command.as_str() {
        "kinds" => match rest.first() {
            Some(extra) => Err(CliError::UnexpectedArgument(extra.clone())),
            None => Ok(Command::Kinds),
        },
        "probe" | "walk" => {
            let probe = command == "probe";
            let mut path = None;
            let mut offset = 0;
            let mut kinds = None;
            let mut all = false;

            for arg in rest {
                if let Some(list) = arg.strip_prefix("--kinds=") {
                    kinds = Some(parse_kinds(list)?);
                } else if let Some(value) = arg.strip_prefix("--at=").filter(|_| probe) {
                    offset = value
                        .parse()
                        .map_err(|_| CliError::InvalidOffset(value.to_string()))?;
                } else if !probe && arg == "--all" {
                    all = true;
                } else if arg.starts_with('-') {
                    return Err(CliError::UnknownOption(arg.clone()));
                } else if path.is_none() {
                    path = Some(PathBuf::from(arg));
                } else {
                    return Err(CliError::UnexpectedArgument(arg.clone()));
                }
            }

            let path = path.ok_or(CliError::MissingArgument("file path"))?;
            let kinds = match kinds {
                Some(kinds) => kinds,
                None => parse_kinds(env_kinds.unwrap_or(DEFAULT_KINDS))?,
            };

            if probe {
                Ok(Command::Probe(ProbeConfig {
                    path,
                    offset,
                    kinds,
                }))
            } else {
                Ok(Command::Walk(WalkConfig { path, kinds, all }))
            }
        }
        other => Err(CliError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
