//! Subcommand implementations for the zonectl CLI.

pub mod check;
pub mod dump_tokens;
pub mod parse;

pub use check::{run_check, CheckArgs};
pub use dump_tokens::{run_dump_tokens, DumpTokensArgs};
pub use parse::{run_parse, ParseArgs};

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::{CliError, Result};

/// Opens `file` for reading, or stdin if `file` is `None`. Returns the
/// reader alongside the path to attribute in error messages.
fn open_input(file: Option<&Path>) -> Result<(Box<dyn Read>, Option<PathBuf>)> {
    match file {
        Some(path) => {
            let f = File::open(path).map_err(|source| CliError::Io { path: path.display().to_string(), source })?;
            Ok((Box::new(f), Some(path.to_path_buf())))
        }
        None => Ok((Box::new(io::stdin()), None)),
    }
}
