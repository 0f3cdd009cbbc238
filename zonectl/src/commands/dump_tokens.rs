//! `zonectl dump-tokens` — raw lexer output, for debugging the lexical
//! stage in isolation from record/directive semantics.

use std::path::PathBuf;

use zone_lex::{Lexer, NullResolver};

use crate::commands::open_input;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct DumpTokensArgs {
    pub file: Option<PathBuf>,
}

pub fn run_dump_tokens(args: DumpTokensArgs) -> Result<()> {
    let (reader, _file_name) = open_input(args.file.as_deref())?;
    let lexer = Lexer::new(reader, NullResolver);

    for token in lexer {
        let comment = if token.comment.is_empty() { String::new() } else { format!(" ; {}", token.comment) };
        println!("{:?} {:?}{}", token.kind, token.text, comment);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn dumps_tokens_from_a_file() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"host IN A 192.0.2.1\n").unwrap();

        let args = DumpTokensArgs { file: Some(file.path().to_path_buf()) };
        assert!(run_dump_tokens(args).is_ok());
    }

    #[test]
    fn missing_file_reports_io_error() {
        let args = DumpTokensArgs { file: Some(PathBuf::from("/nonexistent/zone.db")) };
        assert!(run_dump_tokens(args).is_err());
    }
}
