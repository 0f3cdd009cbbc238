//! `zonectl check` — validate a zone file without printing records.

use std::path::PathBuf;

use zone_par::Parser;
use zone_rdata::StandardCodec;

use crate::commands::open_input;
use crate::config::Config;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    pub file: Option<PathBuf>,
}

/// Parses the whole file, returning the first error encountered (if any)
/// and the count of records that parsed successfully before it.
pub fn run_check(args: CheckArgs, config: &Config) -> Result<usize> {
    let (reader, file_name) = open_input(args.file.as_deref())?;
    let mut parser = Parser::new(reader, file_name, StandardCodec);
    parser.set_default_ttl(config.default_ttl);
    parser.set_max_include_depth(config.max_include_depth);

    let mut count = 0;
    for record in &mut parser {
        record?;
        count += 1;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn config() -> Config {
        Config::default()
    }

    #[test]
    fn valid_zone_file_checks_clean() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"host IN A 192.0.2.1\nhost2 IN A 192.0.2.2\n").unwrap();

        let args = CheckArgs { file: Some(file.path().to_path_buf()) };
        assert_eq!(run_check(args, &config()).unwrap(), 2);
    }

    #[test]
    fn malformed_record_surfaces_the_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"host BOGUS CLASS A\n").unwrap();

        let args = CheckArgs { file: Some(file.path().to_path_buf()) };
        assert!(run_check(args, &config()).is_err());
    }
}
