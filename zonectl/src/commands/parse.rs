//! `zonectl parse` — stream decoded resource records to stdout.

use std::path::PathBuf;

use tracing::debug;
use zone_par::Parser;
use zone_rdata::StandardCodec;

use crate::commands::open_input;
use crate::config::Config;
use crate::error::Result;

#[derive(Debug, Clone, Default)]
pub struct ParseArgs {
    /// Zone file to parse; stdin if not given.
    pub file: Option<PathBuf>,
}

pub fn run_parse(args: ParseArgs, config: &Config) -> Result<()> {
    let (reader, file_name) = open_input(args.file.as_deref())?;
    let mut parser = Parser::new(reader, file_name, StandardCodec);
    parser.set_default_ttl(config.default_ttl);
    parser.set_max_include_depth(config.max_include_depth);

    let mut count = 0;
    for record in &mut parser {
        let record = record?;
        let suffix = if record.comment.is_empty() {
            String::new()
        } else {
            format!(" {}", record.comment)
        };
        println!(
            "{} {} {} {} {:?}{}",
            record.name,
            record.ttl,
            zone_rdata::class_name(record.class).map(str::to_string).unwrap_or_else(|| format!("CLASS{}", record.class)),
            zone_rdata::type_name(record.rrtype).map(str::to_string).unwrap_or_else(|| format!("TYPE{}", record.rrtype)),
            record.rdata,
            suffix,
        );
        count += 1;
    }
    debug!(records = count, "parse complete");
    Ok(())
}
