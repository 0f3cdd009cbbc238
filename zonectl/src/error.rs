//! Error handling for the zonectl CLI.

use thiserror::Error;

/// Top-level error type for zonectl command execution.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Parse(#[from] zone_par::ParseError),

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = CliError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "configuration error: missing field");
    }

    #[test]
    fn io_error_includes_path() {
        let source = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err = CliError::Io { path: "zone.db".to_string(), source };
        assert_eq!(err.to_string(), "zone.db: not found");
    }
}
