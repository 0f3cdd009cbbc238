//! Minimal diagnostic rendering, used by `zonectl` to print a source excerpt
//! next to a sticky parse error.

use std::fmt;

use crate::span::Span;

/// Diagnostic severity. The pipeline itself only ever raises `Error`
/// (errors are sticky, per spec.md §7); `Warning` exists for collaborators
/// (e.g. a rdata decoder noting a deprecated record type) that want to
/// surface something without aborting the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Error,
    Warning,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Error => write!(f, "error"),
            Level::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic tied to a span, with an optional one-line source excerpt.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
    pub span: Span,
    pub source_line: Option<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
            span,
            source_line: None,
        }
    }

    /// Attach the offending line of source text, used to print a caret
    /// under the error column.
    pub fn with_source_line(mut self, line: impl Into<String>) -> Self {
        self.source_line = Some(line.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}: {}", self.span, self.level, self.message)?;
        if let Some(line) = &self.source_line {
            writeln!(f, "    {line}")?;
            let caret_col = self.span.start.column.saturating_sub(1) as usize;
            writeln!(f, "    {}^", " ".repeat(caret_col))?;
        }
        Ok(())
    }
}
