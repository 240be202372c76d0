/*!
 * Error types for caption parsing.
 *
 * Two kinds, both terminal for the current parse: file-level structure
 * failures and per-cue structural violations carrying a 1-based line number.
 */

use thiserror::Error;

/// Errors that can occur while parsing a caption file.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The file-level signature or minimum-structure check failed, or a
    /// style block appeared after cues had started.
    #[error("Malformed file: {0}")]
    MalformedFile(String),

    /// A structural violation while parsing an individual cue or block.
    /// Always carries the 1-based line number nearest the violation.
    #[error("{message} in line {line}")]
    MalformedCaption { line: usize, message: String },
}

impl ParseError {
    /// Shorthand for a cue-level violation at the given 1-based line.
    pub fn caption(line: usize, message: impl Into<String>) -> Self {
        ParseError::MalformedCaption {
            line,
            message: message.into(),
        }
    }

    /// The 1-based source line the error points at, when it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::MalformedFile(_) => None,
            ParseError::MalformedCaption { line, .. } => Some(*line),
        }
    }
}

/// Result alias for parser entry points.
pub type ParseResult<T> = Result<T, ParseError>;
