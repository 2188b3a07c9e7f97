use std::path::PathBuf;
use thiserror::Error;

/// A log line that does not carry enough fields to form an entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected at least {expected} fields, found {found}")]
pub struct FormatError {
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("failed to open access log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read access log at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("glob pattern error: {pattern}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to list access logs under {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AnalyzeError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}
