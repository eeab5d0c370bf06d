use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Total time at line {line} has no preceding input file description with NREP")]
    MissingSystemSize { line: usize },
    #[error("Invalid number '{value}' at line {line}")]
    InvalidNumber { line: usize, value: String },
    #[error("Cannot create output directory: {}", .0.display())]
    CannotCreateOutputDirectory(PathBuf),
    #[error("Cannot save chart to {}: {reason}", .path.display())]
    CannotSaveChart { path: PathBuf, reason: String },
    #[error("Cannot serialize records")]
    CannotSerialize(#[from] serde_json::Error),
}
