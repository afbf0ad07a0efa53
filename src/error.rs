use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the correction pipeline.
#[derive(Debug, Error)]
pub enum CorrectError {
    #[error("The file {} was not found.", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Could not write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard input ended while a choice was still pending.
    #[error("Input closed before a replacement was chosen for '{0}'")]
    InputClosed(String),

    #[error("Selection {index} is out of range for '{word}' ({count} candidates)")]
    SelectionOutOfRange {
        word: String,
        index: usize,
        count: usize,
    },

    #[error("Console I/O failed")]
    Console(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, CorrectError>;
