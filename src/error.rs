use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The process listing itself could not be produced. Fatal for a snapshot.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("cannot enumerate processes under {}: {source}", root.display())]
    Unavailable {
        root: PathBuf,
        #[source]
        source: procfs::ProcError,
    },
}

/// A single process could not be read. Recovered locally by the builder.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record for pid {pid} is unavailable: {source}")]
    Unavailable {
        pid: u32,
        #[source]
        source: io::Error,
    },

    #[error("record for pid {pid} is malformed: {reason}")]
    Malformed { pid: u32, reason: StatError },
}

impl RecordError {
    pub fn pid(&self) -> u32 {
        match self {
            RecordError::Unavailable { pid, .. } | RecordError::Malformed { pid, .. } => *pid,
        }
    }
}

/// Decoder failures for the fixed-format stat prefix.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatError {
    #[error("missing {0} field")]
    MissingField(&'static str),

    #[error("invalid {field} field {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("unterminated process name")]
    UnterminatedName,

    #[error("record describes pid {found}, expected {expected}")]
    PidMismatch { expected: u32, found: u32 },
}
