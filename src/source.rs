use crate::error::{RecordError, SourceError};
use crate::process::ProcessRecord;

pub mod proc_dir;

pub use proc_dir::ProcDirSource;

/// Where process records come from.
///
/// Implementations are read once per snapshot: the builder lists the candidate
/// pids and then fetches each of them in listing order.
pub trait ProcessSource {
    /// Every pid currently visible, in the source's own enumeration order.
    fn candidate_ids(&self) -> Result<Vec<u32>, SourceError>;

    /// The record for one pid. Processes can exit between listing and fetching,
    /// so callers must expect `RecordError` for any pid.
    fn fetch(&self, pid: u32) -> Result<ProcessRecord, RecordError>;
}

impl<S: ProcessSource + ?Sized> ProcessSource for &S {
    fn candidate_ids(&self) -> Result<Vec<u32>, SourceError> {
        (**self).candidate_ids()
    }

    fn fetch(&self, pid: u32) -> Result<ProcessRecord, RecordError> {
        (**self).fetch(pid)
    }
}
