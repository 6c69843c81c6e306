use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{RecordError, SourceError, StatError};
use crate::process::ProcessRecord;
use crate::process::stat::{self, STAT_PREFIX_LEN};
use crate::source::ProcessSource;

/// Reads processes from a procfs mount (normally `/proc`).
#[derive(Debug, Clone)]
pub struct ProcDirSource {
    root: PathBuf,
}

impl ProcDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ProcDirSource { root: root.into() }
    }

    fn read_stat_prefix(&self, pid: u32) -> std::io::Result<String> {
        let path = self.root.join(pid.to_string()).join("stat");
        let mut buf = Vec::with_capacity(STAT_PREFIX_LEN);
        // The file is dropped, and closed, on every return path of this call.
        File::open(&path)?
            .take(STAT_PREFIX_LEN as u64)
            .read_to_end(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl Default for ProcDirSource {
    fn default() -> Self {
        ProcDirSource::new("/proc")
    }
}

impl ProcessSource for ProcDirSource {
    fn candidate_ids(&self) -> Result<Vec<u32>, SourceError> {
        let processes = procfs::process::all_processes_with_root(&self.root).map_err(|source| {
            SourceError::Unavailable {
                root: self.root.clone(),
                source,
            }
        })?;

        let mut pids = Vec::new();
        for p in processes {
            //Processes that exit while being listed are simply not candidates
            let process = match p {
                Ok(p) => p,
                Err(e) => {
                    debug!(error = %e, "skipping listing entry");
                    continue;
                }
            };
            match u32::try_from(process.pid()) {
                Ok(pid) if pid > 0 => pids.push(pid),
                _ => debug!(pid = process.pid(), "skipping non-positive pid entry"),
            }
        }

        debug!(count = pids.len(), root = %self.root.display(), "listed candidate pids");
        Ok(pids)
    }

    fn fetch(&self, pid: u32) -> Result<ProcessRecord, RecordError> {
        let buf = self
            .read_stat_prefix(pid)
            .map_err(|source| RecordError::Unavailable { pid, source })?;

        let record = stat::parse(&buf).map_err(|reason| RecordError::Malformed { pid, reason })?;
        if record.pid != pid {
            return Err(RecordError::Malformed {
                pid,
                reason: StatError::PidMismatch {
                    expected: pid,
                    found: record.pid,
                },
            });
        }

        Ok(record)
    }
}
