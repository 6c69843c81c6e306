#![allow(dead_code)]

use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use proctree::{ProcessRecord, ProcessSource, RecordError, SourceError};

/// In-memory process source: a fixed listing plus the records that still exist.
#[derive(Debug, Default)]
pub struct MemorySource {
    pub listing: Vec<u32>,
    pub records: HashMap<u32, ProcessRecord>,
    pub unavailable: bool,
}

impl MemorySource {
    pub fn new(listing: &[u32], records: &[(u32, u32, &str)]) -> Self {
        MemorySource {
            listing: listing.to_vec(),
            records: records
                .iter()
                .map(|&(pid, ppid, name)| (pid, ProcessRecord::new(pid, ppid, name)))
                .collect(),
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        MemorySource {
            unavailable: true,
            ..MemorySource::default()
        }
    }
}

impl ProcessSource for MemorySource {
    fn candidate_ids(&self) -> Result<Vec<u32>, SourceError> {
        if self.unavailable {
            let root = PathBuf::from("/proc");
            return Err(SourceError::Unavailable {
                source: procfs::ProcError::NotFound(Some(root.clone())),
                root,
            });
        }
        Ok(self.listing.clone())
    }

    fn fetch(&self, pid: u32) -> Result<ProcessRecord, RecordError> {
        self.records
            .get(&pid)
            .cloned()
            .ok_or_else(|| RecordError::Unavailable {
                pid,
                source: io::Error::from(io::ErrorKind::NotFound),
            })
    }
}
