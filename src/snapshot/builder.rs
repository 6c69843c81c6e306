use tracing::{debug, warn};

use crate::error::{RecordError, SourceError};
use crate::process::tree::ProcessNode;
use crate::process::{ProcessRecord, ROOT_SENTINEL};
use crate::snapshot::Snapshot;
use crate::source::ProcessSource;

/// When a record is resolved against its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AttachPolicy {
    /// Attach while reading: a parent listed after its child is not found,
    /// and the child becomes an orphan root.
    SinglePass,
    /// Index every record first, then attach. Only parents that are truly
    /// missing from the snapshot produce orphan roots.
    #[default]
    Deferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    New,
    Kept,
    Moved,
}

impl Snapshot {
    /// Takes a snapshot of `source`.
    ///
    /// Fails only if the candidate listing fails. Records that vanish or do
    /// not decode are left out of the snapshot.
    pub fn build<S: ProcessSource>(source: S, policy: AttachPolicy) -> Result<Snapshot, SourceError> {
        let candidates = source.candidate_ids()?;
        debug!(count = candidates.len(), "fetching candidate records");

        let mut records = Vec::with_capacity(candidates.len());
        for pid in candidates {
            match source.fetch(pid) {
                Ok(record) => {
                    debug!(pid, ppid = record.parent_pid, name = %record.name, "read process");
                    records.push(record);
                }
                //Ignore processes that vanished between listing and reading their data
                Err(e @ RecordError::Unavailable { .. }) => debug!(pid = e.pid(), error = %e, "skipping pid"),
                Err(e @ RecordError::Malformed { .. }) => warn!(pid = e.pid(), error = %e, "skipping pid"),
            }
        }

        Ok(Snapshot::assemble(records, policy))
    }

    /// Builds the forest from records given in discovery order.
    pub fn assemble<I>(records: I, policy: AttachPolicy) -> Snapshot
    where
        I: IntoIterator<Item = ProcessRecord>,
    {
        let mut snapshot = Snapshot::default();
        let mut order = Vec::new();

        for record in records {
            let pid = record.pid;
            let placement = snapshot.index(record);
            if placement == Placement::New {
                order.push(pid);
            }
            if policy == AttachPolicy::SinglePass && placement != Placement::Kept {
                snapshot.attach(pid);
            }
        }

        if policy == AttachPolicy::Deferred {
            for pid in order {
                snapshot.attach(pid);
            }
        }

        snapshot
    }

    // A repeated pid takes the new record and keeps its children. It stays where
    // it is unless its parent changed, in which case it is detached so it can be
    // re-attached under the new parent.
    fn index(&mut self, record: ProcessRecord) -> Placement {
        let pid = record.pid;
        let Some(node) = self.nodes.get_mut(&pid) else {
            self.nodes.insert(pid, ProcessNode::new(record));
            return Placement::New;
        };

        warn!(pid, "pid listed twice, keeping the latest record");
        let same_parent = node.record.parent_pid == record.parent_pid;
        node.record = record;
        if same_parent {
            return Placement::Kept;
        }

        match node.parent.take() {
            Some(parent) => {
                if let Some(parent) = self.nodes.get_mut(&parent) {
                    parent.children.retain(|&child| child != pid);
                }
            }
            None => self.roots.retain(|&root| root != pid),
        }
        Placement::Moved
    }

    fn attach(&mut self, pid: u32) {
        let parent_pid = self.nodes[&pid].record.parent_pid;

        if parent_pid == ROOT_SENTINEL {
            self.roots.push(pid);
            return;
        }

        if !self.nodes.contains_key(&parent_pid) {
            debug!(pid, ppid = parent_pid, "parent not in snapshot, promoting to root");
            self.roots.push(pid);
            return;
        }

        if self.is_ancestor(pid, parent_pid) {
            warn!(pid, ppid = parent_pid, "parent link would form a cycle, promoting to root");
            self.roots.push(pid);
            return;
        }

        if let Some(parent) = self.nodes.get_mut(&parent_pid) {
            parent.children.push(pid);
        }
        if let Some(node) = self.nodes.get_mut(&pid) {
            node.parent = Some(parent_pid);
        }
    }

    // Whether `ancestor` is `pid` or lies on the attached chain above it.
    fn is_ancestor(&self, ancestor: u32, pid: u32) -> bool {
        // A node without children heads no chain but its own.
        if self.nodes.get(&ancestor).is_none_or(|node| node.children.is_empty()) {
            return ancestor == pid;
        }
        let mut current = Some(pid);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.nodes.get(&p).and_then(|node| node.parent);
        }
        false
    }
}
