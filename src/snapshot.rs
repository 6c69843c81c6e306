use std::collections::HashMap;

use crate::process::tree::ProcessNode;

pub mod builder;
pub mod render;

pub use builder::AttachPolicy;
pub use render::{DEFAULT_INDENT, Walk};

/// A point-in-time process forest.
///
/// The snapshot owns every node; roots and children refer to nodes by pid.
/// Built once by [`Snapshot::build`] or [`Snapshot::assemble`] and read-only
/// afterwards.
#[derive(Debug, Default, Clone)]
pub struct Snapshot {
    nodes: HashMap<u32, ProcessNode>,
    roots: Vec<u32>,
}

impl Snapshot {
    /// Number of processes in the snapshot.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Top-level pids in discovery order.
    pub fn roots(&self) -> &[u32] {
        &self.roots
    }

    pub fn get(&self, pid: u32) -> Option<&ProcessNode> {
        self.nodes.get(&pid)
    }

    pub fn contains(&self, pid: u32) -> bool {
        self.nodes.contains_key(&pid)
    }

    /// Number of ancestor edges between `pid` and its root.
    pub fn depth(&self, pid: u32) -> Option<usize> {
        let mut node = self.nodes.get(&pid)?;
        let mut depth = 0;
        while let Some(parent) = node.parent {
            node = &self.nodes[&parent];
            depth += 1;
        }
        Some(depth)
    }

    /// Every pid in the snapshot, unordered.
    pub fn pids(&self) -> impl Iterator<Item = u32> + '_ {
        self.nodes.keys().copied()
    }
}
