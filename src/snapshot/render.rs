use std::io::{self, Write};

use crate::process::tree::ProcessNode;
use crate::snapshot::Snapshot;

/// Indent unit written once per level of depth.
pub const DEFAULT_INDENT: &str = "   ";

/// Depth-first, pre-order walk over a snapshot.
///
/// Yields `(depth, node)` starting from each root in root order, visiting
/// children in discovery order. Uses an explicit stack, so deep hierarchies
/// cannot overflow the call stack.
pub struct Walk<'a> {
    snapshot: &'a Snapshot,
    stack: Vec<(usize, u32)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a ProcessNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, pid) = self.stack.pop()?;
        let node = &self.snapshot.nodes[&pid];
        //Pushed in reverse so the first child is visited first
        self.stack
            .extend(node.children.iter().rev().map(|&child| (depth + 1, child)));
        Some((depth, node))
    }
}

impl Snapshot {
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            snapshot: self,
            stack: self.roots.iter().rev().map(|&root| (0, root)).collect(),
        }
    }

    /// One line per process: `indent` repeated `depth` times, then `[pid]name`.
    pub fn render(&self, indent: &str) -> Vec<String> {
        self.walk()
            .map(|(depth, node)| format_line(depth, node, indent))
            .collect()
    }

    /// Writes the rendered tree to `out`, one line per process.
    pub fn write_tree<W: Write>(&self, mut out: W, indent: &str) -> io::Result<()> {
        for (depth, node) in self.walk() {
            writeln!(out, "{}", format_line(depth, node, indent))?;
        }
        out.flush()
    }
}

fn format_line(depth: usize, node: &ProcessNode, indent: &str) -> String {
    format!("{}[{}]{}", indent.repeat(depth), node.pid(), node.name())
}
