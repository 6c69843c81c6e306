use crate::process::ProcessRecord;

//Represents a node in the process forest.
//Children are pids of nodes owned by the same snapshot, in discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessNode {
    pub record: ProcessRecord,
    pub(crate) parent: Option<u32>,
    pub(crate) children: Vec<u32>,
}

impl ProcessNode {
    pub fn new(record: ProcessRecord) -> Self {
        ProcessNode {
            record,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn pid(&self) -> u32 {
        self.record.pid
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Pid of the node this one is attached under, `None` for roots.
    pub fn parent(&self) -> Option<u32> {
        self.parent
    }

    pub fn children(&self) -> &[u32] {
        &self.children
    }
}
