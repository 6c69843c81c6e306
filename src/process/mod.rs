pub mod stat;
pub mod tree;

/// Parent id the kernel reports for processes without a tracked parent.
pub const ROOT_SENTINEL: u32 = 0;

/// One process as read from the process source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub parent_pid: u32,
    pub name: String,
    /// Single-character scheduler state (`R`, `S`, `Z`, ...). Carried but not printed.
    pub state: char,
}

impl ProcessRecord {
    /// Builds a record with an unknown (`?`) state.
    pub fn new(pid: u32, parent_pid: u32, name: impl Into<String>) -> Self {
        ProcessRecord {
            pid,
            parent_pid,
            name: name.into(),
            state: '?',
        }
    }

    pub fn with_state(mut self, state: char) -> Self {
        self.state = state;
        self
    }

    /// True when the parent id is the root sentinel.
    pub fn is_root(&self) -> bool {
        self.parent_pid == ROOT_SENTINEL
    }
}
