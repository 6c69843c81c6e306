use std::path::PathBuf;

use crate::snapshot::{AttachPolicy, DEFAULT_INDENT};

/// Runtime settings for one snapshot-and-print run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Mount point of the process filesystem.
    pub proc_root: PathBuf,
    /// Indent unit repeated once per tree level.
    pub indent: String,
    pub attach: AttachPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            proc_root: PathBuf::from("/proc"),
            indent: DEFAULT_INDENT.to_string(),
            attach: AttachPolicy::Deferred,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_read_proc_with_three_space_indent() {
        let config = Config::default();
        assert_eq!(config.proc_root, PathBuf::from("/proc"));
        assert_eq!(config.indent, "   ");
        assert_eq!(config.attach, AttachPolicy::Deferred);
    }
}
