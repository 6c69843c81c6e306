//! Point-in-time process tree built from procfs.
//!
//! A [`source::ProcessSource`] lists pids and reads their records, a
//! [`snapshot::Snapshot`] assembles them into a forest, and the snapshot
//! renders itself as an indented tree.

pub mod config;
pub mod error;
pub mod logging;
pub mod process;
pub mod snapshot;
pub mod source;

pub use config::Config;
pub use error::{RecordError, SourceError, StatError};
pub use process::ProcessRecord;
pub use snapshot::{AttachPolicy, Snapshot};
pub use source::{ProcDirSource, ProcessSource};
