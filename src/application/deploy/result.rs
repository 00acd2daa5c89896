//! Deploy Result
//!
//! Result types for deploy operations.

/// A single file whose transfer failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// Root-relative local path
    pub path: String,
    /// Resolved remote path
    pub remote: String,
    pub error: String,
}

/// Itemized outcome of the transfer phase
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployReport {
    /// Files uploaded
    pub uploaded: Vec<String>,
    /// Remote files deleted
    pub deleted: Vec<String>,
    pub upload_errors: Vec<FileFailure>,
    pub delete_errors: Vec<FileFailure>,
    /// Entries in the persisted manifest
    pub manifest_entries: usize,
}

impl DeployReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_success(&self) -> bool {
        self.upload_errors.is_empty() && self.delete_errors.is_empty()
    }
}

/// How a deploy run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployOutcome {
    /// Tree matches the manifest; no session was opened
    NothingToDo,
    /// Operator declined; nothing was touched
    Cancelled,
    /// Transfer phase ran (possibly with per-file failures)
    Completed(DeployReport),
}
