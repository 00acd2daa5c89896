//! Remote Directory Materialization
//!
//! Makes sure the parent directory of an upload exists before the transfer.

use std::collections::HashSet;

use tracing::debug;

use crate::domain::ports::{DeployEvent, DeployEventSink, RemoteSession};
use crate::domain::services::{remote_parent, same_remote_dir};
use crate::error::{DeployError, DeployResult};

/// Tracks which remote directories are known to exist during one run.
#[derive(Debug, Clone)]
pub struct RemoteDirs {
    base: String,
    known: HashSet<String>,
}

impl RemoteDirs {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            known: HashSet::new(),
        }
    }

    /// The remote base, `/` and the empty path always exist.
    fn assumed(&self, dir: &str) -> bool {
        dir.is_empty() || dir == "/" || same_remote_dir(dir, &self.base)
    }

    /// Ensure `dir` exists, creating missing ancestors outermost first.
    ///
    /// A directory is probed by entering it (and leaving again on success).
    /// Creation failure is fatal for the run.
    pub fn ensure<S>(
        &mut self,
        session: &mut S,
        dir: &str,
        events: &dyn DeployEventSink,
    ) -> DeployResult<()>
    where
        S: RemoteSession + ?Sized,
    {
        let mut missing: Vec<&str> = Vec::new();
        let mut current = dir;

        while !self.assumed(current) && !self.known.contains(current) {
            match session.change_dir(current) {
                Ok(()) => {
                    if let Err(e) = session.change_to_parent() {
                        debug!(dir = current, "could not leave probed directory: {e}");
                    }
                    self.known.insert(current.to_string());
                    break;
                }
                Err(e) => {
                    debug!(dir = current, "probe failed: {e}");
                    missing.push(current);
                    current = remote_parent(current);
                }
            }
        }

        while let Some(dir) = missing.pop() {
            session
                .make_dir(dir)
                .map_err(|source| DeployError::DirectoryCreate {
                    dir: dir.to_string(),
                    source,
                })?;
            self.known.insert(dir.to_string());
            events.on_event(DeployEvent::DirectoryCreated {
                remote: dir.to_string(),
            });
        }

        Ok(())
    }
}
