//! Remote Session Port
//!
//! The transfer protocol as seen by the deploy use case. A connector opens an
//! authenticated session; the session exposes the handful of commands the
//! deploy needs (probe, mkdir, put, delete).

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type for remote operations
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Remote operation errors
///
/// `Connect` and `Auth` are only produced while opening a session. Any failed
/// command on an open session, including a directory probe, is `Command`.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// TCP/TLS connection could not be established
    #[error("could not connect to {host}:{port} (timeout: {timeout_secs}s): {message}")]
    Connect {
        host: String,
        port: u16,
        timeout_secs: u64,
        message: String,
    },

    /// Server rejected the credentials
    #[error("authentication failed for user '{user}' on {host}:{port}: {message}")]
    Auth {
        user: String,
        host: String,
        port: u16,
        message: String,
    },

    /// A command on an open session failed
    #[error("{op} {target} failed: {message}")]
    Command {
        op: &'static str,
        target: String,
        message: String,
    },

    /// The local side of a transfer could not be read
    #[error("could not read {path}: {source}")]
    LocalIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RemoteError {
    pub fn command(op: &'static str, target: impl Into<String>, message: impl ToString) -> Self {
        Self::Command {
            op,
            target: target.into(),
            message: message.to_string(),
        }
    }
}

/// An open, authenticated connection to the destination store.
///
/// Paths are absolute remote paths with `/` separators.
pub trait RemoteSession {
    /// Enter a directory; failure means it does not exist (or is not enterable)
    fn change_dir(&mut self, path: &str) -> RemoteResult<()>;

    /// Move to the parent of the current directory
    fn change_to_parent(&mut self) -> RemoteResult<()>;

    /// Create a single directory whose parent already exists
    fn make_dir(&mut self, path: &str) -> RemoteResult<()>;

    /// Upload a local file in binary mode, replacing the remote file
    fn put_file(&mut self, local: &Path, remote: &str) -> RemoteResult<()>;

    /// Delete a remote file
    fn delete_file(&mut self, remote: &str) -> RemoteResult<()>;

    /// Close the session
    fn close(&mut self) -> RemoteResult<()>;
}

/// Opens remote sessions.
pub trait RemoteConnector {
    type Session: RemoteSession;

    /// Human-readable endpoint, e.g. `ftps://example.com:21`
    fn endpoint(&self) -> String;

    /// Connect, authenticate and switch to passive binary mode
    fn connect(&self) -> RemoteResult<Self::Session>;
}
