//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `events/` - Progress output
//! - `prompt/` - Operator confirmation
//! - `remote/` - FTP/FTPS sessions
//! - `repositories/` - Manifest persistence

pub mod events;
pub mod prompt;
pub mod remote;
pub mod repositories;

// Re-export for convenience
pub use events::ConsoleEventSink;
pub use prompt::LinePrompt;
pub use remote::{FtpConnector, FtpSession, FtpSettings};
pub use repositories::JsonManifestRepository;
