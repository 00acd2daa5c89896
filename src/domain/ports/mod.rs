//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirmation;
pub mod deploy_events;
pub mod manifest_repository;
pub mod remote_session;

pub use confirmation::{AutoConfirm, ConfirmDecision, Confirmation};
pub use deploy_events::{DeployEvent, DeployEventSink};
pub use manifest_repository::{ManifestError, ManifestRepository, ManifestResult};
pub use remote_session::{RemoteConnector, RemoteError, RemoteResult, RemoteSession};
