//! Deploy Use Case
//!
//! Orchestrates one deployment run:
//! 1. Detect changes against the manifest
//! 2. Ask the operator to confirm
//! 3. Open the remote session
//! 4. Delete removed files, then upload changed ones
//! 5. Persist the manifest and close the session
//!
//! A fatal error during the transfer phase leaves the manifest file as it
//! was at the start of the run.

use tracing::{info, warn};

use crate::domain::entities::{ChangeSet, Manifest};
use crate::domain::ports::{
    Confirmation, DeployEvent, DeployEventSink, ManifestRepository, RemoteConnector, RemoteSession,
};
use crate::domain::services::{remote_parent, ChangeDetector, Detection, PathMapper};
use crate::error::{DeployError, DeployResult};

use super::options::DeployOptions;
use super::remote_dirs::RemoteDirs;
use super::result::{DeployOutcome, DeployReport, FileFailure};

/// Question put to the operator before any remote work
pub const CONFIRM_QUESTION: &str = "Do you want to proceed with the deployment?";

/// Deploy use case - owns all state of one run
pub struct DeployUseCase<R, C>
where
    R: ManifestRepository,
    C: RemoteConnector,
{
    detector: ChangeDetector<R>,
    mapper: PathMapper,
    connector: C,
    options: DeployOptions,
}

impl<R, C> DeployUseCase<R, C>
where
    R: ManifestRepository,
    C: RemoteConnector,
{
    pub fn new(
        detector: ChangeDetector<R>,
        mapper: PathMapper,
        connector: C,
        options: DeployOptions,
    ) -> Self {
        Self {
            detector,
            mapper,
            connector,
            options,
        }
    }

    pub fn detector(&self) -> &ChangeDetector<R> {
        &self.detector
    }

    /// Full run: detect, preview, confirm, transfer.
    ///
    /// `preview` is called with the pending changes right before the
    /// operator is asked.
    pub fn run<F>(
        &self,
        confirm: &mut dyn Confirmation,
        events: &dyn DeployEventSink,
        preview: F,
    ) -> DeployResult<DeployOutcome>
    where
        F: FnOnce(&ChangeSet),
    {
        let detection = self.detector.detect()?;
        if detection.changes.is_empty() {
            info!("nothing to deploy");
            return Ok(DeployOutcome::NothingToDo);
        }

        preview(&detection.changes);

        if !confirm.confirm(CONFIRM_QUESTION)?.proceeds() {
            info!("deployment cancelled by operator");
            return Ok(DeployOutcome::Cancelled);
        }

        self.execute(detection, events).map(DeployOutcome::Completed)
    }

    /// Transfer an already confirmed detection.
    pub fn execute(
        &self,
        detection: Detection,
        events: &dyn DeployEventSink,
    ) -> DeployResult<DeployReport> {
        let Detection {
            changes,
            mut manifest,
            previous,
        } = detection;

        events.on_event(DeployEvent::Connecting {
            endpoint: self.connector.endpoint(),
        });
        let mut session = self.connector.connect().map_err(DeployError::Session)?;
        events.on_event(DeployEvent::Connected);

        let mut report =
            match self.transfer(&mut session, &changes, &mut manifest, &previous, events) {
                Ok(report) => report,
                Err(e) => {
                    close_session(&mut session);
                    return Err(e);
                }
            };

        let persisted = self.detector.persist(&manifest);
        close_session(&mut session);
        persisted?;

        report.manifest_entries = manifest.len();
        events.on_event(DeployEvent::ManifestSaved {
            entries: manifest.len(),
        });
        info!(
            uploaded = report.uploaded.len(),
            deleted = report.deleted.len(),
            failed = report.upload_errors.len() + report.delete_errors.len(),
            "deployment finished"
        );
        Ok(report)
    }

    /// Rebuild the manifest from the current tree without transferring.
    pub fn refresh_hashes(&self) -> DeployResult<Manifest> {
        self.detector.generate_only()
    }

    fn transfer(
        &self,
        session: &mut C::Session,
        changes: &ChangeSet,
        manifest: &mut Manifest,
        previous: &Manifest,
        events: &dyn DeployEventSink,
    ) -> DeployResult<DeployReport> {
        let mut report = DeployReport::new();

        for path in &changes.deleted {
            let remote = self.mapper.resolve(path);
            events.on_event(DeployEvent::DeleteStarted {
                path: path.clone(),
                remote: remote.clone(),
            });

            match session.delete_file(&remote) {
                Ok(()) => {
                    report.deleted.push(path.clone());
                    manifest.remove(path);
                }
                Err(e) => {
                    warn!(path = %path, remote = %remote, "delete failed: {e}");
                    events.on_event(DeployEvent::DeleteFailed {
                        path: path.clone(),
                        remote: remote.clone(),
                        error: e.to_string(),
                    });
                    report.delete_errors.push(FileFailure {
                        path: path.clone(),
                        remote,
                        error: e.to_string(),
                    });
                    match previous.get_hash(path) {
                        Some(hash) if self.options.strict => manifest.set(path.clone(), hash),
                        _ => {
                            manifest.remove(path);
                        }
                    }
                }
            }
        }

        let mut dirs = RemoteDirs::new(self.mapper.remote_base());
        for path in &changes.changed {
            let remote = self.mapper.resolve(path);
            dirs.ensure(session, remote_parent(&remote), events)?;

            events.on_event(DeployEvent::UploadStarted {
                path: path.clone(),
                remote: remote.clone(),
            });

            let local = self.detector.root().join(path);
            match session.put_file(&local, &remote) {
                Ok(()) => report.uploaded.push(path.clone()),
                Err(e) => {
                    warn!(path = %path, remote = %remote, "upload failed: {e}");
                    events.on_event(DeployEvent::UploadFailed {
                        path: path.clone(),
                        remote: remote.clone(),
                        error: e.to_string(),
                    });
                    report.upload_errors.push(FileFailure {
                        path: path.clone(),
                        remote,
                        error: e.to_string(),
                    });
                    if self.options.strict {
                        match previous.get_hash(path) {
                            Some(hash) => manifest.set(path.clone(), hash),
                            None => {
                                manifest.remove(path);
                            }
                        }
                    }
                }
            }
        }

        Ok(report)
    }
}

fn close_session<S: RemoteSession>(session: &mut S) {
    if let Err(e) = session.close() {
        warn!("could not close remote session cleanly: {e}");
    }
}
