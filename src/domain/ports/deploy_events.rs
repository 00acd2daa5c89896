//! Deploy Event Port
//!
//! Observable progress of a deploy run. The console sink prints the
//! per-file lines; tests record the stream.

/// Event emitted during deploy operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployEvent {
    /// About to open the remote session
    Connecting { endpoint: String },

    /// Session is open
    Connected,

    /// A remote delete is about to be attempted
    DeleteStarted { path: String, remote: String },

    /// A remote delete failed
    DeleteFailed {
        path: String,
        remote: String,
        error: String,
    },

    /// A remote directory was created
    DirectoryCreated { remote: String },

    /// An upload is about to be attempted
    UploadStarted { path: String, remote: String },

    /// An upload failed
    UploadFailed {
        path: String,
        remote: String,
        error: String,
    },

    /// Manifest was written
    ManifestSaved { entries: usize },
}

/// Trait for receiving deploy events
pub trait DeployEventSink {
    fn on_event(&self, event: DeployEvent);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Test event sink that records all events
    struct RecordingEventSink {
        events: RefCell<Vec<DeployEvent>>,
    }

    impl DeployEventSink for RecordingEventSink {
        fn on_event(&self, event: DeployEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    #[test]
    fn recording_sink_captures_events() {
        let sink = RecordingEventSink {
            events: RefCell::new(Vec::new()),
        };

        sink.on_event(DeployEvent::Connecting {
            endpoint: "ftps://example.com:21".to_string(),
        });
        sink.on_event(DeployEvent::UploadStarted {
            path: "index.html".to_string(),
            remote: "/index.html".to_string(),
        });

        assert_eq!(sink.events.borrow().len(), 2);
    }
}
