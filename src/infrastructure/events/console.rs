//! Console Event Sink
//!
//! Prints one human-readable line per deploy event.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{DeployEvent, DeployEventSink};

/// Event sink that prints progress lines to stdout
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_line(&self, line: &str) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
            let _ = writer.flush();
        }
    }
}

/// The line printed for an event, if any.
pub(crate) fn render_event(event: &DeployEvent) -> Option<String> {
    let line = match event {
        DeployEvent::Connecting { endpoint } => format!("Connecting to {endpoint}..."),
        DeployEvent::Connected => "Connected successfully.".to_string(),
        DeployEvent::DeleteStarted { remote, .. } => format!("Deleting remote file: {remote}"),
        DeployEvent::DeleteFailed { remote, error, .. } => {
            format!("Failed to delete {remote}: {error}")
        }
        DeployEvent::DirectoryCreated { remote } => format!("Created directory: {remote}"),
        DeployEvent::UploadStarted { path, remote } => format!("Uploading: {path} to {remote}"),
        DeployEvent::UploadFailed { path, error, .. } => {
            format!("Failed to upload {path}: {error}")
        }
        DeployEvent::ManifestSaved { .. } => return None,
    };
    Some(line)
}

impl DeployEventSink for ConsoleEventSink {
    fn on_event(&self, event: DeployEvent) {
        if let Some(line) = render_event(&event) {
            self.write_line(&line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn prints_one_line_per_event() {
        let buffer = SharedBuffer::default();
        let sink = ConsoleEventSink::with_writer(buffer.clone());

        sink.on_event(DeployEvent::Connecting {
            endpoint: "ftps://example.com:21".to_string(),
        });
        sink.on_event(DeployEvent::Connected);
        sink.on_event(DeployEvent::UploadStarted {
            path: "index.html".to_string(),
            remote: "/public_html/index.html".to_string(),
        });
        sink.on_event(DeployEvent::ManifestSaved { entries: 3 });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            output,
            "Connecting to ftps://example.com:21...\n\
             Connected successfully.\n\
             Uploading: index.html to /public_html/index.html\n"
        );
    }

    #[test]
    fn failures_include_the_error() {
        let line = render_event(&DeployEvent::DeleteFailed {
            path: "old.txt".to_string(),
            remote: "/old.txt".to_string(),
            error: "550 not found".to_string(),
        });
        assert_eq!(line.as_deref(), Some("Failed to delete /old.txt: 550 not found"));
    }
}
