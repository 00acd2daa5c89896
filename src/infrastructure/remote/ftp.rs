//! FTP/FTPS Remote Session
//!
//! Implements the remote ports over `suppaftp`. Explicit FTPS (AUTH TLS) is
//! the default; plain FTP is available for servers without TLS.

use std::fs::File;
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;
use std::time::Duration;

use native_tls::TlsConnector;
use suppaftp::types::FileType;
use suppaftp::{Mode, NativeTlsConnector, NativeTlsFtpStream};
use tracing::debug;

use crate::domain::ports::{RemoteConnector, RemoteError, RemoteResult, RemoteSession};

/// Connection parameters for an FTP server
#[derive(Debug, Clone)]
pub struct FtpSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Upgrade the control connection with AUTH TLS
    pub secure: bool,
    pub timeout: Duration,
}

/// Opens FTP/FTPS sessions
#[derive(Debug, Clone)]
pub struct FtpConnector {
    settings: FtpSettings,
}

impl FtpConnector {
    pub fn new(settings: FtpSettings) -> Self {
        Self { settings }
    }

    fn connect_error(&self, message: impl ToString) -> RemoteError {
        RemoteError::Connect {
            host: self.settings.host.clone(),
            port: self.settings.port,
            timeout_secs: self.settings.timeout.as_secs(),
            message: message.to_string(),
        }
    }

    fn resolve(&self) -> RemoteResult<SocketAddr> {
        (self.settings.host.as_str(), self.settings.port)
            .to_socket_addrs()
            .map_err(|e| self.connect_error(e))?
            .next()
            .ok_or_else(|| self.connect_error("host did not resolve to any address"))
    }
}

impl RemoteConnector for FtpConnector {
    type Session = FtpSession;

    fn endpoint(&self) -> String {
        let scheme = if self.settings.secure { "ftps" } else { "ftp" };
        format!("{}://{}:{}", scheme, self.settings.host, self.settings.port)
    }

    fn connect(&self) -> RemoteResult<FtpSession> {
        let settings = &self.settings;
        let addr = self.resolve()?;
        debug!(%addr, "connecting");

        let mut stream = NativeTlsFtpStream::connect_timeout(addr, settings.timeout)
            .map_err(|e| self.connect_error(e))?;

        if settings.secure {
            let tls = TlsConnector::new().map_err(|e| self.connect_error(e))?;
            stream = stream
                .into_secure(NativeTlsConnector::from(tls), &settings.host)
                .map_err(|e| self.connect_error(e))?;
        }

        stream
            .login(settings.username.as_str(), settings.password.as_str())
            .map_err(|e| RemoteError::Auth {
                user: settings.username.clone(),
                host: settings.host.clone(),
                port: settings.port,
                message: e.to_string(),
            })?;

        stream.set_mode(Mode::Passive);
        stream
            .transfer_type(FileType::Binary)
            .map_err(|e| RemoteError::command("TYPE", "I", e))?;

        Ok(FtpSession {
            stream,
            closed: false,
        })
    }
}

/// An authenticated FTP control connection
pub struct FtpSession {
    stream: NativeTlsFtpStream,
    closed: bool,
}

impl RemoteSession for FtpSession {
    fn change_dir(&mut self, path: &str) -> RemoteResult<()> {
        debug!(path, "CWD");
        self.stream
            .cwd(path)
            .map_err(|e| RemoteError::command("cwd", path, e))
    }

    fn change_to_parent(&mut self) -> RemoteResult<()> {
        debug!("CDUP");
        self.stream
            .cdup()
            .map_err(|e| RemoteError::command("cdup", "..", e))
    }

    fn make_dir(&mut self, path: &str) -> RemoteResult<()> {
        debug!(path, "MKD");
        self.stream
            .mkdir(path)
            .map_err(|e| RemoteError::command("mkdir", path, e))
    }

    fn put_file(&mut self, local: &Path, remote: &str) -> RemoteResult<()> {
        debug!(local = %local.display(), remote, "STOR");
        let mut file = File::open(local).map_err(|source| RemoteError::LocalIo {
            path: local.to_path_buf(),
            source,
        })?;
        self.stream
            .put_file(remote, &mut file)
            .map(|bytes| debug!(remote, bytes, "stored"))
            .map_err(|e| RemoteError::command("put", remote, e))
    }

    fn delete_file(&mut self, remote: &str) -> RemoteResult<()> {
        debug!(remote, "DELE");
        self.stream
            .rm(remote)
            .map_err(|e| RemoteError::command("delete", remote, e))
    }

    fn close(&mut self) -> RemoteResult<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.stream
            .quit()
            .map_err(|e| RemoteError::command("quit", "session", e))
    }
}
