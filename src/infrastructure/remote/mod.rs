//! Remote Transfer Implementations

mod ftp;

pub use ftp::{FtpConnector, FtpSession, FtpSettings};
