//! Domain Services
//!
//! - `ChangeDetector` - scans the local tree and diffs it against the manifest
//! - `PathMapper` - maps local relative paths to remote paths

mod change_detector;
mod path_mapper;

pub use change_detector::{ChangeDetector, Detection};
pub use path_mapper::{join_remote, remote_parent, same_remote_dir, PathMapper};
