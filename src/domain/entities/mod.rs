//! Domain Entities
//!
//! - `Manifest` - persisted path-to-hash mapping
//! - `ChangeSet` - changed and deleted paths for one run

mod change_set;
mod manifest;

pub use change_set::ChangeSet;
pub use manifest::{normalize_manifest_path, Manifest};
