//! Change Detector Domain Service
//!
//! Walks the local tree, hashes every included file and diffs the result
//! against the previously persisted manifest.

use std::fs::{self, DirEntry, FileType};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::entities::{normalize_manifest_path, ChangeSet, Manifest};
use crate::domain::ports::ManifestRepository;
use crate::domain::value_objects::{ContentHash, IgnorePatterns, PathMappings};
use crate::error::{DeployError, DeployResult};

/// Result of one detection pass
#[derive(Debug, Clone, Default)]
pub struct Detection {
    /// Changed and deleted paths
    pub changes: ChangeSet,
    /// Freshly scanned manifest (one entry per included file)
    pub manifest: Manifest,
    /// Manifest as loaded at the start of the run
    pub previous: Manifest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
    Skip,
}

/// Detects local changes relative to the manifest.
pub struct ChangeDetector<R: ManifestRepository> {
    root: PathBuf,
    ignore: IgnorePatterns,
    mappings: PathMappings,
    manifest_path: PathBuf,
    excluded: Vec<String>,
    repo: R,
}

impl<R: ManifestRepository> ChangeDetector<R> {
    /// Create a detector rooted at `root`.
    ///
    /// A relative `manifest_path` is resolved against `root`. The manifest
    /// file itself is never scanned.
    pub fn new(
        root: impl Into<PathBuf>,
        ignore: IgnorePatterns,
        mappings: PathMappings,
        manifest_path: impl AsRef<Path>,
        repo: R,
    ) -> Self {
        let root = root.into();
        let manifest_path = root.join(manifest_path.as_ref());
        let mut detector = Self {
            root,
            ignore,
            mappings,
            manifest_path,
            excluded: Vec::new(),
            repo,
        };
        let manifest_path = detector.manifest_path.clone();
        detector.exclude_path(&manifest_path);
        detector
    }

    /// Never scan this path (e.g. the config file holding credentials).
    ///
    /// Paths outside the root are ignored.
    pub fn exclude_path(&mut self, path: &Path) {
        if let Ok(rel) = path.strip_prefix(&self.root) {
            let rel = normalize_manifest_path(rel);
            if !rel.is_empty() && !self.excluded.contains(&rel) {
                self.excluded.push(rel);
            }
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Load the previous manifest, scan the tree and diff the two.
    pub fn detect(&self) -> DeployResult<Detection> {
        let previous = self.load_previous();
        let manifest = self.scan()?;

        let changed: Vec<String> = manifest
            .entries()
            .filter(|(path, hash)| previous.get_hash(path) != Some(*hash))
            .map(|(path, _)| path.to_string())
            .collect();
        let deleted: Vec<String> = previous
            .missing_from(&manifest)
            .into_iter()
            .filter(|path| {
                let skipped = self.is_skipped(path);
                if skipped {
                    debug!(path = %path, "ignored path dropped from manifest");
                }
                !skipped
            })
            .collect();

        info!(
            scanned = manifest.len(),
            changed = changed.len(),
            deleted = deleted.len(),
            "change detection finished"
        );

        Ok(Detection {
            changes: ChangeSet { changed, deleted },
            manifest,
            previous,
        })
    }

    /// Scan and persist a fresh manifest without diffing.
    pub fn generate_only(&self) -> DeployResult<Manifest> {
        let manifest = self.scan()?;
        self.persist(&manifest)?;
        info!(entries = manifest.len(), "manifest regenerated");
        Ok(manifest)
    }

    /// Overwrite the manifest file.
    pub fn persist(&self, manifest: &Manifest) -> DeployResult<()> {
        self.repo.save(manifest, &self.manifest_path)?;
        debug!(path = %self.manifest_path.display(), entries = manifest.len(), "manifest saved");
        Ok(())
    }

    /// Drop one entry and persist immediately.
    pub fn forget(&self, manifest: &mut Manifest, rel_path: &str) -> DeployResult<()> {
        manifest.remove(rel_path);
        self.persist(manifest)
    }

    /// True when the path or one of its parent directories is ignored or excluded.
    fn is_skipped(&self, rel_path: &str) -> bool {
        rel_path
            .match_indices('/')
            .map(|(i, _)| &rel_path[..i])
            .chain(std::iter::once(rel_path))
            .any(|prefix| {
                self.excluded.iter().any(|e| e == prefix) || self.ignore.is_ignored(prefix)
            })
    }

    fn load_previous(&self) -> Manifest {
        match self.repo.load(&self.manifest_path) {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!("{e}; treating manifest as empty");
                Manifest::new()
            }
        }
    }

    /// Walk the tree with an explicit stack and hash every included file.
    fn scan(&self) -> DeployResult<Manifest> {
        if !self.root.is_dir() {
            return Err(DeployError::LocalRootNotFound {
                path: self.root.clone(),
            });
        }

        let mut manifest = Manifest::new();
        let mut stack: Vec<(PathBuf, String)> = vec![(self.root.clone(), String::new())];

        while let Some((dir, rel_dir)) = stack.pop() {
            for entry in self.read_sorted(&dir) {
                let name = entry.file_name();
                let name = name.to_string_lossy();
                let rel = if rel_dir.is_empty() {
                    name.into_owned()
                } else {
                    format!("{rel_dir}/{name}")
                };

                if self.excluded.contains(&rel) || self.ignore.is_ignored(&rel) {
                    debug!(path = %rel, "ignored");
                    continue;
                }

                let path = entry.path();
                match entry.file_type().map(|ft| classify(&path, ft)) {
                    Ok(EntryKind::Dir) => stack.push((path, rel)),
                    Ok(EntryKind::File) => {
                        if !self.mappings.is_empty() && !self.mappings.includes(&rel) {
                            debug!(path = %rel, "no mapping rule, skipped");
                            continue;
                        }
                        let hash = ContentHash::from_file(&path)
                            .map_err(|source| DeployError::Hash { path, source })?;
                        manifest.set_hash(rel, hash);
                    }
                    Ok(EntryKind::Skip) => debug!(path = %rel, "not a regular file, skipped"),
                    Err(e) => warn!(path = %rel, "could not stat entry: {e}"),
                }
            }
        }

        Ok(manifest)
    }

    fn read_sorted(&self, dir: &Path) -> Vec<DirEntry> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), "could not read directory: {e}");
                return Vec::new();
            }
        };

        let mut entries: Vec<DirEntry> = entries
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(dir = %dir.display(), "could not read directory entry: {e}");
                    None
                }
            })
            .collect();
        entries.sort_by_key(DirEntry::file_name);
        entries
    }
}

/// Symlinks are not followed into directories; a link to a file is hashed.
fn classify(path: &Path, file_type: FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_symlink() {
        match fs::metadata(path) {
            Ok(meta) if meta.is_file() => EntryKind::File,
            _ => EntryKind::Skip,
        }
    } else {
        EntryKind::Skip
    }
}
