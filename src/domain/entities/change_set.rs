//! Change set produced by one detection pass.

/// Paths that differ between the previous manifest and the current tree.
///
/// Both lists hold root-relative, `/`-separated paths, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    /// New or modified since the previous manifest
    pub changed: Vec<String>,
    /// In the previous manifest but no longer in the tree
    pub deleted: Vec<String>,
}

impl ChangeSet {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty() && self.deleted.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changed.len() + self.deleted.len()
    }
}
