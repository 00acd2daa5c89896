//! Deploy Options

/// Options for the deploy use case
#[derive(Debug, Clone, Copy, Default)]
pub struct DeployOptions {
    /// Keep the previous manifest entry for files whose transfer failed,
    /// so the next run retries them
    pub strict: bool,
}

impl DeployOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
