//! Configuration types for the tree builder

/// Configuration for tree building behavior.
#[derive(Debug, Clone, Default)]
pub struct BuilderConfig {
    /// Descend into subdirectories. Symlinked directories are never followed.
    pub recursive: bool,
}

impl BuilderConfig {
    pub fn recursive(recursive: bool) -> Self {
        Self { recursive }
    }
}
