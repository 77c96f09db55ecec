//! Version history
//!
//! Append-only list of accepted versions with a current-version counter.
//! Rollback is the only operation that removes an entry, and it always removes
//! the last one. The store never computes version numbers itself: callers ask
//! for [`VersionStore::next_version_number`] and hand back a finished
//! [`VersionState`].

use genui_plan::VersionState;

/// Ordered, rollback-capable version history
#[derive(Debug, Clone, Default)]
pub struct VersionStore {
    history: Vec<VersionState>,
    current_version: u32,
}

impl VersionStore {
    /// Create empty store
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a version and advance the counter to its number
    pub fn store(&mut self, version: VersionState) {
        self.current_version = version.version;
        self.history.push(version);
    }

    /// Latest version
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&VersionState> {
        self.history.last()
    }

    /// First version numbered `n`
    #[must_use]
    pub fn version(&self, n: u32) -> Option<&VersionState> {
        self.history.iter().find(|v| v.version == n)
    }

    /// Snapshot of the whole history, oldest first
    #[must_use]
    pub fn all_versions(&self) -> Vec<VersionState> {
        self.history.clone()
    }

    /// Borrow history without copying
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &VersionState> {
        self.history.iter()
    }

    /// Drop the latest version and return the one before it
    ///
    /// With zero or one entries there is nothing to go back to; history is
    /// left untouched and `None` is returned.
    pub fn rollback(&mut self) -> Option<VersionState> {
        if self.history.len() <= 1 {
            return None;
        }

        self.history.pop();
        let restored = self.history.last()?.clone();
        self.current_version = restored.version;
        Some(restored)
    }

    /// Number the next stored version should carry
    #[inline]
    #[must_use]
    pub fn next_version_number(&self) -> u32 {
        self.current_version + 1
    }

    /// Counter value; 0 when nothing has been stored
    #[inline]
    #[must_use]
    pub fn current_version_number(&self) -> u32 {
        self.current_version
    }

    /// Empty history and reset numbering
    pub fn clear(&mut self) {
        self.history.clear();
        self.current_version = 0;
    }

    /// Number of stored versions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Check if nothing is stored
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
