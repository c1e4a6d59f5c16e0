//! Reservoir Manager
//!
//! Owns an ordered collection of reservoirs and exports it.
//!
//! ## Responsibilities
//! - Keep reservoirs in insertion order (duplicate names allowed)
//! - Remove every reservoir matching a name, keeping survivors in order
//! - Export to text and binary files, and load the binary form back
//!
//! ## Concurrency
//! No internal locking. Callers sharing a manager across threads must
//! synchronize add/remove/save themselves. File handles are opened inside
//! each save call and closed before it returns.

use std::path::Path;

use crate::error::Result;
use crate::export;
use crate::reservoir::Reservoir;

/// Ordered collection of reservoirs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReservoirManager {
    reservoirs: Vec<Reservoir>,
}

impl ReservoirManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a reservoir to the end of the collection
    pub fn add_reservoir(&mut self, reservoir: Reservoir) {
        tracing::debug!(name = reservoir.name(), "adding reservoir");
        self.reservoirs.push(reservoir);
    }

    /// Read-only view in insertion order
    pub fn reservoirs(&self) -> &[Reservoir] {
        &self.reservoirs
    }

    /// Remove every reservoir whose name equals `name` exactly
    ///
    /// Returns how many were removed; zero leaves the collection unchanged.
    pub fn remove_reservoir(&mut self, name: &str) -> usize {
        let before = self.reservoirs.len();
        self.reservoirs.retain(|r| r.name() != name);
        let removed = before - self.reservoirs.len();

        tracing::debug!(name, removed, "removed reservoirs");
        removed
    }

    pub fn len(&self) -> usize {
        self.reservoirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservoirs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reservoir> {
        self.reservoirs.iter()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Write the text export (six labeled lines + blank line per reservoir)
    ///
    /// Returns `FileOpen` without writing anything if `path` cannot be
    /// opened for writing.
    pub fn save_to_text_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        export::write_text(path, &self.reservoirs)?;

        tracing::debug!(path = %path.display(), count = self.len(), "saved text export");
        Ok(())
    }

    /// Write the binary export (header + one fixed-size record per reservoir)
    pub fn save_to_binary_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        export::write_binary(path, &self.reservoirs)?;

        tracing::debug!(path = %path.display(), count = self.len(), "saved binary export");
        Ok(())
    }

    /// Load a manager from a binary export written by `save_to_binary_file`
    pub fn load_from_binary_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reservoirs = export::read_binary(path).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to load binary export");
            e
        })?;

        tracing::debug!(path = %path.display(), count = reservoirs.len(), "loaded binary export");
        Ok(Self { reservoirs })
    }
}

impl FromIterator<Reservoir> for ReservoirManager {
    fn from_iter<I: IntoIterator<Item = Reservoir>>(iter: I) -> Self {
        Self {
            reservoirs: iter.into_iter().collect(),
        }
    }
}

impl Extend<Reservoir> for ReservoirManager {
    fn extend<I: IntoIterator<Item = Reservoir>>(&mut self, iter: I) {
        for reservoir in iter {
            self.add_reservoir(reservoir);
        }
    }
}

impl<'a> IntoIterator for &'a ReservoirManager {
    type Item = &'a Reservoir;
    type IntoIter = std::slice::Iter<'a, Reservoir>;

    fn into_iter(self) -> Self::IntoIter {
        self.reservoirs.iter()
    }
}
