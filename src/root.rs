//! Top-level aggregate owning the tree and its storage.

use crate::bind::bind;
use crate::storage::SharedStorage;
use crate::tree::screen::{Screen, ScreenSection};

/// The settings aggregate: one root screen plus one storage port.
///
/// All three constructors converge on running the binding walk exactly
/// once before returning, so every leaf of the constructed tree is bound.
///
/// `main` is a public field and may be swapped afterwards, but
/// re-assignment does NOT re-trigger binding: a replacement tree (or
/// nodes appended after construction) keeps default-value semantics until
/// [`rebind`](Self::rebind) is called. This matches the single-pass
/// construction contract.
pub struct SettingsRoot {
    /// The root screen.
    pub main: Screen,
    storage: SharedStorage,
}

impl SettingsRoot {
    /// Builds the root from a title and a section builder closure,
    /// evaluated eagerly exactly once.
    pub fn build(
        storage: SharedStorage,
        title: impl Into<String>,
        sections: impl FnOnce() -> Vec<ScreenSection>,
    ) -> Self {
        Self::from_screen(storage, Screen::build(title, sections))
    }

    /// Builds the root from a title and materialized sections.
    pub fn from_sections(
        storage: SharedStorage,
        title: impl Into<String>,
        sections: Vec<ScreenSection>,
    ) -> Self {
        Self::from_screen(storage, Screen::from_sections(title, sections))
    }

    /// Builds the root from a pre-built screen.
    pub fn from_screen(storage: SharedStorage, main: Screen) -> Self {
        let mut root = Self { main, storage };
        root.rebind();
        root
    }

    /// Re-runs the binding walk over the current `main` tree.
    ///
    /// Needed after swapping `main` or appending nodes post-construction.
    /// Returns the number of leaves bound.
    pub fn rebind(&mut self) -> usize {
        bind(&mut self.main, &self.storage)
    }

    /// The storage port the tree is bound to.
    pub fn storage(&self) -> &SharedStorage {
        &self.storage
    }
}
