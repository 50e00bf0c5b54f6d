//! # settree
//!
//! A declarative settings-tree library with pluggable key-value storage.
//!
//! `settree` turns a nested description of configuration screens, sections
//! and typed controls (switches, sliders, option groups, text fields) into
//! an addressable in-memory tree. Every value-bearing leaf is bound to a
//! storage backend, and each mutation writes through to storage before
//! notifying observers.
//!
//! ## Features
//!
//! - Screen / section / item hierarchy with arbitrary nesting depth
//! - Typed controls: `Switch`, `Slider`, `TextField` and single-choice
//!   option groups (`OptionsSection`, `OptionsButton`)
//! - Two interchangeable authoring styles: nested builder closures and
//!   incremental `with`/`include` composition
//! - Pluggable storage behind the [`SettingsStorage`] trait, with
//!   map-backed and file-backed (TOML/JSON) implementations included
//! - Synchronous change notification per item, fired after the write
//!
//! ## Quick Start
//!
//! ```rust
//! use settree::{MemoryStorage, Section, SettingsRoot, Slider, Switch, shared};
//!
//! let storage = shared(MemoryStorage::new());
//! let mut settings = SettingsRoot::build(storage, "Intelligent Home", || {
//!     vec![
//!         Section::build("Lights", || {
//!             vec![
//!                 Switch::new("light-central", "Central Switch", false).into(),
//!                 Slider::new("brightness", "Brightness", 50.0).into(),
//!             ]
//!         })
//!         .into(),
//!     ]
//! });
//!
//! // Writes go through the bound storage.
//! let section = settings.main.sections[0].as_section_mut().unwrap();
//! section.items[0].as_switch_mut().unwrap().set_value(true);
//! assert_eq!(settings.storage().borrow().get_bool("light-central"), Some(true));
//! ```
//!
//! ## Modules
//!
//! - [`tree`] - Settings node model (screens, sections, items, options)
//! - [`storage`] - Storage port and the bundled backends
//! - [`bind`] - Storage binding walk over a settings tree
//! - [`root`] - Top-level aggregate owning the tree and its storage
//! - [`error`] - Error types for the storage backends

#[macro_use]
extern crate log;

/// Storage binding walk over a settings tree.
pub mod bind;

/// Error types for the storage backends.
pub mod error;

/// Top-level aggregate owning the tree and its storage.
pub mod root;

/// Storage port and the bundled backends.
pub mod storage;

/// Settings node model: screens, sections, items and options.
pub mod tree;

// Re-export main types for convenience
pub use bind::bind;
pub use error::StorageError;
pub use root::SettingsRoot;
pub use storage::{
    MemoryStorage, SettingsStorage, SharedStorage, StorageValue, StoredValue, shared,
};
pub use storage::file::FileStorage;
pub use tree::item::{Item, Slider, Switch, TextField};
pub use tree::options::{OptionItem, OptionsButton, OptionsSection};
pub use tree::screen::{Screen, ScreenSection};
pub use tree::section::{Section, SettingsEntry};
