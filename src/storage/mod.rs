//! Storage port and the bundled backends.
//!
//! The settings tree never stores values itself. Every read and write on a
//! bound item is routed through an implementation of [`SettingsStorage`],
//! keyed by plain strings. The four storable kinds (bool, float, integer,
//! string) share one key namespace; reusing a key across incompatible
//! kinds is caller responsibility and yields kind-appropriate misses.
//!
//! ## Backends
//!
//! - [`memory`] - Map-backed storage, the canonical backend for tests and
//!   simple hosts
//! - [`file`] - TOML/JSON file-backed storage with backup-on-save

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// Map-backed storage.
pub mod memory;

/// File-backed storage (TOML/JSON).
pub mod file;

pub use memory::MemoryStorage;

/// Abstract key-value capability the tree binds against.
///
/// Each getter returns `None` when the key is absent (or holds a value of
/// an incompatible kind); absence is never an error. Each setter must be
/// immediately visible to subsequent gets (read-your-writes). No
/// transactional guarantees are required.
pub trait SettingsStorage {
    /// Reads a boolean value.
    fn get_bool(&self, key: &str) -> Option<bool>;
    /// Writes a boolean value.
    fn set_bool(&mut self, key: &str, value: bool);

    /// Reads a float value. Integer slots widen to float.
    fn get_float(&self, key: &str) -> Option<f64>;
    /// Writes a float value.
    fn set_float(&mut self, key: &str, value: f64);

    /// Reads an integer value.
    fn get_int(&self, key: &str) -> Option<i64>;
    /// Writes an integer value.
    fn set_int(&mut self, key: &str, value: i64);

    /// Reads a string value.
    fn get_string(&self, key: &str) -> Option<String>;
    /// Writes a string value.
    fn set_string(&mut self, key: &str, value: String);
}

/// Shared handle to a storage port.
///
/// The tree is single-threaded by contract; the handle is a plain
/// reference-counted cell, cloned into every bound leaf.
pub type SharedStorage = Rc<RefCell<dyn SettingsStorage>>;

/// Wraps a storage backend into a [`SharedStorage`] handle.
pub fn shared<S: SettingsStorage + 'static>(storage: S) -> SharedStorage {
    Rc::new(RefCell::new(storage))
}

/// A value kind storable behind the port.
///
/// Implemented for exactly the four primitive kinds. The trait routes a
/// generic item to the matching getter/setter pair on [`SettingsStorage`].
pub trait StorageValue: Clone {
    /// Reads a value of this kind from storage.
    fn load(storage: &dyn SettingsStorage, key: &str) -> Option<Self>;
    /// Writes a value of this kind to storage.
    fn store(storage: &mut dyn SettingsStorage, key: &str, value: Self);
}

impl StorageValue for bool {
    fn load(storage: &dyn SettingsStorage, key: &str) -> Option<Self> {
        storage.get_bool(key)
    }
    fn store(storage: &mut dyn SettingsStorage, key: &str, value: Self) {
        storage.set_bool(key, value);
    }
}

impl StorageValue for f64 {
    fn load(storage: &dyn SettingsStorage, key: &str) -> Option<Self> {
        storage.get_float(key)
    }
    fn store(storage: &mut dyn SettingsStorage, key: &str, value: Self) {
        storage.set_float(key, value);
    }
}

impl StorageValue for i64 {
    fn load(storage: &dyn SettingsStorage, key: &str) -> Option<Self> {
        storage.get_int(key)
    }
    fn store(storage: &mut dyn SettingsStorage, key: &str, value: Self) {
        storage.set_int(key, value);
    }
}

impl StorageValue for String {
    fn load(storage: &dyn SettingsStorage, key: &str) -> Option<Self> {
        storage.get_string(key)
    }
    fn store(storage: &mut dyn SettingsStorage, key: &str, value: Self) {
        storage.set_string(key, value);
    }
}

/// A stored value of one of the four storable kinds.
///
/// Serialized untagged, so a settings file is a flat table of plain
/// scalars. Variant order matters for deserialization: integers must be
/// tried before floats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredValue {
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    Text(String),
}

impl StoredValue {
    /// The slot as a boolean, if it holds one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StoredValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The slot as a float. Integer slots widen.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            StoredValue::Float(f) => Some(*f),
            StoredValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// The slot as an integer, if it holds one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            StoredValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The slot as a string, if it holds one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            StoredValue::Text(s) => Some(s),
            _ => None,
        }
    }
}
