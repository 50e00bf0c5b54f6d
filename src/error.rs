//! Error types for the storage backends.
//!
//! The node model itself raises no errors: malformed trees are programmer
//! errors and fail fast. Errors only arise at the storage boundary when a
//! backend talks to the outside world.

use thiserror::Error;

/// Errors reported by the file-backed storage port.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The settings file extension maps to no known format.
    #[error("unsupported settings file extension: {extension:?}")]
    UnsupportedExtension {
        /// Extension as found on the path (may be empty).
        extension: String,
    },

    /// A value in the settings file is not one of the four storable kinds.
    #[error("unsupported value at {key:?}: expected bool, integer, float or string, got {actual}")]
    UnsupportedValue {
        /// Key under which the value was found.
        key: String,
        /// Textual rendering of the offending value.
        actual: String,
    },
}
