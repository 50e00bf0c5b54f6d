use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::Context;

use crate::error::StorageError;
use crate::storage::{MemoryStorage, SettingsStorage, StoredValue};

/// File format of a settings file, selected by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

fn format_for(path: &Path) -> Result<Format, StorageError> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_owned();
    match extension.as_str() {
        "toml" | "tml" => Ok(Format::Toml),
        "json" => Ok(Format::Json),
        _ => Err(StorageError::UnsupportedExtension { extension }),
    }
}

/// File-backed storage port.
///
/// Keeps all slots in memory and persists them as a flat TOML or JSON
/// table, selected by the file extension. Writes are collected in memory
/// and flushed by [`save`](FileStorage::save); the previous file is copied
/// to a timestamped backup before being replaced.
#[derive(Debug, Clone)]
pub struct FileStorage {
    inner: MemoryStorage,
    path: PathBuf,
    needs_save: bool,
}

impl FileStorage {
    /// Loads storage from `path`.
    ///
    /// A missing or empty file yields an empty storage bound to the same
    /// path.
    ///
    /// # Errors
    ///
    /// Returns errors when the extension is unknown, the file cannot be
    /// read, or it contains values outside the four storable kinds.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let format = format_for(path)?;

        let mut values = BTreeMap::new();
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            if !content.trim().is_empty() {
                values = parse(&content, format)
                    .with_context(|| format!("Failed to parse {}", path.display()))?;
            }
            debug!("loaded {} slots from {}", values.len(), path.display());
        }

        Ok(Self {
            inner: MemoryStorage::from_values(values),
            path: path.to_path_buf(),
            needs_save: false,
        })
    }

    /// Path the storage persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether there are unsaved changes.
    pub fn needs_save(&self) -> bool {
        self.needs_save
    }

    /// Persists pending changes, backing up the previous file first.
    ///
    /// Does nothing when no change is pending.
    ///
    /// # Errors
    ///
    /// Returns errors when serialization or file I/O fails.
    pub fn save(&mut self) -> anyhow::Result<()> {
        if !self.needs_save {
            return Ok(());
        }
        let format = format_for(&self.path)?;

        let content = match format {
            Format::Toml => toml::to_string_pretty(self.inner.values())?,
            Format::Json => serde_json::to_string_pretty(self.inner.values())?,
        };

        if self.path.exists() {
            let ext = self
                .path
                .extension()
                .and_then(|s| s.to_str())
                .unwrap_or("");
            let stamp = SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)?
                .as_secs();
            let backup_path = self.path.with_extension(format!("bk-{stamp}.{ext}"));
            fs::copy(&self.path, &backup_path)
                .with_context(|| format!("Failed to back up {}", self.path.display()))?;
            info!("backed up previous settings to {}", backup_path.display());
        }

        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        self.needs_save = false;
        info!("saved settings to {}", self.path.display());
        Ok(())
    }
}

fn parse(content: &str, format: Format) -> anyhow::Result<BTreeMap<String, StoredValue>> {
    let mut values = BTreeMap::new();
    match format {
        Format::Toml => {
            let table: toml::Table = toml::from_str(content)?;
            for (key, value) in table {
                values.insert(key.clone(), from_toml(&key, &value)?);
            }
        }
        Format::Json => {
            let object: serde_json::Map<String, serde_json::Value> =
                serde_json::from_str(content)?;
            for (key, value) in object {
                values.insert(key.clone(), from_json(&key, &value)?);
            }
        }
    }
    Ok(values)
}

fn from_toml(key: &str, value: &toml::Value) -> Result<StoredValue, StorageError> {
    match value {
        toml::Value::Boolean(b) => Ok(StoredValue::Bool(*b)),
        toml::Value::Integer(i) => Ok(StoredValue::Int(*i)),
        toml::Value::Float(f) => Ok(StoredValue::Float(*f)),
        toml::Value::String(s) => Ok(StoredValue::Text(s.clone())),
        other => Err(StorageError::UnsupportedValue {
            key: key.to_owned(),
            actual: other.to_string(),
        }),
    }
}

fn from_json(key: &str, value: &serde_json::Value) -> Result<StoredValue, StorageError> {
    match value {
        serde_json::Value::Bool(b) => Ok(StoredValue::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(StoredValue::Int(i))
            } else if let Some(f) = n.as_f64() {
                Ok(StoredValue::Float(f))
            } else {
                Err(StorageError::UnsupportedValue {
                    key: key.to_owned(),
                    actual: n.to_string(),
                })
            }
        }
        serde_json::Value::String(s) => Ok(StoredValue::Text(s.clone())),
        other => Err(StorageError::UnsupportedValue {
            key: key.to_owned(),
            actual: other.to_string(),
        }),
    }
}

impl SettingsStorage for FileStorage {
    fn get_bool(&self, key: &str) -> Option<bool> {
        self.inner.get_bool(key)
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.inner.set_bool(key, value);
        self.needs_save = true;
    }

    fn get_float(&self, key: &str) -> Option<f64> {
        self.inner.get_float(key)
    }

    fn set_float(&mut self, key: &str, value: f64) {
        self.inner.set_float(key, value);
        self.needs_save = true;
    }

    fn get_int(&self, key: &str) -> Option<i64> {
        self.inner.get_int(key)
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.inner.set_int(key, value);
        self.needs_save = true;
    }

    fn get_string(&self, key: &str) -> Option<String> {
        self.inner.get_string(key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.inner.set_string(key, value);
        self.needs_save = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut storage = FileStorage::load(&path).unwrap();
        storage.set_bool("enabled", true);
        storage.set_float("brightness", 98.9);
        storage.set_int("tariff", 2);
        storage.set_string("name", "home".to_owned());
        storage.save().unwrap();

        let reloaded = FileStorage::load(&path).unwrap();
        assert_eq!(reloaded.get_bool("enabled"), Some(true));
        assert_eq!(reloaded.get_float("brightness"), Some(98.9));
        assert_eq!(reloaded.get_int("tariff"), Some(2));
        assert_eq!(reloaded.get_string("name"), Some("home".to_owned()));
    }

    #[test]
    fn test_round_trip_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let mut storage = FileStorage::load(&path).unwrap();
        storage.set_int("tariff", 3);
        storage.save().unwrap();

        let reloaded = FileStorage::load(&path).unwrap();
        assert_eq!(reloaded.get_int("tariff"), Some(3));
    }

    #[test]
    fn test_clean_store_saves_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut storage = FileStorage::load(&path).unwrap();
        storage.save().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_save_backs_up_previous_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");

        let mut storage = FileStorage::load(&path).unwrap();
        storage.set_bool("enabled", true);
        storage.save().unwrap();

        storage.set_bool("enabled", false);
        storage.save().unwrap();

        let backups = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().contains("bk-"))
            .count();
        assert_eq!(backups, 1);
    }

    #[test]
    fn test_unsupported_extension() {
        let err = FileStorage::load("settings.yaml").unwrap_err();
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_rejects_nested_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[nested]\nkey = 1\n").unwrap();

        assert!(FileStorage::load(&path).is_err());
    }
}
