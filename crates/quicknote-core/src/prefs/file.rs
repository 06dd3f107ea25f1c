use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::Preferences;
use crate::error::{Error, Result};

/// Preferences persisted as a single JSON object file.
///
/// Each preferences name maps to its own `<name>.json` file inside the data
/// directory. The file is re-read on every `get` so separate handles on the
/// same file observe each other's writes. A file that no longer parses is
/// moved aside to `<name>.json.corrupt` by the next `set`.
#[derive(Debug, Clone)]
pub struct FilePreferences {
    path: PathBuf,
}

impl FilePreferences {
    /// Open the preferences file `<name>.json` under `dir`.
    pub fn open(dir: impl AsRef<Path>, name: &str) -> Self {
        Self::at_path(dir.as_ref().join(format!("{name}.json")))
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    /// Current contents for a write. An unparseable file is renamed aside so
    /// the write starts from an empty object.
    fn read_for_update(&self) -> Result<BTreeMap<String, String>> {
        match self.read_all() {
            Err(Error::Serialization(error)) => {
                let backup = self.corrupt_path();
                tracing::warn!(
                    "Preferences file {} is corrupted ({error}), moving it to {}",
                    self.path.display(),
                    backup.display()
                );
                std::fs::rename(&self.path, &backup)?;
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn corrupt_path(&self) -> PathBuf {
        self.path.with_extension("json.corrupt")
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let serialized = serde_json::to_string_pretty(values)?;
        let tmp_path = self.path.with_extension("json.tmp");
        let mut file = File::create(&tmp_path)?;
        file.write_all(serialized.as_bytes())?;
        file.sync_all()?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl Preferences for FilePreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut values = self.read_for_update()?;
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)?;
        tracing::debug!("Wrote `{key}` to {}", self.path.display());
        Ok(())
    }
}
