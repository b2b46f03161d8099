use crate::store::{
    KeyValueStore,
    error::{Result as StoreResult, StoreError},
};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Key-value store persisted as a flat JSON object on disk.
///
/// The whole map is held in memory and rewritten on every mutation.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    backup: Option<PathBuf>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// - missing file: empty store (first launch)
    /// - unparseable file: backed up as `<name>.corrupted.<timestamp>`, empty store
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if !path.exists() {
            info!("No session store at {path:?} (first launch)");
            return Ok(Self {
                path,
                entries: BTreeMap::new(),
                backup: None,
            });
        }

        let contents =
            fs::read_to_string(&path).map_err(|e| StoreError::file_read(path.clone(), e))?;

        match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(entries) => {
                debug!("Loaded session store with {} entries", entries.len());
                Ok(Self {
                    path,
                    entries,
                    backup: None,
                })
            }
            Err(e) => {
                warn!("Session store corrupted at {path:?}: {e}");
                let backup = backup_corrupted(&path)?;
                Ok(Self {
                    path,
                    entries: BTreeMap::new(),
                    backup: Some(backup),
                })
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where a corrupted file was moved when this store was opened.
    pub fn backup_path(&self) -> Option<&Path> {
        self.backup.as_deref()
    }

    /// Write the map with the temp-file, fsync, rename sequence.
    fn persist(&self) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| StoreError::dir_creation(dir.clone(), e))?;

        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "session.json".to_string());
        let temp_path = dir.join(format!("{file_name}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(&self.entries)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path.clone(), self.path.clone(), e)
        })?;

        debug!("Persisted session store ({} entries)", self.entries.len());
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> StoreResult<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> StoreResult<()> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.persist() {
            self.entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}

/// Rename a corrupted store out of the way, keeping it for inspection.
fn backup_corrupted(path: &Path) -> StoreResult<PathBuf> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "session.json".to_string());
    let timestamp = chrono::Utc::now().format(DATE_FORMAT);
    let backup_path = path.with_file_name(format!("{file_name}.corrupted.{timestamp}"));

    fs::rename(path, &backup_path).map_err(StoreError::backup_failed)?;

    warn!("Backed up corrupted session store to {backup_path:?}");
    Ok(backup_path)
}
