//! Persistence for the plugin settings blob.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use kana_core::settings::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("settings I/O error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// Load/save of the raw settings blob. Merging over defaults happens in the
/// caller.
pub trait SettingsStore {
    /// The saved blob, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<String>, StoreError>;

    fn save(&mut self, blob: &str) -> Result<(), StoreError>;
}

/// Settings kept in a TOML file (`data.toml` in the plugin directory).
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub const FILE_NAME: &'static str = "data.toml";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<dir>/data.toml`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(Self::FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Atomic write: write to .tmp then rename.
    fn save(&mut self, blob: &str) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("tmp");
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    blob: Option<String>,
}

impl MemorySettingsStore {
    pub fn with_blob(blob: &str) -> Self {
        Self {
            blob: Some(blob.to_string()),
        }
    }

    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> Result<(), StoreError> {
        self.blob = Some(blob.to_string());
        Ok(())
    }
}
