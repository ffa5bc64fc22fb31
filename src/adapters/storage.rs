use crate::core::BirthDateStore;
use crate::utils::error::{DogAgeError, Result};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_STORAGE_KEY: &str = "dogBirth";
pub const DEFAULT_STORAGE_PATH: &str = "./.dog-age/storage.json";

/// Key/value file on disk holding one JSON object of string entries.
/// Each instance reads and writes a single key.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
    key: String,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "storage.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn read_entries(&self) -> Result<BTreeMap<String, String>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl BirthDateStore for LocalStorage {
    async fn load(&self) -> Result<Option<String>> {
        let mut entries = self.read_entries().await?;
        Ok(entries.remove(&self.key))
    }

    async fn save(&self, value: &str) -> Result<()> {
        // 保留同一檔案內的其他鍵；檔案毀損時整個重寫
        let mut entries = match self.read_entries().await {
            Ok(entries) => entries,
            Err(DogAgeError::SerializationError(e)) => {
                tracing::warn!(
                    "⚠️ Replacing corrupt storage file {}: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(self.key.clone(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        // 先寫暫存檔再改名，寫到一半中斷也不會留下損毀的檔案
        let data = serde_json::to_vec_pretty(&entries)?;
        let temp_path = self.temp_path();
        tokio::fs::write(&temp_path, data).await?;
        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(e.into());
        }
        tracing::debug!("Wrote {} to {}", self.key, self.path.display());
        Ok(())
    }
}
