//! File-backed key-value store
//!
//! All keys live in one JSON object document. Every mutation rewrites the
//! whole document through a temporary file and a rename, so the file on disk
//! is always either the previous or the next complete state.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use ll_core::config::DEFAULT_STORE_FILE_NAME;
use ll_core::ports::{KeyValueStorePort, StoreError};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

type Document = BTreeMap<String, String>;

pub struct FileKeyValueStore {
    path: PathBuf,
    /// Last document successfully read from or written to disk. `None` until first access.
    cache: Mutex<Option<Document>>,
}

impl FileKeyValueStore {
    /// Create store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    /// Create store with the default file name inside `base_dir`
    pub fn with_defaults(base_dir: impl AsRef<Path>) -> Self {
        Self::new(base_dir.as_ref().join(DEFAULT_STORE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                StoreError::Unavailable(format!(
                    "create store dir failed: {}: {e}",
                    parent.display()
                ))
            })?;
        }
        Ok(())
    }

    /// Read the document from disk.
    ///
    /// A missing or blank file is an empty document. A file that does not
    /// parse is moved aside to `*.corrupt` and also treated as empty.
    async fn read_document(&self) -> Result<Document, StoreError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Document::new()),
            Err(e) => {
                return Err(StoreError::Unavailable(format!(
                    "read store failed: {}: {e}",
                    self.path.display()
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(Document::new());
        }

        match serde_json::from_str(&content) {
            Ok(document) => Ok(document),
            Err(e) => {
                let quarantine = self.path.with_extension("json.corrupt");
                warn!(
                    path = %self.path.display(),
                    quarantine = %quarantine.display(),
                    error = %e,
                    "store document unreadable, starting empty"
                );
                fs::rename(&self.path, &quarantine).await.map_err(|e| {
                    StoreError::Unavailable(format!(
                        "quarantine corrupt store failed: {}: {e}",
                        self.path.display()
                    ))
                })?;
                Ok(Document::new())
            }
        }
    }

    async fn atomic_write(&self, document: &Document) -> Result<(), StoreError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(document)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        let unavailable = |step: &str, e: std::io::Error| {
            StoreError::Unavailable(format!("{step} failed: {}: {e}", tmp_path.display()))
        };

        let mut file = fs::File::create(&tmp_path)
            .await
            .map_err(|e| unavailable("create temp store", e))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| unavailable("write temp store", e))?;
        file.sync_all()
            .await
            .map_err(|e| unavailable("sync temp store", e))?;
        drop(file);

        fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            StoreError::Unavailable(format!(
                "rename temp store to target failed: {} -> {}: {e}",
                tmp_path.display(),
                self.path.display()
            ))
        })?;

        Ok(())
    }

    /// Apply `change` to a copy of the document and persist it.
    ///
    /// The cached document is only replaced once the write succeeded, so a
    /// failed mutation leaves memory and disk at the previous state.
    async fn mutate<F>(&self, change: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Document) -> bool + Send,
    {
        let mut cache = self.cache.lock().await;
        let mut next = match cache.as_ref() {
            Some(document) => document.clone(),
            None => self.read_document().await?,
        };

        if !change(&mut next) {
            *cache = Some(next);
            return Ok(());
        }

        self.atomic_write(&next).await?;
        debug!(path = %self.path.display(), keys = next.len(), "store document written");
        *cache = Some(next);
        Ok(())
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut cache = self.cache.lock().await;
        if cache.is_none() {
            *cache = Some(self.read_document().await?);
        }
        Ok(cache.as_ref().and_then(|document| document.get(key).cloned()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.mutate(|document| {
            document.insert(key.to_string(), value.to_string()).as_deref() != Some(value)
        })
        .await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.mutate(|document| document.remove(key).is_some()).await
    }

    /// All keys disappear in one document write.
    async fn remove_many(&self, keys: &[&str]) -> Result<(), StoreError> {
        self.mutate(|document| {
            keys.iter()
                .fold(false, |changed, key| document.remove(*key).is_some() || changed)
        })
        .await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut cache = self.cache.lock().await;
        let empty = Document::new();
        self.atomic_write(&empty).await?;
        *cache = Some(empty);
        Ok(())
    }
}
