//! File-based key-value storage
//!
//! Each slot is a file named `<key>.slot` inside a single directory. The
//! directory is created lazily on first write.

use anyhow::{bail, Context};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use gym_core::ports::KeyValueStoragePort;

pub const SLOT_EXTENSION: &str = "slot";

pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn slot_path(&self, key: &str) -> anyhow::Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            bail!("Invalid storage key: {key:?}");
        }
        Ok(self.base_dir.join(format!("{key}.{SLOT_EXTENSION}")))
    }

    async fn ensure_base_dir(&self) -> anyhow::Result<()> {
        fs::create_dir_all(&self.base_dir)
            .await
            .with_context(|| format!("Failed to create storage dir {}", self.base_dir.display()))
    }
}

#[async_trait]
impl KeyValueStoragePort for FileKeyValueStore {
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("Failed to read slot {key}")),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let path = self.slot_path(key)?;
        self.ensure_base_dir().await?;

        let mut file = fs::File::create(&path)
            .await
            .with_context(|| format!("Failed to create slot file {}", path.display()))?;

        file.write_all(value.as_bytes())
            .await
            .with_context(|| format!("Failed to write slot {key}"))?;

        file.sync_all()
            .await
            .with_context(|| format!("Failed to sync slot {key}"))?;

        debug!(key, bytes = value.len(), "storage slot written");
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        let path = self.slot_path(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Failed to remove slot {key}")),
        }
    }

    async fn clear(&self) -> anyhow::Result<()> {
        let mut entries = match fs::read_dir(&self.base_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e).context("Failed to list storage dir"),
        };

        let mut removed = 0usize;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some(SLOT_EXTENSION) {
                fs::remove_file(&path)
                    .await
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
                removed += 1;
            }
        }

        debug!(removed, "storage cleared");
        Ok(())
    }
}
