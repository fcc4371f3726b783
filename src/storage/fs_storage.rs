use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use crate::models::Conf;
use crate::storage::{ScriptEntry, ScriptStorage, StorageError, StorageResult};

/// 本地目录作为剧本容器
pub struct FsStorage {
    root: PathBuf,
}

impl FsStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsStorage { root: root.into() }
    }

    /// `base` 下按配置的文件夹名存放剧本
    pub fn for_conf(base: impl AsRef<Path>, conf: &Conf) -> Self {
        FsStorage::new(base.as_ref().join(&conf.container))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    async fn container_exists(&self) -> bool {
        tokio::fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}

#[async_trait]
impl ScriptStorage for FsStorage {
    async fn list(&self) -> StorageResult<Vec<ScriptEntry>> {
        let mut dir = match tokio::fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(StorageError::ContainerMissing),
            Err(e) => return Err(e.into()),
        };

        let mut entries = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            if !entry.file_type().await?.is_file() {
                continue;
            }
            let path = entry.path();
            let name = match path.file_stem().and_then(|s| s.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };
            entries.push(ScriptEntry {
                name,
                path: path.to_string_lossy().to_string(),
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    async fn read(&self, path: &str) -> StorageResult<String> {
        match tokio::fs::read_to_string(path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StorageError::NotFound(path.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, path: &str, text: &str) -> StorageResult<()> {
        if !self.container_exists().await {
            return Err(StorageError::ContainerMissing);
        }
        tokio::fs::write(path, text).await?;
        Ok(())
    }

    async fn ensure_container(&self) -> StorageResult<()> {
        tokio::fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    fn path_for(&self, file_name: &str) -> String {
        self.root.join(file_name).to_string_lossy().to_string()
    }
}
