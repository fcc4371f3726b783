//! 剧本存储接口
//!
//! 传输层由宿主实现（例如 WebDAV）。这里定义接口和错误类型，
//! 以及所有后端共同遵守的规则：写入时容器不存在则创建后重试一次，
//! 列表时容器不存在视为空列表并顺便创建容器。

pub mod fs_storage;
pub mod memory_storage;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use std::path::Path;
use crate::models::Conf;
use crate::utils::sanitize_file_stem;

pub use fs_storage::FsStorage;
pub use memory_storage::MemoryStorage;

/// 存储错误
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("剧本文件夹不存在")]
    ContainerMissing,

    #[error("文件不存在: {0}")]
    NotFound(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

/// 存储结果
pub type StorageResult<T> = Result<T, StorageError>;

/// 剧本列表中的一项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptEntry {
    /// 不含扩展名的文件名
    pub name: String,
    pub path: String,
}

#[async_trait]
pub trait ScriptStorage: Send + Sync {
    /// 列出容器中的剧本文件
    async fn list(&self) -> StorageResult<Vec<ScriptEntry>>;

    async fn read(&self, path: &str) -> StorageResult<String>;

    async fn write(&self, path: &str, text: &str) -> StorageResult<()>;

    /// 创建容器，已存在时也返回成功
    async fn ensure_container(&self) -> StorageResult<()>;

    /// 文件名对应的路径
    fn path_for(&self, file_name: &str) -> String;
}

/// 根据标题生成文件名：替换不安全字符，加上扩展名
pub fn file_name_for_title(title: &str, conf: &Conf) -> String {
    let title = title.trim();
    let title = if title.is_empty() { conf.default_title.as_str() } else { title };
    format!("{}.{}", sanitize_file_stem(title), conf.file_extension)
}

/// 在存储后端之上实现容错规则
pub struct ScriptLibrary<S: ScriptStorage> {
    storage: S,
    conf: Conf,
}

impl<S: ScriptStorage> ScriptLibrary<S> {
    pub fn new(storage: S, conf: Conf) -> Self {
        ScriptLibrary { storage, conf }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn conf(&self) -> &Conf {
        &self.conf
    }

    /// 列出剧本。容器不存在时创建容器并返回空列表。
    pub async fn list(&self) -> StorageResult<Vec<ScriptEntry>> {
        match self.storage.list().await {
            Ok(mut entries) => {
                let suffix = format!(".{}", self.conf.file_extension);
                entries.retain(|e| e.path.ends_with(&suffix));
                Ok(entries)
            }
            Err(StorageError::ContainerMissing) => {
                log::info!("script container missing, creating it");
                self.storage.ensure_container().await?;
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    pub async fn read(&self, path: &str) -> StorageResult<String> {
        self.storage.read(path).await
    }

    /// 写入。容器不存在时创建容器并重试一次。
    pub async fn write(&self, path: &str, text: &str) -> StorageResult<()> {
        match self.storage.write(path, text).await {
            Err(StorageError::ContainerMissing) => {
                log::warn!("container missing while writing {}, retrying once", path);
                self.storage.ensure_container().await?;
                self.storage.write(path, text).await
            }
            other => other,
        }
    }

    /// 按标题保存，返回写入的路径
    pub async fn save_titled(&self, title: &str, text: &str) -> StorageResult<String> {
        let path = self.storage.path_for(&file_name_for_title(title, &self.conf));
        self.write(&path, text).await?;
        log::info!("saved {} ({} bytes)", path, text.len());
        Ok(path)
    }
}

impl ScriptLibrary<FsStorage> {
    /// 剧本存放在 `base/<conf.container>` 下
    pub fn on_disk(base: impl AsRef<Path>, conf: Conf) -> Self {
        let storage = FsStorage::for_conf(base, &conf);
        ScriptLibrary::new(storage, conf)
    }
}

impl ScriptLibrary<MemoryStorage> {
    pub fn in_memory(conf: Conf) -> Self {
        let storage = MemoryStorage::for_conf(&conf);
        ScriptLibrary::new(storage, conf)
    }
}
