use std::collections::BTreeMap;
use async_trait::async_trait;
use tokio::sync::Mutex;
use crate::models::Conf;
use crate::storage::{ScriptEntry, ScriptStorage, StorageError, StorageResult};

#[derive(Debug, Default)]
struct MemoryState {
    container_exists: bool,
    files: BTreeMap<String, String>,
    write_attempts: usize,
    /// 设置后所有写入都返回该状态码
    fail_status: Option<u16>,
}

/// 内存中的剧本容器，路径形如 `/<container>/<file>`
pub struct MemoryStorage {
    container: String,
    state: Mutex<MemoryState>,
}

impl MemoryStorage {
    /// 容器尚不存在
    pub fn new(container: impl Into<String>) -> Self {
        MemoryStorage {
            container: container.into(),
            state: Mutex::new(MemoryState::default()),
        }
    }

    /// 使用配置中的文件夹名，容器尚不存在
    pub fn for_conf(conf: &Conf) -> Self {
        MemoryStorage::new(conf.container.as_str())
    }

    /// 容器已经存在
    pub fn with_container(container: impl Into<String>) -> Self {
        MemoryStorage {
            container: container.into(),
            state: Mutex::new(MemoryState {
                container_exists: true,
                ..MemoryState::default()
            }),
        }
    }

    pub async fn container_exists(&self) -> bool {
        self.state.lock().await.container_exists
    }

    pub async fn write_attempts(&self) -> usize {
        self.state.lock().await.write_attempts
    }

    pub async fn fail_writes_with(&self, status: Option<u16>) {
        self.state.lock().await.fail_status = status;
    }

    pub async fn file(&self, path: &str) -> Option<String> {
        self.state.lock().await.files.get(path).cloned()
    }

    /// 直接放入一个文件，容器不存在时一并创建
    pub async fn insert(&self, path: &str, text: &str) {
        let mut state = self.state.lock().await;
        state.container_exists = true;
        state.files.insert(path.to_string(), text.to_string());
    }
}

#[async_trait]
impl ScriptStorage for MemoryStorage {
    async fn list(&self) -> StorageResult<Vec<ScriptEntry>> {
        let state = self.state.lock().await;
        if !state.container_exists {
            return Err(StorageError::ContainerMissing);
        }
        Ok(state
            .files
            .keys()
            .map(|path| {
                let file = path.rsplit('/').next().unwrap_or(path);
                let name = match file.rsplit_once('.') {
                    Some((stem, _)) => stem.to_string(),
                    None => file.to_string(),
                };
                ScriptEntry {
                    name,
                    path: path.clone(),
                }
            })
            .collect())
    }

    async fn read(&self, path: &str) -> StorageResult<String> {
        self.state
            .lock()
            .await
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(path.to_string()))
    }

    async fn write(&self, path: &str, text: &str) -> StorageResult<()> {
        let mut state = self.state.lock().await;
        state.write_attempts += 1;
        if let Some(status) = state.fail_status {
            return Err(StorageError::Status(status));
        }
        if !state.container_exists {
            return Err(StorageError::ContainerMissing);
        }
        state.files.insert(path.to_string(), text.to_string());
        Ok(())
    }

    async fn ensure_container(&self) -> StorageResult<()> {
        self.state.lock().await.container_exists = true;
        Ok(())
    }

    fn path_for(&self, file_name: &str) -> String {
        format!("/{}/{}", self.container, file_name)
    }
}
