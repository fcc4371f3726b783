//! 宿主调用的 API
//!
//! 打开、新建、保存剧本，以及定时自动保存。界面层只需持有
//! `ScreenplaySession`，编辑操作通过 `session.editor_mut()` 进行。

use std::sync::Arc;
use std::time::Duration;
use chrono::{DateTime, Local};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use crate::editor::ScreenplayEditor;
use crate::models::{Block, Conf, Document, DocumentSnapshot, Margins};
use crate::parser::FountainParser;
use crate::pdf::{MeasureBlock, Pagination, Paginator};
use crate::serializer::FountainSerializer;
use crate::storage::{ScriptEntry, ScriptLibrary, ScriptStorage, StorageResult};

/// 简化的配置结构，用于宿主调用
#[derive(Debug, Clone)]
pub struct SimpleConf {
    pub page_size: String,
    pub margin_inches: f32,
    pub autosave_interval_sec: u64,
    pub default_title: String,
}

impl Default for SimpleConf {
    fn default() -> Self {
        let conf = Conf::default();
        Self {
            page_size: conf.page_size,
            margin_inches: conf.margins.top,
            autosave_interval_sec: conf.autosave_interval_sec,
            default_title: conf.default_title,
        }
    }
}

impl From<SimpleConf> for Conf {
    fn from(simple: SimpleConf) -> Self {
        let mut conf = Conf::default();
        conf.page_size = simple.page_size;
        conf.margins = Margins {
            top: simple.margin_inches,
            bottom: simple.margin_inches,
        };
        conf.autosave_interval_sec = simple.autosave_interval_sec;
        if !simple.default_title.trim().is_empty() {
            conf.default_title = simple.default_title;
        }
        conf
    }
}

/// 保存结果
#[derive(Debug, Clone)]
pub struct SaveResult {
    pub success: bool,
    pub message: String,
    pub file_path: Option<String>,
}

/// 当前打开的剧本
#[derive(Debug)]
pub struct ScreenplaySession {
    title: String,
    path: Option<String>,
    editor: ScreenplayEditor,
    last_saved: Option<DateTime<Local>>,
    saved_generation: Option<u64>,
}

impl ScreenplaySession {
    /// 新建剧本，标题为空时使用默认标题
    pub fn new(title: &str, conf: &Conf) -> Self {
        let title = title.trim();
        let title = if title.is_empty() { conf.default_title.clone() } else { title.to_string() };
        ScreenplaySession {
            title,
            path: None,
            editor: ScreenplayEditor::new(),
            last_saved: None,
            saved_generation: None,
        }
    }

    /// 读取并解析一个剧本文件
    pub async fn open<S: ScriptStorage>(library: &ScriptLibrary<S>, entry: &ScriptEntry) -> StorageResult<Self> {
        let text = library.read(&entry.path).await?;
        let editor = ScreenplayEditor::from_fountain(&text);
        log::info!("opened {} with {} blocks", entry.path, editor.blocks().len());
        let generation = editor.document().generation();
        Ok(ScreenplaySession {
            title: entry.name.clone(),
            path: Some(entry.path.clone()),
            editor,
            last_saved: None,
            saved_generation: Some(generation),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn editor(&self) -> &ScreenplayEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut ScreenplayEditor {
        &mut self.editor
    }

    pub fn last_saved(&self) -> Option<DateTime<Local>> {
        self.last_saved
    }

    /// 最近一次保存时间，格式 HH:MM；从未保存时为空
    pub fn last_saved_display(&self) -> String {
        self.last_saved
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    /// 自上次保存（或打开）以来是否有修改
    pub fn is_dirty(&self) -> bool {
        self.saved_generation != Some(self.editor.document().generation())
    }

    /// 保存所需的一致快照：标题和整个块序列
    pub fn save_snapshot(&self) -> (String, DocumentSnapshot) {
        (self.title.clone(), self.editor.snapshot())
    }

    /// 该版本或更新的版本是否已经保存过
    pub fn is_saved_through(&self, generation: u64) -> bool {
        self.saved_generation.map_or(false, |saved| saved >= generation)
    }

    fn record_saved(&mut self, title: &str, path: String, generation: u64) {
        // 较旧的写入完成得晚时不回退保存状态
        if self.is_saved_through(generation) {
            return;
        }
        if self.title.trim().is_empty() {
            self.title = title.to_string();
        }
        self.path = Some(path);
        self.last_saved = Some(Local::now());
        self.saved_generation = Some(generation);
    }

    pub async fn save<S: ScriptStorage>(&mut self, library: &ScriptLibrary<S>) -> SaveResult {
        let (title, snapshot) = self.save_snapshot();
        let title = effective_title(&title, library.conf());
        match write_snapshot(library, &title, &snapshot).await {
            Ok(path) => {
                self.record_saved(&title, path.clone(), snapshot.generation);
                SaveResult {
                    success: true,
                    message: "保存成功".to_string(),
                    file_path: Some(path),
                }
            }
            Err(e) => {
                log::warn!("save failed: {}", e);
                SaveResult {
                    success: false,
                    message: format!("保存失败: {}", e),
                    file_path: None,
                }
            }
        }
    }

    /// 以当前纸张配置估算分页
    pub fn paginate<M: MeasureBlock + ?Sized>(&self, conf: &Conf, measure: &M) -> Pagination {
        Paginator::new(conf.print_profile()).paginate(self.editor.blocks(), measure)
    }
}

fn effective_title(title: &str, conf: &Conf) -> String {
    let title = title.trim();
    if title.is_empty() {
        conf.default_title.clone()
    } else {
        title.to_string()
    }
}

async fn write_snapshot<S: ScriptStorage>(
    library: &ScriptLibrary<S>,
    title: &str,
    snapshot: &DocumentSnapshot,
) -> StorageResult<String> {
    let content = FountainSerializer::new().serialize(&snapshot.blocks);
    library.save_titled(title, &content).await
}

/// 按配置的间隔启动自动保存，间隔为 0 时不启动
pub fn spawn_autosave<S>(
    session: Arc<Mutex<ScreenplaySession>>,
    library: Arc<ScriptLibrary<S>>,
) -> Option<JoinHandle<()>>
where
    S: ScriptStorage + 'static,
{
    let every = library.conf().autosave_interval()?;
    spawn_autosave_every(session, library, every)
}

/// 定时自动保存
///
/// 每次只在持锁期间取快照，序列化和写入都在锁外进行；
/// 文档自上次保存后没有变化时跳过。`every` 为零时不启动。
pub fn spawn_autosave_every<S>(
    session: Arc<Mutex<ScreenplaySession>>,
    library: Arc<ScriptLibrary<S>>,
    every: Duration,
) -> Option<JoinHandle<()>>
where
    S: ScriptStorage + 'static,
{
    if every.is_zero() {
        log::info!("autosave disabled");
        return None;
    }
    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // 第一次 tick 立即返回
        ticker.tick().await;
        loop {
            ticker.tick().await;

            let (title, snapshot) = {
                let guard = session.lock().await;
                if !guard.is_dirty() {
                    continue;
                }
                guard.save_snapshot()
            };
            let title = effective_title(&title, library.conf());

            // 取快照之后可能已经有更新的手动保存
            if session.lock().await.is_saved_through(snapshot.generation) {
                continue;
            }

            match write_snapshot(&library, &title, &snapshot).await {
                Ok(path) => {
                    log::debug!("autosaved {} (generation {})", path, snapshot.generation);
                    session.lock().await.record_saved(&title, path, snapshot.generation);
                }
                Err(e) => log::warn!("autosave failed: {}", e),
            }
        }
    }))
}

/// 列出剧本
pub async fn list_screenplays<S: ScriptStorage>(library: &ScriptLibrary<S>) -> StorageResult<Vec<ScriptEntry>> {
    library.list().await
}

/// 解析 Fountain 文本，返回块序列的 JSON
pub fn parse_fountain_text(text: &str) -> String {
    let parsed = FountainParser::new().parse(text);
    serde_json::to_string(&parsed.blocks).unwrap_or_else(|_| "[]".to_string())
}

/// 块序列 JSON -> Fountain 文本
pub fn blocks_json_to_fountain(json: &str) -> Result<String, serde_json::Error> {
    let blocks: Vec<Block> = serde_json::from_str(json)?;
    let document = Document::from_blocks(blocks);
    Ok(FountainSerializer::new().serialize(document.blocks()))
}
