pub mod models;
pub mod utils;
pub mod parser;
pub mod serializer;
pub mod pdf;
pub mod editor;
pub mod storage;
pub mod api;

pub use models::{
    Block,
    BlockId,
    BlockType,
    Document,
    DocumentSnapshot,
    ScreenplayProperties,
    Conf,
    Margins
};

pub use parser::{
    FountainParser,
    ParseOutput
};

pub use serializer::FountainSerializer;

pub use pdf::{
    BlockHeights,
    MeasureBlock,
    PageBreak,
    Pagination,
    Paginator,
    PrintProfile
};

pub use editor::{
    ScreenplayEditor,
    Selection,
    SelectionState,
    ToggleIntent
};

pub use storage::{
    ScriptEntry,
    ScriptLibrary,
    ScriptStorage,
    StorageError,
    StorageResult,
    FsStorage,
    MemoryStorage,
    file_name_for_title
};

pub use api::{
    SimpleConf,
    SaveResult,
    ScreenplaySession,
    spawn_autosave,
    spawn_autosave_every,
    list_screenplays,
    parse_fountain_text,
    blocks_json_to_fountain
};

/// 解析Fountain格式文本
///
/// # Arguments
///
/// * `script` - Fountain格式的剧本文本
///
/// # Returns
///
/// 非空的块序列，id 从 1 开始
pub fn parse(script: &str) -> Vec<Block> {
    FountainParser::new().parse(script).blocks
}

/// 块序列转换为Fountain文本
pub fn serialize(blocks: &[Block]) -> String {
    FountainSerializer::new().serialize(blocks)
}
