use serde::{Deserialize, Serialize};
use std::fmt;

/// 块的唯一标识，由文档级计数器分配，删除后不复用
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 块类型，顺序固定（Tab 循环依赖此顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    SceneHeading,
    Action,
    Character,
    Parenthetical,
    Dialogue,
    Transition,
    General,
}

impl BlockType {
    pub const ALL: [BlockType; 7] = [
        BlockType::SceneHeading,
        BlockType::Action,
        BlockType::Character,
        BlockType::Parenthetical,
        BlockType::Dialogue,
        BlockType::Transition,
        BlockType::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::SceneHeading => "scene-heading",
            BlockType::Action => "action",
            BlockType::Character => "character",
            BlockType::Parenthetical => "parenthetical",
            BlockType::Dialogue => "dialogue",
            BlockType::Transition => "transition",
            BlockType::General => "general",
        }
    }

    pub fn from_str_name(name: &str) -> Option<BlockType> {
        BlockType::ALL.iter().copied().find(|t| t.as_str() == name)
    }

    /// 在固定枚举中的位置
    pub fn position(&self) -> usize {
        BlockType::ALL.iter().position(|t| t == self).unwrap_or(0)
    }

    /// Tab：循环到下一个类型
    pub fn cycled(&self) -> BlockType {
        BlockType::ALL[(self.position() + 1) % BlockType::ALL.len()]
    }

    /// Enter：在当前块之后新建块时使用的类型
    pub fn next_on_confirm(&self) -> BlockType {
        match self {
            BlockType::SceneHeading => BlockType::Action,
            BlockType::Action => BlockType::Character,
            BlockType::Character => BlockType::Dialogue,
            BlockType::Dialogue => BlockType::Action,
            BlockType::Parenthetical => BlockType::Dialogue,
            BlockType::Transition | BlockType::General => BlockType::Action,
        }
    }

    /// 编辑器中显示的短标签
    pub fn short_label(&self) -> &'static str {
        match self {
            BlockType::SceneHeading => "场景",
            BlockType::Action => "动作",
            BlockType::Character => "角色",
            BlockType::Parenthetical => "括注",
            BlockType::Dialogue => "对白",
            BlockType::Transition => "转场",
            BlockType::General => "一般",
        }
    }

    /// 空块的输入提示
    pub fn hint(&self) -> &'static str {
        match self {
            BlockType::SceneHeading => "INT./EXT. 场所 - 时间",
            BlockType::Action => "动作描述",
            BlockType::Character => "角色名称（大写）",
            BlockType::Parenthetical => "（语气／动作）",
            BlockType::Dialogue => "角色台词",
            BlockType::Transition => "转场效果",
            BlockType::General => "一般文字",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// 原始文本，大小写和标记只在序列化时处理
    pub text: String,
}

impl Block {
    pub fn new(id: BlockId, block_type: BlockType, text: impl Into<String>) -> Self {
        Block {
            id,
            block_type,
            text: text.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
