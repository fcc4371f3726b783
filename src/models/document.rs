use serde::{Deserialize, Serialize};
use crate::models::block::{Block, BlockId, BlockType};

/// 某一时刻文档的完整副本，自动保存只读取快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSnapshot {
    pub generation: u64,
    pub blocks: Vec<Block>,
}

/// 块序列
///
/// 始终至少包含一个块。id 计数器属于文档本身，只在新建或加载文档时重置。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    blocks: Vec<Block>,
    next_id: u64,
    /// 每次结构或内容变化都会递增
    generation: u64,
}

impl Document {
    /// 新剧本：一个空的场景标题块
    pub fn new() -> Self {
        Document {
            blocks: vec![Block::new(BlockId(1), BlockType::SceneHeading, "")],
            next_id: 2,
            generation: 0,
        }
    }

    /// 使用已解析的块建立文档，id 从 1 开始重新编号
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        if blocks.is_empty() {
            return Document::new();
        }
        let blocks: Vec<Block> = blocks
            .into_iter()
            .enumerate()
            .map(|(i, b)| Block::new(BlockId(i as u64 + 1), b.block_type, b.text))
            .collect();
        let next_id = blocks.len() as u64 + 1;
        Document {
            blocks,
            next_id,
            generation: 0,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// 文档不变量保证至少一个块，此方法始终为 false
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| b.id == id)
    }

    /// 最后一个有效索引
    pub fn last_index(&self) -> usize {
        self.blocks.len().saturating_sub(1)
    }

    /// 分配一个新的 id
    pub fn allocate_id(&mut self) -> BlockId {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        id
    }

    /// 在 index 处插入新块（超出范围时追加到末尾），返回实际位置
    pub fn insert(&mut self, index: usize, block_type: BlockType, text: impl Into<String>) -> usize {
        let id = self.allocate_id();
        let at = index.min(self.blocks.len());
        self.blocks.insert(at, Block::new(id, block_type, text));
        self.touch();
        at
    }

    /// 插入一组块的副本，每个副本分配新 id
    pub fn insert_copies(&mut self, index: usize, copies: &[Block]) -> usize {
        let at = index.min(self.blocks.len());
        let fresh: Vec<Block> = copies
            .iter()
            .map(|b| {
                let id = self.allocate_id();
                Block::new(id, b.block_type, b.text.clone())
            })
            .collect();
        let count = fresh.len();
        self.blocks.splice(at..at, fresh);
        self.touch();
        count
    }

    /// 删除 index 处的块。只剩一个块时不删除。
    pub fn remove(&mut self, index: usize) -> Option<Block> {
        if self.blocks.len() <= 1 || index >= self.blocks.len() {
            return None;
        }
        let removed = self.blocks.remove(index);
        self.touch();
        Some(removed)
    }

    /// 按 id 删除一组块；删空后补一个空的动作块
    pub fn remove_ids(&mut self, ids: &[BlockId]) -> usize {
        let mut indices: Vec<usize> = ids.iter().filter_map(|id| self.index_of(*id)).collect();
        indices.sort_unstable();
        indices.dedup();
        // 从后往前删，前面的索引保持有效
        for &i in indices.iter().rev() {
            self.blocks.remove(i);
        }
        if self.blocks.is_empty() {
            let id = self.allocate_id();
            self.blocks.push(Block::new(id, BlockType::Action, ""));
        }
        if !indices.is_empty() {
            self.touch();
        }
        indices.len()
    }

    pub fn set_type(&mut self, index: usize, block_type: BlockType) -> bool {
        match self.blocks.get_mut(index) {
            Some(block) => {
                block.block_type = block_type;
                self.touch();
                true
            }
            None => false,
        }
    }

    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        match self.blocks.get_mut(index) {
            Some(block) => {
                block.text = text.into();
                self.touch();
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            generation: self.generation,
            blocks: self.blocks.clone(),
        }
    }

    fn touch(&mut self) {
        self.generation += 1;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
