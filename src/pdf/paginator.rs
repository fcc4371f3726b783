use std::collections::HashMap;
use std::fmt;
use serde::{Deserialize, Serialize};
use crate::models::{Block, BlockId};
use crate::pdf::print_profile::PrintProfile;

/// 块高度的来源。高度由宿主测量，这里只当作数值输入。
pub trait MeasureBlock {
    fn height(&self, block: &Block) -> f32;
}

/// 按 id 记录的测量结果，没有记录的块高度为 0
#[derive(Debug, Clone, Default)]
pub struct BlockHeights(HashMap<BlockId, f32>);

impl BlockHeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// 文本长度变化或视口缩放后由宿主更新
    pub fn set(&mut self, id: BlockId, height: f32) {
        self.0.insert(id, height);
    }

    pub fn remove(&mut self, id: BlockId) {
        self.0.remove(&id);
    }
}

impl FromIterator<(BlockId, f32)> for BlockHeights {
    fn from_iter<I: IntoIterator<Item = (BlockId, f32)>>(iter: I) -> Self {
        BlockHeights(iter.into_iter().collect())
    }
}

impl MeasureBlock for BlockHeights {
    fn height(&self, block: &Block) -> f32 {
        self.0.get(&block.id).copied().unwrap_or(0.0)
    }
}

impl<F> MeasureBlock for F
where
    F: Fn(&Block) -> f32,
{
    fn height(&self, block: &Block) -> f32 {
        self(block)
    }
}

/// 分页线：位于 `before_index` 处的块之前
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageBreak {
    pub before_index: usize,
    pub before_block: BlockId,
    /// 结束的页码（从 1 开始）
    pub page_ending: usize,
    pub page_starting: usize,
}

impl fmt::Display for PageBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PAGE {} END / PAGE {} START", self.page_ending, self.page_starting)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub breaks: Vec<PageBreak>,
    pub page_count: usize,
}

/// 贪心分页估算，只用于预览和导出参考，不修改块序列
pub struct Paginator {
    profile: PrintProfile,
}

impl Paginator {
    pub fn new(profile: PrintProfile) -> Self {
        Paginator { profile }
    }

    pub fn profile(&self) -> &PrintProfile {
        &self.profile
    }

    /// 每次几何变化都完整重算
    pub fn paginate<M: MeasureBlock + ?Sized>(&self, blocks: &[Block], measure: &M) -> Pagination {
        let capacity = self.profile.capacity();
        let mut filled = 0.0_f32;
        let mut page_count = 1;
        let mut breaks = Vec::new();

        for (index, block) in blocks.iter().enumerate() {
            let block_height = measure.height(block) + self.profile.block_spacing;
            if filled + block_height > capacity {
                breaks.push(PageBreak {
                    before_index: index,
                    before_block: block.id,
                    page_ending: page_count,
                    page_starting: page_count + 1,
                });
                page_count += 1;
                // 溢出的块成为新页的第一个块
                filled = block_height;
            } else {
                filled += block_height;
            }
        }

        Pagination { breaks, page_count }
    }
}
