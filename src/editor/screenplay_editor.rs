use crate::editor::selection::{Selection, SelectionState};
use crate::models::{Block, BlockId, BlockType, Document, DocumentSnapshot};
use crate::parser::FountainParser;
use crate::serializer::FountainSerializer;

/// 块文档编辑器
///
/// 持有文档、焦点、选择状态和剪贴板。所有操作都不会失败：
/// 非法请求（删除最后一个块、粘贴空剪贴板等）是无操作，索引越界时夹到有效范围。
#[derive(Debug, Clone)]
pub struct ScreenplayEditor {
    document: Document,
    focused: Option<usize>,
    selection: Selection,
    clipboard: Vec<Block>,
}

impl ScreenplayEditor {
    /// 新剧本
    pub fn new() -> Self {
        Self::with_document(Document::new())
    }

    pub fn with_document(document: Document) -> Self {
        ScreenplayEditor {
            document,
            focused: Some(0),
            selection: Selection::new(),
            clipboard: Vec::new(),
        }
    }

    /// 解析 Fountain 文本打开文档
    pub fn from_fountain(text: &str) -> Self {
        let parsed = FountainParser::new().parse(text);
        Self::with_document(Document::from_blocks(parsed.blocks))
    }

    pub fn to_fountain(&self) -> String {
        FountainSerializer::new().serialize(self.document.blocks())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn blocks(&self) -> &[Block] {
        self.document.blocks()
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        self.document.snapshot()
    }

    pub fn clipboard(&self) -> &[Block] {
        &self.clipboard
    }

    fn clamp(&self, index: usize) -> usize {
        index.min(self.document.last_index())
    }

    // =====================================================================
    // 焦点与文本
    // =====================================================================

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused_block(&self) -> Option<&Block> {
        self.focused.and_then(|i| self.document.get(i))
    }

    pub fn focus(&mut self, index: usize) {
        self.focused = Some(self.clamp(index));
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    /// 输入文本。选择模式下文本只读。
    pub fn set_text(&mut self, index: usize, text: impl Into<String>) -> bool {
        if self.selection.is_active() {
            return false;
        }
        let index = self.clamp(index);
        self.document.set_text(index, text)
    }

    // =====================================================================
    // 键盘
    // =====================================================================

    /// Enter：在焦点块之后插入空块，类型由焦点块类型决定，新块获得焦点。
    /// 没有焦点时追加到末尾。
    pub fn confirm(&mut self) -> Option<usize> {
        if self.selection.is_active() {
            return None;
        }
        let after = self.focused.map_or(self.document.last_index(), |i| self.clamp(i));
        let block_type = self
            .document
            .get(after)
            .map_or(BlockType::Action, |b| b.block_type.next_on_confirm());
        let at = self.document.insert(after + 1, block_type, "");
        self.focused = Some(at);
        log::debug!("confirm: inserted {} at {}", block_type, at);
        Some(at)
    }

    /// Tab：焦点块循环到下一个类型，文本和焦点不变
    pub fn cycle_type(&mut self) -> Option<BlockType> {
        if self.selection.is_active() {
            return None;
        }
        let index = self.focused.map(|i| self.clamp(i))?;
        let next = self.document.get(index)?.block_type.cycled();
        self.document.set_type(index, next);
        Some(next)
    }

    /// 类型按钮：有焦点时修改焦点块类型，否则在末尾新建该类型的块
    pub fn set_type(&mut self, block_type: BlockType) {
        if self.selection.is_active() {
            return;
        }
        match self.focused {
            Some(i) => {
                let i = self.clamp(i);
                self.document.set_type(i, block_type);
            }
            None => {
                let at = self.document.insert(self.document.len(), block_type, "");
                self.focused = Some(at);
            }
        }
    }

    /// Backspace：焦点块为空且不止一个块时删除它，焦点移到前一个块
    pub fn backspace(&mut self) -> bool {
        if self.selection.is_active() {
            return false;
        }
        let index = match self.focused {
            Some(i) if i < self.document.len() => i,
            _ => return false,
        };
        if !self.document.blocks()[index].text.is_empty() || self.document.len() <= 1 {
            return false;
        }
        if self.document.remove(index).is_none() {
            return false;
        }
        self.focused = Some(index.saturating_sub(1));
        self.purge_selection();
        true
    }

    // =====================================================================
    // 选择
    // =====================================================================

    pub fn is_selection_mode(&self) -> bool {
        self.selection.is_active()
    }

    pub fn selection_state(&self) -> &SelectionState {
        self.selection.state()
    }

    /// 切换选择模式，退出时清空选中
    pub fn toggle_selection_mode(&mut self) {
        if self.selection.is_active() {
            self.selection.exit();
        } else {
            self.selection.enter();
        }
    }

    /// 选中块的位置，升序
    pub fn selected_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .document
            .blocks()
            .iter()
            .enumerate()
            .filter(|(_, b)| self.selection.contains(b.id))
            .map(|(i, _)| i)
            .collect();
        indices.sort_unstable();
        indices
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.document
            .get(index)
            .map_or(false, |b| self.selection.contains(b.id))
    }

    fn id_at(&self, index: usize) -> BlockId {
        self.document.blocks()[self.clamp(index)].id
    }

    pub fn toggle_select(&mut self, index: usize) {
        let id = self.id_at(index);
        self.selection.toggle_point(id);
    }

    /// Shift 点击：在锚点和目标之间统一选中或取消
    pub fn toggle_range(&mut self, index: usize) {
        let target = self.clamp(index);
        let anchor = self
            .selection
            .anchor()
            .and_then(|id| self.document.index_of(id))
            .unwrap_or(target);
        let (lo, hi) = (anchor.min(target), anchor.max(target));
        let span: Vec<BlockId> = self.document.blocks()[lo..=hi].iter().map(|b| b.id).collect();
        let target_id = self.id_at(target);
        self.selection.toggle_range(target_id, &span);
    }

    pub fn begin_drag(&mut self, index: usize) {
        let id = self.id_at(index);
        self.selection.begin_drag(id);
    }

    pub fn drag_over(&mut self, index: usize) {
        if !self.selection.is_dragging() {
            return;
        }
        let id = self.id_at(index);
        self.selection.drag_over(id);
    }

    /// 结束拖动，可以在任何输入路径上调用
    pub fn end_drag(&mut self) {
        self.selection.end_drag();
    }

    fn purge_selection(&mut self) {
        let document = &self.document;
        self.selection.retain(|id| document.index_of(id).is_some());
    }

    // =====================================================================
    // 剪贴板
    // =====================================================================

    /// 按位置升序复制选中块到剪贴板，不清空选中
    pub fn copy_selected(&mut self) -> usize {
        let indices = self.selected_indices();
        if indices.is_empty() {
            return 0;
        }
        self.clipboard = indices
            .iter()
            .map(|&i| self.document.blocks()[i].clone())
            .collect();
        log::debug!("copied {} blocks", self.clipboard.len());
        self.clipboard.len()
    }

    pub fn cut_selected(&mut self) -> usize {
        if self.copy_selected() == 0 {
            return 0;
        }
        self.delete_selected()
    }

    /// 粘贴到焦点块之后（无焦点时到末尾），退出选择模式，焦点移到最后一个粘贴的块
    pub fn paste(&mut self) -> usize {
        if self.clipboard.is_empty() {
            return 0;
        }
        let after = self.focused.map_or(self.document.last_index(), |i| self.clamp(i));
        let count = self.document.insert_copies(after + 1, &self.clipboard);
        self.selection.exit();
        self.focused = Some(after + count);
        log::debug!("pasted {} blocks after {}", count, after);
        count
    }

    /// 删除选中块；文档删空时补一个空动作块，焦点夹到有效范围
    pub fn delete_selected(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        let ids: Vec<BlockId> = self.selection.ids().iter().copied().collect();
        let removed = self.document.remove_ids(&ids);
        self.selection.clear();
        self.focused = self.focused.map(|i| self.clamp(i));
        log::debug!("deleted {} blocks, {} remain", removed, self.document.len());
        removed
    }
}

impl Default for ScreenplayEditor {
    fn default() -> Self {
        Self::new()
    }
}
