use std::collections::HashSet;
use crate::models::BlockId;

/// 拖动选择时对经过的块统一施加的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIntent {
    Select,
    Deselect,
}

/// 选择模式的状态机
///
/// `Idle` 即非选择模式，文本可编辑。其余状态下文本只读，
/// 点击和拖动改变选中集合。锚点（范围选择的起点）保存在状态里。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionState {
    Idle,
    PointSelecting { anchor: Option<BlockId> },
    RangeSelecting { anchor: BlockId },
    Dragging {
        origin: BlockId,
        intent: ToggleIntent,
        visited: HashSet<BlockId>,
    },
}

/// 按块 id 记录的选中集合，位置只在界面边界换算
#[derive(Debug, Clone)]
pub struct Selection {
    state: SelectionState,
    selected: HashSet<BlockId>,
}

impl Selection {
    pub fn new() -> Self {
        Selection {
            state: SelectionState::Idle,
            selected: HashSet::new(),
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, SelectionState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SelectionState::Dragging { .. })
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.selected.contains(&id)
    }

    pub fn ids(&self) -> &HashSet<BlockId> {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// 范围选择的锚点
    pub fn anchor(&self) -> Option<BlockId> {
        match &self.state {
            SelectionState::Idle => None,
            SelectionState::PointSelecting { anchor } => *anchor,
            SelectionState::RangeSelecting { anchor } => Some(*anchor),
            SelectionState::Dragging { origin, .. } => Some(*origin),
        }
    }

    /// 进入选择模式，已经在选择模式中时不变
    pub fn enter(&mut self) {
        if !self.is_active() {
            self.state = SelectionState::PointSelecting { anchor: None };
        }
    }

    /// 退出选择模式并清空选中
    pub fn exit(&mut self) {
        self.state = SelectionState::Idle;
        self.selected.clear();
    }

    /// 清空选中但保留选择模式
    pub fn clear(&mut self) {
        self.selected.clear();
        if self.is_active() {
            self.state = SelectionState::PointSelecting { anchor: None };
        }
    }

    fn apply(&mut self, id: BlockId, intent: ToggleIntent) {
        match intent {
            ToggleIntent::Select => {
                self.selected.insert(id);
            }
            ToggleIntent::Deselect => {
                self.selected.remove(&id);
            }
        }
    }

    /// 单点切换，被切换的块成为新的锚点
    pub fn toggle_point(&mut self, id: BlockId) {
        self.end_drag();
        self.enter();
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
        self.state = SelectionState::PointSelecting { anchor: Some(id) };
    }

    /// 范围切换：`span` 是锚点与目标之间（含两端）的全部块。
    /// 锚点已选中或目标未选中时为选中，否则为取消。锚点不变。
    pub fn toggle_range(&mut self, target: BlockId, span: &[BlockId]) {
        self.end_drag();
        let anchor = match self.anchor() {
            Some(anchor) => anchor,
            None => {
                self.toggle_point(target);
                return;
            }
        };
        let intent = if self.selected.contains(&anchor) || !self.selected.contains(&target) {
            ToggleIntent::Select
        } else {
            ToggleIntent::Deselect
        };
        for id in span {
            self.apply(*id, intent);
        }
        self.state = SelectionState::RangeSelecting { anchor };
    }

    /// 开始拖动：起点的当前状态决定整次拖动是选中还是取消
    pub fn begin_drag(&mut self, origin: BlockId) {
        self.end_drag();
        self.enter();
        let intent = if self.selected.contains(&origin) {
            ToggleIntent::Deselect
        } else {
            ToggleIntent::Select
        };
        self.apply(origin, intent);
        let mut visited = HashSet::new();
        visited.insert(origin);
        self.state = SelectionState::Dragging {
            origin,
            intent,
            visited,
        };
    }

    /// 拖动经过一个块，重复经过的块不再处理
    pub fn drag_over(&mut self, id: BlockId) {
        let intent = match &mut self.state {
            SelectionState::Dragging { intent, visited, .. } => {
                if !visited.insert(id) {
                    return;
                }
                *intent
            }
            _ => return,
        };
        self.apply(id, intent);
    }

    /// 结束拖动。任何地方都可以调用，不在拖动中时无操作。
    pub fn end_drag(&mut self) {
        if let SelectionState::Dragging { origin, .. } = self.state {
            self.state = SelectionState::PointSelecting { anchor: Some(origin) };
        }
    }

    /// 删除块之后去掉已不存在的 id
    pub fn retain(&mut self, exists: impl Fn(BlockId) -> bool) {
        self.selected.retain(|id| exists(*id));
        let anchor_gone = self.anchor().map_or(false, |a| !exists(a));
        if anchor_gone {
            self.state = match self.state {
                SelectionState::Idle => SelectionState::Idle,
                _ => SelectionState::PointSelecting { anchor: None },
            };
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new()
    }
}
