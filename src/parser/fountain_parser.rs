use serde::Serialize;
use crate::models::{Block, BlockId, BlockType, ScreenplayProperties};
use crate::parser::text_processor::{
    follows_character_cue,
    is_character_cue_candidate,
    is_parenthetical,
    is_transition,
};
use crate::utils::{is_forced_scene_heading, is_scene_heading_prefix};

#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    /// 解析出的块，至少一个
    pub blocks: Vec<Block>,
    pub properties: ScreenplayProperties,
    /// 输入的总行数
    pub line_count: usize,
}

impl ParseOutput {
    pub fn new() -> Self {
        ParseOutput {
            blocks: Vec::new(),
            properties: ScreenplayProperties::new(),
            line_count: 0,
        }
    }
}

impl Default for ParseOutput {
    fn default() -> Self {
        Self::new()
    }
}

/// Fountain 文本 -> 块序列
///
/// 逐行分类，每行只做一次决定，不回溯。优先级：
/// 场景标题 > 转场 > 角色提示（带向前查看） > 括注 > 动作。
pub struct FountainParser {
    result: ParseOutput,
    next_id: u64,
}

impl FountainParser {
    pub fn new() -> Self {
        FountainParser {
            result: ParseOutput::new(),
            next_id: 1,
        }
    }

    fn push_block(&mut self, block_type: BlockType, text: &str) {
        let id = BlockId(self.next_id);
        self.next_id += 1;
        self.result.blocks.push(Block::new(id, block_type, text));
    }

    /// 跳过空行，返回下一个非空行
    fn next_non_blank<'a>(lines: &[&'a str], from: usize) -> Option<&'a str> {
        lines[from.min(lines.len())..]
            .iter()
            .map(|l| l.trim())
            .find(|l| !l.is_empty())
    }

    /// 角色提示之后连续的非空行：括注或台词，遇到空行结束
    fn consume_dialogue_run(&mut self, lines: &[&str], mut i: usize) -> usize {
        while i < lines.len() {
            let line = lines[i].trim();
            if line.is_empty() {
                break;
            }
            if line.starts_with('(') {
                self.push_block(BlockType::Parenthetical, line);
            } else {
                self.push_block(BlockType::Dialogue, line);
            }
            i += 1;
        }
        i
    }

    pub fn parse(&mut self, script: &str) -> ParseOutput {
        self.result = ParseOutput::new();
        self.next_id = 1;

        let lines: Vec<&str> = script.lines().collect();
        self.result.line_count = lines.len();

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i].trim();
            if line.is_empty() {
                i += 1;
                continue;
            }

            // 场景标题
            if is_scene_heading_prefix(line) || is_forced_scene_heading(line) {
                let text = line.strip_prefix('.').unwrap_or(line);
                self.push_block(BlockType::SceneHeading, text);
                i += 1;
                continue;
            }

            // 转场  > TEXT
            if is_transition(line) {
                self.push_block(BlockType::Transition, line[1..].trim());
                i += 1;
                continue;
            }

            // 角色提示：全大写行，且后面跟着括注或台词
            if is_character_cue_candidate(line) {
                let next = Self::next_non_blank(&lines, i + 1).unwrap_or("");
                if follows_character_cue(next) {
                    self.push_block(BlockType::Character, line);
                    i = self.consume_dialogue_run(&lines, i + 1);
                    continue;
                }
            }

            if is_parenthetical(line) {
                self.push_block(BlockType::Parenthetical, line);
                i += 1;
                continue;
            }

            self.push_block(BlockType::Action, line);
            i += 1;
        }

        if self.result.blocks.is_empty() {
            self.push_block(BlockType::SceneHeading, "");
        }

        self.result.properties = ScreenplayProperties::from_blocks(&self.result.blocks);
        log::debug!(
            "parsed {} lines into {} blocks ({} scenes)",
            self.result.line_count,
            self.result.blocks.len(),
            self.result.properties.scenes.len()
        );

        std::mem::take(&mut self.result)
    }
}

impl Default for FountainParser {
    fn default() -> Self {
        Self::new()
    }
}
