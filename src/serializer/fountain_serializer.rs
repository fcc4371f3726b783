use crate::models::{Block, BlockType};
use crate::utils::{collapse_blank_lines, is_scene_heading_prefix};

/// 块序列 -> Fountain 文本
///
/// 按块类型和前一个块的类型决定空行。空行可能重复，
/// 最后统一把 3 个以上的换行压成 2 个再去掉首尾空白。
pub struct FountainSerializer {
    lines: Vec<String>,
    previous_type: Option<BlockType>,
}

impl FountainSerializer {
    pub fn new() -> Self {
        FountainSerializer {
            lines: Vec::new(),
            previous_type: None,
        }
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    fn serialize_block(&mut self, block: &Block) {
        let s = block.text.trim();

        // 空块不输出任何内容，包括空的场景标题
        if s.is_empty() {
            return;
        }

        match block.block_type {
            BlockType::SceneHeading => {
                self.blank();
                if is_scene_heading_prefix(s) {
                    self.line(s.to_uppercase());
                } else {
                    self.line(format!(".{}", s.to_uppercase()));
                }
                self.blank();
            }
            BlockType::Action => {
                self.blank();
                self.line(s);
                self.blank();
            }
            BlockType::Character => {
                // 同一段对话中的下一位角色紧跟在台词之后
                if !matches!(
                    self.previous_type,
                    Some(BlockType::Dialogue) | Some(BlockType::Parenthetical)
                ) {
                    self.blank();
                }
                self.line(s.to_uppercase());
            }
            BlockType::Parenthetical => {
                if s.starts_with('(') {
                    self.line(s);
                } else {
                    self.line(format!("({})", s));
                }
            }
            BlockType::Dialogue => {
                self.line(s);
            }
            BlockType::Transition => {
                self.blank();
                self.line(format!("> {}", s.to_uppercase()));
                self.blank();
            }
            BlockType::General => {
                self.line(s);
                self.blank();
            }
        }
    }

    pub fn serialize(&mut self, blocks: &[Block]) -> String {
        self.lines.clear();
        self.previous_type = None;

        for block in blocks {
            self.serialize_block(block);
            self.previous_type = Some(block.block_type);
        }

        let joined = self.lines.join("\n");
        collapse_blank_lines(&joined).trim().to_string()
    }
}

impl Default for FountainSerializer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlockId;

    fn block(block_type: BlockType, text: &str) -> Block {
        Block::new(BlockId(0), block_type, text)
    }

    #[test]
    fn scene_heading_without_prefix_is_forced() {
        let out = FountainSerializer::new().serialize(&[block(BlockType::SceneHeading, "backyard")]);
        assert_eq!(out, ".BACKYARD");
        let out = FountainSerializer::new().serialize(&[block(BlockType::SceneHeading, "int. hall - day")]);
        assert_eq!(out, "INT. HALL - DAY");
    }

    #[test]
    fn speech_sequence_stays_contiguous() {
        let out = FountainSerializer::new().serialize(&[
            block(BlockType::Action, "Rain."),
            block(BlockType::Character, "john"),
            block(BlockType::Parenthetical, "softly"),
            block(BlockType::Dialogue, "Hi."),
            block(BlockType::Dialogue, "Again."),
            block(BlockType::Character, "mary"),
            block(BlockType::Dialogue, "Hello."),
        ]);
        assert_eq!(out, "Rain.\n\nJOHN\n(softly)\nHi.\nAgain.\nMARY\nHello.");
    }

    #[test]
    fn empty_scene_heading_does_not_split_speech() {
        let out = FountainSerializer::new().serialize(&[
            block(BlockType::Character, "JOHN"),
            block(BlockType::Dialogue, "Hi."),
            block(BlockType::SceneHeading, ""),
            block(BlockType::Dialogue, "Again."),
        ]);
        assert_eq!(out, "JOHN\nHi.\nAgain.");
    }

    #[test]
    fn transition_and_general() {
        let out = FountainSerializer::new().serialize(&[
            block(BlockType::Transition, "cut to:"),
            block(BlockType::General, "note"),
            block(BlockType::Action, "Then."),
        ]);
        assert_eq!(out, "> CUT TO:\n\nnote\n\nThen.");
    }

    #[test]
    fn empty_blocks_are_skipped_but_update_previous_type() {
        let out = FountainSerializer::new().serialize(&[
            block(BlockType::Character, "JOHN"),
            block(BlockType::Dialogue, "Hi."),
            block(BlockType::Dialogue, "   "),
            block(BlockType::Action, ""),
            block(BlockType::Character, "MARY"),
            block(BlockType::Dialogue, "Yes."),
        ]);
        // 空动作块之后角色提示需要空行
        assert_eq!(out, "JOHN\nHi.\n\nMARY\nYes.");
    }
}
