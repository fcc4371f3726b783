use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use crate::models::block::{Block, BlockType};

/// 解析后统计的剧本信息，索引指向块序列中的位置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScreenplayProperties {
    /// 场景标题所在的块索引
    pub scenes: Vec<usize>,
    /// 角色名 -> 该角色提示所在的块索引
    pub characters: HashMap<String, Vec<usize>>,
    pub length_action: usize,
    pub length_dialogue: usize,
}

impl ScreenplayProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blocks(blocks: &[Block]) -> Self {
        let mut props = ScreenplayProperties::new();
        for (i, block) in blocks.iter().enumerate() {
            match block.block_type {
                BlockType::SceneHeading if !block.is_blank() => props.scenes.push(i),
                BlockType::Character if !block.is_blank() => {
                    let name = block.text.trim().to_uppercase();
                    props.characters.entry(name).or_default().push(i);
                }
                BlockType::Action => props.length_action += block.text.trim().chars().count(),
                BlockType::Dialogue => props.length_dialogue += block.text.trim().chars().count(),
                _ => {}
            }
        }
        props
    }

    /// 角色名按首次出场排序
    pub fn character_names(&self) -> Vec<&str> {
        let mut names: Vec<(&str, usize)> = self
            .characters
            .iter()
            .map(|(name, idx)| (name.as_str(), idx.first().copied().unwrap_or(usize::MAX)))
            .collect();
        names.sort_by_key(|(_, first)| *first);
        names.into_iter().map(|(name, _)| name).collect()
    }
}
