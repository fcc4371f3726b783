use serde::{Deserialize, Serialize};
use crate::models::Margins;
use crate::utils::FountainConstants;

/// 分页估算用的纸张配置，单位为 96 dpi 下的像素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintProfile {
    /// 纸张大小
    pub paper_size: String,
    /// 页面高度
    pub page_height: f32,
    /// 上边距
    pub top_margin: f32,
    /// 下边距
    pub bottom_margin: f32,
    /// 块之间的间距
    pub block_spacing: f32,
}

impl Default for PrintProfile {
    fn default() -> Self {
        PrintProfile::from_paper("A4", Margins::default())
    }
}

impl PrintProfile {
    /// 根据纸张名称和英寸边距构建，未知纸张按 A4 处理
    pub fn from_paper(paper_size: &str, margins: Margins) -> Self {
        let page_height = match paper_size.to_lowercase().as_str() {
            "letter" => FountainConstants::LETTER_HEIGHT_PX,
            _ => FountainConstants::A4_HEIGHT_PX,
        };
        PrintProfile {
            paper_size: paper_size.to_string(),
            page_height,
            top_margin: margins.top * FountainConstants::PX_PER_INCH,
            bottom_margin: margins.bottom * FountainConstants::PX_PER_INCH,
            block_spacing: FountainConstants::BLOCK_SPACING,
        }
    }

    /// 直接给定可用高度，主要用于测试和自定义纸张
    pub fn with_capacity(capacity: f32) -> Self {
        PrintProfile {
            paper_size: "custom".to_string(),
            page_height: capacity,
            top_margin: 0.0,
            bottom_margin: 0.0,
            block_spacing: FountainConstants::BLOCK_SPACING,
        }
    }

    /// 每页可用高度
    pub fn capacity(&self) -> f32 {
        (self.page_height - self.top_margin - self.bottom_margin).max(0.0)
    }
}
