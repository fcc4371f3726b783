use std::collections::HashMap;
use lazy_static::lazy_static;
use regex::Regex;

pub struct FountainConstants;

impl FountainConstants {
    /// 块之间固定的间距
    pub const BLOCK_SPACING: f32 = 8.0;
    /// 1 英寸对应的像素（96 dpi）
    pub const PX_PER_INCH: f32 = 96.0;
    /// A4 纸高度（像素）
    pub const A4_HEIGHT_PX: f32 = 1122.0;
    /// Letter 纸高度（像素）
    pub const LETTER_HEIGHT_PX: f32 = 1056.0;
    /// 文件名中不允许出现的字符统一替换为这个字符
    pub const FILE_NAME_REPLACEMENT: &'static str = "-";
}

lazy_static! {
    // 行分类正则
    pub static ref BLOCK_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("scene_heading", Regex::new(r"(?i)^(INT|EXT|INT\./EXT|I/E)[\s.]").unwrap());
        map.insert("scene_heading_forced", Regex::new(r"^\.\p{Lu}").unwrap());
        map
    };

    // 序列化与文件名处理正则
    pub static ref TEXT_REGEX: HashMap<&'static str, Regex> = {
        let mut map = HashMap::new();
        map.insert("newline_run", Regex::new(r"\n{3,}").unwrap());
        map.insert("unsafe_file_chars", Regex::new(r#"[/\\:*?"<>|]"#).unwrap());
        map
    };
}
