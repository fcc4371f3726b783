use std::time::Duration;
use serde::{Deserialize, Serialize};
use crate::pdf::PrintProfile;

/// 页面边距（英寸）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub bottom: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            top: 1.0,
            bottom: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 纸张规格: "A4" 或 "letter"
    pub page_size: String,
    pub margins: Margins,
    /// 每个块之间固定的间距
    pub block_spacing: f32,
    /// 自动保存间隔(秒)，0 表示关闭
    pub autosave_interval_sec: u64,
    /// 标题为空时使用的名称
    pub default_title: String,
    /// 剧本所在的文件夹
    pub container: String,
    pub file_extension: String,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            page_size: "A4".to_string(),
            margins: Margins::default(),
            block_spacing: 8.0,
            autosave_interval_sec: 30,
            default_title: "未命名剧本".to_string(),
            container: "Screenplays".to_string(),
            file_extension: "fountain".to_string(),
        }
    }
}

impl Conf {
    /// 从 JSON 读取配置，缺少的字段使用默认值
    pub fn from_json(json: &str) -> Result<Conf, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn print_profile(&self) -> PrintProfile {
        let mut profile = PrintProfile::from_paper(&self.page_size, self.margins);
        profile.block_spacing = self.block_spacing;
        profile
    }

    /// 自动保存间隔，为 0 时返回 None
    pub fn autosave_interval(&self) -> Option<Duration> {
        match self.autosave_interval_sec {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let conf = Conf::from_json(r#"{"page_size": "letter", "autosave_interval_sec": 5}"#).unwrap();
        assert_eq!(conf.page_size, "letter");
        assert_eq!(conf.autosave_interval_sec, 5);
        assert_eq!(conf.block_spacing, 8.0);
        assert_eq!(conf.file_extension, "fountain");
    }

    #[test]
    fn print_profile_uses_configured_spacing() {
        let conf = Conf::from_json(r#"{"block_spacing": 20.0}"#).unwrap();
        assert_eq!(conf.print_profile().block_spacing, 20.0);
        assert_eq!(Conf::default().print_profile().block_spacing, 8.0);
    }

    #[test]
    fn zero_interval_disables_autosave() {
        let conf = Conf::from_json(r#"{"autosave_interval_sec": 0}"#).unwrap();
        assert_eq!(conf.autosave_interval(), None);
        assert_eq!(Conf::default().autosave_interval(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Conf::from_json("{page_size:").is_err());
    }
}
