pub mod fountain_constants;

pub use fountain_constants::FountainConstants;
use fountain_constants::{BLOCK_REGEX, TEXT_REGEX};

/// 是否以 INT/EXT/INT./EXT/I/E 开头
pub fn is_scene_heading_prefix(text: &str) -> bool {
    BLOCK_REGEX["scene_heading"].is_match(text)
}

/// 是否为强制场景标题（"." 后接大写字母）
pub fn is_forced_scene_heading(text: &str) -> bool {
    BLOCK_REGEX["scene_heading_forced"].is_match(text)
}

/// 把三个及以上连续换行压缩成两个
pub fn collapse_blank_lines(text: &str) -> String {
    TEXT_REGEX["newline_run"].replace_all(text, "\n\n").to_string()
}

/// 替换文件系统不安全的字符
pub fn sanitize_file_stem(title: &str) -> String {
    TEXT_REGEX["unsafe_file_chars"]
        .replace_all(title, FountainConstants::FILE_NAME_REPLACEMENT)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_heading_prefixes() {
        assert!(is_scene_heading_prefix("INT. KITCHEN - DAY"));
        assert!(is_scene_heading_prefix("ext. park"));
        assert!(is_scene_heading_prefix("INT./EXT. CAR - MOVING"));
        assert!(is_scene_heading_prefix("I/E HALLWAY"));
        assert!(!is_scene_heading_prefix("INTERIOR DESIGN"));
        assert!(!is_scene_heading_prefix("INT"));
    }

    #[test]
    fn forced_heading_needs_uppercase_after_dot() {
        assert!(is_forced_scene_heading(".BACKYARD"));
        assert!(is_forced_scene_heading(".Backyard"));
        assert!(!is_forced_scene_heading("...and then"));
        assert!(!is_forced_scene_heading(".backyard"));
    }

    #[test]
    fn collapses_newline_runs() {
        assert_eq!(collapse_blank_lines("a\n\n\n\nb\n\nc\nd"), "a\n\nb\n\nc\nd");
    }

    #[test]
    fn sanitizes_every_unsafe_character() {
        assert_eq!(sanitize_file_stem(r#"a/b\c:d*e?f"g<h>i|j"#), "a-b-c-d-e-f-g-h-i-j");
    }
}
