// 行分类用到的文本判断

/// 与自身大写形式相同（没有小写字母）
pub fn is_upper_case(text: &str) -> bool {
    text == text.to_uppercase()
}

/// 至少包含一个有大小写之分的字母
pub fn has_cased_letter(text: &str) -> bool {
    text.chars().any(|c| c.is_uppercase() || c.is_lowercase())
}

/// 角色提示的候选：全大写、含字母、不以 "(" 开头、不含 "."
pub fn is_character_cue_candidate(line: &str) -> bool {
    is_upper_case(line) && has_cased_letter(line) && !line.starts_with('(') && !line.contains('.')
}

/// 角色提示之后的行是否像括注或台词
pub fn follows_character_cue(next: &str) -> bool {
    !next.is_empty() && (next.starts_with('(') || !is_upper_case(next))
}

pub fn is_parenthetical(line: &str) -> bool {
    line.starts_with('(') && line.ends_with(')')
}

/// ">" 开头但不以 "<" 结尾（后者是居中文本）
pub fn is_transition(line: &str) -> bool {
    line.starts_with('>') && !line.ends_with('<')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_candidates() {
        assert!(is_character_cue_candidate("JOHN"));
        assert!(!is_character_cue_candidate("MARY (V.O)"));
        assert!(is_character_cue_candidate("MARY (O/S)"));
        assert!(!is_character_cue_candidate("John"));
        assert!(!is_character_cue_candidate("123"));
        assert!(!is_character_cue_candidate("(BEAT)"));
        assert!(!is_character_cue_candidate("MR. SMITH"));
        assert!(!is_character_cue_candidate("顾清"));
    }

    #[test]
    fn dialogue_lookahead() {
        assert!(follows_character_cue("Hello there."));
        assert!(follows_character_cue("(quietly)"));
        assert!(!follows_character_cue("BANG!"));
        assert!(!follows_character_cue(""));
    }

    #[test]
    fn transitions_exclude_centered_text() {
        assert!(is_transition("> CUT TO:"));
        assert!(!is_transition("> THE END <"));
        assert!(!is_transition("CUT TO:"));
    }
}
