use screenplay_writer::parser::fountain_parser::FountainParser;
use screenplay_writer::{BlockId, BlockType};

#[test]
fn test_empty_input() {
    let result = FountainParser::new().parse("");
    assert_eq!(result.blocks.len(), 1, "空文本应该产生一个块");
    assert_eq!(result.blocks[0].block_type, BlockType::SceneHeading);
    assert_eq!(result.blocks[0].text, "");

    let result = FountainParser::new().parse("\n\n   \n");
    assert_eq!(result.blocks.len(), 1, "只有空行时也应该产生一个块");
    assert_eq!(result.blocks[0].block_type, BlockType::SceneHeading);
}

#[test]
fn test_scene_heading() {
    let result = FountainParser::new().parse("INT. KITCHEN - DAY");
    assert_eq!(result.blocks.len(), 1);
    assert_eq!(result.blocks[0].block_type, BlockType::SceneHeading);
    assert_eq!(result.blocks[0].text, "INT. KITCHEN - DAY");

    // 大小写按输入保留
    let result = FountainParser::new().parse("ext. park - night");
    assert_eq!(result.blocks[0].block_type, BlockType::SceneHeading);
    assert_eq!(result.blocks[0].text, "ext. park - night");
}

#[test]
fn test_transition() {
    let result = FountainParser::new().parse("> CUT TO:");
    assert_eq!(result.blocks.len(), 1);
    assert_eq!(result.blocks[0].block_type, BlockType::Transition);
    assert_eq!(result.blocks[0].text, "CUT TO:");

    // 居中文本不是转场
    let result = FountainParser::new().parse("> THE END <");
    assert_eq!(result.blocks[0].block_type, BlockType::Action);
}

#[test]
fn test_character_and_dialogue() {
    let result = FountainParser::new().parse("JOHN\nHello there.");
    assert_eq!(result.blocks.len(), 2);
    assert_eq!(result.blocks[0].block_type, BlockType::Character);
    assert_eq!(result.blocks[0].text, "JOHN");
    assert_eq!(result.blocks[1].block_type, BlockType::Dialogue);
    assert_eq!(result.blocks[1].text, "Hello there.");
}

#[test]
fn test_full_scene() {
    let script = r#"
INT. ROOM - DAY

Rain taps on the window.

JOHN
(whispering)
Are you awake?

MARY
No.

> CUT TO:

.BACKYARD

(beat)
"#;

    let result = FountainParser::new().parse(script);
    for block in &result.blocks {
        println!("- {}: {}", block.block_type, block.text);
    }

    let types: Vec<BlockType> = result.blocks.iter().map(|b| b.block_type).collect();
    assert_eq!(
        types,
        vec![
            BlockType::SceneHeading,
            BlockType::Action,
            BlockType::Character,
            BlockType::Parenthetical,
            BlockType::Dialogue,
            BlockType::Character,
            BlockType::Dialogue,
            BlockType::Transition,
            BlockType::SceneHeading,
            BlockType::Parenthetical,
        ]
    );
    assert_eq!(result.blocks[8].text, "BACKYARD");

    let ids: Vec<BlockId> = result.blocks.iter().map(|b| b.id).collect();
    let expected: Vec<BlockId> = (1..=10).map(BlockId).collect();
    assert_eq!(ids, expected, "id 应该按出现顺序从 1 开始");

    assert_eq!(result.properties.scenes, vec![0, 8]);
    assert_eq!(result.properties.characters.get("JOHN"), Some(&vec![2]));
    assert_eq!(result.properties.character_names(), vec!["JOHN", "MARY"]);
}

#[test]
fn test_all_caps_action_is_not_a_cue() {
    // 后面也是全大写，向前查看失败，落到动作
    let result = FountainParser::new().parse("SUDDENLY\nA GUNSHOT");
    assert!(result.blocks.iter().all(|b| b.block_type == BlockType::Action));

    // 含 "." 的全大写行不会成为角色
    let result = FountainParser::new().parse("DR. WHO\nHello.");
    assert_eq!(result.blocks[0].block_type, BlockType::Action);
    assert_eq!(result.blocks[1].block_type, BlockType::Action);
}
