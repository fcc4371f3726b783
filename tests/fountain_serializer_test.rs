use screenplay_writer::{parse, serialize, BlockType, ScreenplayEditor};

/// 通过编辑器逐块建立文档
fn build(entries: &[(BlockType, &str)]) -> ScreenplayEditor {
    let mut editor = ScreenplayEditor::new();
    for (i, (block_type, text)) in entries.iter().enumerate() {
        if i > 0 {
            editor.confirm();
        }
        editor.set_type(*block_type);
        let index = editor.focused().expect("confirm 之后应该有焦点");
        editor.set_text(index, *text);
    }
    editor
}

#[test]
fn test_empty_document_serializes_to_empty_string() {
    let editor = ScreenplayEditor::new();
    assert_eq!(editor.to_fountain(), "");
}

#[test]
fn test_serialized_layout() {
    let editor = build(&[
        (BlockType::SceneHeading, "int. kitchen - day"),
        (BlockType::Action, "Steam rises from a kettle."),
        (BlockType::Character, "anna"),
        (BlockType::Parenthetical, "to herself"),
        (BlockType::Dialogue, "Too early."),
        (BlockType::Transition, "cut to:"),
    ]);
    let text = editor.to_fountain();
    println!("{}", text);
    assert_eq!(
        text,
        "INT. KITCHEN - DAY\n\nSteam rises from a kettle.\n\nANNA\n(to herself)\nToo early.\n\n> CUT TO:"
    );
}

#[test]
fn test_round_trip_preserves_types_and_text() {
    let entries = [
        (BlockType::SceneHeading, "INT. OFFICE - NIGHT"),
        (BlockType::Action, "A phone rings."),
        (BlockType::Character, "DETECTIVE"),
        (BlockType::Parenthetical, "(into phone)"),
        (BlockType::Dialogue, "Who is this?"),
        (BlockType::Dialogue, "Answer me."),
        (BlockType::Action, "Silence."),
        (BlockType::Character, "VOICE"),
        (BlockType::Dialogue, "You know who."),
        (BlockType::Transition, "SMASH CUT TO:"),
        (BlockType::SceneHeading, "ROOFTOP"),
        (BlockType::Action, "Wind."),
    ];
    let editor = build(&entries);
    let reparsed = parse(&editor.to_fountain());

    let got: Vec<(BlockType, String)> = reparsed
        .iter()
        .map(|b| (b.block_type, b.text.trim().to_string()))
        .collect();
    let expected: Vec<(BlockType, String)> = entries
        .iter()
        .map(|(t, s)| (*t, s.to_string()))
        .collect();
    assert_eq!(got, expected);
}

#[test]
fn test_round_trip_normalizes_case_only() {
    let editor = build(&[
        (BlockType::SceneHeading, "ext. beach - dawn"),
        (BlockType::Character, "sam"),
        (BlockType::Parenthetical, "quietly"),
        (BlockType::Dialogue, "Look."),
    ]);
    let reparsed = parse(&editor.to_fountain());
    let types: Vec<BlockType> = reparsed.iter().map(|b| b.block_type).collect();
    assert_eq!(
        types,
        vec![
            BlockType::SceneHeading,
            BlockType::Character,
            BlockType::Parenthetical,
            BlockType::Dialogue,
        ]
    );
    assert_eq!(reparsed[0].text, "EXT. BEACH - DAWN");
    assert_eq!(reparsed[1].text, "SAM");
    assert_eq!(reparsed[2].text, "(quietly)");
}

#[test]
fn test_serialize_of_parse_is_normalized() {
    let source = "int. hall - day\n\n\n\nShe runs.\n\n\n>fade out:";
    let text = serialize(&parse(source));
    assert_eq!(text, "INT. HALL - DAY\n\nShe runs.\n\n> FADE OUT:");
}

#[test]
fn test_blank_blocks_inside_speech_are_dropped() {
    let editor = build(&[
        (BlockType::SceneHeading, "INT. BAR - NIGHT"),
        (BlockType::Character, "LENA"),
        (BlockType::Dialogue, "One more."),
        (BlockType::SceneHeading, ""),
        (BlockType::Dialogue, "Then home."),
    ]);
    let text = editor.to_fountain();
    assert_eq!(text, "INT. BAR - NIGHT\n\nLENA\nOne more.\nThen home.");

    let types: Vec<BlockType> = parse(&text).iter().map(|b| b.block_type).collect();
    assert_eq!(
        types,
        vec![
            BlockType::SceneHeading,
            BlockType::Character,
            BlockType::Dialogue,
            BlockType::Dialogue,
        ]
    );
}
