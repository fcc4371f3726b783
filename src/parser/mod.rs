pub mod fountain_parser;
pub mod text_processor;

pub use fountain_parser::FountainParser;
pub use fountain_parser::ParseOutput;
pub use text_processor::{
    is_upper_case,
    is_character_cue_candidate,
    follows_character_cue,
    is_parenthetical,
    is_transition
};
