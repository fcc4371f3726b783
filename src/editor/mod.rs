pub mod screenplay_editor;
pub mod selection;

pub use screenplay_editor::ScreenplayEditor;
pub use selection::{Selection, SelectionState, ToggleIntent};
