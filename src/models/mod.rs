pub mod block;
pub mod document;
pub mod screenplay_properties;
pub mod conf;

pub use block::{Block, BlockId, BlockType};
pub use document::{Document, DocumentSnapshot};
pub use screenplay_properties::ScreenplayProperties;
pub use conf::{Conf, Margins};
