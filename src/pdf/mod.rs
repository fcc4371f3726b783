pub mod paginator;
pub mod print_profile;

pub use paginator::{BlockHeights, MeasureBlock, PageBreak, Pagination, Paginator};
pub use print_profile::PrintProfile;
