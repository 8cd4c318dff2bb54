pub mod layout;
pub mod paginate;
pub mod paragraph;
pub mod wrap;

pub use layout::PageLayout;
pub use paginate::{page_count, paginate, Page};
pub use paragraph::{looks_like_heading, Paragraph};
pub use wrap::{wrap_paragraphs, WrappedLine};
