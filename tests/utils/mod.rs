#![allow(dead_code)]

pub mod books;
pub mod fake_screen;

pub use books::{write_book, write_zipped_book};
pub use fake_screen::{keys, row_text, FakeScreen, Step};
