//! Two-column terminal reader for FictionBook (FB2) books
//!
//! - [`input`]: paragraph extraction from `.fb2` and `.fb2.zip` files
//! - [`reading`]: wrapping, pagination and page geometry
//! - [`app`]: the reader state machine
//! - [`ui`]: terminal screen, drawing and the key loop
//! - [`storage`]: last-read page per book

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod reading;
pub mod storage;
pub mod ui;
