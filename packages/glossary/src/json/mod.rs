//! JSON input and output for chapter files.

mod reader;
mod writer;

pub use reader::{load_chapter, read_document};
pub use writer::{generate_json, save_chapter};
