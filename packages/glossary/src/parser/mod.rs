//! Line-oriented parser for glossary documents.
//!
//! Documents are scanned forward once. Section headers open a new section,
//! every other non-blank line opens a term that may be followed by
//! `Definition:` and `Keywords:` annotations.

mod cursor;
mod terms;

pub use cursor::LineCursor;
pub use terms::TermParser;
