//! Authoring-time constants for the glossary pipeline.
//!
//! Paths and chapter metadata are fixed when the content is written; the CLI
//! only lets an operator point them elsewhere.

use regex::Regex;
use std::sync::LazyLock;

/// Default source document for the converter.
pub const DEFAULT_SOURCE_PATH: &str = "chapters/planning_doc.md";

/// Default directory that receives chapter JSON files.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Chapter number assigned to the converted document.
pub const DEFAULT_CHAPTER_NUMBER: u32 = 1;

/// Title of the converted document.
pub const DEFAULT_CHAPTER_TITLE: &str = "LLM Terminology and Concepts";

/// Description of the converted document.
pub const DEFAULT_CHAPTER_DESCRIPTION: &str =
    "Core concepts, fundamentals, and generation controls for understanding Large Language Models";

/// Line prefix introducing a term definition.
pub const DEFINITION_PREFIX: &str = "Definition:";

/// Line prefix introducing a comma-separated keyword list.
pub const KEYWORDS_PREFIX: &str = "Keywords:";

/// Section header: digits, `)` or `.`, whitespace, then the title.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_HEADER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[).]\s+").expect("valid regex"));

/// Numbering token at the start of a section header, with trailing whitespace.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECTION_NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[).]\s*").expect("valid regex"));

/// Check whether a line starts a new section.
///
/// # Examples
/// ```
/// use glossary_pipeline::config::is_section_header;
///
/// assert!(is_section_header("2) Generation Controls"));
/// assert!(is_section_header("1. Core Concepts"));
/// assert!(!is_section_header("Temperature"));
/// ```
pub fn is_section_header(line: &str) -> bool {
    SECTION_HEADER_PATTERN.is_match(line)
}

/// Strip the numbering token from a section header line.
///
/// # Examples
/// ```
/// use glossary_pipeline::config::section_title;
///
/// assert_eq!(section_title("2) Generation Controls"), "Generation Controls");
/// ```
pub fn section_title(line: &str) -> String {
    SECTION_NUMBER_PREFIX.replace(line, "").trim().to_string()
}

/// File name for a chapter number, e.g. `chapter3.json`.
#[must_use]
pub fn chapter_file_name(chapter: u32) -> String {
    format!("chapter{chapter}.json")
}
