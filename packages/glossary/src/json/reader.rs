//! Reading source documents and chapter files.

use std::fs;
use std::path::Path;

use crate::error::{PipelineError, Result};
use crate::types::Chapter;

/// Read a whole UTF-8 text document.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| PipelineError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a chapter from a JSON file.
pub fn load_chapter(path: &Path) -> Result<Chapter> {
    let content = read_document(path)?;
    let chapter: Chapter =
        serde_json::from_str(&content).map_err(|source| PipelineError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(
        path = %path.display(),
        chapter = chapter.chapter,
        sections = chapter.sections.len(),
        "Loaded chapter"
    );
    Ok(chapter)
}
