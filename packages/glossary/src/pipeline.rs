//! Pipeline stages that tie reading, transforming and writing together.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::json::{read_document, save_chapter};
use crate::parser::TermParser;
use crate::splitting::ChapterSplitter;
use crate::types::Chapter;
use crate::visualization::VisualizationRegistry;

/// Number, title and description given to a converted chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterMetadata {
    pub number: u32,
    pub title: String,
    pub description: String,
}

impl ChapterMetadata {
    /// Create chapter metadata.
    #[must_use]
    pub fn new(number: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Read a glossary document and parse it into a chapter.
///
/// # Arguments
/// * `path` - Source text document
/// * `metadata` - Number, title and description for the chapter
/// * `visualizations` - Title lookup used to enrich terms
pub fn convert_document(
    path: &Path,
    metadata: &ChapterMetadata,
    visualizations: &VisualizationRegistry,
) -> Result<Chapter> {
    let text = read_document(path)?;
    let chapter = TermParser::new(visualizations).parse(
        &text,
        metadata.number,
        &metadata.title,
        &metadata.description,
    );
    Ok(chapter)
}

/// One chapter produced by the split stage.
#[derive(Debug, Clone)]
pub struct SplitOutput {
    pub chapter: Chapter,
    pub path: PathBuf,
}

/// Split a loaded chapter and save every produced chapter to `output_dir`.
///
/// Each chapter is written as soon as it is built and reported through
/// `on_saved`. The first failing rule aborts the run; chapters saved before
/// it stay on disk.
pub fn split_chapter(
    source: &Chapter,
    output_dir: &Path,
    splitter: &ChapterSplitter,
    mut on_saved: impl FnMut(&SplitOutput),
) -> Result<Vec<SplitOutput>> {
    let mut outputs = Vec::with_capacity(splitter.rules().len());

    for result in splitter.split(source) {
        let chapter = result?;
        let path = save_chapter(&chapter, output_dir)?;
        tracing::info!(
            chapter = chapter.chapter,
            sections = chapter.sections.len(),
            terms = chapter.term_count(),
            path = %path.display(),
            "Wrote split chapter"
        );
        let output = SplitOutput { chapter, path };
        on_saved(&output);
        outputs.push(output);
    }

    Ok(outputs)
}
