//! Term parser for sectioned glossary documents.

use super::cursor::{is_blank, LineCursor};
use crate::config::{is_section_header, section_title, DEFINITION_PREFIX, KEYWORDS_PREFIX};
use crate::types::{Chapter, Section, Term};
use crate::visualization::VisualizationRegistry;

/// Converts glossary text into a [`Chapter`].
///
/// Document layout:
///
/// ```text
/// 2) Generation Controls          <- section header
/// Temperature                     <- term title
///
/// Definition: Controls randomness in output.
/// Keywords: temperature, randomness, sampling
/// ```
///
/// Text before the first section header is ignored. Terms are enriched from
/// the visualization registry by exact title match.
#[derive(Debug, Clone, Copy)]
pub struct TermParser<'v> {
    visualizations: &'v VisualizationRegistry,
}

impl<'v> TermParser<'v> {
    /// Create a parser that enriches terms from `visualizations`.
    #[must_use]
    pub fn new(visualizations: &'v VisualizationRegistry) -> Self {
        Self { visualizations }
    }

    /// Parse a whole document into a chapter with the given metadata.
    #[must_use]
    pub fn parse(&self, text: &str, number: u32, title: &str, description: &str) -> Chapter {
        let mut chapter = Chapter::new(number, title, description);
        let mut cursor = LineCursor::new(text);

        while let Some(line) = cursor.next_line() {
            if is_section_header(line) {
                chapter.add_section(self.parse_section(line, &mut cursor));
            }
        }

        tracing::info!(
            chapter = number,
            sections = chapter.sections.len(),
            terms = chapter.term_count(),
            "Parsed chapter"
        );
        chapter
    }

    /// Parse the terms following a section header, up to the next header.
    fn parse_section(&self, header: &str, cursor: &mut LineCursor<'_>) -> Section {
        let mut section = Section::new(section_title(header));
        tracing::debug!(title = %section.title, line = cursor.position(), "Section");

        while let Some(line) = cursor.peek() {
            if is_section_header(line) {
                break;
            }
            cursor.advance();

            if is_blank(line) {
                continue;
            }

            if line.starts_with(DEFINITION_PREFIX) || line.starts_with(KEYWORDS_PREFIX) {
                tracing::warn!(
                    line = cursor.position(),
                    section = %section.title,
                    "Ignoring annotation without a term"
                );
                continue;
            }

            let term = self.parse_term(line, cursor);
            if term.title.is_empty() {
                tracing::warn!(section = %section.title, "Discarding term with empty title");
            } else {
                section.add_term(term);
            }
        }

        section
    }

    /// Parse the definition and keywords belonging to one term title.
    fn parse_term(&self, title_line: &str, cursor: &mut LineCursor<'_>) -> Term {
        let title = title_line.trim();
        let mut term = Term::new(title).with_visualization(self.visualizations.get(title));

        // The line after the title is consumed whether or not it is a definition.
        cursor.skip_blank();
        if let Some(line) = cursor.next_line() {
            match line.strip_prefix(DEFINITION_PREFIX) {
                Some(rest) => term.definition = rest.trim().to_string(),
                None => tracing::warn!(
                    term = %term.title,
                    line = cursor.position(),
                    skipped = %line,
                    "Missing definition, skipping line"
                ),
            }
        }

        while let Some(line) = cursor.peek() {
            if is_blank(line) {
                cursor.advance();
                continue;
            }

            if let Some(rest) = line.strip_prefix(KEYWORDS_PREFIX) {
                term.keywords = split_keywords(rest);
                cursor.advance();
                break;
            }

            // Left for the section loop to pick up.
            if line.starts_with(DEFINITION_PREFIX) || is_section_header(line) {
                break;
            }

            term.extend_definition(line.trim());
            cursor.advance();
        }

        tracing::debug!(id = %term.id, has_viz = term.has_viz, "Term");
        term
    }
}

/// Split a keyword list on commas, trimming each entry.
///
/// An empty list yields one empty keyword.
fn split_keywords(text: &str) -> Vec<String> {
    text.trim()
        .split(',')
        .map(|k| k.trim().to_string())
        .collect()
}
