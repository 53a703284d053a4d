//! Split engine that applies rules to a source chapter.

use super::types::SplitRule;
use crate::error::{PipelineError, Result};
use crate::types::{Chapter, Section};

/// Applies an ordered list of [`SplitRule`]s to a source chapter.
///
/// Rules are independent: each produces one chapter from copies of the
/// referenced sections, untouched. Processing stops at the first rule that
/// references a missing section.
#[derive(Debug, Clone)]
pub struct ChapterSplitter {
    rules: Vec<SplitRule>,
}

impl ChapterSplitter {
    /// Create a splitter for the given rules.
    #[must_use]
    pub fn new(rules: Vec<SplitRule>) -> Self {
        Self { rules }
    }

    /// The configured rules, in application order.
    #[must_use]
    pub fn rules(&self) -> &[SplitRule] {
        &self.rules
    }

    /// Build the chapter described by a single rule.
    pub fn apply(source: &Chapter, rule: &SplitRule) -> Result<Chapter> {
        let sections = rule
            .section_indices
            .iter()
            .map(|&index| {
                source
                    .sections
                    .get(index)
                    .cloned()
                    .ok_or_else(|| PipelineError::SectionOutOfRange {
                        chapter: rule.chapter,
                        index,
                        available: source.sections.len(),
                    })
            })
            .collect::<Result<Vec<Section>>>()?;

        let mut chapter = Chapter::new(rule.chapter, &rule.title, &rule.description);
        chapter.sections = sections;

        tracing::debug!(
            chapter = chapter.chapter,
            sections = chapter.sections.len(),
            terms = chapter.term_count(),
            "Applied split rule"
        );
        Ok(chapter)
    }

    /// Lazily apply every rule in order.
    ///
    /// Callers that persist each chapter as it is yielded keep whatever was
    /// written before a failing rule; nothing after it is produced.
    pub fn split<'a>(
        &'a self,
        source: &'a Chapter,
    ) -> impl Iterator<Item = Result<Chapter>> + 'a {
        self.rules.iter().map(move |rule| Self::apply(source, rule))
    }
}
