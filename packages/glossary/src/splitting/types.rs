//! Types for the chapter splitting system.

/// Declarative description of one output chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRule {
    /// Number of the produced chapter.
    pub chapter: u32,

    /// Title of the produced chapter.
    pub title: String,

    /// Description of the produced chapter.
    pub description: String,

    /// Zero-based positions into the source section list, in output order.
    pub section_indices: Vec<usize>,
}

impl SplitRule {
    /// Create a rule without any sections.
    #[must_use]
    pub fn new(chapter: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            chapter,
            title: title.into(),
            description: description.into(),
            section_indices: Vec::new(),
        }
    }

    /// Set the section positions to copy.
    #[must_use]
    pub fn with_sections(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.section_indices = indices.into_iter().collect();
        self
    }
}
