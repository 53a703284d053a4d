//! Core data types for glossary chapters.
//!
//! Field names follow the JSON consumed by the presentation layer, so terms
//! serialize with camelCase keys (`hasViz`, `vizPath`, `vizIcon`).
//!
//! Sections and terms keep any keys they do not model in `extra`, so a
//! chapter that a consumer has annotated survives a load/save unchanged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Kind tag written on every parsed section.
pub const SECTION_KIND: &str = "section";

/// Illustration attached to a term title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visualization {
    /// Path of the visual asset, relative to the presentation root.
    pub path: String,

    /// Optional emoji icon shown next to the term.
    pub icon: Option<String>,
}

impl Visualization {
    /// Create a visualization without an icon.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            icon: None,
        }
    }

    /// Set the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Derive a URL-safe identifier from a term title.
///
/// Lowercases, drops parentheses, turns slashes and spaces into hyphens,
/// folds `--` to `-` in one left-to-right pass and trims outer hyphens.
/// Distinct titles may map to the same identifier.
///
/// # Examples
/// ```
/// use glossary_pipeline::types::term_id;
///
/// assert_eq!(term_id("LLM (Large Language Model)"), "llm-large-language-model");
/// assert_eq!(term_id("A/B Prompt Testing"), "a-b-prompt-testing");
/// ```
#[must_use]
pub fn term_id(title: &str) -> String {
    title
        .to_lowercase()
        .replace(['(', ')'], "")
        .replace(['/', ' '], "-")
        .replace("--", "-")
        .trim_matches('-')
        .to_string()
}

/// A single glossary entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Term {
    /// Identifier derived from the title.
    pub id: String,

    /// Term title as written in the source.
    pub title: String,

    /// Definition text, possibly joined from several lines. May be empty.
    pub definition: String,

    /// Keywords in source order.
    pub keywords: Vec<String>,

    /// Whether a visualization is attached.
    pub has_viz: bool,

    /// Visualization asset path.
    pub viz_path: Option<String>,

    /// Visualization icon.
    pub viz_icon: Option<String>,

    /// Learner mastery level, owned by the presentation layer.
    pub mastery: u32,

    /// Whether the learner has opened the term, owned by the presentation layer.
    pub visited: bool,

    /// Quiz question attached later by the presentation layer.
    pub question: Option<Value>,

    /// Keys added by other tools, written back as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Term {
    /// Create a term with an empty definition and no visualization.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: term_id(&title),
            title,
            definition: String::new(),
            keywords: Vec::new(),
            has_viz: false,
            viz_path: None,
            viz_icon: None,
            mastery: 0,
            visited: false,
            question: None,
            extra: Map::new(),
        }
    }

    /// Attach a visualization, or clear it when `None`.
    #[must_use]
    pub fn with_visualization(mut self, viz: Option<&Visualization>) -> Self {
        self.has_viz = viz.is_some();
        self.viz_path = viz.map(|v| v.path.clone());
        self.viz_icon = viz.and_then(|v| v.icon.clone());
        self
    }

    /// Append a continuation line to the definition.
    ///
    /// Continuation only applies once a definition exists; text arriving
    /// before that is dropped.
    pub fn extend_definition(&mut self, text: &str) {
        if !self.definition.is_empty() {
            self.definition.push(' ');
            self.definition.push_str(text);
        }
    }
}

/// A named group of terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// [`SECTION_KIND`] for parsed sections; loaded values are kept as-is.
    #[serde(rename = "type")]
    pub kind: String,

    /// Section title without its numbering.
    pub title: String,

    /// Terms in source order.
    pub terms: Vec<Term>,

    /// Keys added by other tools, written back as-is.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Section {
    /// Create an empty section.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            kind: SECTION_KIND.to_string(),
            title: title.into(),
            terms: Vec::new(),
            extra: Map::new(),
        }
    }

    /// Add a term to the section.
    pub fn add_term(&mut self, term: Term) {
        self.terms.push(term);
    }
}

/// Top-level output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    /// Chapter number, also used for the output file name.
    pub chapter: u32,

    pub title: String,

    pub description: String,

    /// Sections in source order.
    pub sections: Vec<Section>,
}

impl Chapter {
    /// Create a chapter without sections.
    #[must_use]
    pub fn new(chapter: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            chapter,
            title: title.into(),
            description: description.into(),
            sections: Vec::new(),
        }
    }

    /// Add a section to the chapter.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Total number of terms across all sections.
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.sections.iter().map(|s| s.terms.len()).sum()
    }

    /// Terms that carry a visualization, in document order.
    pub fn visualized_terms(&self) -> impl Iterator<Item = &Term> {
        self.sections
            .iter()
            .flat_map(|s| s.terms.iter())
            .filter(|t| t.has_viz)
    }
}
