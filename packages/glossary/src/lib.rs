//! Glossary Pipeline - Turn a sectioned glossary document into chapter JSON.
//!
//! The pipeline has two batch stages connected by a file handoff:
//!
//! 1. **Convert**: parse a plain-text glossary (numbered section headers,
//!    term titles, `Definition:` and `Keywords:` lines) into one chapter.
//! 2. **Split**: partition that chapter's sections into several smaller
//!    chapters according to authored rules.
//!
//! # Example
//!
//! ```
//! use glossary_pipeline::parser::TermParser;
//! use glossary_pipeline::visualization::default_visualizations;
//!
//! let text = "2) Generation Controls\n\
//!             Temperature\n\
//!             \n\
//!             Definition: Controls randomness in output.\n\
//!             Keywords: temperature, randomness, sampling\n";
//!
//! let chapter = TermParser::new(default_visualizations()).parse(text, 1, "LLM", "Terms");
//! let term = &chapter.sections[0].terms[0];
//! assert_eq!(term.id, "temperature");
//! assert_eq!(term.viz_path.as_deref(), Some("visuals/temperature.html"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Authoring-time constants and section header detection
//! - [`types`]: Chapter, Section and Term records
//! - [`error`]: Error types and Result alias
//! - [`visualization`]: Title to visualization lookup
//! - [`parser`]: Line cursor and term parser
//! - [`splitting`]: Split rules and the chapter splitter
//! - [`json`]: Chapter file reading and writing
//! - [`pipeline`]: Convert and split stages
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod error;
pub mod json;
pub mod parser;
pub mod pipeline;
pub mod splitting;
pub mod types;
pub mod visualization;

// Re-export main functions
pub use pipeline::{convert_document, split_chapter};

// Re-export commonly used items
pub use error::{PipelineError, Result};
pub use types::{Chapter, Section, Term, Visualization};
