//! Chapter splitting by authored section-position rules.
//!
//! A source chapter is partitioned into new chapters, each taking a list of
//! section positions. Sections are cloned verbatim, so one section may land
//! in several output chapters.

mod config;
mod engine;
mod types;

pub use config::create_default_chapter_splits;
pub use engine::ChapterSplitter;
pub use types::SplitRule;
