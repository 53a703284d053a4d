//! End-to-end tests for the convert and split stages.
//!
//! Uses a trimmed copy of the course glossary with seven sections, matching
//! the layout the authored split rules expect.

use std::fs;
use std::path::{Path, PathBuf};

use glossary_pipeline::json::{generate_json, load_chapter, save_chapter};
use glossary_pipeline::pipeline::{convert_document, split_chapter, ChapterMetadata};
use glossary_pipeline::splitting::{create_default_chapter_splits, ChapterSplitter, SplitRule};
use glossary_pipeline::types::Chapter;
use glossary_pipeline::visualization::default_visualizations;
use glossary_pipeline::PipelineError;
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::tempdir;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("planning_doc.md")
}

fn metadata() -> ChapterMetadata {
    ChapterMetadata::new(
        1,
        "LLM Terminology and Concepts",
        "Core concepts, fundamentals, and generation controls for understanding Large Language Models",
    )
}

/// Run the convert stage on the fixture document.
fn convert_fixture() -> Chapter {
    convert_document(&fixture_path(), &metadata(), default_visualizations())
        .unwrap_or_else(|e| panic!("Failed to convert fixture: {e}"))
}

#[test]
fn test_convert_counts() {
    let chapter = convert_fixture();

    assert_eq!(chapter.sections.len(), 7);
    assert_eq!(chapter.term_count(), 14);

    let section_titles: Vec<&str> = chapter.sections.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        section_titles,
        vec![
            "Fundamentals",
            "Generation Controls",
            "Reasoning & Retrieval",
            "Agents & Orchestration",
            "Safety",
            "Interaction Modes",
            "APIs, Playgrounds & Integration",
        ]
    );
}

#[test]
fn test_convert_temperature_term() {
    let chapter = convert_fixture();
    let term = &chapter.sections[1].terms[0];

    assert_eq!(term.id, "temperature");
    assert_eq!(term.title, "Temperature");
    assert_eq!(term.definition, "Controls randomness in output.");
    assert_eq!(term.keywords, vec!["temperature", "randomness", "sampling"]);
    assert!(term.has_viz);
    assert_eq!(term.viz_path.as_deref(), Some("visuals/temperature.html"));
    assert_eq!(term.viz_icon.as_deref(), Some("🌡️"));
}

#[test]
fn test_convert_multi_line_definition() {
    let chapter = convert_fixture();
    let token = &chapter.sections[0].terms[1];

    assert_eq!(token.title, "Token");
    assert_eq!(
        token.definition,
        "The basic unit of text a model reads and writes. Usually a word piece rather than a whole word."
    );
}

#[test]
fn test_convert_visualized_terms() {
    let chapter = convert_fixture();
    let titles: Vec<&str> = chapter.visualized_terms().map(|t| t.title.as_str()).collect();

    assert_eq!(
        titles,
        vec![
            "LLM (Large Language Model)",
            "Token",
            "Embedding",
            "Temperature",
            "Top-p / Nucleus Sampling",
            "CoT (Chain of Thought)",
            "RAG (Retrieval-Augmented Generation)",
            "Agent",
            "Function Calling",
            "Guardrails",
            "Google Colab",
        ]
    );

    let colab = chapter.sections[6]
        .terms
        .iter()
        .find(|t| t.title == "Google Colab")
        .unwrap();
    assert_eq!(colab.viz_path.as_deref(), Some("visuals/google-colab.html"));
    assert!(colab.viz_icon.is_none());
}

#[test]
fn test_convert_placeholders_and_ids() {
    let chapter = convert_fixture();

    for term in chapter.sections.iter().flat_map(|s| s.terms.iter()) {
        assert!(!term.title.is_empty());
        assert!(!term.keywords.is_empty(), "{} has no keywords", term.title);
        assert_eq!(term.mastery, 0);
        assert!(!term.visited);
        assert!(term.question.is_none());
        if !term.has_viz {
            assert!(term.viz_path.is_none());
            assert!(term.viz_icon.is_none());
        }
    }

    assert_eq!(chapter.sections[0].terms[0].id, "llm-large-language-model");
    assert_eq!(chapter.sections[1].terms[1].id, "top-p--nucleus-sampling");
}

#[test]
fn test_convert_output_is_idempotent() {
    let first = generate_json(&convert_fixture()).unwrap();
    let second = generate_json(&convert_fixture()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_saved_chapter_round_trip() {
    let chapter = convert_fixture();
    let temp_dir = tempdir().unwrap();

    let path = save_chapter(&chapter, temp_dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), "chapter1.json");

    let loaded = load_chapter(&path).unwrap();
    assert_eq!(loaded, chapter);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("🌡️"));
    assert!(content.contains("\n  \"sections\": [\n"));
}

#[test]
fn test_default_split() {
    let temp_dir = tempdir().unwrap();
    let path = save_chapter(&convert_fixture(), temp_dir.path()).unwrap();
    let source = load_chapter(&path).unwrap();
    let splitter = ChapterSplitter::new(create_default_chapter_splits());

    let outputs = split_chapter(&source, temp_dir.path(), &splitter, |_| {}).unwrap();

    let summary: Vec<(u32, usize, usize)> = outputs
        .iter()
        .map(|o| {
            (
                o.chapter.chapter,
                o.chapter.sections.len(),
                o.chapter.term_count(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![(1, 2, 6), (2, 1, 2), (3, 1, 2), (4, 2, 2), (5, 1, 2)]
    );

    for number in 1..=5 {
        assert!(temp_dir
            .path()
            .join(format!("chapter{number}.json"))
            .exists());
    }

    // chapter1.json now holds the first split chapter, not the source
    let first = load_chapter(&temp_dir.path().join("chapter1.json")).unwrap();
    assert_eq!(first.title, "LLM Fundamentals & Generation Controls");
}

#[test]
fn test_split_sections_unchanged() {
    let source_chapter = convert_fixture();
    let temp_dir = tempdir().unwrap();
    let path = save_chapter(&source_chapter, temp_dir.path()).unwrap();
    let source = load_chapter(&path).unwrap();
    let out = temp_dir.path().join("split");

    let splitter = ChapterSplitter::new(vec![
        SplitRule::new(10, "First two", "A and B").with_sections([0, 1]),
        SplitRule::new(11, "Third", "C").with_sections([2]),
    ]);
    split_chapter(&source, &out, &splitter, |_| {}).unwrap();

    let first = load_chapter(&out.join("chapter10.json")).unwrap();
    assert_eq!(first.title, "First two");
    assert_eq!(first.description, "A and B");
    assert_eq!(first.sections, source_chapter.sections[0..2].to_vec());

    let second = load_chapter(&out.join("chapter11.json")).unwrap();
    assert_eq!(second.sections, vec![source_chapter.sections[2].clone()]);
}

#[test]
fn test_split_out_of_range_aborts() {
    let temp_dir = tempdir().unwrap();
    let mut small = convert_fixture();
    small.sections.truncate(3);
    let out = temp_dir.path().join("split");

    let splitter = ChapterSplitter::new(vec![
        SplitRule::new(1, "Ok", "").with_sections([0]),
        SplitRule::new(2, "Too far", "").with_sections([5]),
        SplitRule::new(3, "Skipped", "").with_sections([1]),
    ]);
    let err = split_chapter(&small, &out, &splitter, |_| {}).unwrap_err();

    assert!(matches!(
        err,
        PipelineError::SectionOutOfRange {
            chapter: 2,
            index: 5,
            available: 3
        }
    ));
    assert!(out.join("chapter1.json").exists());
    assert!(!out.join("chapter2.json").exists());
    assert!(!out.join("chapter3.json").exists());
}

#[test]
fn test_split_malformed_input() {
    let temp_dir = tempdir().unwrap();
    let source = temp_dir.path().join("chapter1.json");
    fs::write(&source, "not json").unwrap();

    let err = load_chapter(&source).unwrap_err();
    assert!(matches!(err, PipelineError::InvalidJson { .. }));
}

#[test]
fn test_split_preserves_learner_progress() {
    let temp_dir = tempdir().unwrap();
    let path = save_chapter(&convert_fixture(), temp_dir.path()).unwrap();

    // Another tool records progress on the converted file.
    let mut raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let temperature = &mut raw["sections"][1]["terms"][0];
    temperature["mastery"] = json!(4);
    temperature["visited"] = json!(true);
    temperature["lastSeen"] = json!("2026-01-01");
    temperature["question"] = json!({"prompt": "What does it control?", "answer": 1});
    raw["sections"][1]["pinned"] = json!(true);
    fs::write(&path, serde_json::to_string_pretty(&raw).unwrap()).unwrap();

    let source = load_chapter(&path).unwrap();
    let out = temp_dir.path().join("split");
    let splitter = ChapterSplitter::new(create_default_chapter_splits());
    split_chapter(&source, &out, &splitter, |_| {}).unwrap();

    // Rule 1 takes sections 0 and 1, so the term lands in the second section.
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.join("chapter1.json")).unwrap()).unwrap();
    assert_eq!(written["sections"][1], raw["sections"][1]);
    assert_eq!(written["sections"][1]["terms"][0]["lastSeen"], "2026-01-01");
}
