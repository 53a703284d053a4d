//! Authored split of the converted glossary into five chapters.

use super::types::SplitRule;

/// Create the split rules for the converted glossary.
///
/// The source chapter holds seven sections:
///
/// ```text
/// 0 Fundamentals            -> chapter 1
/// 1 Generation Controls     -> chapter 1
/// 2 Reasoning & Retrieval   -> chapter 2
/// 3 Agents & Orchestration  -> chapter 3
/// 4 Safety                  -> chapter 4
/// 5 Interaction Modes       -> chapter 4
/// 6 APIs & Integration      -> chapter 5
/// ```
#[must_use]
pub fn create_default_chapter_splits() -> Vec<SplitRule> {
    vec![
        SplitRule::new(
            1,
            "LLM Fundamentals & Generation Controls",
            "Core concepts, token processing, transformers, and basic generation parameters",
        )
        .with_sections([0, 1]),
        SplitRule::new(
            2,
            "Reasoning & Retrieval",
            "Chain of thought, RAG, tool use, and advanced prompting techniques",
        )
        .with_sections([2]),
        SplitRule::new(
            3,
            "Agents & Orchestration",
            "Autonomous agents, planning, function calling, and coding agents",
        )
        .with_sections([3]),
        SplitRule::new(
            4,
            "Safety, Quality & Production",
            "Guardrails, evaluation, safety filters, and production interaction modes",
        )
        .with_sections([4, 5]),
        SplitRule::new(
            5,
            "APIs & Integration",
            "API providers, playgrounds, SDKs, model providers, and development workflows",
        )
        .with_sections([6]),
    ]
}
