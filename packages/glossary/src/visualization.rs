//! Visualization lookup for term titles.
//!
//! The table is authored alongside the content. Lookup is by exact title:
//! no case folding, no whitespace normalization.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::types::Visualization;

/// Immutable map from term title to its visualization.
#[derive(Debug, Clone, Default)]
pub struct VisualizationRegistry {
    entries: HashMap<String, Visualization>,
}

impl VisualizationRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a visualization for a title, replacing any earlier entry.
    pub fn register(&mut self, title: impl Into<String>, viz: Visualization) {
        self.entries.insert(title.into(), viz);
    }

    /// Look up the visualization for an exact title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Visualization> {
        self.entries.get(title)
    }
}

static DEFAULT_VISUALIZATIONS: LazyLock<VisualizationRegistry> =
    LazyLock::new(create_default_visualizations);

/// Shared instance of the authored table, built on first use.
pub fn default_visualizations() -> &'static VisualizationRegistry {
    &DEFAULT_VISUALIZATIONS
}

/// Build the authored visualization table.
#[must_use]
pub fn create_default_visualizations() -> VisualizationRegistry {
    let mut registry = VisualizationRegistry::new();

    registry.register(
        "The AI Landscape: Understanding the Hierarchy",
        Visualization::new("visuals/ai-hierarchy.html").with_icon("🤖"),
    );
    registry.register(
        "LLM (Large Language Model)",
        Visualization::new("visuals/ai-hierarchy.html").with_icon("🤖"),
    );
    registry.register(
        "Token",
        Visualization::new("visuals/tokens.html").with_icon("🔤"),
    );
    registry.register(
        "Embedding",
        Visualization::new("visuals/embeddings.html").with_icon("📊"),
    );
    registry.register(
        "Semantic Similarity",
        Visualization::new("visuals/embeddings.html").with_icon("📊"),
    );
    registry.register(
        "Temperature",
        Visualization::new("visuals/temperature.html").with_icon("🌡️"),
    );
    registry.register(
        "Top-p / Nucleus Sampling",
        Visualization::new("visuals/temperature.html").with_icon("🌡️"),
    );
    registry.register(
        "Top-k",
        Visualization::new("visuals/temperature.html").with_icon("🌡️"),
    );
    registry.register(
        "Transformer",
        Visualization::new("visuals/transformer.html").with_icon("🔍"),
    );
    registry.register(
        "RAG (Retrieval-Augmented Generation)",
        Visualization::new("visuals/rag.html").with_icon("📚"),
    );
    registry.register(
        "Prompt",
        Visualization::new("visuals/prompt-completion.html").with_icon("💬"),
    );
    registry.register(
        "Completion",
        Visualization::new("visuals/prompt-completion.html").with_icon("💬"),
    );
    registry.register(
        "Message Roles (System/User/Assistant/Tool)",
        Visualization::new("visuals/prompt-completion.html").with_icon("💬"),
    );
    registry.register(
        "Zero-shot Learning",
        Visualization::new("visuals/shot-learning.html").with_icon("🎯"),
    );
    registry.register(
        "1-shot Learning",
        Visualization::new("visuals/shot-learning.html").with_icon("🎯"),
    );
    registry.register(
        "Few-shot Learning",
        Visualization::new("visuals/shot-learning.html").with_icon("🎯"),
    );
    registry.register(
        "CoT (Chain of Thought)",
        Visualization::new("visuals/cot-modern-llms.html").with_icon("🧠"),
    );
    registry.register("Google Colab", Visualization::new("visuals/google-colab.html"));
    registry.register(
        "AI Studio vs Gemini Enterprise",
        Visualization::new("visuals/ai-studio-vs-enterprise.html"),
    );
    registry.register("Project Dump Strategy", Visualization::new("visuals/dump-strategy.html"));
    registry.register("Token Budget Awareness", Visualization::new("visuals/token-budget.html"));
    registry.register(
        "Multi-File Project Organization",
        Visualization::new("visuals/code-organization-static-dynamic.html"),
    );
    registry.register(
        "PyCharm Project Setup",
        Visualization::new("visuals/pycharm-project-setup.html"),
    );
    registry.register(
        "README-Driven Development",
        Visualization::new("visuals/readme-example.html"),
    );
    registry.register(
        "Incremental Development Pattern",
        Visualization::new("visuals/incremental-development.html"),
    );
    registry.register(
        "Effective Error Communication",
        Visualization::new("visuals/error-communication.html"),
    );
    registry.register(
        "Breaking Out of AI Loops",
        Visualization::new("visuals/breaking-loops.html"),
    );
    registry.register(
        "Guardrails",
        Visualization::new("visuals/safety-quality-system.html").with_icon("🛡️"),
    );
    registry.register(
        "Safety Filters",
        Visualization::new("visuals/safety-quality-system.html").with_icon("🛡️"),
    );
    registry.register(
        "Grounded Answering",
        Visualization::new("visuals/safety-quality-system.html").with_icon("🛡️"),
    );
    registry.register(
        "AI Alignment",
        Visualization::new("visuals/safety-quality-system.html").with_icon("🛡️"),
    );
    registry.register(
        "Evaluation Metrics",
        Visualization::new("visuals/safety-quality-system.html").with_icon("🛡️"),
    );
    registry.register(
        "A/B Prompt Testing",
        Visualization::new("visuals/safety-quality-system.html").with_icon("🛡️"),
    );
    registry.register(
        "Agent",
        Visualization::new("visuals/agents-orchestration.html").with_icon("🤖"),
    );
    registry.register(
        "Autonomous Agent",
        Visualization::new("visuals/agents-orchestration.html").with_icon("🤖"),
    );
    registry.register(
        "Tool Invocation",
        Visualization::new("visuals/agents-orchestration.html").with_icon("🤖"),
    );
    registry.register(
        "Function Calling",
        Visualization::new("visuals/agents-orchestration.html").with_icon("🤖"),
    );
    registry.register(
        "Plugins / Tools API",
        Visualization::new("visuals/agents-orchestration.html").with_icon("🤖"),
    );
    registry.register(
        "MCP (Model Context Protocol)",
        Visualization::new("visuals/agents-orchestration.html").with_icon("🤖"),
    );
    registry.register(
        "Tool Orchestration",
        Visualization::new("visuals/agents-orchestration.html").with_icon("🤖"),
    );
    registry.register(
        "Planning",
        Visualization::new("visuals/agents-orchestration.html").with_icon("🤖"),
    );
    registry.register(
        "Finding Libraries & Packages",
        Visualization::new("visuals/library-finding.html"),
    );
    registry.register(
        "Streamlit for Python UI",
        Visualization::new("visuals/streamlit-example.html"),
    );
    registry.register(
        "HTML/CSS/JS File Organization",
        Visualization::new("visuals/html-file-organization.html"),
    );
    registry.register(
        "Gemini Canvas & Preview for HTML Prototyping",
        Visualization::new("visuals/gemini-canvas-html.html"),
    );
    registry.register(
        "Publishing to Google Sites (Single-File Consolidation)",
        Visualization::new("visuals/html-consolidation.html"),
    );

    registry
}
