//! Tour Script — the fixed, ordered sequence of steps a tour walks through.
//!
//! A step names the dashboard section to activate, the anchor inside it to
//! scroll to (the step's own id), a title for on-screen highlighting, and
//! the text to narrate. The script is built once at startup and never
//! mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// ── Error Types ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    DuplicateStepId(String),
    UnknownSection { step_id: String, section_id: String },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::DuplicateStepId(id) => write!(f, "Duplicate tour step id: {}", id),
            ScriptError::UnknownSection { step_id, section_id } => write!(
                f,
                "Tour step '{}' targets unknown section '{}'",
                step_id, section_id
            ),
        }
    }
}

impl std::error::Error for ScriptError {}

// ── Tour Step ──────────────────────────────────────────

/// One unit of the tour: a section to show, an anchor to focus
/// (the step id doubles as the anchor id), and narration text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourStep {
    pub id: String,
    pub section_id: String,
    pub title: String,
    pub narration: String,
}

impl TourStep {
    pub fn new(
        id: impl Into<String>,
        section_id: impl Into<String>,
        title: impl Into<String>,
        narration: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            section_id: section_id.into(),
            title: title.into(),
            narration: narration.into(),
        }
    }
}

// ── Tour Script ────────────────────────────────────────

/// Validated, read-only sequence of tour steps.
#[derive(Debug, Clone)]
pub struct TourScript {
    steps: Vec<TourStep>,
}

impl TourScript {
    /// Build a script, rejecting duplicate step ids. An empty script is
    /// accepted here; `TourController::start` refuses to run it.
    pub fn new(steps: Vec<TourStep>) -> Result<Self, ScriptError> {
        let mut seen = HashSet::new();
        for step in &steps {
            if !seen.insert(step.id.as_str()) {
                return Err(ScriptError::DuplicateStepId(step.id.clone()));
            }
        }
        Ok(Self { steps })
    }

    /// Check every step's section against the content provider's known
    /// section ids.
    pub fn verify_sections(&self, known_sections: &[&str]) -> Result<(), ScriptError> {
        for step in &self.steps {
            if !known_sections.contains(&step.section_id.as_str()) {
                return Err(ScriptError::UnknownSection {
                    step_id: step.id.clone(),
                    section_id: step.section_id.clone(),
                });
            }
        }
        Ok(())
    }

    pub fn get(&self, index: usize) -> Option<&TourStep> {
        self.steps.get(index)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[TourStep] {
        &self.steps
    }

    /// The dashboard's built-in tour: one step per section, in the order
    /// the sections appear in the tab bar.
    pub fn dashboard_script() -> Self {
        let steps = vec![
            TourStep::new(
                "tour-overview",
                "overview",
                "Project Overview",
                "Welcome to the project dashboard. We built a NotebookLM-style \
                 retrieval augmented generation system: a chatbot that answers \
                 domain questions from a custom knowledge base, with summaries, \
                 insights, and learning tools generated from uploaded documents.",
            ),
            TourStep::new(
                "tour-problem",
                "problem",
                "Problem & Solution",
                "The problem: manual document processing is slow, search is \
                 inadequate, and knowledge is scattered. Our solution grounds an \
                 AI assistant in your own documents, giving instant answers with \
                 source citations at no cost.",
            ),
            TourStep::new(
                "tour-architecture",
                "architecture",
                "Architecture",
                "The pipeline runs in three stages. Extraction pulls clean text \
                 from each upload, chunking splits it into overlapping thousand \
                 character pieces, and vectorization indexes every chunk for \
                 cosine similarity retrieval.",
            ),
            TourStep::new(
                "tour-features",
                "features",
                "Features",
                "Eight core features: document summaries, key insights, a table \
                 of contents, mind maps, quizzes, flashcards, grounded chat, and \
                 audio summaries. Everything is generated directly from the \
                 uploaded material.",
            ),
            TourStep::new(
                "tour-tech",
                "tech",
                "Tech Stack",
                "The stack is deliberately lightweight: a Streamlit interface, \
                 GROQ for fast language model inference, PyMuPDF for extraction, \
                 and scikit-learn TF-IDF vectors for retrieval. No GPU required.",
            ),
            TourStep::new(
                "tour-metrics",
                "metrics",
                "Metrics",
                "Performance in practice: queries answer in one to two seconds, \
                 documents process end to end in under five, and retrieval \
                 itself takes around a hundred milliseconds. That concludes the \
                 tour — thanks for listening.",
            ),
        ];
        // The built-in step ids are unique by construction.
        Self { steps }
    }
}
