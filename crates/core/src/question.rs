//! Question categories and the draft/analyze branch.
//!
//! A question is assigned exactly one [`QuestionType`] per run, and each
//! type maps to exactly one [`Branch`]. Only reasoning-flavored questions
//! take the deeper (more expensive) analysis branch; everything else goes
//! through the cheaper drafting branch.

use serde::{Deserialize, Serialize};

/// The category assigned to a question by the classification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Asks about people or characters ("who", "character", "person").
    Character,
    /// Wants a description or explanation ("what", "describe", "explain").
    Description,
    /// Asks about places or settings ("where", "location", "setting").
    Location,
    /// Needs deep reasoning ("why", "meaning", "significance").
    Reasoning,
    /// Asks how something happens or works ("how", "method", "process").
    Process,
    /// Wants a summary or overview ("summarize", "overview").
    Summary,
    /// No keyword matched; the default category.
    General,
}

impl QuestionType {
    /// The branch this question type routes to.
    ///
    /// Only [`QuestionType::Reasoning`] is judged to need the higher-cost
    /// deep-analysis branch.
    pub fn branch(&self) -> Branch {
        match self {
            QuestionType::Reasoning => Branch::Analyze,
            _ => Branch::Draft,
        }
    }

    /// Human-readable label used in step reports.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::Character => "character identification",
            QuestionType::Description => "description request",
            QuestionType::Location => "location inquiry",
            QuestionType::Reasoning => "reasoning question",
            QuestionType::Process => "process question",
            QuestionType::Summary => "summary request",
            QuestionType::General => "general question",
        }
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The data-dependent fork between the cheap and deep response paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    /// The cheap templated drafting path.
    Draft,
    /// The deep-analysis path.
    Analyze,
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Branch::Draft => f.write_str("draft"),
            Branch::Analyze => f.write_str("analyze"),
        }
    }
}
