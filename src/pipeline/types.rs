use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::Language;

pub const UNKNOWN: &str = "unknown";
pub const NOT_FOUND: &str = "not found";
/// Description attached to metadata assembled from a one-shot reply.
pub const DIRECT_DESCRIPTION: &str = "generated directly by the model";

pub const MAX_SCAFFOLD_LEVEL: u8 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("problem id must be a positive integer")]
    InvalidProblemId,

    #[error("scaffold level must be between 0 and 100, got {0}")]
    ScaffoldLevelOutOfRange(u32),

    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// One generation job. Built once from CLI/config input and never changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    problem_id: u32,
    language: Language,
    scaffold_level: u8,
    category: Option<String>,
    commentary_language: String,
}

impl GenerationRequest {
    /// Validate and build a request. An empty or blank category is treated as none.
    pub fn new(
        problem_id: u32,
        language: Language,
        scaffold_level: u32,
        category: Option<String>,
    ) -> Result<Self, RequestError> {
        if problem_id == 0 {
            return Err(RequestError::InvalidProblemId);
        }
        if scaffold_level > u32::from(MAX_SCAFFOLD_LEVEL) {
            return Err(RequestError::ScaffoldLevelOutOfRange(scaffold_level));
        }

        let category = category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        Ok(Self {
            problem_id,
            language,
            scaffold_level: scaffold_level as u8,
            category,
            commentary_language: "English".to_string(),
        })
    }

    pub fn with_commentary_language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        if !language.trim().is_empty() {
            self.commentary_language = language.trim().to_string();
        }
        self
    }

    pub fn problem_id(&self) -> u32 {
        self.problem_id
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn scaffold_level(&self) -> u8 {
        self.scaffold_level
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn commentary_language(&self) -> &str {
        &self.commentary_language
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemMetadata {
    pub title: String,
    pub difficulty: String,
    pub description: String,
    pub examples: String,
    pub constraints: String,
    pub tags: Vec<String>,
}

impl Default for ProblemMetadata {
    fn default() -> Self {
        Self {
            title: UNKNOWN.to_string(),
            difficulty: UNKNOWN.to_string(),
            description: NOT_FOUND.to_string(),
            examples: NOT_FOUND.to_string(),
            constraints: NOT_FOUND.to_string(),
            tags: Vec::new(),
        }
    }
}

impl ProblemMetadata {
    /// Metadata for a one-shot reply: only the title is known.
    pub fn direct(title: String) -> Self {
        Self {
            title,
            description: DIRECT_DESCRIPTION.to_string(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Direct,
    TwoStep,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Direct => "direct",
            Strategy::TwoStep => "two-step",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationResult {
    /// Fence-free source text
    pub code: String,
    pub metadata: ProblemMetadata,
    pub strategy: Strategy,
}
