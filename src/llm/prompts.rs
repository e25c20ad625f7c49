// Prompt templates for the info lookup and the two skeleton variants

use crate::pipeline::types::{GenerationRequest, ProblemMetadata};

/// How much of the solution the skeleton pre-fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldTier {
    Minimal,
    Framework,
    NearComplete,
}

impl ScaffoldTier {
    pub fn from_level(level: u8) -> Self {
        if level < 20 {
            ScaffoldTier::Minimal
        } else if level <= 70 {
            ScaffoldTier::Framework
        } else {
            ScaffoldTier::NearComplete
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScaffoldTier::Minimal => "signatures and minimal comments only",
            ScaffoldTier::Framework => "full framework, algorithm body blank, TODO-annotated",
            ScaffoldTier::NearComplete => "near-complete solution, only key gaps left",
        }
    }
}

/// Extra instruction for a requested technique; empty when there is none.
fn category_clause(request: &GenerationRequest) -> String {
    match request.category() {
        Some(category) => format!(
            "\nFocus on the {} technique: explain in comments how it applies to this problem and outline its key steps.\n",
            category
        ),
        None => String::new(),
    }
}

/// Requirements shared by both skeleton prompts, numbered from `start`.
fn skeleton_requirements(request: &GenerationRequest, start: usize) -> String {
    let language = request.language();
    let tier = ScaffoldTier::from_level(request.scaffold_level());

    let items = [
        format!(
            "Completeness is {}%, which means: {}.",
            request.scaffold_level(),
            tier.description()
        ),
        "Explain the algorithm idea and its time and space complexity in comments.".to_string(),
        "Mark every part the learner must implement with a clear TODO comment and give hints for the key steps without writing them out.".to_string(),
        format!(
            "Write all comments, descriptions and hints in {}.",
            request.commentary_language()
        ),
        format!(
            "Do not write a main function or any other executable entry point. Use {} instead.",
            language.test_idiom()
        ),
        "Include at least 2 test cases so the file can be run and debugged with the standard test runner.".to_string(),
        "Include every import the tests need and make sure nothing is declared but unused.".to_string(),
        "Provide a comparison helper when the expected output may come in any order.".to_string(),
    ];

    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", start + i, item))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Ask for the problem statement as a fixed JSON object.
pub fn problem_info_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"Provide the details of LeetCode problem #{id}: title, difficulty, full description, examples and constraints.

Respond with a single JSON object in exactly this shape:
{{
  "title": "problem title",
  "difficulty": "Easy/Medium/Hard",
  "description": "full problem description",
  "examples": "all given examples",
  "constraints": "all constraints",
  "tags": ["related tags", "algorithm categories"]
}}

Write the field values in {commentary}. Return valid JSON only, with no explanation before or after it."#,
        id = request.problem_id(),
        commentary = request.commentary_language(),
    )
}

/// Skeleton prompt conditioned on metadata fetched by [`problem_info_prompt`].
pub fn skeleton_from_info_prompt(request: &GenerationRequest, info: &ProblemMetadata) -> String {
    let tags = if info.tags.is_empty() {
        "none".to_string()
    } else {
        info.tags.join(", ")
    };

    format!(
        r#"You are an algorithms expert. Create a {language} code skeleton for the following LeetCode problem.

Problem #{id}: {title}
Difficulty: {difficulty}
Tags: {tags}

Description:
{description}

Examples:
{examples}

Constraints:
{constraints}

Requirements:
1. Start the file with a comment that restates the problem title, difficulty and a short description.
{requirements}
{category}
Return only the code, with no other explanation."#,
        language = request.language(),
        id = request.problem_id(),
        title = info.title,
        difficulty = info.difficulty,
        tags = tags,
        description = info.description,
        examples = info.examples,
        constraints = info.constraints,
        requirements = skeleton_requirements(request, 2),
        category = category_clause(request),
    )
}

/// One-shot prompt: the model recalls the problem and writes the skeleton in one reply.
pub fn direct_skeleton_prompt(request: &GenerationRequest) -> String {
    format!(
        r#"You are an algorithms expert who knows the LeetCode problem set well. Create a {language} code skeleton for LeetCode problem #{id} directly.

Requirements:
1. Open the file with a comment line of the form "Problem: <title>", followed by the difficulty and a short description of the problem.
2. Sketch at least two possible solution approaches.
{requirements}
{category}
Return only the code, with no other explanation."#,
        language = request.language(),
        id = request.problem_id(),
        requirements = skeleton_requirements(request, 3),
        category = category_clause(request),
    )
}
