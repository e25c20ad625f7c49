use anyhow::{Context, Result};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use crate::catalog::Language;
use crate::config::Config;
use crate::llm::factory;
use crate::pipeline::emitter::{self, FileEmitter};
use crate::pipeline::generator::Generator;
use crate::pipeline::types::GenerationRequest;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    problem_id: u32,
    language_override: Option<String>,
    level_override: Option<u32>,
    category: Option<String>,
    model_override: Option<String>,
    endpoint_override: Option<String>,
    output_override: Option<String>,
    commentary_override: Option<String>,
    config_path: Option<String>,
    dry_run: bool,
) -> Result<PathBuf> {
    if let Some(ref cfg) = config_path {
        info!("Config: {}", cfg);
    }
    info!("Dry run: {}", dry_run);

    // Load config (explicit path, working dir, or user config dir)
    let mut config = Config::load_with_path(config_path)?;

    // Apply CLI overrides
    if let Some(ref model) = model_override {
        info!("CLI override: model = {}", model);
        config.llm.model = model.clone();
    }
    if let Some(ref endpoint) = endpoint_override {
        info!("CLI override: endpoint = {}", endpoint);
        config.llm.endpoint = endpoint.clone();
    }
    if let Some(ref language) = language_override {
        info!("CLI override: language = {}", language);
        config.generation.language = language.clone();
    }
    if let Some(level) = level_override {
        info!("CLI override: scaffold_level = {}", level);
        config.generation.scaffold_level = level;
    }
    if let Some(ref output) = output_override {
        info!("CLI override: output_dir = {}", output);
        config.generation.output_dir = output.clone();
    }
    if let Some(ref commentary) = commentary_override {
        info!("CLI override: commentary_language = {}", commentary);
        config.generation.commentary_language = commentary.clone();
    }

    // Validate everything before any network call
    let language = Language::from_str(&config.generation.language).with_context(|| {
        let supported: Vec<&str> = Language::ALL.iter().map(|l| l.as_str()).collect();
        format!("supported languages: {}", supported.join(", "))
    })?;
    let request = GenerationRequest::new(
        problem_id,
        language,
        config.generation.scaffold_level,
        category,
    )?
    .with_commentary_language(config.generation.commentary_language.clone());

    info!("Processing problem #{}...", request.problem_id());
    if !dry_run {
        info!("Using model {} at {}", config.llm.model, config.llm.endpoint);
    }

    let client = factory::create_client(&config, dry_run)?;
    let generator = Generator::new(client);

    let result = generator
        .generate(&request)
        .await
        .context("failed to generate code skeleton")?;

    let emitter = FileEmitter::new(&config.generation.output_dir);
    let path = emitter.emit(&request, &result)?;

    info!("✓ Generated practice file: {}", path.display());
    info!("  Title: {}", result.metadata.title);
    info!("  Difficulty: {}", result.metadata.difficulty);
    if let Some(category) = request.category() {
        info!("  Category: {}", category);
    }
    info!("  Completeness: {}%", request.scaffold_level());
    info!("  Strategy: {}", result.strategy.as_str());
    info!(
        "  Run tests: cd {} && {}",
        emitter.language_dir(language).display(),
        language.test_command(&emitter::file_name(request.problem_id(), language))
    );

    Ok(path)
}
