use anyhow::{Context, Result};
use tracing::info;

use super::client::{LlmClient, MockLlmClient};
use super::client_impl::ChatCompletionsClient;
use crate::config::Config;

/// Create an LLM client based on configuration
pub fn create_client(config: &Config, dry_run: bool) -> Result<Box<dyn LlmClient>> {
    if dry_run {
        info!("Dry run: using mock LLM client");
        return Ok(Box::new(MockLlmClient::new()));
    }

    let api_key = config.get_api_key()?;

    let client = ChatCompletionsClient::new(
        api_key,
        config.llm.model.clone(),
        config.llm.endpoint.clone(),
        config.llm.timeout(),
    )
    .context("failed to create chat completions client")?;

    Ok(Box::new(client))
}
