use tracing::{info, warn};

use super::normalizer;
use super::title;
use super::types::{GenerationRequest, GenerationResult, ProblemMetadata, Strategy};
use crate::llm::client::LlmClient;
use crate::llm::error::LlmError;
use crate::llm::prompts;

/// Drives the two generation strategies against a single LLM client.
///
/// Direct is always tried first. TwoStep runs only when the Direct call
/// itself fails; a successful but poor Direct reply is returned as is.
pub struct Generator {
    client: Box<dyn LlmClient>,
}

impl Generator {
    pub fn new(client: Box<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, LlmError> {
        info!(
            "Generating {} skeleton for problem #{} ({}% complete)",
            request.language(),
            request.problem_id(),
            request.scaffold_level()
        );

        match self.generate_direct(request).await {
            Ok(result) => Ok(result),
            Err(direct_err) => {
                warn!(
                    "Direct generation failed ({}): {}",
                    direct_err.kind(),
                    direct_err
                );
                info!("Falling back to two-step generation");
                self.generate_two_step(request).await
            }
        }
    }

    /// One call: the model recalls the problem and writes the skeleton.
    pub async fn generate_direct(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, LlmError> {
        info!("Direct: requesting skeleton...");
        let reply = self
            .client
            .complete(&prompts::direct_skeleton_prompt(request))
            .await?;

        let code = normalizer::clean_code(&reply);
        let title = title::extract_title(&code, request.problem_id());
        info!("Direct: got {} bytes of code, title \"{}\"", code.len(), title);

        Ok(GenerationResult {
            code,
            metadata: ProblemMetadata::direct(title),
            strategy: Strategy::Direct,
        })
    }

    /// Two calls: fetch the problem info, then the skeleton built from it.
    pub async fn generate_two_step(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, LlmError> {
        info!("TwoStep 1/2: requesting problem info...");
        let info_reply = self
            .client
            .complete(&prompts::problem_info_prompt(request))
            .await?;
        let metadata = normalizer::parse_info(&info_reply);

        info!("TwoStep 2/2: requesting skeleton for \"{}\"...", metadata.title);
        let reply = self
            .client
            .complete(&prompts::skeleton_from_info_prompt(request, &metadata))
            .await?;

        Ok(GenerationResult {
            code: normalizer::clean_code(&reply),
            metadata,
            strategy: Strategy::TwoStep,
        })
    }
}
