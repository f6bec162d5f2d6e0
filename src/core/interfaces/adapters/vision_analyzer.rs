use anyhow::Result;
use async_trait::async_trait;

use crate::core::models::AnalysisMode;

/// External vision-model service. Takes the capture pipeline's base64 PNG
/// exactly as produced - no re-encoding or negotiation happens on the way.
#[async_trait]
pub trait VisionAnalyzer: Send + Sync {
    async fn analyze_image(&self, base64_image: &str, mode: AnalysisMode) -> Result<String>;

    /// Follow-up request that revises a previous answer according to the
    /// user's refinement prompt.
    async fn refine_response(
        &self,
        original_response: &str,
        refinement_prompt: &str,
    ) -> Result<String>;
}
