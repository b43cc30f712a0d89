use crate::llm::types::{CompletionError, CompletionRequest, CompletionResponse};
use futures::future::BoxFuture;

/// Generic text-completion provider that can be implemented by any hosted
/// model service.
pub trait TextCompletion: Send + Sync {
    /// Execute a single completion request.
    fn complete(
        &self,
        request: CompletionRequest,
    ) -> BoxFuture<'_, Result<CompletionResponse, CompletionError>>;

    /// Provider name for logging and diagnostics.
    fn provider_name(&self) -> &'static str;
}
