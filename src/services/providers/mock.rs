//! Mock provider implementation for testing.

use super::{
    ChatMessage, ChatProvider, FinishReason, GenerationParams, ProviderError, ProviderResponse,
};
use async_trait::async_trait;

/// Mock chat provider returning a canned completion.
pub struct MockChatProvider {
    enabled: bool,
    response: String,
}

impl MockChatProvider {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            enabled: true,
            response: response.into(),
        }
    }

    /// A provider that fails every call, for exercising error paths.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            response: String::new(),
        }
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn complete(
        &self,
        _messages: &[ChatMessage],
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        if !self.enabled {
            return Err(ProviderError::NotConfigured(
                "Mock chat provider not enabled".to_string(),
            ));
        }

        Ok(ProviderResponse {
            text: Some(self.response.clone()),
            input_tokens: self.response.len() as i32 / 4,
            output_tokens: self.response.len() as i32 / 4,
            finish_reason: FinishReason::Complete,
        })
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.enabled {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock chat provider not enabled".to_string(),
            ))
        }
    }
}
