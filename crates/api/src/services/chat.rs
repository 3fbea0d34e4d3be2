// Chat service
//
// Forwards one user message to the configured assistant driver, wrapped in
// the storefront prompt. A missing driver behaves like an upstream failure.

use marquee_core::{build_prompt, AssistantError, BoxedAssistantDriver};

pub struct ChatService {
    driver: Option<BoxedAssistantDriver>,
}

impl ChatService {
    pub fn new(driver: Option<BoxedAssistantDriver>) -> Self {
        Self { driver }
    }

    /// A service with no driver; every reply fails with `NotConfigured`.
    pub fn disabled() -> Self {
        Self { driver: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.driver.is_some()
    }

    pub async fn reply(&self, message: &str) -> Result<String, AssistantError> {
        let driver = self.driver.as_ref().ok_or_else(|| {
            AssistantError::not_configured("no assistant driver configured (set GEMINI_API_KEY)")
        })?;

        tracing::debug!(
            provider = driver.provider_name(),
            message_len = message.len(),
            "Forwarding chat message"
        );

        driver.generate(&build_prompt(message)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use marquee_core::AssistantDriver;
    use std::sync::{Arc, Mutex};

    struct RecordingDriver {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl AssistantDriver for RecordingDriver {
        async fn generate(&self, prompt: &str) -> Result<String, AssistantError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("sure".to_string())
        }

        fn provider_name(&self) -> &str {
            "recording"
        }
    }

    #[tokio::test]
    async fn test_reply_wraps_message_in_prompt() {
        let driver = Arc::new(RecordingDriver {
            prompts: Mutex::new(Vec::new()),
        });
        let boxed: BoxedAssistantDriver = driver.clone();
        let service = ChatService::new(Some(boxed));

        let reply = service.reply("Any shows in Goa?").await.unwrap();

        assert_eq!(reply, "sure");
        let prompts = driver.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], build_prompt("Any shows in Goa?"));
    }

    #[tokio::test]
    async fn test_disabled_service_reports_not_configured() {
        let service = ChatService::disabled();
        assert!(!service.is_enabled());

        let err = service.reply("hello").await.unwrap_err();
        assert!(matches!(err, AssistantError::NotConfigured(_)));
    }
}
