//! Failover backend - primary/fallback escalation over the chat port
//!
//! Every pipeline stage that needs text generation goes through here.
//! The contract is total: a completion request always yields text. A
//! primary failure escalates once to a distinct, smaller fallback model;
//! if that fails too, a fixed apology string is returned. Downstream
//! components treat the output as always-present free text, so no error
//! ever propagates out of [`FailoverBackend::invoke`].

use crate::ports::chat_model::ChatModel;
use coverquery_domain::{APOLOGY, Message};
use std::sync::Arc;
use tracing::warn;

/// Chat backend with a single escalation step
#[derive(Clone)]
pub struct FailoverBackend {
    gateway: Arc<dyn ChatModel>,
    primary: String,
    fallback: String,
}

impl FailoverBackend {
    pub fn new(
        gateway: Arc<dyn ChatModel>,
        primary: impl Into<String>,
        fallback: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            primary: primary.into(),
            fallback: fallback.into(),
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Request a completion, absorbing all failure into text
    pub async fn invoke(&self, messages: &[Message]) -> String {
        match self.gateway.complete(&self.primary, messages).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Primary model {} failed: {}", self.primary, e);
                match self.gateway.complete(&self.fallback, messages).await {
                    Ok(text) => text,
                    Err(e2) => {
                        warn!("Fallback model {} failed: {}", self.fallback, e2);
                        APOLOGY.to_string()
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::chat_model::ModelError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Chat model stub that fails for the listed model names
    struct StubModel {
        failing: Vec<&'static str>,
        calls: AtomicUsize,
    }

    impl StubModel {
        fn failing(models: Vec<&'static str>) -> Self {
            Self {
                failing: models,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ChatModel for StubModel {
        async fn complete(
            &self,
            model: &str,
            _messages: &[Message],
        ) -> Result<String, ModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.failing.contains(&model) {
                Err(ModelError::RequestFailed(format!("{model} unavailable")))
            } else {
                Ok(format!("reply from {model}"))
            }
        }
    }

    fn backend(stub: Arc<StubModel>) -> FailoverBackend {
        FailoverBackend::new(stub, "big-model", "small-model")
    }

    #[tokio::test]
    async fn primary_success_skips_fallback() {
        let stub = Arc::new(StubModel::failing(vec![]));
        let backend = backend(Arc::clone(&stub));

        let reply = backend.invoke(&[Message::user("hi")]).await;
        assert_eq!(reply, "reply from big-model");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn primary_failure_escalates_to_fallback() {
        let stub = Arc::new(StubModel::failing(vec!["big-model"]));
        let backend = backend(Arc::clone(&stub));

        let reply = backend.invoke(&[Message::user("hi")]).await;
        assert_eq!(reply, "reply from small-model");
        assert_eq!(stub.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn total_failure_yields_apology() {
        let stub = Arc::new(StubModel::failing(vec!["big-model", "small-model"]));
        let backend = backend(Arc::clone(&stub));

        let reply = backend.invoke(&[Message::user("hi")]).await;
        assert_eq!(reply, APOLOGY);
    }
}
