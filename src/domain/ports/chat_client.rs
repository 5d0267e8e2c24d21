use async_trait::async_trait;
use thiserror::Error;

/// Errors a chat backend can surface.
///
/// Callers treat every variant the same way — as an unavailable or
/// non-compliant model — but the variants keep the cause visible in logs
/// and envelopes.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("{0}")]
    Api(String),

    /// The backend answered, but the reply carried no usable text.
    #[error("chat reply contained no content")]
    EmptyReply,
}

/// Port trait for the chat-completion backend.
///
/// One prompt in, the reply's text out. The implementation owns the model
/// selection and transport; the pipeline only ever sees `ChatError` values,
/// never raw transport faults.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, ChatError>;
}
