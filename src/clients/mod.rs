//! Outbound HTTP clients and the traits functions see them through.

use async_trait::async_trait;

pub mod openai;
pub mod yookassa;
#[cfg(test)]
pub mod stub;

pub use openai::OpenAiClient;
pub use yookassa::YooKassaClient;

/// How a third-party call can fail.
#[derive(thiserror::Error, Debug)]
pub enum UpstreamErr {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a status we do not accept.
    #[error("HTTP {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("unexpected response: {0}")]
    Malformed(String),
}

/* ------------------------- chat completion ------------------------- */

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_message: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// One completion; returns the assistant text.
    async fn complete(&self, req: &CompletionRequest) -> Result<String, UpstreamErr>;
}

/* ------------------------- payment gateway ------------------------- */

/// The gateway's answer to a created order.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedPayment {
    pub id: Option<String>,
    pub confirmation_url: Option<String>,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_payment(
        &self,
        order: &yookassa::PaymentOrder,
        idempotence_key: &str,
    ) -> Result<CreatedPayment, UpstreamErr>;
}
