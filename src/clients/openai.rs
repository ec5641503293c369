// src/clients/openai.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ChatCompletion, CompletionRequest, UpstreamErr};
use crate::config::OpenAiConfig;

#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    model: String,
    url: String,
}

#[derive(Serialize)]
struct ChatBody<'a> {
    model: &'a str,
    messages: [Msg<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct Msg<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct Choice {
    message: Value,
}

#[derive(Deserialize)]
struct ApiResp {
    choices: Vec<Choice>,
}

impl OpenAiClient {
    pub fn new(cfg: &OpenAiConfig) -> Result<Self, UpstreamErr> {
        let http = Client::builder().timeout(cfg.timeout).build()?;
        Ok(Self {
            http,
            api_key: cfg.api_key.clone(),
            model: cfg.model.clone(),
            url: format!("{}/chat/completions", cfg.base_url.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    async fn complete(&self, req: &CompletionRequest) -> Result<String, UpstreamErr> {
        let body = ChatBody {
            model: &self.model,
            messages: [
                Msg { role: "system", content: &req.system_prompt },
                Msg { role: "user", content: &req.user_message },
            ],
            max_tokens: req.max_tokens,
            temperature: req.temperature,
        };

        let resp = self
            .http
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        // non-2xx: keep status and body as-is for the caller
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(UpstreamErr::Rejected { status: status.as_u16(), body });
        }

        let api: ApiResp = resp
            .json()
            .await
            .map_err(|e| UpstreamErr::Malformed(e.to_string()))?;

        let choice = api
            .choices
            .first()
            .ok_or_else(|| UpstreamErr::Malformed("no choices in completion".into()))?;

        // null content (refusals, tool calls) leaves nothing to show
        match choice.message.get("content").and_then(Value::as_str) {
            Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
            _ => Err(UpstreamErr::Malformed("completion has no text content".into())),
        }
    }
}
