// src/routes/ai_chat.rs

use serde::Serialize;

use crate::{
    clients::CompletionRequest,
    error::{upstream, AppErr, AppResult},
    function::{Event, Reply},
    responder::Lang,
    state::AppState,
    utils::fields,
};

const MAX_TOKENS: u32 = 1000;
const TEMPERATURE: f32 = 0.7;

const PROMPT_RU: &str = "Ты AI-ассистент NeuroPulse для студентов и школьников. \
Помогай с учёбой: решай задачи, объясняй материал, создавай таблицы, пиши тексты. \
Отвечай понятно и дружелюбно.";

const PROMPT_EN: &str = "You are NeuroPulse AI assistant for students. \
Help with studies: solve problems, explain topics, create tables, write texts. \
Be clear and friendly.";

#[derive(Serialize)]
struct ChatResp {
    response: String,
    success: bool,
}

pub fn system_prompt(lang: Lang) -> &'static str {
    match lang {
        Lang::Ru => PROMPT_RU,
        Lang::En => PROMPT_EN,
    }
}

pub async fn handle(state: &AppState, event: &Event) -> AppResult<Reply> {
    if event.method != "POST" {
        return Err(AppErr::MethodNotAllowed);
    }

    // 1) body
    let body = event.json_object("Invalid JSON")?;
    let message = fields::text(&body, "message")
        .ok_or_else(|| AppErr::Validation("Message is required".into()))?;
    let lang = Lang::from_tag(&fields::text_or(&body, "language", "ru"));

    // 2) client (absent when no API key)
    let chat = state
        .chat
        .as_ref()
        .ok_or_else(|| AppErr::Config("OpenAI API key not configured".into()))?;

    // 3) one completion, no retry
    let req = CompletionRequest {
        system_prompt: system_prompt(lang).to_string(),
        user_message: message,
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    };
    let response = chat.complete(&req).await.map_err(|e| {
        tracing::warn!(error = %e, "completion failed");
        upstream("AI error", e)
    })?;

    let user = fields::text(&body, "userId")
        .or_else(|| event.header("x-user-id").map(str::to_string))
        .unwrap_or_else(|| "-".into());
    tracing::info!(
        request_id = %event.request_id,
        user = %user,
        chars = response.chars().count(),
        "completion served"
    );
    Ok(Reply::ok(&ChatResp { response, success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::stub::StubChat;
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn post(body: &str) -> Event {
        Event::new("POST", Some(body.to_string()))
    }

    #[tokio::test]
    async fn empty_object_is_rejected() {
        let state = AppState::unconfigured().with_chat(Arc::new(StubChat::answering("hi")));
        let err = handle(&state, &post("{}")).await.unwrap_err();
        let reply = err.into_reply();
        assert_eq!(reply.status, StatusCode::BAD_REQUEST);
        assert_eq!(reply.json_body(), serde_json::json!({"error": "Message is required"}));
    }

    #[tokio::test]
    async fn validation_runs_before_config_check() {
        let err = handle(&AppState::unconfigured(), &post(r#"{"message":""}"#)).await.unwrap_err();
        assert!(matches!(err, AppErr::Validation(_)));
    }

    #[tokio::test]
    async fn missing_key_is_config_error() {
        let err = handle(&AppState::unconfigured(), &post(r#"{"message":"2+2"}"#)).await.unwrap_err();
        assert!(matches!(err, AppErr::Config(ref m) if m == "OpenAI API key not configured"));
    }

    #[tokio::test]
    async fn answer_is_passed_through() {
        let stub = Arc::new(StubChat::answering("**4**"));
        let state = AppState::unconfigured().with_chat(stub.clone());

        let reply = handle(&state, &post(r#"{"message":"2+2?","language":"en","userId":5}"#)).await.unwrap();
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.json_body(), serde_json::json!({"response": "**4**", "success": true}));
        assert_eq!(reply.header("content-type"), Some("application/json"));

        let seen = stub.last().unwrap();
        assert_eq!(seen.system_prompt, PROMPT_EN);
        assert_eq!(seen.user_message, "2+2?");
        assert_eq!(seen.max_tokens, 1000);
    }

    #[tokio::test]
    async fn language_defaults_to_russian() {
        let stub = Arc::new(StubChat::answering("ok"));
        let state = AppState::unconfigured().with_chat(stub.clone());
        handle(&state, &post(r#"{"message":"привет"}"#)).await.unwrap();
        assert_eq!(stub.last().unwrap().system_prompt, PROMPT_RU);
    }

    #[tokio::test]
    async fn upstream_failure_embeds_detail() {
        let state = AppState::unconfigured().with_chat(Arc::new(StubChat::failing(429, "quota exceeded")));
        let reply = handle(&state, &post(r#"{"message":"hi"}"#)).await.unwrap_err().into_reply();
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        let msg = reply.json_body()["error"].as_str().unwrap_or_default().to_string();
        assert!(msg.starts_with("AI error: "), "{msg}");
        assert!(msg.contains("quota exceeded"), "{msg}");
    }

    #[tokio::test]
    async fn only_post_is_served() {
        let state = AppState::unconfigured();
        let err = handle(&state, &Event::new("GET", None)).await.unwrap_err();
        assert!(matches!(err, AppErr::MethodNotAllowed));
    }
}
