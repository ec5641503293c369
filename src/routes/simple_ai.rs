use serde::Serialize;

use crate::{
    error::{AppErr, AppResult},
    function::{Event, Reply},
    responder::{self, Lang, Mode},
    state::AppState,
    utils::fields,
};

#[derive(Serialize)]
struct ChatResp {
    response: String,
    success: bool,
}

pub async fn handle(state: &AppState, event: &Event) -> AppResult<Reply> {
    if event.method != "POST" {
        return Err(AppErr::MethodNotAllowed);
    }

    let body = event.json_object("Invalid JSON")?;
    let message = fields::text(&body, "message")
        .ok_or_else(|| AppErr::Validation("Message is required".into()))?;
    let lang = Lang::from_tag(&fields::text_or(&body, "language", "ru"));

    let response = match state.responder {
        Mode::Structured => responder::respond_structured(&message, lang),
        Mode::Canned     => responder::respond_canned(&message, lang, &mut rand::thread_rng()),
    };

    tracing::debug!(
        request_id = %event.request_id,
        category = ?responder::classify(&message.to_lowercase()),
        mode = ?state.responder,
        "simple reply"
    );
    Ok(Reply::ok(&ChatResp { response, success: true }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::canned;
    use axum::http::StatusCode;

    async fn call(state: &AppState, body: &str) -> Reply {
        handle(state, &Event::new("POST", Some(body.to_string())))
            .await
            .unwrap_or_else(AppErr::into_reply)
    }

    #[tokio::test]
    async fn structured_greeting() {
        let r = call(&AppState::unconfigured(), r#"{"message":"привет","language":"ru"}"#).await;
        assert_eq!(r.status, StatusCode::OK);
        let v = r.json_body();
        assert_eq!(v["success"], true);
        let text = v["response"].as_str().unwrap_or_default();
        assert!(text.starts_with("Привет! 👋"), "{text}");
        assert!(text.contains("**Что я умею:**"));
    }

    #[tokio::test]
    async fn canned_greeting_is_one_of_three() {
        let state = AppState::unconfigured().with_responder(Mode::Canned);
        for _ in 0..10 {
            let r = call(&state, r#"{"message":"привет","language":"ru"}"#).await;
            let v = r.json_body();
            let text = v["response"].as_str().unwrap_or_default();
            assert!(canned::REPLIES_RU[0].1.contains(&text), "{text}");
        }
    }

    #[tokio::test]
    async fn every_non_empty_message_gets_an_answer() {
        for mode in [Mode::Structured, Mode::Canned] {
            let state = AppState::unconfigured().with_responder(mode);
            for msg in ["?", "hello", "42", "что такое атом", "compare cats and dogs"] {
                let body = serde_json::json!({"message": msg, "language": "en"}).to_string();
                let r = call(&state, &body).await;
                assert_eq!(r.status, StatusCode::OK);
                assert!(!r.json_body()["response"].as_str().unwrap_or_default().is_empty());
            }
        }
    }

    #[tokio::test]
    async fn empty_message_and_bad_json() {
        let state = AppState::unconfigured();
        let r = call(&state, r#"{"message":""}"#).await;
        assert_eq!(r.status, StatusCode::BAD_REQUEST);
        assert_eq!(r.json_body()["error"], "Message is required");

        let r = call(&state, "not json").await;
        assert_eq!(r.status, StatusCode::BAD_REQUEST);
        assert_eq!(r.json_body()["error"], "Invalid JSON");
    }
}
