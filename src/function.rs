//! The invocation model every function shares: one [`Event`] in, one
//! [`Reply`] out.
//!
//! An event comes either from a real HTTP request (`ANY /<name>`) or from
//! the serverless gateway envelope (`POST /functions/<name>`); functions
//! cannot tell the difference.

use std::collections::HashMap;

use axum::{
    http::{header, HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    error::{AppErr, AppResult},
    routes::{ai_chat, create_payment, payment_webhook, simple_ai, submit_payment},
    state::AppState,
};

pub const ALLOW_HEADERS: &str = "Content-Type, X-User-Id";
pub const MAX_AGE: &str = "86400";

/* ------------------------------ event ------------------------------ */

#[derive(Debug, Clone)]
pub struct Event {
    /// Upper-case HTTP method.
    pub method: String,
    pub body: Option<String>,
    /// Header names are stored lower-case.
    pub headers: HashMap<String, String>,
    /// Trace id of this invocation; the gateway's when it supplies one.
    pub request_id: String,
}

impl Event {
    pub fn new(method: &str, body: Option<String>) -> Self {
        Self {
            method: method.to_ascii_uppercase(),
            body,
            headers: HashMap::new(),
            request_id: uuid::Uuid::new_v4().simple().to_string(),
        }
    }

    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.as_ref().to_ascii_lowercase(), v.into())));
        self
    }

    pub fn with_request_id(mut self, id: impl Into<String>) -> Self {
        self.request_id = id.into();
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// Decodes the body as a JSON object. Only an absent body reads as `{}`;
    /// a blank one is malformed like any other non-JSON text.
    ///
    /// `malformed` is the message used when the body is not JSON at all.
    pub fn json_object(&self, malformed: &str) -> AppResult<Map<String, Value>> {
        let Some(raw) = self.body.as_deref() else {
            return Ok(Map::new());
        };
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(other) => Err(AppErr::Internal(format!(
                "expected a JSON object body, got {}",
                json_kind(&other)
            ))),
            Err(e) => {
                tracing::debug!(error = %e, "request body is not valid JSON");
                Err(AppErr::Parse(malformed.to_string()))
            }
        }
    }
}

pub fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null      => "null",
        Value::Bool(_)   => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_)  => "an array",
        Value::Object(_) => "an object",
    }
}

/* ------------------------------ reply ------------------------------ */

#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl Reply {
    /// Answer to an `OPTIONS` preflight.
    pub fn preflight(methods: &str) -> Self {
        Self {
            status: StatusCode::OK,
            headers: vec![
                ("Access-Control-Allow-Origin", "*".into()),
                ("Access-Control-Allow-Methods", methods.into()),
                ("Access-Control-Allow-Headers", ALLOW_HEADERS.into()),
                ("Access-Control-Max-Age", MAX_AGE.into()),
            ],
            body: String::new(),
        }
    }

    pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Self {
        match serde_json::to_string(body) {
            Ok(body) => Self {
                status,
                headers: vec![
                    ("Content-Type", "application/json".into()),
                    ("Access-Control-Allow-Origin", "*".into()),
                ],
                body,
            },
            Err(e) => Self::error(StatusCode::INTERNAL_SERVER_ERROR, &format!("Internal server error: {e}")),
        }
    }

    pub fn ok<T: Serialize>(body: &T) -> Self {
        Self::json(StatusCode::OK, body)
    }

    pub fn error(status: StatusCode, message: &str) -> Self {
        #[derive(Serialize)]
        struct ErrorBody<'a> {
            error: &'a str,
        }
        let body = serde_json::to_string(&ErrorBody { error: message })
            .unwrap_or_else(|_| r#"{"error":"Internal server error"}"#.into());
        Self {
            status,
            headers: vec![
                ("Content-Type", "application/json".into()),
                ("Access-Control-Allow-Origin", "*".into()),
            ],
            body,
        }
    }

    #[cfg(test)]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn json_body(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let mut resp = (self.status, self.body).into_response();
        let map = resp.headers_mut();
        // Reply bodies are JSON or empty; drop the text/plain default.
        map.remove(header::CONTENT_TYPE);
        for (name, value) in self.headers {
            if let (Ok(name), Ok(value)) =
                (HeaderName::from_bytes(name.as_bytes()), HeaderValue::from_str(&value))
            {
                map.insert(name, value);
            }
        }
        resp
    }
}

/* ---------------------------- functions ---------------------------- */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Function {
    AiChat,
    CreatePayment,
    PaymentWebhook,
    SimpleAi,
    SubmitPayment,
}

impl Function {
    pub const ALL: [Function; 5] = [
        Function::AiChat,
        Function::CreatePayment,
        Function::PaymentWebhook,
        Function::SimpleAi,
        Function::SubmitPayment,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Function::AiChat         => "ai-chat",
            Function::CreatePayment  => "create-payment",
            Function::PaymentWebhook => "payment-webhook",
            Function::SimpleAi       => "simple-ai",
            Function::SubmitPayment  => "submit-payment",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Methods listed in the preflight answer.
    pub fn methods(self) -> &'static str {
        match self {
            Function::SubmitPayment => "POST, GET, OPTIONS",
            _                       => "POST, OPTIONS",
        }
    }

    pub async fn invoke(self, state: &AppState, event: &Event) -> Reply {
        if event.method == "OPTIONS" {
            return Reply::preflight(self.methods());
        }

        let out = match self {
            Function::AiChat         => ai_chat::handle(state, event).await,
            Function::CreatePayment  => create_payment::handle(state, event).await,
            Function::PaymentWebhook => payment_webhook::handle(event).await,
            Function::SimpleAi       => simple_ai::handle(state, event).await,
            Function::SubmitPayment  => submit_payment::handle(event).await,
        };

        out.unwrap_or_else(|e| {
            match &e {
                AppErr::Config(_) | AppErr::Upstream(_) | AppErr::Internal(_) => {
                    tracing::error!(function = self.name(), request_id = %event.request_id, error = %e, "invocation failed")
                }
                _ => tracing::info!(function = self.name(), request_id = %event.request_id, error = %e, "invocation rejected"),
            }
            e.into_reply()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preflight_has_cors_headers_and_empty_body() {
        let r = Reply::preflight("POST, GET, OPTIONS");
        assert_eq!(r.status, StatusCode::OK);
        assert!(r.body.is_empty());
        assert_eq!(r.header("access-control-allow-origin"), Some("*"));
        assert_eq!(r.header("Access-Control-Allow-Methods"), Some("POST, GET, OPTIONS"));
        assert_eq!(r.header("Access-Control-Allow-Headers"), Some("Content-Type, X-User-Id"));
        assert_eq!(r.header("Access-Control-Max-Age"), Some("86400"));
    }

    #[test]
    fn absent_body_reads_as_empty_object() {
        assert!(Event::new("post", None).json_object("bad").unwrap().is_empty());
    }

    #[test]
    fn blank_body_is_malformed() {
        for raw in ["", "  ", "\n"] {
            let e = Event::new("POST", Some(raw.into())).json_object("Invalid JSON").unwrap_err();
            assert!(matches!(e, AppErr::Parse(ref m) if m == "Invalid JSON"), "{raw:?}");
        }
    }

    #[test]
    fn malformed_and_non_object_bodies() {
        let e = Event::new("POST", Some("{nope".into())).json_object("Invalid JSON").unwrap_err();
        assert!(matches!(e, AppErr::Parse(ref m) if m == "Invalid JSON"));

        let e = Event::new("POST", Some("[1,2]".into())).json_object("Invalid JSON").unwrap_err();
        assert!(matches!(e, AppErr::Internal(_)));
    }

    #[test]
    fn headers_are_case_insensitive() {
        let ev = Event::new("get", None).with_headers([("X-User-Id", "42")]);
        assert_eq!(ev.method, "GET");
        assert_eq!(ev.header("x-user-id"), Some("42"));
    }

    #[test]
    fn function_names_round_trip() {
        for f in Function::ALL {
            assert_eq!(Function::from_name(f.name()), Some(f));
        }
        assert_eq!(Function::from_name("nope"), None);
    }
}
