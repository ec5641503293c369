use std::collections::HashMap;

use axum::{
    extract::{Extension, Path},
    http::{HeaderMap, Method},
    routing::{any, post},
    Json, Router,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    error::{AppErr, AppResult},
    function::{Event, Function, Reply},
    state::AppState,
    utils::fields,
};

pub mod ai_chat;
pub mod create_payment;
pub mod payment_webhook;
pub mod simple_ai;
pub mod submit_payment;

pub fn router() -> Router {
    let mut app = Router::new();
    for f in Function::ALL {
        app = app.route(
            &format!("/{}", f.name()),
            any(move |state: Extension<AppState>, method: Method, headers: HeaderMap, body: Bytes| {
                direct(f, state, method, headers, body)
            }),
        );
    }
    app.route("/functions/:name", post(envelope))
}

/* ---------------- ANY /<function> ---------------- */
async fn direct(
    f: Function,
    Extension(state): Extension<AppState>,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Reply {
    let body = if body.is_empty() {
        None
    } else {
        match String::from_utf8(body.to_vec()) {
            Ok(s) => Some(s),
            Err(_) => return AppErr::Parse("Request body is not valid UTF-8".into()).into_reply(),
        }
    };

    let headers: Vec<(String, String)> = headers
        .iter()
        .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.as_str().to_string(), v.to_string())))
        .collect();
    let mut event = Event::new(method.as_str(), body).with_headers(headers);
    if let Some(id) = event.header("x-request-id").map(str::to_string) {
        event = event.with_request_id(id);
    }

    f.invoke(&state, &event).await
}

/* ---------------- POST /functions/:name (gateway envelope) ---------------- */

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayEvent {
    #[serde(default = "default_method")]
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
    /// Values are usually strings; numbers and booleans are rendered as text.
    #[serde(default)]
    pub headers: Option<HashMap<String, Value>>,
    #[serde(default)]
    pub request_context: Option<RequestContext>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    pub request_id: Option<String>,
}

fn default_method() -> String {
    "POST".into()
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayReply {
    pub status_code: u16,
    pub headers: HashMap<&'static str, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

impl From<Reply> for GatewayReply {
    fn from(r: Reply) -> Self {
        Self {
            status_code: r.status.as_u16(),
            headers: r.headers.into_iter().collect(),
            body: r.body,
            is_base64_encoded: false,
        }
    }
}

// Decoded by hand: a bad event still gets the `{error}` reply, whatever the content type.
async fn envelope(
    Extension(state): Extension<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> AppResult<Json<GatewayReply>> {
    let f = Function::from_name(&name).ok_or(AppErr::UnknownFunction(name))?;
    let ev: GatewayEvent = serde_json::from_slice(&body)
        .map_err(|e| AppErr::Parse(format!("Invalid gateway event: {e}")))?;

    let headers = ev
        .headers
        .unwrap_or_default()
        .into_iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k, fields::as_text(&v)));
    let mut event = Event::new(&ev.http_method, ev.body).with_headers(headers);
    if let Some(id) = ev.request_context.and_then(|c| c.request_id) {
        event = event.with_request_id(id);
    }

    let reply = f.invoke(&state, &event).await;
    Ok(Json(reply.into()))
}
