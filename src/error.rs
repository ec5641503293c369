use axum::{http::StatusCode, response::IntoResponse};
use std::fmt::Display;

use crate::function::Reply;

pub type AppResult<T> = Result<T, AppErr>;

/// Every way a function invocation can fail. The message is what the
/// caller sees in `{"error": ...}`.
#[derive(thiserror::Error, Debug)]
pub enum AppErr {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Config(String),

    #[error("{0}")]
    Upstream(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Unknown function: {0}")]
    UnknownFunction(String),
}

impl AppErr {
    pub fn status(&self) -> StatusCode {
        match self {
            AppErr::Validation(_) | AppErr::Parse(_) => StatusCode::BAD_REQUEST,
            AppErr::MethodNotAllowed                 => StatusCode::METHOD_NOT_ALLOWED,
            AppErr::UnknownFunction(_)               => StatusCode::NOT_FOUND,
            AppErr::Config(_) | AppErr::Upstream(_) | AppErr::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The uniform `{error}` JSON reply.
    pub fn into_reply(self) -> Reply {
        Reply::error(self.status(), &self.to_string())
    }
}

impl IntoResponse for AppErr {
    fn into_response(self) -> axum::response::Response {
        self.into_reply().into_response()
    }
}

/* ── small helpers: turn any error into Validation / Upstream ── */
pub fn bad<E: Display>(e: E) -> AppErr { AppErr::Validation(e.to_string()) }
pub fn upstream<E: Display>(prefix: &str, e: E) -> AppErr {
    AppErr::Upstream(format!("{prefix}: {e}"))
}
