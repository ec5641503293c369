//! Startup configuration.
//!
//! Read once from the environment (after `.env` is loaded) and handed to
//! [`AppState`](crate::state::AppState). Functions never read the
//! environment themselves.

use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{anyhow, Context};

use crate::responder::Mode;

pub const DEFAULT_OPENAI_BASE: &str   = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str  = "gpt-4o-mini";
pub const DEFAULT_YOOKASSA_BASE: &str = "https://api.yookassa.ru/v3";
pub const DEFAULT_PUBLIC_BASE: &str   = "https://neuropulse.poehali.dev";

#[derive(Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct YooKassaConfig {
    pub shop_id: String,
    pub secret_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub body_limit: usize,
    /// `None` when no API key is set; `ai-chat` then answers 500.
    pub openai: Option<OpenAiConfig>,
    /// `None` unless both shop id and secret are set.
    pub yookassa: Option<YooKassaConfig>,
    pub public_base_url: String,
    pub responder: Mode,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let bind_addr = parse(&get, "BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 3000)))?;
        let body_limit = parse(&get, "BODY_LIMIT_BYTES", 1024 * 1024)?;

        let openai = match get("OPENAI_API_KEY") {
            Some(api_key) => Some(OpenAiConfig {
                api_key,
                base_url: or("OPENAI_API_BASE", DEFAULT_OPENAI_BASE),
                model: or("OPENAI_MODEL", DEFAULT_OPENAI_MODEL),
                timeout: Duration::from_secs(parse(&get, "OPENAI_TIMEOUT_SECS", 30)?),
            }),
            None => None,
        };

        let yookassa = match (get("YOOKASSA_SHOP_ID"), get("YOOKASSA_SECRET_KEY")) {
            (Some(shop_id), Some(secret_key)) => Some(YooKassaConfig {
                shop_id,
                secret_key,
                base_url: or("YOOKASSA_API_BASE", DEFAULT_YOOKASSA_BASE),
                timeout: Duration::from_secs(parse(&get, "YOOKASSA_TIMEOUT_SECS", 10)?),
            }),
            _ => None,
        };

        let responder = match get("SIMPLE_AI_MODE") {
            Some(raw) => Mode::parse(&raw)
                .ok_or_else(|| anyhow!("SIMPLE_AI_MODE must be `structured` or `canned`, got `{raw}`"))?,
            None => Mode::Structured,
        };

        Ok(Self {
            bind_addr,
            body_limit,
            openai,
            yookassa,
            public_base_url: or("PUBLIC_BASE_URL", DEFAULT_PUBLIC_BASE)
                .trim_end_matches('/')
                .to_string(),
            responder,
        })
    }

    /// Warns about functions that will refuse to work.
    pub fn report(&self) {
        if self.openai.is_none() {
            tracing::warn!("OPENAI_API_KEY not set; ai-chat will answer 500");
        }
        if self.yookassa.is_none() {
            tracing::warn!("YOOKASSA_SHOP_ID / YOOKASSA_SECRET_KEY not set; create-payment will answer 500");
        }
        tracing::info!(
            bind = %self.bind_addr,
            responder = ?self.responder,
            public_base = %self.public_base_url,
            "configuration loaded"
        );
    }
}

fn parse<T, G>(get: &G, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw.parse().with_context(|| format!("invalid {key}: `{raw}`")),
        None => Ok(default),
    }
}
