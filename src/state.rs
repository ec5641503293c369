use std::sync::Arc;

use crate::{
    clients::{ChatCompletion, OpenAiClient, PaymentGateway, UpstreamErr, YooKassaClient},
    config::Config,
    responder::Mode,
};

/* ------------ shared, read-only per invocation ------------ */
#[derive(Clone)]
pub struct AppState {
    pub chat:     Option<Arc<dyn ChatCompletion>>,   // None = no API key
    pub payments: Option<Arc<dyn PaymentGateway>>,   // None = no shop credentials
    pub public_base_url: Arc<str>,
    pub responder: Mode,
}

impl AppState {
    /// Builds the outbound clients once; they are reused by every call.
    pub fn from_config(cfg: &Config) -> Result<Self, UpstreamErr> {
        let chat = match &cfg.openai {
            Some(ai) => Some(Arc::new(OpenAiClient::new(ai)?) as Arc<dyn ChatCompletion>),
            None => None,
        };
        let payments = match &cfg.yookassa {
            Some(yk) => Some(Arc::new(YooKassaClient::new(yk)?) as Arc<dyn PaymentGateway>),
            None => None,
        };
        Ok(Self {
            chat,
            payments,
            public_base_url: cfg.public_base_url.as_str().into(),
            responder: cfg.responder,
        })
    }

    /// Bare state with nothing configured.
    #[cfg(test)]
    pub fn unconfigured() -> Self {
        Self {
            chat: None,
            payments: None,
            public_base_url: crate::config::DEFAULT_PUBLIC_BASE.into(),
            responder: Mode::Structured,
        }
    }

    #[cfg(test)]
    pub fn with_chat(mut self, chat: Arc<dyn ChatCompletion>) -> Self {
        self.chat = Some(chat);
        self
    }

    #[cfg(test)]
    pub fn with_payments(mut self, payments: Arc<dyn PaymentGateway>) -> Self {
        self.payments = Some(payments);
        self
    }

    #[cfg(test)]
    pub fn with_responder(mut self, mode: Mode) -> Self {
        self.responder = mode;
        self
    }
}
