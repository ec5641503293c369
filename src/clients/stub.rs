//! In-memory clients for function tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{
    yookassa::PaymentOrder, ChatCompletion, CompletionRequest, CreatedPayment, PaymentGateway,
    UpstreamErr,
};

pub struct StubChat {
    answer: Result<String, (u16, String)>,
    seen: Mutex<Vec<CompletionRequest>>,
}

impl StubChat {
    pub fn answering(text: &str) -> Self {
        Self { answer: Ok(text.into()), seen: Mutex::default() }
    }

    pub fn failing(status: u16, body: &str) -> Self {
        Self { answer: Err((status, body.into())), seen: Mutex::default() }
    }

    pub fn last(&self) -> Option<CompletionRequest> {
        self.seen.lock().ok()?.last().cloned()
    }
}

#[async_trait]
impl ChatCompletion for StubChat {
    async fn complete(&self, req: &CompletionRequest) -> Result<String, UpstreamErr> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(req.clone());
        }
        self.answer
            .clone()
            .map_err(|(status, body)| UpstreamErr::Rejected { status, body })
    }
}

pub struct StubGateway {
    answer: Result<CreatedPayment, (u16, String)>,
    seen: Mutex<Vec<(PaymentOrder, String)>>,
}

impl StubGateway {
    pub fn created(id: &str, url: &str) -> Self {
        Self {
            answer: Ok(CreatedPayment { id: Some(id.into()), confirmation_url: Some(url.into()) }),
            seen: Mutex::default(),
        }
    }

    pub fn refusing(status: u16, body: &str) -> Self {
        Self { answer: Err((status, body.into())), seen: Mutex::default() }
    }

    pub fn calls(&self) -> Vec<(PaymentOrder, String)> {
        self.seen.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl PaymentGateway for StubGateway {
    async fn create_payment(
        &self,
        order: &PaymentOrder,
        idempotence_key: &str,
    ) -> Result<CreatedPayment, UpstreamErr> {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push((order.clone(), idempotence_key.to_string()));
        }
        self.answer
            .clone()
            .map_err(|(status, body)| UpstreamErr::Rejected { status, body })
    }
}
