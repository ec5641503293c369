use serde::Serialize;

use crate::{
    billing::Currency,
    clients::{yookassa::PaymentOrder, UpstreamErr},
    error::{bad, AppErr, AppResult},
    function::{Event, Reply},
    state::AppState,
    utils::fields,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreatedResp {
    success: bool,
    payment_url: Option<String>,
    payment_id: Option<String>,
}

pub async fn handle(state: &AppState, event: &Event) -> AppResult<Reply> {
    if event.method != "POST" {
        return Err(AppErr::MethodNotAllowed);
    }

    let body = event.json_object("Invalid JSON")?;
    let (Some(user_id), Some(tariff), Some(amount)) = (
        fields::text(&body, "userId"),
        fields::text(&body, "tariffType"),
        fields::text(&body, "amount"),
    ) else {
        return Err(bad("Missing required fields"));
    };
    let currency = Currency::from_symbol(&fields::text_or(&body, "currency", "₽"));
    let country = fields::text_or(&body, "country", "ru");

    let gateway = state
        .payments
        .as_ref()
        .ok_or_else(|| AppErr::Config("Payment system not configured".into()))?;

    // fresh per call: the gateway never sees two orders under one key
    let idempotence_key = uuid::Uuid::new_v4().to_string();
    let order = PaymentOrder::redirect(
        user_id.clone(),
        tariff.clone(),
        amount,
        currency,
        country,
        &state.public_base_url,
    );

    let created = gateway
        .create_payment(&order, &idempotence_key)
        .await
        .map_err(|e| {
            tracing::warn!(user = %user_id, tariff = %tariff, error = %e, "payment creation failed");
            match e {
                UpstreamErr::Rejected { body, .. } => AppErr::Upstream(format!("Payment creation failed: {body}")),
                other => AppErr::Upstream(format!("Payment error: {other}")),
            }
        })?;

    tracing::info!(
        user = %user_id,
        tariff = %tariff,
        currency = currency.iso(),
        payment_id = created.id.as_deref().unwrap_or("-"),
        "payment created"
    );
    Ok(Reply::ok(&CreatedResp {
        success: true,
        payment_url: created.confirmation_url,
        payment_id: created.id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::stub::StubGateway;
    use axum::http::StatusCode;
    use std::sync::Arc;

    fn post(body: serde_json::Value) -> Event {
        Event::new("POST", Some(body.to_string()))
    }

    fn state_with(gw: Arc<StubGateway>) -> AppState {
        AppState::unconfigured().with_payments(gw)
    }

    #[tokio::test]
    async fn missing_fields_are_rejected() {
        let gw = Arc::new(StubGateway::created("p1", "https://pay"));
        for body in [
            serde_json::json!({}),
            serde_json::json!({"userId": 1, "tariffType": "starter"}),
            serde_json::json!({"userId": 0, "tariffType": "starter", "amount": 199}),
            serde_json::json!({"userId": 1, "tariffType": "", "amount": 199}),
        ] {
            let err = handle(&state_with(gw.clone()), &post(body.clone())).await.unwrap_err();
            assert!(matches!(err, AppErr::Validation(ref m) if m == "Missing required fields"), "{body}");
        }
        assert!(gw.calls().is_empty());
    }

    #[tokio::test]
    async fn unconfigured_gateway() {
        let body = serde_json::json!({"userId": 1, "tariffType": "starter", "amount": 199});
        let reply = handle(&AppState::unconfigured(), &post(body)).await.unwrap_err().into_reply();
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(reply.json_body()["error"], "Payment system not configured");
    }

    #[tokio::test]
    async fn builds_order_and_returns_redirect() {
        let gw = Arc::new(StubGateway::created("2c5d", "https://yoomoney.example/pay"));
        let body = serde_json::json!({
            "userId": 17, "tariffType": "unlimited", "amount": 11.99, "currency": "$", "country": "us"
        });

        let reply = handle(&state_with(gw.clone()), &post(body)).await.unwrap();
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(
            reply.json_body(),
            serde_json::json!({"success": true, "paymentUrl": "https://yoomoney.example/pay", "paymentId": "2c5d"})
        );

        let calls = gw.calls();
        assert_eq!(calls.len(), 1);
        let (order, key) = &calls[0];
        assert_eq!(order.amount.value, "11.99");
        assert_eq!(order.amount.currency, Currency::Usd);
        assert_eq!(order.metadata.user_id, "17");
        assert_eq!(order.metadata.country, "us");
        assert_eq!(order.description, "NeuroPulse unlimited tariff");
        assert_eq!(
            order.confirmation.return_url,
            "https://neuropulse.poehali.dev/payment-success?tariff=unlimited"
        );
        assert!(uuid::Uuid::parse_str(key).is_ok());
    }

    #[tokio::test]
    async fn defaults_to_roubles_and_russia() {
        let gw = Arc::new(StubGateway::created("p", "u"));
        let body = serde_json::json!({"userId": "u1", "tariffType": "starter", "amount": "199", "currency": "¥"});
        handle(&state_with(gw.clone()), &post(body)).await.unwrap();

        let (order, _) = &gw.calls()[0];
        assert_eq!(order.amount.currency, Currency::Rub);
        assert_eq!(order.metadata.country, "ru");
    }

    #[tokio::test]
    async fn every_call_gets_a_new_key() {
        let gw = Arc::new(StubGateway::created("p", "u"));
        let body = serde_json::json!({"userId": 1, "tariffType": "starter", "amount": 199});
        handle(&state_with(gw.clone()), &post(body.clone())).await.unwrap();
        handle(&state_with(gw.clone()), &post(body)).await.unwrap();

        let calls = gw.calls();
        assert_ne!(calls[0].1, calls[1].1);
    }

    #[tokio::test]
    async fn gateway_refusal_passes_body_through() {
        let gw = Arc::new(StubGateway::refusing(400, r#"{"code":"invalid_request"}"#));
        let body = serde_json::json!({"userId": 1, "tariffType": "starter", "amount": 199});
        let reply = handle(&state_with(gw), &post(body)).await.unwrap_err().into_reply();
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            reply.json_body()["error"],
            r#"Payment creation failed: {"code":"invalid_request"}"#
        );
    }
}
