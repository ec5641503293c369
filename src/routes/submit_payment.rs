//! Manual payment claims (card transfer + proof).
//!
//! A claim is echoed back as `pending`; confirming it and listing claims
//! belong to the account store, so GET only answers an empty list.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::{
    error::{bad, AppErr, AppResult},
    function::{Event, Reply},
    utils::fields,
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualClaim {
    pub id: String,
    pub user_id: Value,
    pub tariff_type: Value,
    pub amount: Value,
    pub currency: Value,
    pub sender_name: Value,
    pub payment_proof: Value,
    pub status: &'static str,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct Submitted {
    success: bool,
    payment: ManualClaim,
    message: &'static str,
}

#[derive(Serialize)]
struct Listing {
    payments: [ManualClaim; 0],
    message: &'static str,
}

/// `pay_` plus the first eight characters of the trace id.
pub fn claim_id(request_id: &str) -> String {
    let short: String = request_id.chars().take(8).collect();
    format!("pay_{short}")
}

pub async fn handle(event: &Event) -> AppResult<Reply> {
    match event.method.as_str() {
        "POST" => submit(event),
        "GET" => Ok(Reply::ok(&Listing {
            payments: [],
            message: "GET method for fetching payments list",
        })),
        _ => Err(AppErr::MethodNotAllowed),
    }
}

fn submit(event: &Event) -> AppResult<Reply> {
    let body = event.json_object("Invalid JSON")?;
    let (Some(user_id), Some(tariff_type), Some(amount), Some(sender_name)) = (
        fields::value(&body, "userId"),
        fields::value(&body, "tariffType"),
        fields::value(&body, "amount"),
        fields::value(&body, "senderName"),
    ) else {
        return Err(bad("Missing required fields"));
    };

    let claim = ManualClaim {
        id: claim_id(&event.request_id),
        user_id,
        tariff_type,
        amount,
        currency: fields::raw_or(&body, "currency", "₽"),
        sender_name,
        payment_proof: fields::raw_or(&body, "paymentProof", ""),
        status: "pending",
        created_at: Utc::now(),
    };

    tracing::info!(
        claim = %claim.id,
        user = %fields::as_text(&claim.user_id),
        tariff = %fields::as_text(&claim.tariff_type),
        "manual payment claim accepted"
    );
    Ok(Reply::ok(&Submitted {
        success: true,
        payment: claim,
        message: "Payment request submitted successfully",
    }))
}
