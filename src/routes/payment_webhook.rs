//! YooKassa notification receiver.
//!
//! Only `object.status == "succeeded"` grants anything. Every other event
//! is acknowledged with 200 so the gateway stops redelivering it.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    billing::Entitlement,
    error::{bad, AppErr, AppResult},
    function::{json_kind, Event, Reply},
    utils::fields,
};

#[derive(Serialize)]
struct Ignored {
    status: &'static str,
    reason: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Granted {
    success: bool,
    user_id: Value,
    tariff_type: Value,
    #[serde(flatten)]
    entitlement: Entitlement,
    message: String,
}

pub async fn handle(event: &Event) -> AppResult<Reply> {
    if event.method != "POST" {
        return Err(AppErr::MethodNotAllowed);
    }

    let body = event.json_object("Invalid JSON in request body")?;
    let object = sub_object(&body, "object")?;
    let status = object.and_then(|o| o.get("status")).and_then(Value::as_str);

    if status != Some("succeeded") {
        tracing::info!(request_id = %event.request_id, status = status.unwrap_or("-"), "webhook ignored");
        return Ok(Reply::ok(&Ignored { status: "ignored", reason: "payment not succeeded" }));
    }

    let metadata = match object {
        Some(o) => sub_object(o, "metadata")?,
        None => None,
    };

    let (Some(user_id), Some(tariff_type)) = (
        metadata.and_then(|m| fields::value(m, "userId")),
        metadata.and_then(|m| fields::value(m, "tariffType")),
    ) else {
        return Err(bad("Missing userId or tariffType in metadata"));
    };

    let user = fields::as_text(&user_id);
    let tariff = fields::as_text(&tariff_type);
    let entitlement = Entitlement::for_tariff(&tariff);
    // No durable grant happens here; the account store applies it.
    tracing::info!(
        user = %user,
        tariff = %tariff,
        requests_added = entitlement.requests_added,
        subscription = entitlement.subscription_type.unwrap_or("-"),
        "entitlement computed"
    );

    Ok(Reply::ok(&Granted {
        success: true,
        message: format!("Successfully processed payment for user {user}"),
        user_id,
        tariff_type,
        entitlement,
    }))
}

/// `parent[key]` as an object. Absent or `null` is `None`; any other
/// non-object means the envelope is not what the gateway sends.
fn sub_object<'a>(parent: &'a Map<String, Value>, key: &str) -> AppResult<Option<&'a Map<String, Value>>> {
    match parent.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(o)) => Ok(Some(o)),
        Some(other) => Err(AppErr::Internal(format!("`{key}` is {}, expected an object", json_kind(other)))),
    }
}
