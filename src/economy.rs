//! Economy Event Logging
//!
//! Structured records for economy events (purchases, rewards, expiries),
//! emitted through tracing under the `economy` target.

use chrono::{SecondsFormat, Utc};
use serde_json::{Map, Value};
use tracing::info;

/// Emits an economy event for `user_id` and returns the emitted record.
///
/// The record is `data`'s fields flattened alongside `userId` and `time`
/// (RFC 3339, UTC, millisecond precision). `userId` and `time` take
/// precedence over same-named keys in `data`. Non-object `data` is kept
/// under a `data` key.
///
/// # Example
/// ```ignore
/// log_economy_event("u1", json!({ "action": "purchase", "amount": 50 }));
/// // economy: {"action":"purchase","amount":50,"time":"...","userId":"u1"}
/// ```
pub fn log_economy_event(user_id: &str, data: Value) -> Value {
    let mut record = match data {
        Value::Object(fields) => fields,
        Value::Null => Map::new(),
        other => {
            let mut fields = Map::new();
            fields.insert("data".to_string(), other);
            fields
        }
    };

    record.insert("userId".to_string(), Value::String(user_id.to_string()));
    record.insert(
        "time".to_string(),
        Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
    );

    let record = Value::Object(record);
    info!(target: "economy", user_id, event = %record, "economy event");
    record
}
