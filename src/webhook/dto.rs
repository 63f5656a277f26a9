use serde::Deserialize;

/// Event envelope. `data` stays untyped until the event type is known:
/// the provider sends many event shapes and unrecognized ones must be
/// accepted without parsing their payloads.
#[derive(Debug, Deserialize)]
pub struct EventEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: serde_json::Value,
}

/// Payload of `user.created` / `user.updated` events.
#[derive(Debug, Deserialize)]
pub struct AccountData {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}
