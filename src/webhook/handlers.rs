use axum::{
    body::Bytes,
    extract::State,
    http::HeaderMap,
    Json,
};
use serde_json::json;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApiError,
    state::AppState,
    users::repo::User,
    webhook::{
        dto::{AccountData, EventEnvelope},
        signature::{SignatureError, WebhookVerifier},
    },
};

fn required_header<'a>(headers: &'a HeaderMap, name: &'static str) -> Result<&'a str, ApiError> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or(ApiError::Unauthorized("Missing webhook signature headers"))
}

/// POST /webhooks/clerk
///
/// Verifies the svix header triple against the raw body, then upserts the
/// local user on account lifecycle events. Events of any other type are
/// acknowledged without touching state, so provider retries stay quiet.
#[instrument(skip(state, headers, body))]
pub async fn clerk_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<serde_json::Value>, ApiError> {
    let msg_id = required_header(&headers, "svix-id")?;
    let timestamp = required_header(&headers, "svix-timestamp")?;
    let signatures = required_header(&headers, "svix-signature")?;

    let verifier = WebhookVerifier::new(
        &state.config.webhook.secret,
        state.config.webhook.tolerance_secs,
    )
    .map_err(|e| match e {
        // A secret that cannot be decoded is a deployment problem, not an
        // attacker; do not report it as an auth failure.
        SignatureError::BadSecret => {
            ApiError::Database(anyhow::anyhow!("webhook secret is not valid base64"))
        }
        _ => ApiError::Unauthorized("Invalid signature"),
    })?;

    if let Err(e) = verifier.verify(msg_id, timestamp, signatures, &body) {
        warn!(error = %e, msg_id, "webhook signature rejected");
        return Err(ApiError::Unauthorized("Invalid signature"));
    }

    let envelope: EventEnvelope = serde_json::from_slice(&body)
        .map_err(|_| ApiError::validation("body", "malformed event payload"))?;

    match envelope.kind.as_str() {
        "user.created" | "user.updated" => {
            let account: AccountData = serde_json::from_value(envelope.data)
                .map_err(|_| ApiError::validation("data", "malformed account payload"))?;
            let user = User::upsert_by_clerk_id(
                &state.db,
                &account.id,
                &account.username,
                account.email.as_deref(),
            )
            .await?;
            info!(
                user_id = %user.id,
                clerk_user_id = %user.clerk_user_id,
                event = %envelope.kind,
                "user synced"
            );
        }
        other => {
            debug!(event = other, msg_id, "ignoring webhook event");
        }
    }

    Ok(Json(json!({ "success": true })))
}

#[cfg(test)]
mod tests {
    use crate::app::build_app;
    use crate::state::AppState;
    use crate::webhook::signature::WebhookVerifier;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    const URI: &str = "/api/v1/webhooks/clerk";

    fn signed_request(body: &'static str) -> Request<Body> {
        let state = AppState::fake();
        let verifier = WebhookVerifier::new(&state.config.webhook.secret, 300).unwrap();
        let timestamp = time::OffsetDateTime::now_utc().unix_timestamp().to_string();
        let sig = verifier.sign("msg_1", &timestamp, body.as_bytes());
        Request::builder()
            .method("POST")
            .uri(URI)
            .header("svix-id", "msg_1")
            .header("svix-timestamp", timestamp)
            .header("svix-signature", sig)
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn missing_headers_is_unauthorized() {
        let app = build_app(AppState::fake());
        let req = Request::builder()
            .method("POST")
            .uri(URI)
            .body(Body::from(r#"{"type":"user.created","data":{}}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn bad_signature_is_unauthorized() {
        let app = build_app(AppState::fake());
        let req = Request::builder()
            .method("POST")
            .uri(URI)
            .header("svix-id", "msg_1")
            .header(
                "svix-timestamp",
                time::OffsetDateTime::now_utc().unix_timestamp().to_string(),
            )
            .header("svix-signature", "v1,Zm9yZ2VkLXNpZ25hdHVyZQ==")
            .body(Body::from(r#"{"type":"user.created","data":{}}"#))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_event_type_is_acknowledged() {
        let app = build_app(AppState::fake());
        let req = signed_request(r#"{"type":"session.created","data":{"session_id":"s_1"}}"#);
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        let v: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(v["success"], true);
    }

    #[tokio::test]
    async fn signed_but_malformed_body_is_rejected() {
        let app = build_app(AppState::fake());
        let req = signed_request("not json at all");
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
