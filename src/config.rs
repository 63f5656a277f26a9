use serde::Deserialize;

/// Session token verification settings. Tokens are HS256 JWTs whose `sub`
/// carries the external identity provider's user id.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Shared secret issued by the identity provider, `whsec_`-prefixed base64.
    pub secret: String,
    /// Maximum age of the `svix-timestamp` header, in seconds.
    pub tolerance_secs: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub session: SessionConfig,
    pub webhook: WebhookConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let session = SessionConfig {
            secret: std::env::var("SESSION_SECRET")?,
            issuer: std::env::var("SESSION_ISSUER").unwrap_or_else(|_| "fitplan".into()),
            audience: std::env::var("SESSION_AUDIENCE").unwrap_or_else(|_| "fitplan-users".into()),
            ttl_minutes: std::env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        let webhook = WebhookConfig {
            secret: std::env::var("CLERK_WEBHOOK_SECRET")?,
            tolerance_secs: std::env::var("WEBHOOK_TOLERANCE_SECS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(300),
        };
        Ok(Self {
            database_url,
            session,
            webhook,
        })
    }
}
