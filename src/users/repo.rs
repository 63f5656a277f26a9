use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub clerk_user_id: String,
    pub username: String,
    pub email: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl User {
    pub async fn find_by_clerk_id(db: &PgPool, clerk_user_id: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, clerk_user_id, username, email, created_at, updated_at
            FROM users
            WHERE clerk_user_id = $1
            "#,
        )
        .bind(clerk_user_id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert-or-update keyed solely on the external id. Re-applying the same
    /// event is a no-op beyond re-setting identical fields (last write wins).
    pub async fn upsert_by_clerk_id(
        db: &PgPool,
        clerk_user_id: &str,
        username: &str,
        email: Option<&str>,
    ) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (clerk_user_id, username, email)
            VALUES ($1, $2, $3)
            ON CONFLICT (clerk_user_id) DO UPDATE
            SET username = EXCLUDED.username,
                email = EXCLUDED.email,
                updated_at = now()
            RETURNING id, clerk_user_id, username, email, created_at, updated_at
            "#,
        )
        .bind(clerk_user_id)
        .bind(username)
        .bind(email)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
