use axum::{extract::State, Json};
use tracing::instrument;

use crate::{
    auth::AuthUser,
    error::ApiError,
    state::AppState,
    users::{dto::PublicUser, repo::User},
};

#[instrument(skip(state))]
pub async fn get_me(
    State(state): State<AppState>,
    AuthUser(clerk_user_id): AuthUser,
) -> Result<Json<PublicUser>, ApiError> {
    let user = User::find_by_clerk_id(&state.db, &clerk_user_id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    Ok(Json(user.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_user_serialization() {
        let user = PublicUser {
            id: uuid::Uuid::new_v4(),
            clerk_user_id: "user_2abc".into(),
            username: "ann".into(),
            email: Some("ann@example.com".into()),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("user_2abc"));
        assert!(json.contains("ann@example.com"));
    }
}
