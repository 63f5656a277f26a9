use axum::{extract::State, Json};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::AuthUser,
    error::ApiError,
    preferences::{
        dto::{FitnessPreferences, NutritionPreferences, PreferencesResponse},
        repo,
    },
    state::AppState,
    users::repo::User,
};

async fn resolve_user(state: &AppState, clerk_user_id: &str) -> Result<Uuid, ApiError> {
    let user = User::find_by_clerk_id(&state.db, clerk_user_id)
        .await?
        .ok_or(ApiError::NotFound("user"))?;
    Ok(user.id)
}

#[instrument(skip(state, payload))]
pub async fn put_fitness(
    State(state): State<AppState>,
    AuthUser(clerk_user_id): AuthUser,
    Json(mut payload): Json<FitnessPreferences>,
) -> Result<Json<FitnessPreferences>, ApiError> {
    payload.normalize();
    payload.validate()?;

    let user_id = resolve_user(&state, &clerk_user_id).await?;
    let row = repo::upsert_fitness(&state.db, user_id, &payload).await?;
    info!(user_id = %user_id, goal = %row.goal, "fitness preferences saved");
    Ok(Json(row.into()))
}

#[instrument(skip(state, payload))]
pub async fn put_nutrition(
    State(state): State<AppState>,
    AuthUser(clerk_user_id): AuthUser,
    Json(mut payload): Json<NutritionPreferences>,
) -> Result<Json<NutritionPreferences>, ApiError> {
    payload.normalize();
    payload.validate()?;

    let user_id = resolve_user(&state, &clerk_user_id).await?;
    let row = repo::upsert_nutrition(&state.db, user_id, &payload).await?;
    info!(user_id = %user_id, calorie_goal = row.calorie_goal, "nutrition preferences saved");
    Ok(Json(row.into()))
}

#[instrument(skip(state))]
pub async fn get_preferences(
    State(state): State<AppState>,
    AuthUser(clerk_user_id): AuthUser,
) -> Result<Json<PreferencesResponse>, ApiError> {
    let user_id = resolve_user(&state, &clerk_user_id).await?;
    let fitness = repo::find_fitness(&state.db, user_id).await?;
    let nutrition = repo::find_nutrition(&state.db, user_id).await?;
    Ok(Json(PreferencesResponse {
        fitness: fitness.map(Into::into),
        nutrition: nutrition.map(Into::into),
    }))
}
