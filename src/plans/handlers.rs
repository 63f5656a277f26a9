use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::AuthUser,
    error::ApiError,
    plans::{
        dto::{DayStatusUpdate, MealPlanDoc, WorkoutPlanDoc},
        repo, sample,
        views::{self, MealDayView, WorkoutDayView},
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

#[instrument(skip(state))]
pub async fn get_meal_plan(
    State(state): State<AppState>,
    AuthUser(clerk_user_id): AuthUser,
) -> Result<Json<MealPlanDoc>, ApiError> {
    let user_id = resolve_user(&state, &clerk_user_id).await?;
    let doc = repo::find_meal_plan(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("meal plan"))?;
    Ok(Json(doc))
}

#[instrument(skip(state))]
pub async fn get_meal_plan_view(
    State(state): State<AppState>,
    AuthUser(clerk_user_id): AuthUser,
) -> Result<Json<Vec<MealDayView>>, ApiError> {
    let user_id = resolve_user(&state, &clerk_user_id).await?;
    let doc = repo::find_meal_plan(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("meal plan"))?;
    Ok(Json(views::meal_plan_rows(&doc.days)))
}

/// Demo plan for users who have not had one generated yet.
pub async fn get_sample_meal_plan(AuthUser(_clerk_user_id): AuthUser) -> Json<MealPlanDoc> {
    Json(sample::sample_meal_plan())
}

/// Storage seam for the (external) plan generator.
#[instrument(skip(state, payload))]
pub async fn put_meal_plan(
    State(state): State<AppState>,
    AuthUser(clerk_user_id): AuthUser,
    Json(payload): Json<MealPlanDoc>,
) -> Result<Json<MealPlanDoc>, ApiError> {
    payload.validate()?;
    let user_id = resolve_user(&state, &clerk_user_id).await?;
    repo::upsert_meal_plan(&state.db, user_id, &payload).await?;
    info!(user_id = %user_id, days = payload.days.len(), "meal plan stored");
    Ok(Json(payload))
}

#[instrument(skip(state))]
pub async fn patch_meal_day(
    State(state): State<AppState>,
    AuthUser(clerk_user_id): AuthUser,
    Path(day): Path<u32>,
    Json(update): Json<DayStatusUpdate>,
) -> Result<Json<MealPlanDoc>, ApiError> {
    let user_id = resolve_user(&state, &clerk_user_id).await?;
    let mut doc = repo::find_meal_plan(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("meal plan"))?;

    let entry = doc
        .days
        .iter_mut()
        .find(|d| d.day == day)
        .ok_or(ApiError::NotFound("plan day"))?;
    entry.status = update.status;

    repo::upsert_meal_plan(&state.db, user_id, &doc).await?;
    info!(user_id = %user_id, day, status = ?update.status, "meal day status updated");
    Ok(Json(doc))
}

#[instrument(skip(state))]
pub async fn get_workout_plan(
    State(state): State<AppState>,
    AuthUser(clerk_user_id): AuthUser,
) -> Result<Json<WorkoutPlanDoc>, ApiError> {
    let user_id = resolve_user(&state, &clerk_user_id).await?;
    let doc = repo::find_workout_plan(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("workout plan"))?;
    Ok(Json(doc))
}

#[instrument(skip(state))]
pub async fn get_workout_plan_view(
    State(state): State<AppState>,
    AuthUser(clerk_user_id): AuthUser,
) -> Result<Json<Vec<WorkoutDayView>>, ApiError> {
    let user_id = resolve_user(&state, &clerk_user_id).await?;
    let doc = repo::find_workout_plan(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("workout plan"))?;
    Ok(Json(views::workout_plan_rows(&doc.days)))
}

/// Storage seam for the (external) plan generator.
#[instrument(skip(state, payload))]
pub async fn put_workout_plan(
    State(state): State<AppState>,
    AuthUser(clerk_user_id): AuthUser,
    Json(payload): Json<WorkoutPlanDoc>,
) -> Result<Json<WorkoutPlanDoc>, ApiError> {
    payload.validate()?;
    let user_id = resolve_user(&state, &clerk_user_id).await?;
    repo::upsert_workout_plan(&state.db, user_id, &payload).await?;
    info!(user_id = %user_id, days = payload.days.len(), "workout plan stored");
    Ok(Json(payload))
}

#[instrument(skip(state))]
pub async fn patch_workout_day(
    State(state): State<AppState>,
    AuthUser(clerk_user_id): AuthUser,
    Path(day): Path<u32>,
    Json(update): Json<DayStatusUpdate>,
) -> Result<Json<WorkoutPlanDoc>, ApiError> {
    let user_id = resolve_user(&state, &clerk_user_id).await?;
    let mut doc = repo::find_workout_plan(&state.db, user_id)
        .await?
        .ok_or(ApiError::NotFound("workout plan"))?;

    let entry = doc
        .days
        .iter_mut()
        .find(|d| d.day == day)
        .ok_or(ApiError::NotFound("plan day"))?;
    entry.status = update.status;

    repo::upsert_workout_plan(&state.db, user_id, &doc).await?;
    info!(user_id = %user_id, day, status = ?update.status, "workout day status updated");
    Ok(Json(doc))
}

#[cfg(test)]
mod tests {
    use crate::app::build_app;
    use crate::auth::SessionKeys;
    use crate::plans::dto::MealPlanDoc;
    use crate::state::AppState;
    use axum::body::Body;
    use axum::extract::FromRef;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn bearer() -> String {
        let keys = SessionKeys::from_ref(&AppState::fake());
        format!("Bearer {}", keys.sign("user_2abc").unwrap())
    }

    #[tokio::test]
    async fn sample_plan_requires_auth() {
        let app = build_app(AppState::fake());
        let req = Request::builder()
            .uri("/api/v1/plans/meal/sample")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn sample_plan_is_served() {
        let app = build_app(AppState::fake());
        let req = Request::builder()
            .uri("/api/v1/plans/meal/sample")
            .header(header::AUTHORIZATION, bearer())
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let doc: MealPlanDoc = serde_json::from_slice(&bytes).unwrap();
        assert!(doc.validate().is_ok());
        assert!(!doc.days.is_empty());
    }

    #[tokio::test]
    async fn duplicate_days_are_rejected_before_persistence() {
        let app = build_app(AppState::fake());
        let body = r#"{"days":[
            {"day":1,"meals":[]},
            {"day":1,"meals":[]}
        ]}"#;
        let req = Request::builder()
            .method("PUT")
            .uri("/api/v1/plans/meal")
            .header(header::AUTHORIZATION, bearer())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
