use crate::state::AppState;
use axum::{
    routing::{get, patch},
    Router,
};

pub mod dto;
pub mod handlers;
pub mod repo;
pub mod sample;
pub mod views;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/plans/meal",
            get(handlers::get_meal_plan).put(handlers::put_meal_plan),
        )
        .route("/plans/meal/view", get(handlers::get_meal_plan_view))
        .route("/plans/meal/sample", get(handlers::get_sample_meal_plan))
        .route("/plans/meal/days/:day", patch(handlers::patch_meal_day))
        .route(
            "/plans/workout",
            get(handlers::get_workout_plan).put(handlers::put_workout_plan),
        )
        .route("/plans/workout/view", get(handlers::get_workout_plan_view))
        .route(
            "/plans/workout/days/:day",
            patch(handlers::patch_workout_day),
        )
}
