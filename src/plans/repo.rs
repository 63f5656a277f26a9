use sqlx::PgPool;
use uuid::Uuid;

use crate::plans::dto::{MealPlanDoc, WorkoutPlanDoc};

pub async fn find_meal_plan(db: &PgPool, user_id: Uuid) -> anyhow::Result<Option<MealPlanDoc>> {
    let days = sqlx::query_scalar::<_, serde_json::Value>(
        r#"
        SELECT days
        FROM meal_plans
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    match days {
        Some(v) => Ok(Some(MealPlanDoc {
            days: serde_json::from_value(v)?,
        })),
        None => Ok(None),
    }
}

pub async fn upsert_meal_plan(
    db: &PgPool,
    user_id: Uuid,
    doc: &MealPlanDoc,
) -> anyhow::Result<()> {
    let days = serde_json::to_value(&doc.days)?;
    sqlx::query(
        r#"
        INSERT INTO meal_plans (user_id, days)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE
        SET days = EXCLUDED.days,
            updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(days)
    .execute(db)
    .await?;
    Ok(())
}

pub async fn find_workout_plan(
    db: &PgPool,
    user_id: Uuid,
) -> anyhow::Result<Option<WorkoutPlanDoc>> {
    let days = sqlx::query_scalar::<_, serde_json::Value>(
        r#"
        SELECT days
        FROM workout_plans
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    match days {
        Some(v) => Ok(Some(WorkoutPlanDoc {
            days: serde_json::from_value(v)?,
        })),
        None => Ok(None),
    }
}

pub async fn upsert_workout_plan(
    db: &PgPool,
    user_id: Uuid,
    doc: &WorkoutPlanDoc,
) -> anyhow::Result<()> {
    let days = serde_json::to_value(&doc.days)?;
    sqlx::query(
        r#"
        INSERT INTO workout_plans (user_id, days)
        VALUES ($1, $2)
        ON CONFLICT (user_id) DO UPDATE
        SET days = EXCLUDED.days,
            updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(days)
    .execute(db)
    .await?;
    Ok(())
}
