use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::preferences::dto::{FitnessPreferences, NutritionPreferences};

#[derive(Debug, Clone, FromRow)]
pub struct FitnessPreferenceRow {
    pub user_id: Uuid,
    pub goal: String,
    pub equipment: Vec<String>,
    pub injuries: Vec<String>,
    pub intensity: String,
    pub session_minutes: i32,
    pub frequency: String,
    pub updated_at: OffsetDateTime,
}

impl From<FitnessPreferenceRow> for FitnessPreferences {
    fn from(r: FitnessPreferenceRow) -> Self {
        Self {
            goal: r.goal,
            equipment: r.equipment,
            injuries: r.injuries,
            intensity: r.intensity,
            available_time: r.session_minutes,
            frequency: r.frequency,
        }
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct NutritionPreferenceRow {
    pub user_id: Uuid,
    pub dietary_type: String,
    pub cuisine_preferences: Vec<String>,
    pub allergies: Vec<String>,
    pub restrictions: Vec<String>,
    pub meal_count: String,
    pub calorie_goal: i32,
    pub updated_at: OffsetDateTime,
}

impl From<NutritionPreferenceRow> for NutritionPreferences {
    fn from(r: NutritionPreferenceRow) -> Self {
        Self {
            dietary_type: r.dietary_type,
            cuisine_preferences: r.cuisine_preferences,
            allergies: r.allergies,
            restrictions: r.restrictions,
            meal_count: r.meal_count,
            calorie_goal: r.calorie_goal,
        }
    }
}

pub async fn find_fitness(
    db: &PgPool,
    user_id: Uuid,
) -> anyhow::Result<Option<FitnessPreferenceRow>> {
    let row = sqlx::query_as::<_, FitnessPreferenceRow>(
        r#"
        SELECT user_id, goal, equipment, injuries, intensity, session_minutes, frequency, updated_at
        FROM fitness_preferences
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn upsert_fitness(
    db: &PgPool,
    user_id: Uuid,
    prefs: &FitnessPreferences,
) -> anyhow::Result<FitnessPreferenceRow> {
    let row = sqlx::query_as::<_, FitnessPreferenceRow>(
        r#"
        INSERT INTO fitness_preferences
            (user_id, goal, equipment, injuries, intensity, session_minutes, frequency)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (user_id) DO UPDATE
        SET goal = EXCLUDED.goal,
            equipment = EXCLUDED.equipment,
            injuries = EXCLUDED.injuries,
            intensity = EXCLUDED.intensity,
            session_minutes = EXCLUDED.session_minutes,
            frequency = EXCLUDED.frequency,
            updated_at = now()
        RETURNING user_id, goal, equipment, injuries, intensity, session_minutes, frequency, updated_at
        "#,
    )
    .bind(user_id)
    .bind(&prefs.goal)
    .bind(&prefs.equipment)
    .bind(&prefs.injuries)
    .bind(&prefs.intensity)
    .bind(prefs.available_time)
    .bind(&prefs.frequency)
    .fetch_one(db)
    .await?;
    Ok(row)
}

pub async fn find_nutrition(
    db: &PgPool,
    user_id: Uuid,
) -> anyhow::Result<Option<NutritionPreferenceRow>> {
    let row = sqlx::query_as::<_, NutritionPreferenceRow>(
        r#"
        SELECT user_id, dietary_type, cuisine_preferences, allergies, restrictions,
               meal_count, calorie_goal, updated_at
        FROM nutrition_preferences
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

pub async fn upsert_nutrition(
    db: &PgPool,
    user_id: Uuid,
    prefs: &NutritionPreferences,
) -> anyhow::Result<NutritionPreferenceRow> {
    let row = sqlx::query_as::<_, NutritionPreferenceRow>(
        r#"
        INSERT INTO nutrition_preferences
            (user_id, dietary_type, cuisine_preferences, allergies, restrictions, meal_count, calorie_goal)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (user_id) DO UPDATE
        SET dietary_type = EXCLUDED.dietary_type,
            cuisine_preferences = EXCLUDED.cuisine_preferences,
            allergies = EXCLUDED.allergies,
            restrictions = EXCLUDED.restrictions,
            meal_count = EXCLUDED.meal_count,
            calorie_goal = EXCLUDED.calorie_goal,
            updated_at = now()
        RETURNING user_id, dietary_type, cuisine_preferences, allergies, restrictions,
                  meal_count, calorie_goal, updated_at
        "#,
    )
    .bind(user_id)
    .bind(&prefs.dietary_type)
    .bind(&prefs.cuisine_preferences)
    .bind(&prefs.allergies)
    .bind(&prefs.restrictions)
    .bind(&prefs.meal_count)
    .bind(prefs.calorie_goal)
    .fetch_one(db)
    .await?;
    Ok(row)
}
