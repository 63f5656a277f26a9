//! Pure projection of plan documents into display rows. No IO here.

use serde::Serialize;

use crate::plans::dto::{DayStatus, MealDay, WorkoutDay};

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealRow {
    pub meal_type: String,
    pub name: String,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub calories: f64,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealDayView {
    pub day: u32,
    pub badge: &'static str,
    pub total_calories: f64,
    pub meals: Vec<MealRow>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDayView {
    pub day: u32,
    pub badge: &'static str,
    pub workout_type: String,
    pub duration_minutes: u32,
    /// "3 sets × 12 reps" lines, one per exercise.
    pub exercises: Vec<String>,
}

fn badge(status: DayStatus) -> &'static str {
    match status {
        DayStatus::Pending => "Pending",
        DayStatus::Completed => "Completed",
    }
}

pub fn meal_plan_rows(days: &[MealDay]) -> Vec<MealDayView> {
    days.iter()
        .map(|d| MealDayView {
            day: d.day,
            badge: badge(d.status),
            total_calories: d.totals.total_calories,
            meals: d
                .meals
                .iter()
                .map(|m| MealRow {
                    meal_type: serde_plain_label(&m.meal_type),
                    name: m.name.clone(),
                    protein: m.macros.protein,
                    carbs: m.macros.carbs,
                    fats: m.macros.fats,
                    calories: m.calories,
                })
                .collect(),
        })
        .collect()
}

pub fn workout_plan_rows(days: &[WorkoutDay]) -> Vec<WorkoutDayView> {
    days.iter()
        .map(|d| WorkoutDayView {
            day: d.day,
            badge: badge(d.status),
            workout_type: d.workout_type.clone(),
            duration_minutes: d.duration,
            exercises: d
                .exercises
                .iter()
                .map(|e| format!("{}: {} sets × {} reps", e.name, e.sets, e.reps))
                .collect(),
        })
        .collect()
}

fn serde_plain_label(meal_type: &crate::plans::dto::MealType) -> String {
    // MealType serializes to its display label ("Mid-Morning Snack" etc).
    match serde_json::to_value(meal_type) {
        Ok(serde_json::Value::String(s)) => s,
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plans::sample::sample_meal_plan;

    #[test]
    fn empty_plan_projects_to_nothing() {
        assert!(meal_plan_rows(&[]).is_empty());
        assert!(workout_plan_rows(&[]).is_empty());
    }

    #[test]
    fn day_rows_carry_badge_and_macros() {
        let doc = sample_meal_plan();
        let rows = meal_plan_rows(&doc.days);
        assert_eq!(rows.len(), doc.days.len());

        let first = &rows[0];
        assert_eq!(first.day, 1);
        assert_eq!(first.badge, "Pending");
        assert_eq!(first.meals.len(), doc.days[0].meals.len());
        assert_eq!(first.meals[0].meal_type, "Breakfast");
        assert!(first.meals[0].protein > 0.0);
        assert!(first.total_calories > 0.0);
    }

    #[test]
    fn exercise_lines_are_human_readable() {
        use crate::plans::dto::{DayStatus, WorkoutDay, WorkoutExercise};
        let days = vec![WorkoutDay {
            day: 1,
            workout_type: "Upper Body".into(),
            duration: 45,
            status: DayStatus::Completed,
            exercises: vec![WorkoutExercise {
                name: "Bench Press".into(),
                sets: 3,
                reps: 12,
                rest: 90,
                muscles: vec!["chest".into()],
            }],
        }];
        let rows = workout_plan_rows(&days);
        assert_eq!(rows[0].badge, "Completed");
        assert_eq!(rows[0].exercises[0], "Bench Press: 3 sets × 12 reps");
    }
}
