use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    #[default]
    Pending,
    Completed,
}

/// The eight meal slots a plan day may schedule.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MealType {
    #[serde(rename = "Early Morning")]
    EarlyMorning,
    Breakfast,
    #[serde(rename = "Mid-Morning Snack")]
    MidMorningSnack,
    Lunch,
    #[serde(rename = "Afternoon Snack")]
    AfternoonSnack,
    #[serde(rename = "Pre-Workout Meal")]
    PreWorkoutMeal,
    #[serde(rename = "Post-Workout Meal")]
    PostWorkoutMeal,
    Dinner,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct MacroBreakdown {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub water_content: f64,
    pub calories: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub calories: f64,
    #[serde(default)]
    pub macros: MacroBreakdown,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct DayTotals {
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fats: f64,
}

/// One plan day: meals and their daily totals live on the same record, so a
/// day's totals can never drift from a sibling sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealDay {
    pub day: u32,
    #[serde(default)]
    pub status: DayStatus,
    pub meals: Vec<PlannedMeal>,
    #[serde(default)]
    pub totals: DayTotals,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlanDoc {
    pub days: Vec<MealDay>,
}

impl MealPlanDoc {
    pub fn validate(&self) -> Result<(), ApiError> {
        check_unique_days(self.days.iter().map(|d| d.day))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    /// Rest between sets, seconds.
    #[serde(default)]
    pub rest: u32,
    #[serde(default)]
    pub muscles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDay {
    pub day: u32,
    /// Session label, e.g. "Upper Body" or "Rest".
    #[serde(rename = "type")]
    pub workout_type: String,
    /// Session length in minutes.
    pub duration: u32,
    #[serde(default)]
    pub status: DayStatus,
    pub exercises: Vec<WorkoutExercise>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlanDoc {
    pub days: Vec<WorkoutDay>,
}

impl WorkoutPlanDoc {
    pub fn validate(&self) -> Result<(), ApiError> {
        check_unique_days(self.days.iter().map(|d| d.day))
    }
}

#[derive(Debug, Deserialize)]
pub struct DayStatusUpdate {
    pub status: DayStatus,
}

fn check_unique_days(days: impl Iterator<Item = u32>) -> Result<(), ApiError> {
    let mut seen = std::collections::HashSet::new();
    for day in days {
        if !seen.insert(day) {
            return Err(ApiError::validation(
                "days",
                format!("day {day} appears more than once"),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_type_uses_display_labels() {
        let json = serde_json::to_string(&MealType::MidMorningSnack).unwrap();
        assert_eq!(json, r#""Mid-Morning Snack""#);
        let back: MealType = serde_json::from_str(r#""Pre-Workout Meal""#).unwrap();
        assert_eq!(back, MealType::PreWorkoutMeal);
    }

    #[test]
    fn day_status_defaults_to_pending() {
        let raw = r#"{"day":1,"meals":[]}"#;
        let day: MealDay = serde_json::from_str(raw).unwrap();
        assert_eq!(day.status, DayStatus::Pending);
        assert_eq!(day.totals, DayTotals::default());
    }

    #[test]
    fn duplicate_days_are_rejected() {
        let doc = MealPlanDoc {
            days: vec![
                MealDay {
                    day: 1,
                    status: DayStatus::Pending,
                    meals: vec![],
                    totals: DayTotals::default(),
                },
                MealDay {
                    day: 1,
                    status: DayStatus::Completed,
                    meals: vec![],
                    totals: DayTotals::default(),
                },
            ],
        };
        assert!(doc.validate().is_err());
    }
}
