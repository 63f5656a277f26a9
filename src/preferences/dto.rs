use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::preferences::schema::{
    self, FieldRule, FieldValue, CALORIE_GOAL, SESSION_MINUTES,
};

/// Fitness intake form. Field names follow the client's wire format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FitnessPreferences {
    pub goal: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub injuries: Vec<String>,
    pub intensity: String,
    /// Session length in minutes.
    pub available_time: i32,
    pub frequency: String,
}

impl FitnessPreferences {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.injuries);
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        schema::validate(
            "goal",
            FieldRule::OneOf(schema::GOALS),
            FieldValue::Str(&self.goal),
        )?;
        schema::validate(
            "equipment",
            FieldRule::Subset(schema::EQUIPMENT),
            FieldValue::Set(&self.equipment),
        )?;
        schema::validate(
            "intensity",
            FieldRule::OneOf(schema::INTENSITIES),
            FieldValue::Str(&self.intensity),
        )?;
        schema::validate(
            "availableTime",
            SESSION_MINUTES,
            FieldValue::Int(self.available_time),
        )?;
        schema::validate(
            "frequency",
            FieldRule::OneOf(schema::FREQUENCIES),
            FieldValue::Str(&self.frequency),
        )?;
        Ok(())
    }
}

/// Nutrition intake form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NutritionPreferences {
    pub dietary_type: String,
    #[serde(default)]
    pub cuisine_preferences: Vec<String>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub restrictions: Vec<String>,
    pub meal_count: String,
    pub calorie_goal: i32,
}

impl NutritionPreferences {
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.allergies);
    }

    pub fn validate(&self) -> Result<(), ApiError> {
        schema::validate(
            "dietaryType",
            FieldRule::OneOf(schema::DIETARY_TYPES),
            FieldValue::Str(&self.dietary_type),
        )?;
        schema::validate(
            "cuisinePreferences",
            FieldRule::Subset(schema::CUISINES),
            FieldValue::Set(&self.cuisine_preferences),
        )?;
        schema::validate(
            "restrictions",
            FieldRule::Subset(schema::RESTRICTIONS),
            FieldValue::Set(&self.restrictions),
        )?;
        schema::validate(
            "mealCount",
            FieldRule::OneOf(schema::MEAL_COUNTS),
            FieldValue::Str(&self.meal_count),
        )?;
        schema::validate("calorieGoal", CALORIE_GOAL, FieldValue::Int(self.calorie_goal))?;
        Ok(())
    }
}

/// Both stored records; either may be absent until first submission.
#[derive(Debug, Serialize)]
pub struct PreferencesResponse {
    pub fitness: Option<FitnessPreferences>,
    pub nutrition: Option<NutritionPreferences>,
}

/// Free-form lists (injuries, allergies): trim entries, drop empties.
fn trim_in_place(values: &mut Vec<String>) {
    for v in values.iter_mut() {
        *v = v.trim().to_string();
    }
    values.retain(|v| !v.is_empty());
}
