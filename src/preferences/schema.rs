//! Recognized preference fields and their validation rules.
//!
//! Each field is checked against a tagged rule by one generic validator, so
//! the set of accepted values lives here and nowhere else.

use crate::error::ApiError;

pub const GOALS: &[&str] = &["weight-loss", "muscle-gain", "endurance", "general-fitness"];

pub const EQUIPMENT: &[&str] = &[
    "Home basics (bodyweight, resistance bands)",
    "Free weights (dumbbells, kettlebells)",
    "Full gym access",
];

pub const INTENSITIES: &[&str] = &["low", "medium", "high"];

pub const FREQUENCIES: &[&str] = &["1-2-times-week", "3-times-week", "4-5-times-week", "daily"];

pub const DIETARY_TYPES: &[&str] = &["veg", "non-veg", "vegan"];

pub const MEAL_COUNTS: &[&str] = &["3-meals", "5-meals", "6-plus-meals"];

pub const RESTRICTIONS: &[&str] = &["Vegetarian", "Vegan", "Gluten-free", "Lactose-free", "None"];

pub const CUISINES: &[&str] = &["poultry", "seafood", "vegetables", "whole-grains"];

pub const SESSION_MINUTES: FieldRule = FieldRule::Bounded { min: 15, max: 120 };
pub const CALORIE_GOAL: FieldRule = FieldRule::Bounded { min: 1200, max: 4000 };

#[derive(Debug, Clone, Copy)]
pub enum FieldRule {
    /// Exactly one of the listed values.
    OneOf(&'static [&'static str]),
    /// Any subset of the listed values.
    Subset(&'static [&'static str]),
    /// Integer within the inclusive range.
    Bounded { min: i32, max: i32 },
}

#[derive(Debug)]
pub enum FieldValue<'a> {
    Str(&'a str),
    Set(&'a [String]),
    Int(i32),
}

pub fn validate(field: &str, rule: FieldRule, value: FieldValue<'_>) -> Result<(), ApiError> {
    match (rule, value) {
        (FieldRule::OneOf(allowed), FieldValue::Str(v)) => {
            if allowed.contains(&v) {
                Ok(())
            } else {
                Err(ApiError::validation(
                    field,
                    format!("`{v}` is not one of: {}", allowed.join(", ")),
                ))
            }
        }
        (FieldRule::Subset(allowed), FieldValue::Set(values)) => {
            match values.iter().find(|v| !allowed.contains(&v.as_str())) {
                None => Ok(()),
                Some(bad) => Err(ApiError::validation(
                    field,
                    format!("`{bad}` is not one of: {}", allowed.join(", ")),
                )),
            }
        }
        (FieldRule::Bounded { min, max }, FieldValue::Int(v)) => {
            if (min..=max).contains(&v) {
                Ok(())
            } else {
                Err(ApiError::validation(
                    field,
                    format!("must be between {min} and {max}"),
                ))
            }
        }
        (rule, value) => Err(ApiError::validation(
            field,
            format!("value {value:?} does not fit rule {rule:?}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_of_accepts_listed_value() {
        assert!(validate("goal", FieldRule::OneOf(GOALS), FieldValue::Str("muscle-gain")).is_ok());
    }

    #[test]
    fn one_of_rejects_unlisted_value() {
        let err = validate(
            "intensity",
            FieldRule::OneOf(INTENSITIES),
            FieldValue::Str("extreme"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("extreme"));
    }

    #[test]
    fn subset_accepts_empty_and_partial() {
        assert!(validate(
            "equipment",
            FieldRule::Subset(EQUIPMENT),
            FieldValue::Set(&[]),
        )
        .is_ok());
        let some = vec!["Full gym access".to_string()];
        assert!(validate(
            "equipment",
            FieldRule::Subset(EQUIPMENT),
            FieldValue::Set(&some),
        )
        .is_ok());
    }

    #[test]
    fn subset_names_the_offending_value() {
        let values = vec!["poultry".to_string(), "insects".to_string()];
        let err = validate(
            "cuisinePreferences",
            FieldRule::Subset(CUISINES),
            FieldValue::Set(&values),
        )
        .unwrap_err();
        assert!(err.to_string().contains("insects"));
    }

    #[test]
    fn bounded_is_inclusive() {
        assert!(validate("availableTime", SESSION_MINUTES, FieldValue::Int(15)).is_ok());
        assert!(validate("availableTime", SESSION_MINUTES, FieldValue::Int(120)).is_ok());
        assert!(validate("availableTime", SESSION_MINUTES, FieldValue::Int(14)).is_err());
        assert!(validate("availableTime", SESSION_MINUTES, FieldValue::Int(121)).is_err());
    }

    #[test]
    fn calorie_bounds_match_the_ui() {
        assert!(validate("calorieGoal", CALORIE_GOAL, FieldValue::Int(500)).is_err());
        assert!(validate("calorieGoal", CALORIE_GOAL, FieldValue::Int(2000)).is_ok());
    }
}
