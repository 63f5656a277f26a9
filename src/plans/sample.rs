//! Built-in sample meal plan, shown before a user has a generated plan.

use crate::plans::dto::{
    DayStatus, DayTotals, MacroBreakdown, MealDay, MealPlanDoc, MealType, PlannedMeal,
};

pub fn sample_meal_plan() -> MealPlanDoc {
    MealPlanDoc {
        days: vec![
            MealDay {
                day: 1,
                status: DayStatus::Pending,
                meals: vec![
                    PlannedMeal {
                        meal_type: MealType::Breakfast,
                        name: "Oatmeal with Berries".into(),
                        description: Some("Rolled oats, mixed berries, almond milk".into()),
                        ingredients: vec![
                            "rolled oats".into(),
                            "blueberries".into(),
                            "almond milk".into(),
                        ],
                        calories: 420.0,
                        macros: MacroBreakdown {
                            protein: 14.0,
                            carbs: 68.0,
                            fats: 9.0,
                            fiber: 10.0,
                            sugar: 12.0,
                            water_content: 60.0,
                            calories: 420.0,
                        },
                    },
                    PlannedMeal {
                        meal_type: MealType::Lunch,
                        name: "Grilled Chicken Salad".into(),
                        description: None,
                        ingredients: vec![
                            "chicken breast".into(),
                            "mixed greens".into(),
                            "olive oil".into(),
                        ],
                        calories: 560.0,
                        macros: MacroBreakdown {
                            protein: 42.0,
                            carbs: 18.0,
                            fats: 32.0,
                            fiber: 6.0,
                            sugar: 4.0,
                            water_content: 70.0,
                            calories: 560.0,
                        },
                    },
                    PlannedMeal {
                        meal_type: MealType::Dinner,
                        name: "Salmon with Quinoa".into(),
                        description: None,
                        ingredients: vec!["salmon".into(), "quinoa".into(), "broccoli".into()],
                        calories: 620.0,
                        macros: MacroBreakdown {
                            protein: 38.0,
                            carbs: 45.0,
                            fats: 28.0,
                            fiber: 8.0,
                            sugar: 3.0,
                            water_content: 65.0,
                            calories: 620.0,
                        },
                    },
                ],
                totals: DayTotals {
                    total_calories: 1600.0,
                    total_protein: 94.0,
                    total_carbs: 131.0,
                    total_fats: 69.0,
                },
            },
            MealDay {
                day: 2,
                status: DayStatus::Pending,
                meals: vec![
                    PlannedMeal {
                        meal_type: MealType::Breakfast,
                        name: "Greek Yogurt Parfait".into(),
                        description: None,
                        ingredients: vec!["greek yogurt".into(), "granola".into(), "honey".into()],
                        calories: 380.0,
                        macros: MacroBreakdown {
                            protein: 22.0,
                            carbs: 48.0,
                            fats: 11.0,
                            fiber: 4.0,
                            sugar: 20.0,
                            water_content: 55.0,
                            calories: 380.0,
                        },
                    },
                    PlannedMeal {
                        meal_type: MealType::AfternoonSnack,
                        name: "Apple with Peanut Butter".into(),
                        description: None,
                        ingredients: vec!["apple".into(), "peanut butter".into()],
                        calories: 270.0,
                        macros: MacroBreakdown {
                            protein: 8.0,
                            carbs: 30.0,
                            fats: 15.0,
                            fiber: 6.0,
                            sugar: 19.0,
                            water_content: 50.0,
                            calories: 270.0,
                        },
                    },
                    PlannedMeal {
                        meal_type: MealType::Dinner,
                        name: "Lentil Curry with Rice".into(),
                        description: None,
                        ingredients: vec!["lentils".into(), "basmati rice".into(), "coconut milk".into()],
                        calories: 640.0,
                        macros: MacroBreakdown {
                            protein: 24.0,
                            carbs: 92.0,
                            fats: 18.0,
                            fiber: 14.0,
                            sugar: 7.0,
                            water_content: 60.0,
                            calories: 640.0,
                        },
                    },
                ],
                totals: DayTotals {
                    total_calories: 1290.0,
                    total_protein: 54.0,
                    total_carbs: 170.0,
                    total_fats: 44.0,
                },
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_plan_is_well_formed() {
        let doc = sample_meal_plan();
        assert!(doc.validate().is_ok());
        assert!(!doc.days.is_empty());
        for day in &doc.days {
            assert!(!day.meals.is_empty());
        }
    }

    #[test]
    fn sample_plan_roundtrips_through_json() {
        let doc = sample_meal_plan();
        let json = serde_json::to_string(&doc).unwrap();
        let back: MealPlanDoc = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
