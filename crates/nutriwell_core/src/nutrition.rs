//! Daily nutrition aggregation.
//!
//! Reduces a set of meal logs (conventionally pre-filtered by the caller to
//! one calendar day) into per-nutrient totals and a meal-type grouping.
//! Sums use each meal's backend-computed totals when present and treat a
//! missing field as zero. Totals are deliberately NOT re-derived from the
//! nested food items when the meal-level row is absent; the backend is the
//! single source of per-meal totals.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;

use crate::records::{MealLog, MealType};

/// Per-nutrient totals and meal-type grouping for one day of meal logs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, JsonSchema)]
pub struct DailySummary {
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub meal_count: usize,
    /// Meals keyed by type, preserving relative input order within each
    /// group. A type with no meals has no entry.
    pub meals_by_type: BTreeMap<MealType, Vec<MealLog>>,
}

/// Aggregates for one meal-type group, consumed by the per-slot widgets.
/// Singular/plural labeling of `entry_count` stays in the presentation layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, JsonSchema)]
pub struct MealTypeSummary {
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub entry_count: usize,
}

/// Reduce one day's meal logs to totals and a by-type grouping.
///
/// Empty input yields zeroed totals and an empty grouping. Deterministic,
/// no side effects.
pub fn summarize_day(meals: &[MealLog]) -> DailySummary {
    let mut summary = DailySummary::default();

    for meal in meals {
        if let Some(n) = &meal.nutrition {
            summary.total_calories += n.calories.unwrap_or(0.0);
            summary.total_protein += n.protein_g.unwrap_or(0.0);
            summary.total_carbs += n.carbs_g.unwrap_or(0.0);
            summary.total_fat += n.fat_g.unwrap_or(0.0);
        }
        summary
            .meals_by_type
            .entry(meal.meal_type)
            .or_default()
            .push(meal.clone());
    }
    summary.meal_count = meals.len();

    summary
}

/// Reduce the meals of one type group, using the same summation rules as
/// [`summarize_day`].
pub fn summarize_meal_type(meals: &[MealLog]) -> MealTypeSummary {
    let mut summary = MealTypeSummary {
        entry_count: meals.len(),
        ..MealTypeSummary::default()
    };

    for meal in meals {
        if let Some(n) = &meal.nutrition {
            summary.total_calories += n.calories.unwrap_or(0.0);
            summary.total_protein += n.protein_g.unwrap_or(0.0);
            summary.total_carbs += n.carbs_g.unwrap_or(0.0);
            summary.total_fat += n.fat_g.unwrap_or(0.0);
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{FoodItem, MealNutrition};
    use chrono::{TimeZone, Utc};

    fn meal(id: &str, meal_type: MealType, calories: Option<f64>) -> MealLog {
        MealLog {
            id: id.to_string(),
            user_id: "u1".to_string(),
            meal_type,
            logged_at: Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap(),
            notes: None,
            photo_url: None,
            items: vec![FoodItem {
                name: "item".to_string(),
                portion_size: 1.0,
                portion_unit: "serving".to_string(),
                calories: None,
                protein_g: None,
                carbs_g: None,
                fat_g: None,
            }],
            nutrition: calories.map(|c| MealNutrition {
                calories: Some(c),
                protein_g: Some(c / 20.0),
                carbs_g: Some(c / 10.0),
                fat_g: Some(c / 30.0),
            }),
        }
    }

    #[test]
    fn empty_input_yields_zeroed_summary() {
        let summary = summarize_day(&[]);
        assert_eq!(summary.total_calories, 0.0);
        assert_eq!(summary.total_protein, 0.0);
        assert_eq!(summary.total_carbs, 0.0);
        assert_eq!(summary.total_fat, 0.0);
        assert_eq!(summary.meal_count, 0);
        assert!(summary.meals_by_type.is_empty());
    }

    #[test]
    fn three_meals_one_per_type() {
        let meals = vec![
            meal("m1", MealType::Breakfast, Some(500.0)),
            meal("m2", MealType::Lunch, Some(700.0)),
            meal("m3", MealType::Dinner, Some(600.0)),
        ];
        let summary = summarize_day(&meals);
        assert_eq!(summary.total_calories, 1800.0);
        assert_eq!(summary.meal_count, 3);
        assert_eq!(summary.meals_by_type.len(), 3);
        for group in summary.meals_by_type.values() {
            assert_eq!(group.len(), 1);
        }
        assert!(!summary.meals_by_type.contains_key(&MealType::Snack));
    }

    #[test]
    fn missing_nutrition_contributes_zero() {
        let meals = vec![
            meal("m1", MealType::Breakfast, Some(400.0)),
            meal("m2", MealType::Snack, None),
        ];
        let summary = summarize_day(&meals);
        assert_eq!(summary.total_calories, 400.0);
        assert_eq!(summary.meal_count, 2);
        // The snack still appears in the grouping even with no totals row.
        assert_eq!(summary.meals_by_type[&MealType::Snack].len(), 1);
    }

    #[test]
    fn grouping_preserves_input_order_within_group() {
        let meals = vec![
            meal("s1", MealType::Snack, Some(100.0)),
            meal("b1", MealType::Breakfast, Some(300.0)),
            meal("s2", MealType::Snack, Some(150.0)),
            meal("s3", MealType::Snack, Some(120.0)),
        ];
        let summary = summarize_day(&meals);
        let snacks: Vec<&str> = summary.meals_by_type[&MealType::Snack]
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(snacks, vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn grouping_preserves_totals() {
        let meals = vec![
            meal("m1", MealType::Breakfast, Some(310.0)),
            meal("m2", MealType::Lunch, Some(640.0)),
            meal("m3", MealType::Lunch, None),
            meal("m4", MealType::Dinner, Some(550.0)),
            meal("m5", MealType::Snack, Some(95.0)),
        ];
        let summary = summarize_day(&meals);
        let grouped: f64 = summary
            .meals_by_type
            .values()
            .map(|group| summarize_meal_type(group).total_calories)
            .sum();
        assert_eq!(grouped, summary.total_calories);
    }

    #[test]
    fn meal_type_summary_counts_entries() {
        let lunches = vec![
            meal("m1", MealType::Lunch, Some(640.0)),
            meal("m2", MealType::Lunch, Some(580.0)),
        ];
        let summary = summarize_meal_type(&lunches);
        assert_eq!(summary.entry_count, 2);
        assert_eq!(summary.total_calories, 1220.0);
        assert_eq!(summary.total_protein, 640.0 / 20.0 + 580.0 / 20.0);
    }

    #[test]
    fn summarize_day_is_idempotent() {
        let meals = vec![
            meal("m1", MealType::Breakfast, Some(500.0)),
            meal("m2", MealType::Lunch, None),
        ];
        assert_eq!(summarize_day(&meals), summarize_day(&meals));
    }
}
