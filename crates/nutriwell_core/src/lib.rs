//! Nutrition & wellness aggregation engine.
//!
//! Pure, synchronous reductions over already-fetched log records: daily
//! nutrition totals grouped by meal type, rolling wellness trend
//! classification, and goal completion percentages. Nothing in this crate
//! performs I/O or holds state between calls; fetching and rendering live
//! in the consuming layers.

pub mod goals;
pub mod nutrition;
pub mod records;
pub mod trend;

pub use goals::progress_percent;
pub use nutrition::{DailySummary, MealTypeSummary, summarize_day, summarize_meal_type};
pub use records::{
    FoodItem, Goal, GoalPriority, GoalStatus, MealLog, MealNutrition, MealType, Polarity,
    WellnessLogEntry, WellnessMetric,
};
pub use trend::{
    MetricPoint, TREND_HYSTERESIS, TREND_WINDOW, TrendDirection, TrendSummary, analyze_trend,
    metric_series,
};
