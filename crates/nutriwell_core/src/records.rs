//! Shared record types for meal logs, wellness log entries, and goals.
//!
//! These are immutable snapshots of backend rows. Validation of the closed
//! enumerations (meal type, goal status, metric kind) happens here at
//! deserialization time, so the aggregation code can assume totality over
//! the variants instead of defensively handling unknown keys.

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// The four recognized meal slots. An unknown string in a backend payload
/// fails deserialization of the whole record.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }
}

/// One food item inside a meal log. Nutrition fields are optional by
/// design; a missing field contributes zero to sums and is never displayed
/// as a fabricated value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct FoodItem {
    pub name: String,
    pub portion_size: f64,
    pub portion_unit: String,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein_g: Option<f64>,
    #[serde(default)]
    pub carbs_g: Option<f64>,
    #[serde(default)]
    pub fat_g: Option<f64>,
}

/// Backend-computed per-meal totals. Each field may be null when the
/// backend did not compute it; a partially filled row still deserializes.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct MealNutrition {
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein_g: Option<f64>,
    #[serde(default)]
    pub carbs_g: Option<f64>,
    #[serde(default)]
    pub fat_g: Option<f64>,
}

/// One recorded eating event. A successfully created meal log always has at
/// least one food item; this invariant belongs to the backend and is not
/// re-checked here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct MealLog {
    #[serde(deserialize_with = "deserialize_flexible_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_flexible_id")]
    pub user_id: String,
    pub meal_type: MealType,
    pub logged_at: DateTime<Utc>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub items: Vec<FoodItem>,
    #[serde(default)]
    pub nutrition: Option<MealNutrition>,
}

/// Whether increasing values of a metric represent improvement.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    HigherIsBetter,
    LowerIsBetter,
}

/// The single-metric series a trend widget asks for.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WellnessMetric {
    Mood,
    Stress,
    SleepQuality,
}

impl WellnessMetric {
    pub fn polarity(&self) -> Polarity {
        match self {
            WellnessMetric::Mood | WellnessMetric::SleepQuality => Polarity::HigherIsBetter,
            WellnessMetric::Stress => Polarity::LowerIsBetter,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WellnessMetric::Mood => "mood",
            WellnessMetric::Stress => "stress",
            WellnessMetric::SleepQuality => "sleep_quality",
        }
    }
}

/// One day's recorded mood, stress, or sleep measurement. Scores are 1-10
/// integers; sleep duration is hours as a positive real.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct WellnessLogEntry {
    #[serde(deserialize_with = "deserialize_flexible_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_flexible_id")]
    pub user_id: String,
    pub log_date: NaiveDate,
    #[serde(default)]
    pub mood_score: Option<u8>,
    #[serde(default)]
    pub stress_level: Option<u8>,
    #[serde(default)]
    pub sleep_quality: Option<u8>,
    #[serde(default)]
    pub sleep_hours: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub triggers: Option<String>,
}

impl WellnessLogEntry {
    /// Project one metric out of the entry, if it was recorded that day.
    pub fn metric_value(&self, metric: WellnessMetric) -> Option<f64> {
        let score = match metric {
            WellnessMetric::Mood => self.mood_score,
            WellnessMetric::Stress => self.stress_level,
            WellnessMetric::SleepQuality => self.sleep_quality,
        };
        score.map(f64::from)
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
    Active,
    Completed,
    Paused,
    Abandoned,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Active => "active",
            GoalStatus::Completed => "completed",
            GoalStatus::Paused => "paused",
            GoalStatus::Abandoned => "abandoned",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GoalPriority {
    Low,
    Medium,
    High,
}

/// A user-defined target/current value pair. `current_value` may exceed the
/// target or go negative; the completion percentage is always clamped.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct Goal {
    #[serde(deserialize_with = "deserialize_flexible_id")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_flexible_id")]
    pub user_id: String,
    pub goal_type: String,
    pub target_type: String,
    pub target_value: f64,
    pub current_value: f64,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub status: GoalStatus,
    pub priority: GoalPriority,
}

impl Goal {
    /// Completion percentage in `[0, 100]`. See [`crate::goals::progress_percent`].
    pub fn progress_percent(&self) -> f64 {
        crate::goals::progress_percent(self.current_value, self.target_value)
    }
}

/// Backends are inconsistent about id columns: some serve strings, some
/// numbers. Accept both and normalize to a string.
fn deserialize_flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}
