//! Typed data-access layer for the nutrition/wellness backend.
//!
//! Fetches meal logs, wellness log entries, and goals over REST and hands
//! fully materialized, parse-time-validated collections to
//! [`nutriwell_core`]. Session data (user id, token, base URL) is an
//! explicit [`config::Config`] injected at construction, never read from
//! ambient state.

use async_trait::async_trait;
use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use nutriwell_core::{Goal, GoalStatus, MealLog, MealType, WellnessLogEntry};

pub mod config;
pub mod http_client;

#[derive(Debug, Error)]
pub enum WellnessApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("authentication rejected: {0}")]
    Auth(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("unexpected status {status}: {body}")]
    Unexpected { status: u16, body: String },
}

impl WellnessApiError {
    pub fn from_status(status: u16, body: String) -> Self {
        WellnessApiError::Unexpected { status, body }
    }
}

/// Inclusive calendar-day range filter for the listing endpoints.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Range covering exactly one day.
    pub fn single_day(day: NaiveDate) -> Self {
        Self { from: day, to: day }
    }
}

/// Offset pagination for the listing endpoints.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct Page {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}

fn default_limit() -> u32 {
    50
}

/// The backend surface the aggregation engine's callers fetch from.
#[async_trait]
pub trait WellnessApi: Send + Sync + 'static {
    /// List the authenticated user's meal logs, optionally filtered by date
    /// range and meal type.
    async fn list_meal_logs(
        &self,
        range: Option<DateRange>,
        meal_type: Option<MealType>,
        page: Page,
    ) -> Result<Vec<MealLog>, WellnessApiError>;

    /// List the authenticated user's wellness log entries, optionally
    /// filtered by date range.
    async fn list_wellness_logs(
        &self,
        range: Option<DateRange>,
        page: Page,
    ) -> Result<Vec<WellnessLogEntry>, WellnessApiError>;

    /// List the authenticated user's goals, optionally filtered by status.
    async fn list_goals(
        &self,
        status: Option<GoalStatus>,
        page: Page,
    ) -> Result<Vec<Goal>, WellnessApiError>;

    /// Fetch one goal by id.
    async fn get_goal(&self, goal_id: &str) -> Result<Goal, WellnessApiError>;
}
