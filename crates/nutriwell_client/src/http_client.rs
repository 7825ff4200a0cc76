//! HTTP client implementation for the nutrition/wellness backend.
//!
//! This module provides a reqwest-based implementation of the
//! [`WellnessApi`](crate::WellnessApi) trait.

use crate::{DateRange, Page, WellnessApi, WellnessApiError, config::Config};
use async_trait::async_trait;
use chrono::NaiveDate;
use secrecy::{ExposeSecret, SecretString};

use nutriwell_core::{Goal, GoalStatus, MealLog, MealType, WellnessLogEntry};

/// Client for the nutrition/wellness backend using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestWellnessClient {
    base_url: String,
    user_id: String,
    api_token: SecretString,
    client: reqwest::Client,
}

impl ReqwestWellnessClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend (e.g., "https://api.nutriwell.app")
    /// * `user_id` - The user whose records are listed
    /// * `api_token` - The bearer token for the session
    pub fn new(base_url: &str, user_id: impl Into<String>, api_token: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.into(),
            api_token,
            client,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.base_url,
            config.user_id.clone(),
            config.api_token.clone(),
        )
    }

    fn user_url(&self, resource: &str) -> String {
        format!("{}/api/v1/users/{}/{}", self.base_url, self.user_id, resource)
    }

    /// Build an authenticated GET request.
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .bearer_auth(self.api_token.expose_secret())
    }

    /// Execute a GET and decode the JSON response body.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, WellnessApiError> {
        tracing::debug!(%url, params = query.len(), "fetching");
        let resp = self.get_request(url).query(query).send().await?;
        self.handle_response(resp).await
    }

    /// Handle a response, converting status codes to appropriate errors.
    /// Bodies are decoded from text so malformed payloads surface as
    /// [`WellnessApiError::Decode`] rather than a generic transport error.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, WellnessApiError> {
        let status = resp.status();
        if !status.is_success() {
            return Err(self.error_from_response(resp).await);
        }
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> WellnessApiError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();

        match status {
            404 => WellnessApiError::NotFound(body_snippet),
            401 | 403 => WellnessApiError::Auth(body_snippet),
            422 => WellnessApiError::InvalidRequest(body_snippet),
            _ => WellnessApiError::from_status(status, body_snippet),
        }
    }
}

fn push_range(query: &mut Vec<(&'static str, String)>, range: Option<DateRange>) {
    if let Some(range) = range {
        query.push(("from", format_date(range.from)));
        query.push(("to", format_date(range.to)));
    }
}

fn push_page(query: &mut Vec<(&'static str, String)>, page: Page) {
    query.push(("limit", page.limit.to_string()));
    query.push(("offset", page.offset.to_string()));
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[async_trait]
impl WellnessApi for ReqwestWellnessClient {
    async fn list_meal_logs(
        &self,
        range: Option<DateRange>,
        meal_type: Option<MealType>,
        page: Page,
    ) -> Result<Vec<MealLog>, WellnessApiError> {
        let url = self.user_url("meal-logs");
        let mut query: Vec<(&str, String)> = Vec::new();
        push_range(&mut query, range);
        if let Some(meal_type) = meal_type {
            query.push(("meal_type", meal_type.as_str().to_string()));
        }
        push_page(&mut query, page);
        self.get_json(&url, &query).await
    }

    async fn list_wellness_logs(
        &self,
        range: Option<DateRange>,
        page: Page,
    ) -> Result<Vec<WellnessLogEntry>, WellnessApiError> {
        let url = self.user_url("wellness-logs");
        let mut query: Vec<(&str, String)> = Vec::new();
        push_range(&mut query, range);
        push_page(&mut query, page);
        self.get_json(&url, &query).await
    }

    async fn list_goals(
        &self,
        status: Option<GoalStatus>,
        page: Page,
    ) -> Result<Vec<Goal>, WellnessApiError> {
        let url = self.user_url("goals");
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(status) = status {
            query.push(("status", status.as_str().to_string()));
        }
        push_page(&mut query, page);
        self.get_json(&url, &query).await
    }

    async fn get_goal(&self, goal_id: &str) -> Result<Goal, WellnessApiError> {
        let url = self.user_url(&format!("goals/{goal_id}"));
        self.get_json(&url, &[]).await
    }
}
