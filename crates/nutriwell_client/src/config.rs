use crate::WellnessApiError;
use secrecy::SecretString;

/// Session context for one backend user: injected into the client at
/// construction time, never read from ambient storage inside computation
/// code.
#[derive(Clone, Debug)]
pub struct Config {
    pub api_token: SecretString,
    pub user_id: String,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, WellnessApiError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, WellnessApiError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let token = get("NUTRIWELL_API_TOKEN")
            .ok_or_else(|| WellnessApiError::Config("NUTRIWELL_API_TOKEN missing".into()))?;
        let user_id = get("NUTRIWELL_USER_ID")
            .ok_or_else(|| WellnessApiError::Config("NUTRIWELL_USER_ID missing".into()))?;
        let base_url =
            get("NUTRIWELL_BASE_URL").unwrap_or_else(|| "https://api.nutriwell.app".into());
        Ok(Self {
            api_token: SecretString::new(token.into()),
            user_id,
            base_url,
        })
    }
}
