#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::{Result, ScreenerError};
use crate::utils::validation::{validate_non_empty_string, validate_secret, validate_url, Validate};
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "https://api-feature-configurator.dev.skillaz.ru/";

/// Everything a screening run needs, passed explicitly to the entry point.
#[derive(Clone)]
pub struct ScreenerConfig {
    pub base_url: String,
    pub token: String,
    pub candidate_id: String,
}

impl ScreenerConfig {
    pub fn new(token: impl Into<String>, candidate_id: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: token.into(),
            candidate_id: candidate_id.into(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

// Keeps the token out of debug logs.
impl fmt::Debug for ScreenerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenerConfig")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .field("candidate_id", &self.candidate_id)
            .finish()
    }
}

impl Validate for ScreenerConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_secret("token", &self.token)?;
        validate_non_empty_string("candidate_id", &self.candidate_id)?;

        // a candidate id equal to the token means the arguments were swapped
        if self.candidate_id == self.token {
            return Err(ScreenerError::InvalidConfigValueError {
                field: "candidate_id".to_string(),
                value: "<redacted>".to_string(),
                reason: "candidate id must not be the API token".to_string(),
            });
        }

        Ok(())
    }
}

impl ConfigProvider for ScreenerConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn token(&self) -> &str {
        &self.token
    }

    fn candidate_id(&self) -> &str {
        &self.candidate_id
    }
}
