use crate::adapters::wire::{CandidateFilterRequest, CandidateListResponse, VacancyDto};
use crate::domain::model::{Candidate, Vacancy};
use crate::domain::ports::{CandidateSource, ConfigProvider, VacancySource};
use crate::utils::error::{Result, ScreenerError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

const CANDIDATES_FILTER_PATH: &str = "open-api/objects/candidates/filtered";
const VACANCIES_PATH: &str = "open-api/objects/vacancies";

/// Read client for the Skillaz open API.
pub struct SkillazClient {
    client: Client,
    base_url: Url,
}

impl SkillazClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.token())).map_err(|_| {
            ScreenerError::InvalidConfigValueError {
                field: "token".to_string(),
                value: "<redacted>".to_string(),
                reason: "token contains characters not allowed in an HTTP header".to_string(),
            }
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: parse_base_url(config.base_url())?,
        })
    }

    /// `id` is pushed as a single, percent-encoded path segment.
    fn endpoint(&self, path: &str, id: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ScreenerError::InvalidConfigValueError {
                field: "base_url".to_string(),
                value: self.base_url.to_string(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .extend(path.split('/'))
            .extend(id);
        Ok(url)
    }
}

/// Trailing slash is added so relative paths land under the base path.
fn parse_base_url(base_url: &str) -> Result<Url> {
    let normalized = if base_url.ends_with('/') {
        base_url.to_string()
    } else {
        format!("{}/", base_url)
    };

    Url::parse(&normalized).map_err(|e| ScreenerError::InvalidConfigValueError {
        field: "base_url".to_string(),
        value: base_url.to_string(),
        reason: format!("Invalid URL format: {}", e),
    })
}

fn ensure_success(response: &Response) -> Result<()> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    Err(ScreenerError::TransportError {
        url: response.url().to_string(),
        status: status.as_u16(),
    })
}

/// Reads the body as text first so a malformed payload surfaces as a
/// `SerializationError` instead of a transport failure.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let body = response.text().await?;
    let parsed = serde_json::from_str(&body)?;
    Ok(parsed)
}

#[async_trait]
impl CandidateSource for SkillazClient {
    async fn fetch_candidate(&self, id: &str) -> Result<Candidate> {
        let url = self.endpoint(CANDIDATES_FILTER_PATH, None)?;
        tracing::debug!("📡 POST {} for candidate {}", url, id);

        let response = self
            .client
            .post(url)
            .json(&CandidateFilterRequest { ids: vec![id] })
            .send()
            .await?;

        tracing::debug!("📡 candidate lookup status: {}", response.status());
        ensure_success(&response)?;

        let body: CandidateListResponse = read_json(response).await?;
        let dto = body
            .items
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or_else(|| ScreenerError::NotFoundError {
                entity: "candidate",
                id: id.to_string(),
            })?;

        Candidate::try_from(dto)
    }
}

#[async_trait]
impl VacancySource for SkillazClient {
    async fn fetch_vacancy(&self, vacancy_id: &str) -> Result<Vacancy> {
        let url = self.endpoint(VACANCIES_PATH, Some(vacancy_id))?;
        tracing::debug!("📡 GET {}", url);

        let response = self.client.get(url).send().await?;

        tracing::debug!("📡 vacancy lookup status: {}", response.status());
        ensure_success(&response)?;

        let body: Option<VacancyDto> = read_json(response).await?;
        let dto = body.ok_or_else(|| ScreenerError::NotFoundError {
            entity: "vacancy",
            id: vacancy_id.to_string(),
        })?;

        Vacancy::try_from(dto)
    }
}
