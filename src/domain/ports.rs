use crate::domain::model::{Candidate, Vacancy};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn token(&self) -> &str;
    fn candidate_id(&self) -> &str;
}

#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Fails with `NotFoundError` when no candidate has this id.
    async fn fetch_candidate(&self, id: &str) -> Result<Candidate>;
}

#[async_trait]
pub trait VacancySource: Send + Sync {
    async fn fetch_vacancy(&self, vacancy_id: &str) -> Result<Vacancy>;
}

/// Appends a note to a candidate record.
#[async_trait]
pub trait CommentSink: Send + Sync {
    async fn post_comment(&self, candidate_id: &str, text: &str) -> Result<()>;
}
