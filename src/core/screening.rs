use crate::core::eligibility;
use crate::domain::model::{Outcome, ScreeningReport};
use crate::domain::ports::{CandidateSource, CommentSink, VacancySource};
use crate::utils::error::Result;
use chrono::Utc;

/// Runs one candidate through fetch, evaluate and comment, in that order.
/// Every error ends the run; nothing is retried.
pub struct ScreeningEngine<R, S>
where
    R: CandidateSource + VacancySource,
    S: CommentSink,
{
    records: R,
    comments: S,
}

impl<R, S> ScreeningEngine<R, S>
where
    R: CandidateSource + VacancySource,
    S: CommentSink,
{
    pub fn new(records: R, comments: S) -> Self {
        Self { records, comments }
    }

    pub async fn run(&self, candidate_id: &str) -> Result<ScreeningReport> {
        tracing::info!("🔎 Screening candidate {}", candidate_id);

        let candidate = self.records.fetch_candidate(candidate_id).await?;
        tracing::debug!(
            "Fetched candidate {} ({}), vacancy {}",
            candidate.id,
            candidate.display_name(),
            candidate.vacancy_id
        );

        let vacancy = self.records.fetch_vacancy(&candidate.vacancy_id).await?;
        if !vacancy.is_active {
            tracing::warn!("⚠️ Vacancy {} ({}) is not active", vacancy.id, vacancy.name);
        }

        let failed = eligibility::first_failure(&candidate, &vacancy, Utc::now())?;
        let outcome = Outcome::from(failed.is_none());

        self.comments.post_comment(&candidate.id, outcome.label()).await?;
        if outcome.is_match() {
            tracing::info!("✅ Candidate {} matches vacancy {}", candidate.id, vacancy.id);
        } else {
            tracing::info!(
                "❎ Candidate {} does not match vacancy {} (failed on {})",
                candidate.id,
                vacancy.id,
                failed.map_or("unknown", |criterion| criterion.as_str())
            );
        }

        Ok(ScreeningReport {
            candidate_id: candidate.id,
            vacancy_id: vacancy.id,
            outcome,
        })
    }
}
