pub mod eligibility;
pub mod screening;

pub use crate::domain::model::{Candidate, Outcome, ScreeningReport, Vacancy};
pub use crate::domain::ports::{CandidateSource, CommentSink, ConfigProvider, VacancySource};
pub use crate::utils::error::Result;
