pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;
pub use config::ScreenerConfig;

pub use adapters::{comments::NoopCommentSink, http::SkillazClient};
pub use crate::core::{eligibility::evaluate, screening::ScreeningEngine};
pub use domain::model::{Candidate, Outcome, ScreeningReport, Vacancy};
pub use utils::error::{Result, ScreenerError};
