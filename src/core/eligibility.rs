//! Eligibility rule: a candidate matches a vacancy when skill coverage,
//! work experience, citizenship and (when required) a driving license all
//! pass. Checks run in that order and the first failure decides.

use crate::domain::model::{Candidate, CvProfile, Requirements, Vacancy, WorkExperience};
use crate::utils::error::{Result, ScreenerError};
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Minimum share of required skills, in whole percent.
pub const MIN_SKILL_COVERAGE_PERCENT: usize = 70;
/// Months forgiven from the vacancy's experience requirement.
pub const EXPERIENCE_GRACE_MONTHS: i32 = 6;
const DAYS_PER_MONTH: f64 = 30.0;
const MILLIS_PER_DAY: f64 = 86_400_000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    SkillCoverage,
    WorkExperience,
    Citizenship,
    DriverLicense,
}

impl Criterion {
    pub fn as_str(self) -> &'static str {
        match self {
            Criterion::SkillCoverage => "skill_coverage",
            Criterion::WorkExperience => "work_experience",
            Criterion::Citizenship => "citizenship",
            Criterion::DriverLicense => "driver_license",
        }
    }
}

/// Evaluates against the current time.
pub fn evaluate(candidate: &Candidate, vacancy: &Vacancy) -> Result<bool> {
    evaluate_at(candidate, vacancy, Utc::now())
}

/// `now` stands in for the end of ongoing jobs.
pub fn evaluate_at(candidate: &Candidate, vacancy: &Vacancy, now: DateTime<Utc>) -> Result<bool> {
    Ok(first_failure(candidate, vacancy, now)?.is_none())
}

/// The first criterion the candidate fails, or `None` on a match.
pub fn first_failure(
    candidate: &Candidate,
    vacancy: &Vacancy,
    now: DateTime<Utc>,
) -> Result<Option<Criterion>> {
    let cv = &candidate.cv;
    let requirements = &vacancy.requirements;

    if !check_skill_coverage(cv, requirements)? {
        return Ok(Some(Criterion::SkillCoverage));
    }
    if !check_work_experience(cv, requirements, now) {
        return Ok(Some(Criterion::WorkExperience));
    }
    if !check_citizenship(cv, requirements) {
        return Ok(Some(Criterion::Citizenship));
    }
    if !check_driver_license(cv, requirements) {
        return Ok(Some(Criterion::DriverLicense));
    }

    Ok(None)
}

/// Share of required skills the candidate has, truncated to whole percent.
pub fn skill_coverage_percent(candidate_skills: &HashSet<String>, required: &[String]) -> Result<usize> {
    if required.is_empty() {
        return Err(ScreenerError::DegenerateInputError {
            message: "vacancy lists no required skills, coverage is undefined".to_string(),
        });
    }

    let required_set: HashSet<&str> = required.iter().map(String::as_str).collect();
    let matched = candidate_skills
        .iter()
        .filter(|skill| required_set.contains(skill.as_str()))
        .count();

    Ok(matched * 100 / required.len())
}

/// Total experience in 30-day months, `None` when there are no entries.
pub fn experience_months(entries: &[WorkExperience], now: DateTime<Utc>) -> Option<f64> {
    if entries.is_empty() {
        return None;
    }

    let total: f64 = entries
        .iter()
        .map(|entry| {
            let end = entry.end.unwrap_or(now);
            let days = (end - entry.start).num_milliseconds() as f64 / MILLIS_PER_DAY;
            days / DAYS_PER_MONTH
        })
        .sum();

    Some(total)
}

fn check_skill_coverage(cv: &CvProfile, requirements: &Requirements) -> Result<bool> {
    let percent = skill_coverage_percent(&cv.skills, &requirements.required_skills)?;
    Ok(percent >= MIN_SKILL_COVERAGE_PERCENT)
}

fn check_work_experience(cv: &CvProfile, requirements: &Requirements, now: DateTime<Utc>) -> bool {
    match experience_months(&cv.work_experiences, now) {
        Some(months) => {
            months >= f64::from(requirements.required_months) - f64::from(EXPERIENCE_GRACE_MONTHS)
        }
        None => false,
    }
}

fn check_citizenship(cv: &CvProfile, requirements: &Requirements) -> bool {
    requirements
        .citizenship
        .as_ref()
        .is_some_and(|code| cv.citizenship.contains(code))
}

fn check_driver_license(cv: &CvProfile, requirements: &Requirements) -> bool {
    !requirements.needs_driver_license || cv.has_driving_license()
}
