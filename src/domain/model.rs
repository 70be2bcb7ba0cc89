use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fmt;

/// Driving-license value the platform stores when the candidate has none.
pub const NO_DRIVING_LICENSE: &str = "Undefined";

pub const MATCH_COMMENT: &str = "Подходит";
pub const NO_MATCH_COMMENT: &str = "Не подходит";

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub id: String,
    pub vacancy_id: String,
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub cv: CvProfile,
}

impl Candidate {
    /// "First Last" when any name part is known, otherwise the id.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [&self.first_name, &self.last_name]
            .into_iter()
            .filter_map(|p| p.as_deref())
            .filter(|p| !p.trim().is_empty())
            .collect();

        if parts.is_empty() {
            self.id.clone()
        } else {
            parts.join(" ")
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CvProfile {
    pub citizenship: HashSet<String>,
    pub skills: HashSet<String>,
    pub work_experiences: Vec<WorkExperience>,
    pub driving_license: Option<String>,
}

impl CvProfile {
    pub fn has_driving_license(&self) -> bool {
        matches!(self.driving_license.as_deref(), Some(license) if license != NO_DRIVING_LICENSE)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WorkExperience {
    pub company_name: Option<String>,
    pub position: Option<String>,
    pub start: DateTime<Utc>,
    /// `None` while the job is ongoing.
    pub end: Option<DateTime<Utc>>,
}

impl WorkExperience {
    pub fn new(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Self {
        Self {
            company_name: None,
            position: None,
            start,
            end,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vacancy {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub funnel_id: Option<String>,
    pub requirements: Requirements,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Requirements {
    pub required_skills: Vec<String>,
    pub required_months: i32,
    pub citizenship: Option<String>,
    pub needs_driver_license: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Match,
    NoMatch,
}

impl Outcome {
    pub fn is_match(self) -> bool {
        matches!(self, Outcome::Match)
    }

    /// Comment text posted back to the candidate record.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Match => MATCH_COMMENT,
            Outcome::NoMatch => NO_MATCH_COMMENT,
        }
    }
}

impl From<bool> for Outcome {
    fn from(eligible: bool) -> Self {
        if eligible {
            Outcome::Match
        } else {
            Outcome::NoMatch
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of one screening run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreeningReport {
    pub candidate_id: String,
    pub vacancy_id: String,
    pub outcome: Outcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driving_license_sentinel() {
        let mut cv = CvProfile::default();
        assert!(!cv.has_driving_license());

        cv.driving_license = Some(NO_DRIVING_LICENSE.to_string());
        assert!(!cv.has_driving_license());

        cv.driving_license = Some("B".to_string());
        assert!(cv.has_driving_license());
    }

    #[test]
    fn test_outcome_labels() {
        assert_eq!(Outcome::from(true), Outcome::Match);
        assert_eq!(Outcome::from(false).label(), NO_MATCH_COMMENT);
        assert_eq!(Outcome::Match.to_string(), MATCH_COMMENT);
    }

    #[test]
    fn test_display_name_falls_back_to_id() {
        let mut candidate = Candidate {
            id: "c-1".to_string(),
            vacancy_id: "v-1".to_string(),
            first_name: None,
            middle_name: None,
            last_name: None,
            contact_email: None,
            contact_phone: None,
            cv: CvProfile::default(),
        };
        assert_eq!(candidate.display_name(), "c-1");

        candidate.first_name = Some("Ivan".to_string());
        candidate.last_name = Some("Petrov".to_string());
        assert_eq!(candidate.display_name(), "Ivan Petrov");
    }
}
