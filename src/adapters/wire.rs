//! JSON shapes of the Skillaz open API and their normalization into domain
//! records. Nothing outside this module sees wire field names.

use crate::domain::model::{Candidate, CvProfile, Requirements, Vacancy, WorkExperience};
use crate::utils::error::{Result, ScreenerError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CandidateFilterRequest<'a> {
    pub ids: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CandidateListResponse {
    #[serde(default)]
    pub items: Option<Vec<CandidateDto>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CandidateDto {
    pub id: String,
    #[serde(default)]
    pub vacancy_id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub contact_phone_number: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(rename = "CommonCVInfo", default)]
    pub common_cv_info: Option<CommonCvInfoDto>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CommonCvInfoDto {
    #[serde(default)]
    pub citizenship: Option<Vec<String>>,
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    #[serde(default)]
    pub work_experiences: Option<Vec<WorkExperienceDto>>,
    #[serde(default)]
    pub driving_experience: Option<DrivingExperienceDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WorkExperienceDto {
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DrivingExperienceDto {
    #[serde(default)]
    pub driving_license: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VacancyDto {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub funnel_id: Option<String>,
    #[serde(default)]
    pub data: Option<VacancyDataDto>,
}

/// Requirement fields arrive as flat keys with dots in their names.
#[derive(Debug, Deserialize)]
pub struct VacancyDataDto {
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "ExtraData.RequiredSkills", default)]
    pub required_skills: Option<Vec<String>>,
    #[serde(rename = "ExtraData.WorkExperience", default)]
    pub work_experience: Option<i32>,
    #[serde(rename = "ExtraData.Citizenship", default)]
    pub citizenship: Option<String>,
    #[serde(rename = "ExtraData.NeedDriverLicence", default)]
    pub need_driver_licence: Option<bool>,
}

/// Accepts RFC 3339, offset-less date-times (read as UTC) and bare dates.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn timestamp(candidate_id: &str, value: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(value).ok_or_else(|| ScreenerError::InvalidRecordError {
        entity: "candidate",
        message: format!("{}: unreadable work experience date '{}'", candidate_id, value),
    })
}

impl TryFrom<CandidateDto> for Candidate {
    type Error = ScreenerError;

    fn try_from(dto: CandidateDto) -> Result<Self> {
        let vacancy_id = dto
            .vacancy_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| ScreenerError::InvalidRecordError {
                entity: "candidate",
                message: format!("{} is not attached to a vacancy", dto.id),
            })?;

        let info = dto.common_cv_info.unwrap_or_default();

        let work_experiences = info
            .work_experiences
            .unwrap_or_default()
            .into_iter()
            .map(|entry| -> Result<WorkExperience> {
                Ok(WorkExperience {
                    start: timestamp(&dto.id, &entry.start_date)?,
                    end: entry
                        .end_date
                        .as_deref()
                        .map(|end| timestamp(&dto.id, end))
                        .transpose()?,
                    company_name: entry.company_name,
                    position: entry.position,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let cv = CvProfile {
            citizenship: info.citizenship.unwrap_or_default().into_iter().collect(),
            skills: info.skills.unwrap_or_default().into_iter().collect(),
            work_experiences,
            driving_license: info.driving_experience.and_then(|d| d.driving_license),
        };

        Ok(Candidate {
            id: dto.id,
            vacancy_id,
            first_name: dto.first_name,
            middle_name: dto.middle_name,
            last_name: dto.last_name,
            contact_email: dto.contact_email,
            contact_phone: dto.contact_phone_number,
            cv,
        })
    }
}

impl TryFrom<VacancyDto> for Vacancy {
    type Error = ScreenerError;

    fn try_from(dto: VacancyDto) -> Result<Self> {
        let data = dto.data.ok_or_else(|| ScreenerError::InvalidRecordError {
            entity: "vacancy",
            message: format!("{} has no requirement data", dto.id),
        })?;

        let requirements = Requirements {
            required_skills: data.required_skills.unwrap_or_default(),
            required_months: data.work_experience.unwrap_or_default(),
            citizenship: data.citizenship,
            needs_driver_license: data.need_driver_licence.unwrap_or_default(),
        };

        Ok(Vacancy {
            name: dto.name.or(data.name).unwrap_or_default(),
            id: dto.id,
            is_active: dto.is_active,
            funnel_id: dto.funnel_id,
            requirements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_filter_request_uses_pascal_case() {
        let body = serde_json::to_value(CandidateFilterRequest { ids: vec!["abc"] }).unwrap();
        assert_eq!(body, serde_json::json!({ "Ids": ["abc"] }));
    }

    #[test]
    fn test_candidate_normalization() {
        let raw = serde_json::json!({
            "Id": "655a4167d6073213f4e9b8ce",
            "VacancyId": "vac-7",
            "FirstName": "Anna",
            "LastName": "Smirnova",
            "Notes": [],
            "CommonCVInfo": {
                "Citizenship": ["RU", "BY"],
                "Skills": ["SQL", "Python", "SQL"],
                "City": "Kazan",
                "WorkExperiences": [
                    { "CompanyName": "Acme", "StartDate": "2019-03-01T00:00:00", "EndDate": "2021-03-01T00:00:00Z", "TotalMonths": 24 },
                    { "CompanyName": "Globex", "StartDate": "2021-04-01", "EndDate": null }
                ],
                "DrivingExperience": { "HasPersonalCar": false, "DrivingLicense": "B" }
            }
        });

        let dto: CandidateDto = serde_json::from_value(raw).unwrap();
        let candidate = Candidate::try_from(dto).unwrap();

        assert_eq!(candidate.vacancy_id, "vac-7");
        assert_eq!(candidate.cv.skills.len(), 2);
        assert!(candidate.cv.citizenship.contains("BY"));
        assert_eq!(candidate.cv.work_experiences.len(), 2);
        assert_eq!(
            candidate.cv.work_experiences[0].start,
            Utc.with_ymd_and_hms(2019, 3, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(candidate.cv.work_experiences[1].end, None);
        assert_eq!(candidate.cv.driving_license.as_deref(), Some("B"));
    }

    #[test]
    fn test_candidate_with_null_collections() {
        let raw = serde_json::json!({
            "Id": "c-1",
            "VacancyId": "v-1",
            "CommonCVInfo": { "Citizenship": null, "Skills": null, "WorkExperiences": null, "DrivingExperience": null }
        });

        let candidate = Candidate::try_from(serde_json::from_value::<CandidateDto>(raw).unwrap()).unwrap();
        assert!(candidate.cv.skills.is_empty());
        assert!(candidate.cv.work_experiences.is_empty());
        assert_eq!(candidate.cv.driving_license, None);
    }

    #[test]
    fn test_candidate_without_vacancy_is_rejected() {
        let raw = serde_json::json!({ "Id": "c-1", "VacancyId": null });
        let err = Candidate::try_from(serde_json::from_value::<CandidateDto>(raw).unwrap()).unwrap_err();
        assert!(matches!(err, ScreenerError::InvalidRecordError { entity: "candidate", .. }));
    }

    #[test]
    fn test_unreadable_date_is_rejected() {
        let raw = serde_json::json!({
            "Id": "c-1",
            "VacancyId": "v-1",
            "CommonCVInfo": { "WorkExperiences": [{ "StartDate": "last spring" }] }
        });
        let err = Candidate::try_from(serde_json::from_value::<CandidateDto>(raw).unwrap()).unwrap_err();
        assert!(err.to_string().contains("last spring"));
    }

    #[test]
    fn test_vacancy_dotted_keys() {
        let raw = serde_json::json!({
            "Id": "vac-7",
            "Name": "Courier",
            "IsActive": true,
            "FunnelId": "f-1",
            "Data": {
                "Name": "Courier",
                "ExtraData.RequiredSkills": ["Driving", "Navigation"],
                "ExtraData.WorkExperience": 12,
                "ExtraData.Citizenship": "RU",
                "ExtraData.NeedDriverLicence": true
            }
        });

        let vacancy = Vacancy::try_from(serde_json::from_value::<VacancyDto>(raw).unwrap()).unwrap();
        assert_eq!(vacancy.requirements.required_skills, vec!["Driving", "Navigation"]);
        assert_eq!(vacancy.requirements.required_months, 12);
        assert_eq!(vacancy.requirements.citizenship.as_deref(), Some("RU"));
        assert!(vacancy.requirements.needs_driver_license);
        assert!(vacancy.is_active);
    }

    #[test]
    fn test_vacancy_without_data_is_rejected() {
        let raw = serde_json::json!({ "Id": "vac-7", "Name": "Courier", "IsActive": false });
        let err = Vacancy::try_from(serde_json::from_value::<VacancyDto>(raw).unwrap()).unwrap_err();
        assert!(matches!(err, ScreenerError::InvalidRecordError { entity: "vacancy", .. }));
    }

    #[test]
    fn test_parse_timestamp_with_offset() {
        let parsed = parse_timestamp("2020-01-01T03:00:00+03:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        assert!(parse_timestamp("2020-13-01").is_none());
    }
}
