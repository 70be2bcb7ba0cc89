use httpmock::prelude::*;
use vacancy_screener::domain::ports::{CandidateSource, VacancySource};
use vacancy_screener::utils::error::ErrorCategory;
use vacancy_screener::{ScreenerConfig, ScreenerError, SkillazClient};

fn client(server: &MockServer) -> SkillazClient {
    let config = ScreenerConfig::new("tok", "c-1").with_base_url(server.base_url());
    SkillazClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_empty_items_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/open-api/objects/candidates/filtered");
            then.status(200).json_body(serde_json::json!({ "Items": [] }));
        })
        .await;

    let err = client(&server).fetch_candidate("c-1").await.unwrap_err();
    assert!(matches!(
        err,
        ScreenerError::NotFoundError { entity: "candidate", ref id } if id == "c-1"
    ));
}

#[tokio::test]
async fn test_null_items_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/open-api/objects/candidates/filtered");
            then.status(200).json_body(serde_json::json!({ "Items": null }));
        })
        .await;

    let err = client(&server).fetch_candidate("c-1").await.unwrap_err();
    assert!(matches!(err, ScreenerError::NotFoundError { .. }));
}

#[tokio::test]
async fn test_unauthorized_candidate_lookup_is_transport_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/open-api/objects/candidates/filtered");
            then.status(401);
        })
        .await;

    let err = client(&server).fetch_candidate("c-1").await.unwrap_err();
    match &err {
        ScreenerError::TransportError { status, url } => {
            assert_eq!(*status, 401);
            assert!(url.ends_with("/open-api/objects/candidates/filtered"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.recovery_suggestion().contains("token"));
}

#[tokio::test]
async fn test_null_vacancy_is_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/open-api/objects/vacancies/v-404");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("null");
        })
        .await;

    let err = client(&server).fetch_vacancy("v-404").await.unwrap_err();
    assert!(matches!(err, ScreenerError::NotFoundError { entity: "vacancy", .. }));
}

#[tokio::test]
async fn test_vacancy_requirements_are_normalized() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/open-api/objects/vacancies/v-1");
            then.status(200).json_body(serde_json::json!({
                "Id": "v-1",
                "Name": "Courier",
                "IsActive": false,
                "Data": {
                    "ExtraData.RequiredSkills": ["Driving"],
                    "ExtraData.WorkExperience": 6,
                    "ExtraData.Citizenship": "KZ",
                    "ExtraData.NeedDriverLicence": true
                }
            }));
        })
        .await;

    let vacancy = tokio_test::assert_ok!(client(&server).fetch_vacancy("v-1").await);
    assert!(!vacancy.is_active);
    assert_eq!(vacancy.requirements.required_skills, vec!["Driving".to_string()]);
    assert_eq!(vacancy.requirements.required_months, 6);
    assert_eq!(vacancy.requirements.citizenship.as_deref(), Some("KZ"));
    assert!(vacancy.requirements.needs_driver_license);
}

#[tokio::test]
async fn test_malformed_candidate_body_is_a_data_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/open-api/objects/candidates/filtered");
            then.status(200)
                .header("Content-Type", "application/json")
                .body("{\"Items\": [");
        })
        .await;

    let err = client(&server).fetch_candidate("c-1").await.unwrap_err();
    assert!(matches!(err, ScreenerError::SerializationError(_)));
    assert_eq!(err.category(), ErrorCategory::Data);
}

#[tokio::test]
async fn test_vacancy_with_wrong_shape_is_a_data_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/open-api/objects/vacancies/v-1");
            then.status(200)
                .json_body(serde_json::json!({ "Id": "v-1", "IsActive": "yes" }));
        })
        .await;

    let err = client(&server).fetch_vacancy("v-1").await.unwrap_err();
    assert!(matches!(err, ScreenerError::SerializationError(_)));
    assert!(err.user_friendly_message().starts_with("Unexpected data"));
}
